//! Welcome module - the splash screen shown before the page.

mod splash;

pub use splash::{SplashPhase, SplashTimeline};
