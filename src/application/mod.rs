//! Application layer - page-level services.
//!
//! Orchestrates domain state and coordinates between ports:
//! - `TypewriterWidget` - mount/unmount of a typewriter on a text sink
//! - `WelcomeScreen` - the timed welcome splash
//! - `ShowcasePage` / `LoadShowcaseHandler` - the portfolio tabs

mod showcase_page;
mod typewriter_widget;
mod welcome_screen;

pub use showcase_page::{LoadShowcaseHandler, ShowcasePage};
pub use typewriter_widget::TypewriterWidget;
pub use welcome_screen::{SplashReport, WelcomeScreen};
