//! Text sink adapters.
//!
//! - `TerminalSink` - repaints one terminal line
//! - `RecordingSink` - captures renders for assertions

mod recording;
mod terminal;

pub use recording::{RecordingSink, Rendered};
pub use terminal::TerminalSink;
