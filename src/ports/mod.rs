//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextSink` - Rendering surface for typewriter output
//! - `ShowcaseSource` - Content store holding the showcase catalog

mod showcase_source;
mod text_sink;

pub use showcase_source::ShowcaseSource;
pub use text_sink::TextSink;
