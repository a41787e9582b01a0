//! Typewriter drivers on the tokio runtime.
//!
//! - `TypewriterRunner` / `TypewriterHandle` - push model, renders into a `TextSink`
//! - `typewriter_stream` - pull model, an async `Stream` of texts

mod runner;
mod stream;

pub use runner::{TypewriterHandle, TypewriterRunner};
pub use stream::typewriter_stream;
