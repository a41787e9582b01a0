//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `typewriter` - tokio drivers for the typewriter cycler
//! - `sinks` - text sinks (terminal, recording)
//! - `content` - showcase sources (static/YAML, Supabase)

pub mod content;
pub mod sinks;
pub mod typewriter;

pub use content::{StaticShowcaseSource, SupabaseShowcaseSource, SupabaseSourceConfig};
pub use sinks::{RecordingSink, TerminalSink};
pub use typewriter::{typewriter_stream, TypewriterHandle, TypewriterRunner};
