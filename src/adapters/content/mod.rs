//! Showcase content sources.
//!
//! - `StaticShowcaseSource` - built-in sample or a YAML catalog file
//! - `SupabaseShowcaseSource` - projects and certificates from Supabase

mod static_source;
mod supabase_source;

pub use static_source::{default_tech_stack, StaticShowcaseSource};
pub use supabase_source::{SupabaseShowcaseSource, SupabaseSourceConfig};
