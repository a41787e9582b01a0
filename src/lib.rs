//! Portfolio Showcase - typewriter headline and project showcase.
//!
//! The core is a timer-driven typewriter cycler that types a phrase character
//! by character, pauses, deletes it, and moves on to the next phrase forever.
//! Around it sit the showcase page state (tabs, show-more grids, certificate
//! viewer), the welcome splash, and content sources (static/YAML, Supabase).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
