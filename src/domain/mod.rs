//! Domain layer containing the site's state machines and records.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary and the `StateMachine` trait
//! - `typewriter` - Text-cycling typewriter state machine and presets
//! - `showcase` - Showcase records, tabs, show-more lists, certificate viewer
//! - `welcome` - Welcome splash timeline

pub mod foundation;
pub mod showcase;
pub mod typewriter;
pub mod welcome;
