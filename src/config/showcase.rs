//! Showcase page configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::showcase::LayoutRules;

/// Card grid layout and content location
#[derive(Debug, Clone, Deserialize)]
pub struct ShowcaseConfig {
    /// Viewports narrower than this (px) use the mobile item count
    #[serde(default = "default_breakpoint")]
    pub mobile_breakpoint_px: u32,

    /// Cards shown collapsed on mobile
    #[serde(default = "default_initial_items_mobile")]
    pub initial_items_mobile: usize,

    /// Cards shown collapsed on desktop
    #[serde(default = "default_initial_items_desktop")]
    pub initial_items_desktop: usize,

    /// Viewport width the terminal host lays the page out for
    #[serde(default = "default_viewport_width")]
    pub viewport_width_px: u32,

    /// Optional YAML catalog; when set, Supabase is not queried
    pub catalog_file: Option<PathBuf>,
}

impl ShowcaseConfig {
    pub fn layout_rules(&self) -> LayoutRules {
        LayoutRules {
            mobile_breakpoint_px: self.mobile_breakpoint_px,
            initial_items_mobile: self.initial_items_mobile,
            initial_items_desktop: self.initial_items_desktop,
        }
    }

    /// Validate showcase configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mobile_breakpoint_px == 0 {
            return Err(ValidationError::InvalidBreakpoint);
        }
        if self.initial_items_mobile == 0 || self.initial_items_desktop == 0 {
            return Err(ValidationError::InvalidInitialItems);
        }
        Ok(())
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_breakpoint(),
            initial_items_mobile: default_initial_items_mobile(),
            initial_items_desktop: default_initial_items_desktop(),
            viewport_width_px: default_viewport_width(),
            catalog_file: None,
        }
    }
}

fn default_breakpoint() -> u32 {
    768
}

fn default_initial_items_mobile() -> usize {
    3
}

fn default_initial_items_desktop() -> usize {
    4
}

fn default_viewport_width() -> u32 {
    1280
}
