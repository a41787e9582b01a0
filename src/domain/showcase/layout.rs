//! Viewport-dependent truncation rules for the card grids.

/// Coarse viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

/// How many cards a collapsed grid shows, by device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRules {
    /// Viewports narrower than this are mobile.
    pub mobile_breakpoint_px: u32,
    pub initial_items_mobile: usize,
    pub initial_items_desktop: usize,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            initial_items_mobile: 3,
            initial_items_desktop: 4,
        }
    }
}

impl LayoutRules {
    pub fn classify(&self, viewport_width_px: u32) -> DeviceClass {
        if viewport_width_px < self.mobile_breakpoint_px {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn initial_items(&self, viewport_width_px: u32) -> usize {
        match self.classify(viewport_width_px) {
            DeviceClass::Mobile => self.initial_items_mobile,
            DeviceClass::Desktop => self.initial_items_desktop,
        }
    }
}
