//! Showcase module - the tabbed projects / certificates / tech stack section.
//!
//! Pure view state: which tab is shown, how much of each grid is visible,
//! and which certificate (if any) is open full-size.

mod catalog;
mod expandable;
mod layout;
mod tabs;
mod viewer;

pub use catalog::{Certificate, Project, ShowcaseCatalog, TechStackItem, Thumbnail, COMING_SOON};
pub use expandable::ExpandableList;
pub use layout::{DeviceClass, LayoutRules};
pub use tabs::{ShowcaseTab, TabSelection};
pub use viewer::CertificateViewer;
