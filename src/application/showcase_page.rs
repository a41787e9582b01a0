//! ShowcasePage - the portfolio tabs with their card grids.
//!
//! Holds the loaded catalog together with the interaction state the page
//! keeps: selected tab (shared by the tab bar and the swipe carousel), one
//! show-more list per card grid, and the certificate viewer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::showcase::{
    Certificate, CertificateViewer, ExpandableList, LayoutRules, Project, ShowcaseCatalog,
    ShowcaseTab, TabSelection, TechStackItem,
};
use crate::ports::ShowcaseSource;

/// Interaction state of the showcase section.
#[derive(Debug, Clone)]
pub struct ShowcasePage {
    rules: LayoutRules,
    tabs: TabSelection,
    projects: ExpandableList<Project>,
    certificates: ExpandableList<Certificate>,
    tech_stack: Vec<TechStackItem>,
    viewer: CertificateViewer,
}

impl ShowcasePage {
    /// Lays out a catalog for a viewport of the given width.
    pub fn new(catalog: ShowcaseCatalog, rules: LayoutRules, viewport_width_px: u32) -> Self {
        let initial = rules.initial_items(viewport_width_px);
        Self {
            rules,
            tabs: TabSelection::new(),
            projects: ExpandableList::new(catalog.projects, initial),
            certificates: ExpandableList::new(catalog.certificates, initial),
            tech_stack: catalog.tech_stack,
            viewer: CertificateViewer::new(),
        }
    }

    // === Tabs ===

    pub fn current_tab(&self) -> ShowcaseTab {
        self.tabs.current()
    }

    /// Tab bar click.
    pub fn select_tab(&mut self, tab: ShowcaseTab) {
        self.tabs.select(tab);
        debug!(tab = %tab, "Showcase tab selected");
    }

    /// Carousel swiped to `index`.
    ///
    /// # Errors
    ///
    /// Rejects indices that do not name a tab; the selection is unchanged.
    pub fn on_swipe(&mut self, index: usize) -> Result<ShowcaseTab, ValidationError> {
        let tab = self.tabs.on_change_index(index)?;
        debug!(tab = %tab, "Showcase carousel settled");
        Ok(tab)
    }

    // === Card grids ===

    pub fn projects(&self) -> &ExpandableList<Project> {
        &self.projects
    }

    pub fn certificates(&self) -> &ExpandableList<Certificate> {
        &self.certificates
    }

    pub fn tech_stack(&self) -> &[TechStackItem] {
        &self.tech_stack
    }

    /// Returns whether the grid is now expanded.
    pub fn toggle_projects(&mut self) -> bool {
        self.projects.toggle()
    }

    pub fn toggle_certificates(&mut self) -> bool {
        self.certificates.toggle()
    }

    /// Re-applies the truncation rules after a resize.
    pub fn set_viewport_width(&mut self, viewport_width_px: u32) {
        let initial = self.rules.initial_items(viewport_width_px);
        self.projects.set_initial_items(initial);
        self.certificates.set_initial_items(initial);
    }

    // === Certificate viewer ===

    /// Opens the viewer on certificate `index` of the full list.
    ///
    /// # Errors
    ///
    /// Rejects indices outside the certificate list.
    pub fn open_certificate(&mut self, index: usize) -> Result<&Certificate, ValidationError> {
        self.viewer.open(index, self.certificates.len())?;
        Ok(&self.certificates.all()[index])
    }

    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    pub fn viewed_certificate(&self) -> Option<&Certificate> {
        self.viewer
            .selected()
            .and_then(|index| self.certificates.all().get(index))
    }
}

/// Loads the catalog from a source and builds the page.
pub struct LoadShowcaseHandler {
    source: Arc<dyn ShowcaseSource>,
    rules: LayoutRules,
}

impl LoadShowcaseHandler {
    pub fn new(source: Arc<dyn ShowcaseSource>, rules: LayoutRules) -> Self {
        Self { source, rules }
    }

    pub async fn handle(&self, viewport_width_px: u32) -> Result<ShowcasePage, DomainError> {
        let catalog = match self.source.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "Failed to load showcase content");
                return Err(e);
            }
        };

        info!(
            source = self.source.name(),
            projects = catalog.projects.len(),
            certificates = catalog.certificates.len(),
            tech_stack = catalog.tech_stack.len(),
            "Showcase content loaded"
        );

        Ok(ShowcasePage::new(catalog, self.rules, viewport_width_px))
    }
}
