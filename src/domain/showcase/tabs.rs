//! Showcase tabs and their synchronisation with the swipe carousel.

use std::fmt;

use crate::domain::foundation::ValidationError;

/// The three showcase tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShowcaseTab {
    #[default]
    Projects,
    Certificates,
    TechStack,
}

impl ShowcaseTab {
    pub const ALL: [ShowcaseTab; 3] = [
        ShowcaseTab::Projects,
        ShowcaseTab::Certificates,
        ShowcaseTab::TechStack,
    ];

    /// Position in the tab bar and in the carousel.
    pub fn index(&self) -> usize {
        match self {
            ShowcaseTab::Projects => 0,
            ShowcaseTab::Certificates => 1,
            ShowcaseTab::TechStack => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShowcaseTab::Projects => "Projects",
            ShowcaseTab::Certificates => "Certificates",
            ShowcaseTab::TechStack => "Tech Stack",
        }
    }
}

impl TryFrom<usize> for ShowcaseTab {
    type Error = ValidationError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| ValidationError::out_of_range("tab_index", 0, Self::ALL.len() - 1, index))
    }
}

impl fmt::Display for ShowcaseTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The tab currently shown. Tab bar clicks and carousel swipes both land here,
/// so the two views can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelection {
    current: ShowcaseTab,
}

impl TabSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ShowcaseTab {
        self.current
    }

    pub fn index(&self) -> usize {
        self.current.index()
    }

    pub fn is_selected(&self, tab: ShowcaseTab) -> bool {
        self.current == tab
    }

    /// Tab bar click.
    pub fn select(&mut self, tab: ShowcaseTab) {
        self.current = tab;
    }

    /// Carousel settled on a new index.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` and leaves the selection unchanged when the index
    /// does not name a tab.
    pub fn on_change_index(&mut self, index: usize) -> Result<ShowcaseTab, ValidationError> {
        let tab = ShowcaseTab::try_from(index)?;
        self.current = tab;
        Ok(tab)
    }
}
