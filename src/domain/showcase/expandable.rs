//! Show-more / show-less truncation of a card grid.

/// A list that shows only its first `initial_items` entries until expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandableList<T> {
    items: Vec<T>,
    initial_items: usize,
    expanded: bool,
}

impl<T> ExpandableList<T> {
    /// Creates a collapsed list.
    pub fn new(items: Vec<T>, initial_items: usize) -> Self {
        Self {
            items,
            initial_items,
            expanded: false,
        }
    }

    /// Entries currently on screen.
    pub fn visible(&self) -> &[T] {
        if self.expanded {
            &self.items
        } else {
            &self.items[..self.initial_items.min(self.items.len())]
        }
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn initial_items(&self) -> usize {
        self.initial_items
    }

    /// Whether the "See More" / "See Less" button is offered at all.
    pub fn has_toggle(&self) -> bool {
        self.items.len() > self.initial_items
    }

    /// Flips between collapsed and expanded. Returns the new expanded flag.
    ///
    /// Does nothing when the whole list already fits.
    pub fn toggle(&mut self) -> bool {
        if self.has_toggle() {
            self.expanded = !self.expanded;
        }
        self.expanded
    }

    /// Label for the toggle button, if one is shown.
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.has_toggle() {
            return None;
        }
        Some(if self.expanded { "See Less" } else { "See More" })
    }

    /// Number of entries hidden behind "See More".
    pub fn hidden_count(&self) -> usize {
        self.items.len() - self.visible().len()
    }

    /// Applies a new truncation size, e.g. after the viewport changed class.
    pub fn set_initial_items(&mut self, initial_items: usize) {
        self.initial_items = initial_items;
        if !self.has_toggle() {
            self.expanded = false;
        }
    }
}
