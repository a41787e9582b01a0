//! Phrases and the immutable phrase list a cycler runs over.
//!
//! A "character" is an extended grapheme cluster, so an emoji or a letter
//! with combining marks is revealed and deleted as one unit.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use super::errors::{ConfigurationIssue, TypewriterError};

/// One non-empty string to be typed and deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    // boundaries[k] is the byte offset just past the k-th grapheme; boundaries[0] == 0
    boundaries: Vec<usize>,
}

impl Phrase {
    fn new(text: String) -> Self {
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        boundaries.push(0);
        boundaries.extend(
            text.grapheme_indices(true)
                .map(|(offset, grapheme)| offset + grapheme.len()),
        );
        Self { text, boundaries }
    }

    /// The full phrase.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first `length` characters. Lengths past the end yield the whole phrase.
    pub fn prefix(&self, length: usize) -> &str {
        let end = self.boundaries[length.min(self.len())];
        &self.text[..end]
    }
}

/// Ordered, non-empty, immutable list of non-empty phrases.
///
/// Cloning is cheap; clones share the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Arc<[Phrase]>,
}

impl PhraseList {
    /// Validates and snapshots the given phrases.
    ///
    /// # Errors
    ///
    /// - `NoPhrases` when the list is empty
    /// - `InvalidPhrase { index }` for the first zero-length phrase
    pub fn new<I, S>(phrases: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Vec::new();
        for (index, text) in phrases.into_iter().enumerate() {
            let phrase = Phrase::new(text.into());
            if phrase.is_empty() {
                return Err(ConfigurationIssue::InvalidPhrase { index }.into());
            }
            list.push(phrase);
        }
        if list.is_empty() {
            return Err(ConfigurationIssue::NoPhrases.into());
        }
        Ok(Self {
            phrases: list.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Phrase> {
        self.phrases.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }

    /// Index of the phrase that follows `index`, wrapping to 0 after the last.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }
}

impl std::ops::Index<usize> for PhraseList {
    type Output = Phrase;

    fn index(&self, index: usize) -> &Phrase {
        &self.phrases[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_counts_graphemes_not_bytes() {
        let list = PhraseList::new(["héllo 👋🏽"]).unwrap();
        let phrase = &list[0];
        assert_eq!(phrase.len(), 7);
        assert_eq!(phrase.prefix(2), "hé");
        assert_eq!(phrase.prefix(7), "héllo 👋🏽");
    }

    #[test]
    fn prefix_past_end_is_whole_phrase() {
        let list = PhraseList::new(["Go"]).unwrap();
        assert_eq!(list[0].prefix(10), "Go");
        assert_eq!(list[0].prefix(0), "");
    }

    #[test]
    fn rejects_empty_list() {
        let err = PhraseList::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.issue(), &ConfigurationIssue::NoPhrases);
    }

    #[test]
    fn rejects_empty_phrase_with_its_index() {
        let err = PhraseList::new(["Ok", ""]).unwrap_err();
        assert_eq!(err.issue(), &ConfigurationIssue::InvalidPhrase { index: 1 });
    }

    #[test]
    fn next_index_wraps_around() {
        let list = PhraseList::new(["a", "b", "c"]).unwrap();
        assert_eq!(list.next_index(0), 1);
        assert_eq!(list.next_index(2), 0);
    }

    #[test]
    fn clones_share_snapshot() {
        let list = PhraseList::new(["Hi"]).unwrap();
        let copy = list.clone();
        assert!(Arc::ptr_eq(&list.phrases, &copy.phrases));
    }
}
