//! Certificate viewer modal.

use crate::domain::foundation::ValidationError;

/// Open/closed state of the full-size certificate viewer.
///
/// At most one certificate is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificateViewer {
    selected: Option<usize>,
}

impl CertificateViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the viewer on certificate `index` out of `count`.
    ///
    /// Opening while already open switches to the new certificate.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `index >= count`; the viewer state is unchanged.
    pub fn open(&mut self, index: usize, count: usize) -> Result<(), ValidationError> {
        if index >= count {
            return Err(ValidationError::out_of_range(
                "certificate_index",
                0,
                count.saturating_sub(1),
                index,
            ));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Closes the viewer. Closing a closed viewer is a no-op.
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}
