//! ShowcaseSource port - where the showcase catalog comes from.
//!
//! The site reads its projects and certificates from a remote content store;
//! tests and offline runs use a local catalog instead.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::showcase::ShowcaseCatalog;

/// Port for loading the showcase catalog.
///
/// # Example
///
/// ```ignore
/// let catalog = source.fetch_catalog().await?;
/// let page = ShowcasePage::new(catalog, LayoutRules::default(), 1280);
/// ```
#[async_trait]
pub trait ShowcaseSource: Send + Sync {
    /// Load the full catalog.
    ///
    /// Fails with `ContentUnavailable` when the store cannot be reached and
    /// `ContentMalformed` when it answers with something unreadable.
    async fn fetch_catalog(&self) -> Result<ShowcaseCatalog, DomainError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ShowcaseSource) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn showcase_source_is_send_sync() {
        fn check<T: ShowcaseSource>() {
            assert_send_sync::<T>();
        }
        let _ = check::<EmptySource>;
    }

    struct EmptySource;

    #[async_trait]
    impl ShowcaseSource for EmptySource {
        async fn fetch_catalog(&self) -> Result<ShowcaseCatalog, DomainError> {
            Ok(ShowcaseCatalog::default())
        }

        fn name(&self) -> &'static str {
            "empty"
        }
    }

    #[tokio::test]
    async fn empty_source_returns_empty_catalog() {
        let catalog = EmptySource.fetch_catalog().await.unwrap();
        assert!(catalog.is_empty());
    }
}
