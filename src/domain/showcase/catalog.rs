//! Showcase records: projects, certificates and the tech stack.
//!
//! Field names also accept the column spellings used by the content store
//! (`Img`, `Title`, `Description`, `Link`, `Issuer`, `Date`).

use serde::{Deserialize, Serialize};

/// Title shown for a certificate that has none yet.
pub const COMING_SOON: &str = "Coming Soon";

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,

    #[serde(alias = "Title")]
    pub title: String,

    #[serde(alias = "Description", default)]
    pub description: String,

    #[serde(alias = "Img", default)]
    pub image_url: Option<String>,

    #[serde(alias = "Link", default)]
    pub link: Option<String>,
}

/// A certificate card, viewable full-size in the certificate viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u64,

    #[serde(alias = "Title", default)]
    pub title: Option<String>,

    #[serde(alias = "Issuer", default)]
    pub issuer: Option<String>,

    #[serde(alias = "Date", default)]
    pub issued_on: Option<String>,

    #[serde(alias = "Img", default)]
    pub image_url: Option<String>,
}

/// What a certificate card shows as its thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumbnail<'a> {
    Image(&'a str),
    ComingSoon,
}

impl Certificate {
    /// Display title, falling back to "Coming Soon".
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => COMING_SOON,
        }
    }

    pub fn thumbnail(&self) -> Thumbnail<'_> {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Thumbnail::Image(url),
            _ => Thumbnail::ComingSoon,
        }
    }
}

/// One entry of the tech stack grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStackItem {
    pub icon: String,
    pub language: String,
}

/// Everything the showcase tabs display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseCatalog {
    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub certificates: Vec<Certificate>,

    #[serde(default)]
    pub tech_stack: Vec<TechStackItem>,
}

impl ShowcaseCatalog {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.certificates.is_empty() && self.tech_stack.is_empty()
    }
}
