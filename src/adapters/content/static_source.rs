//! Local showcase catalog: the built-in sample or a YAML file.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::showcase::{Certificate, Project, ShowcaseCatalog, TechStackItem};
use crate::ports::ShowcaseSource;

/// Serves a catalog held in memory.
#[derive(Debug, Clone)]
pub struct StaticShowcaseSource {
    catalog: ShowcaseCatalog,
}

impl StaticShowcaseSource {
    pub fn new(catalog: ShowcaseCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog the site ships with before real content is added.
    pub fn sample() -> Self {
        Self::new(sample_catalog())
    }

    /// Parses a YAML catalog with `projects`, `certificates` and `tech_stack` keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let catalog = serde_yaml::from_str(yaml).map_err(|e| {
            DomainError::new(ErrorCode::ContentMalformed, format!("Invalid catalog YAML: {}", e))
        })?;
        Ok(Self::new(catalog))
    }

    /// Reads and parses a YAML catalog file.
    pub async fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::ContentUnavailable,
                format!("Cannot read catalog file: {}", e),
            )
            .with_detail("path", path.display().to_string())
        })?;
        Self::from_yaml_str(&yaml).map_err(|e| e.with_detail("path", path.display().to_string()))
    }

    pub fn catalog(&self) -> &ShowcaseCatalog {
        &self.catalog
    }
}

#[async_trait]
impl ShowcaseSource for StaticShowcaseSource {
    async fn fetch_catalog(&self) -> Result<ShowcaseCatalog, DomainError> {
        Ok(self.catalog.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Tech stack shown in the third tab. Not stored remotely.
pub fn default_tech_stack() -> Vec<TechStackItem> {
    [
        ("html.svg", "HTML"),
        ("css.svg", "CSS"),
        ("javascript.svg", "JavaScript"),
        ("tailwind.svg", "Tailwind CSS"),
        ("reactjs.svg", "ReactJS"),
        ("vite.svg", "Vite"),
        ("nodejs.svg", "Node JS"),
        ("bootstrap.svg", "Bootstrap"),
        ("firebase.svg", "Firebase"),
        ("MUI.svg", "Material UI"),
        ("vercel.svg", "Vercel"),
        ("SweetAlert.svg", "SweetAlert2"),
    ]
    .into_iter()
    .map(|(icon, language)| TechStackItem {
        icon: icon.to_string(),
        language: language.to_string(),
    })
    .collect()
}

fn sample_catalog() -> ShowcaseCatalog {
    let project = |id: u64, title: &str, description: &str| Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image_url: Some(format!(
            "https://via.placeholder.com/400x250.png?text=Project+{}",
            id
        )),
        link: Some(format!("https://example.com/project{}", id)),
    };
    let certificate = |id: u64, title: &str, issuer: &str, date: &str| Certificate {
        id,
        title: Some(title.to_string()),
        issuer: Some(issuer.to_string()),
        issued_on: Some(date.to_string()),
        image_url: Some(format!(
            "https://via.placeholder.com/400x250.png?text=Certificate+{}",
            id
        )),
    };

    ShowcaseCatalog {
        projects: vec![
            project(
                1,
                "E-Commerce Website",
                "A fully responsive e-commerce website built with React and Firebase, featuring authentication, product management, and payment integration.",
            ),
            project(
                2,
                "Portfolio Website",
                "Personal portfolio website using ReactJS and Tailwind CSS to showcase projects, skills, and certificates.",
            ),
            project(
                3,
                "Chat Application",
                "Real-time chat application using Node.js, Socket.io, and Express, with private and group chat functionalities.",
            ),
            project(
                4,
                "Task Management App",
                "A productivity app built with React, Redux, and Firebase to track tasks and deadlines efficiently.",
            ),
        ],
        certificates: vec![
            certificate(1, "ReactJS Developer", "Coursera", "June 2025"),
            certificate(2, "Fullstack Web Developer", "Udemy", "April 2025"),
            certificate(3, "Tailwind CSS Advanced", "Frontend Masters", "May 2025"),
        ],
        tech_stack: default_tech_stack(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn sample_has_the_shipped_content() {
        let catalog = StaticShowcaseSource::sample().fetch_catalog().await.unwrap();
        assert_eq!(catalog.projects.len(), 4);
        assert_eq!(catalog.certificates.len(), 3);
        assert_eq!(catalog.tech_stack.len(), 12);
        assert_eq!(catalog.projects[2].title, "Chat Application");
    }

    #[test]
    fn parses_yaml_catalog() {
        let yaml = r#"
projects:
  - id: 7
    Title: Network Monitor
    Description: SNMP dashboards
certificates:
  - id: 1
    Issuer: Cisco
tech_stack:
  - icon: rust.svg
    language: Rust
"#;
        let source = StaticShowcaseSource::from_yaml_str(yaml).unwrap();
        let catalog = source.catalog();
        assert_eq!(catalog.projects[0].title, "Network Monitor");
        assert_eq!(catalog.certificates[0].title(), "Coming Soon");
        assert_eq!(catalog.tech_stack[0].language, "Rust");
    }

    #[test]
    fn malformed_yaml_is_content_malformed() {
        let err = StaticShowcaseSource::from_yaml_str("projects: [ { id: nope } ]").unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentMalformed);
    }

    #[tokio::test]
    async fn reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "projects:\n  - id: 1\n    title: From File").unwrap();

        let source = StaticShowcaseSource::from_yaml_file(file.path()).await.unwrap();
        assert_eq!(source.catalog().projects[0].title, "From File");
        assert!(source.catalog().certificates.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_content_unavailable() {
        let err = StaticShowcaseSource::from_yaml_file("/definitely/not/here.yaml")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentUnavailable);
        assert!(err.details.contains_key("path"));
    }
}
