//! Static export: pre-rendered pages laid out as `<route>/index.html` so every
//! internal path resolves with a trailing slash on plain file hosting.

use std::path::{Path, PathBuf};

use crate::error::SiteError;

/// Directory-style location of a route's page, e.g. `/about` -> `about/index.html`.
pub fn page_path(site_root: &Path, route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        site_root.join("index.html")
    } else {
        site_root.join(trimmed).join("index.html")
    }
}

/// Flat location some renderers use, e.g. `/about` -> `about.html`.
pub fn flat_page_path(site_root: &Path, route: &str) -> Option<PathBuf> {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(site_root.join(format!("{trimmed}.html")))
    }
}

/// Moves a flat `<route>.html` into `<route>/index.html` if needed and returns
/// the final page location.
pub fn normalize_page(site_root: &Path, route: &str) -> Result<PathBuf, SiteError> {
    let target = page_path(site_root, route);
    if target.is_file() {
        return Ok(target);
    }
    if let Some(flat) = flat_page_path(site_root, route).filter(|p| p.is_file()) {
        if let Some(dir) = target.parent() {
            std::fs::create_dir_all(dir).map_err(SiteError::io(dir))?;
        }
        std::fs::rename(&flat, &target).map_err(SiteError::io(&flat))?;
        log::debug!("moved {} -> {}", flat.display(), target.display());
        return Ok(target);
    }
    Err(SiteError::MissingPage {
        route: route.to_string(),
        path: target,
    })
}

#[cfg(feature = "ssr")]
pub use generate::export_site;

#[cfg(feature = "ssr")]
mod generate {
    use std::path::{Path, PathBuf};

    use leptos::prelude::*;
    use leptos_axum::generate_route_list_with_ssg;
    use leptos_router::SsrMode;

    use super::normalize_page;
    use crate::{app::shell, error::SiteError};

    /// Renders every static route into the site root and returns the pages written.
    pub async fn export_site(options: &LeptosOptions) -> Result<Vec<PathBuf>, SiteError> {
        let site_root = Path::new(options.site_root.as_ref()).to_path_buf();
        tokio::fs::create_dir_all(&site_root)
            .await
            .map_err(SiteError::io(&site_root))?;

        let (routes, static_routes) = generate_route_list_with_ssg({
            let options = options.clone();
            move || shell(options.clone())
        });
        static_routes.generate(options).await;

        let pages = routes
            .iter()
            .filter(|route| matches!(route.mode(), SsrMode::Static(_)))
            .map(|route| {
                let page = normalize_page(&site_root, route.path())?;
                tracing::info!(route = route.path(), page = %page.display(), "exported");
                Ok(page)
            })
            .collect::<Result<Vec<_>, SiteError>>()?;
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_page_path_layout() {
        let root = Path::new("target/site");
        assert_eq!(page_path(root, "/"), root.join("index.html"));
        assert_eq!(page_path(root, ""), root.join("index.html"));
        assert_eq!(page_path(root, "/about"), root.join("about/index.html"));
        assert_eq!(page_path(root, "/about/"), root.join("about/index.html"));
        assert_eq!(
            page_path(root, "/blog/post"),
            root.join("blog/post/index.html")
        );
    }

    #[test]
    fn test_flat_page_path() {
        let root = Path::new("out");
        assert_eq!(flat_page_path(root, "/"), None);
        assert_eq!(flat_page_path(root, "/about/"), Some(root.join("about.html")));
    }

    #[test]
    fn test_normalize_keeps_index() {
        let root = TempDir::new().expect("should create temp dir");
        fs::write(root.path().join("index.html"), "<html></html>").expect("should write");
        let page = normalize_page(root.path(), "/").expect("index should exist");
        assert_eq!(page, root.path().join("index.html"));
    }

    #[test]
    fn test_normalize_moves_flat_page() {
        let root = TempDir::new().expect("should create temp dir");
        fs::write(root.path().join("about.html"), "about").expect("should write");
        let page = normalize_page(root.path(), "/about").expect("flat page should move");
        assert_eq!(page, root.path().join("about/index.html"));
        assert!(!root.path().join("about.html").exists());
        assert_eq!(fs::read_to_string(&page).expect("should read"), "about");
    }

    #[test]
    fn test_normalize_missing_page() {
        let root = TempDir::new().expect("should create temp dir");
        let err = normalize_page(root.path(), "/nope").expect_err("should be missing");
        assert!(matches!(err, SiteError::MissingPage { ref route, .. } if route == "/nope"));
    }
}
