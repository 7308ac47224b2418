//! Built Frontend Pages
//!
//! Serves `STATIC_DIR` as the router fallback. A page path such as
//! `/auth/signin` is answered from `auth/signin.html` or
//! `auth/signin/index.html`, never with a redirect to `/auth/signin/`:
//! the access gate only knows the slash-less public paths.

use std::path::{Path, PathBuf};

use axum::extract::Request;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct StaticPages {
    root: PathBuf,
    files: ServeDir,
}

impl StaticPages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let files = ServeDir::new(&root).append_index_html_on_directories(false);
        Self { root, files }
    }

    pub async fn serve(&self, mut req: Request) -> Response {
        if let Some(page) = self.page_file(req.uri().path()).await {
            match with_path(req.uri(), &page) {
                Ok(uri) => *req.uri_mut() = uri,
                Err(e) => tracing::debug!(error = %e, page = %page, "Cannot rewrite page path"),
            }
        }

        match self.files.clone().oneshot(req).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        }
    }

    /// URL path of the HTML file answering `path`, when `path` names a page
    /// rather than a file.
    async fn page_file(&self, path: &str) -> Option<String> {
        // Encoded or dotted paths go to ServeDir untouched, it sanitizes them
        if path.contains('%') || path.split('/').any(|s| s == "." || s == "..") {
            return None;
        }

        let candidates = if path.ends_with('/') {
            vec![format!("{path}index.html")]
        } else if Path::new(path).extension().is_some() {
            return None;
        } else {
            vec![format!("{path}.html"), format!("{path}/index.html")]
        };

        for candidate in candidates {
            let file = self.root.join(candidate.trim_start_matches('/'));
            if tokio::fs::metadata(&file).await.is_ok_and(|m| m.is_file()) {
                return Some(candidate);
            }
        }
        None
    }
}

fn with_path(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse()?);
    Ok(Uri::from_parts(parts)?)
}
