//! Static files from the public directory (login.html, style.css, ...).
//! Mounted as the router fallback, so every unmatched GET lands here.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::server::AppState;

pub async fn serve_public(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let decoded = percent_decode(uri.path());

    let Some(file_path) = resolve(&state.public_dir, &decoded) else {
        warn!("[static] rejected path {:?}", uri.path());
        return StatusCode::FORBIDDEN.into_response();
    };

    let data = match tokio::fs::read(&file_path).await {
        Ok(d) => d,
        Err(e) => {
            debug!("[static] {} not served: {}", file_path.display(), e);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, guess_content_type(&decoded)),
            (header::CACHE_CONTROL, "public, max-age=300, must-revalidate"),
        ],
        data,
    )
        .into_response()
}

/// Join a request path onto `root`, refusing anything but plain file names
/// (no `..`, no absolute components). `None` means the request must be refused.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    if relative.is_empty() || relative.contains('\\') {
        return None;
    }
    let mut out = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => out.push(part),
            _ => return None,
        }
    }
    Some(out)
}

pub fn guess_content_type(path: &str) -> &'static str {
    if path.ends_with(".js") { "application/javascript" }
    else if path.ends_with(".css") { "text/css" }
    else if path.ends_with(".json") { "application/json" }
    else if path.ends_with(".html") { "text/html; charset=utf-8" }
    else if path.ends_with(".png") { "image/png" }
    else if path.ends_with(".jpg") || path.ends_with(".jpeg") { "image/jpeg" }
    else if path.ends_with(".svg") { "image/svg+xml" }
    else if path.ends_with(".ico") { "image/x-icon" }
    else if path.ends_with(".txt") { "text/plain; charset=utf-8" }
    else { "application/octet-stream" }
}

/// Decode `%XX` escapes in a URL path. Invalid escapes are kept verbatim.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let root = Path::new("public");
        assert_eq!(resolve(root, "/login.html"), Some(PathBuf::from("public/login.html")));
        assert_eq!(resolve(root, "/css/site.css"), Some(PathBuf::from("public/css/site.css")));
        assert_eq!(resolve(root, "/../Cargo.toml"), None);
        assert_eq!(resolve(root, "/a/../../etc/passwd"), None);
        assert_eq!(resolve(root, "/"), None);
        assert_eq!(resolve(root, "/..\\secret"), None);
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("/login.html"), "/login.html");
        assert_eq!(percent_decode("/%2e%2e/x"), "/../x");
        assert_eq!(percent_decode("/a%20b"), "/a b");
        assert_eq!(percent_decode("/bad%zz"), "/bad%zz");
        assert_eq!(percent_decode("/end%2"), "/end%2");
    }

    #[test]
    fn test_content_type() {
        assert_eq!(guess_content_type("/login.html"), "text/html; charset=utf-8");
        assert_eq!(guess_content_type("/style.css"), "text/css");
        assert_eq!(guess_content_type("/blob"), "application/octet-stream");
    }
}
