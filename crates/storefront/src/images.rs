//! Product image URL resolution.
//!
//! Products store a bare image reference (a file name, sometimes with a
//! path or a full URL baked in by an import). This module turns that
//! reference into a URL the frontend can load, without ever trusting the
//! reference to escape the image root.

use url::Url;

/// Served when a product has no usable image reference.
pub const DEFAULT_PRODUCT_IMAGE: &str = "/images/placeholder.jpg";

/// Root path under which local product images are served.
const IMAGE_ROOT: &str = "/images";

/// Known category folders under the image root.
const CATEGORY_FOLDERS: &[&str] = &["deportivas", "casuales", "formales", "botas", "sandalias"];

/// Resolve a product image reference to a browser-loadable URL.
///
/// Absolute `http(s)` URLs pass through untouched. Anything else is treated
/// as a file name: path components are stripped, a `.jpg` extension is
/// added when missing, and the file is placed under the category folder
/// (or `otros` for categories without a folder of their own). Empty or
/// unusable references resolve to [`DEFAULT_PRODUCT_IMAGE`].
#[must_use]
pub fn resolve_image_url(image_ref: Option<&str>, category: &str) -> String {
    let Some(raw) = image_ref.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_PRODUCT_IMAGE.to_owned();
    };

    if let Ok(url) = Url::parse(raw) {
        if matches!(url.scheme(), "http" | "https") {
            return raw.to_owned();
        }
    }

    // Strip any path the reference carries; only the file name is trusted.
    // Trailing dots go too, so `"shoe1."` still gets the default extension
    // (and `"."`/`".."` collapse to nothing).
    let file_name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw)
        .trim()
        .trim_end_matches('.');
    if file_name.is_empty() {
        return DEFAULT_PRODUCT_IMAGE.to_owned();
    }

    let file_name = if file_name.contains('.') {
        file_name.to_owned()
    } else {
        format!("{file_name}.jpg")
    };

    let folder = category_folder(category);
    format!("{IMAGE_ROOT}/{folder}/{file_name}")
}

fn category_folder(category: &str) -> &'static str {
    let lowered = category.trim().to_lowercase();
    CATEGORY_FOLDERS
        .iter()
        .find(|f| **f == lowered)
        .copied()
        .unwrap_or("otros")
}
