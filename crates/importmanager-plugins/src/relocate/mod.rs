//! Basename relocation, the reference post-processing step.
//!
//! Plugins commonly place an artefact under the destination using the
//! original file name, whatever shape the destination had. The contract does
//! not require this; it is offered as a helper and only computes a path.

use camino::{Utf8Path, Utf8PathBuf};

/// Joins the final component of `source` onto `destination`.
///
/// Paths are split on components, so a trailing separator or a trailing `.`
/// on `source` is ignored (`/a/b/` and `/a/b/.` both yield `b`). Returns `None` when `source` has no final
/// normal component, such as `/`, `..` or the empty string.
///
/// # Example
///
/// ```
/// use importmanager_plugins::relocated_path;
///
/// let path = relocated_path("/a/b/file.txt", "/out").expect("source has a basename");
/// assert_eq!(path.as_str(), "/out/file.txt");
/// assert!(relocated_path("/", "/out").is_none());
/// ```
#[must_use]
pub fn relocated_path(source: &str, destination: &str) -> Option<Utf8PathBuf> {
    let basename = Utf8Path::new(source).file_name()?;
    Some(Utf8Path::new(destination).join(basename))
}
