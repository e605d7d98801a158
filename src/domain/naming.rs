//! Release-name derivation.

use tracing::warn;

use crate::domain::version::extract_version;

/// Placeholder token replaced by the extracted version in name templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Render the release name by substituting `version` for every
/// placeholder occurrence in `template`.
///
/// A template without the placeholder cannot express the version, so the
/// version itself is returned instead, with a warning. Total; never fails.
pub fn format_release_name(version: &str, template: &str) -> String {
    if !template.contains(VERSION_PLACEHOLDER) {
        warn!(
            template,
            "release name template has no {{version}} placeholder, using version as-is"
        );
        return version.to_string();
    }
    template.replace(VERSION_PLACEHOLDER, version)
}

/// Derive the final release name straight from a tag: extraction then
/// formatting, the first two steps of every run.
pub fn resolve_release_name(tag: &str, pattern: Option<&str>, template: &str) -> String {
    let version = extract_version(tag, pattern);
    format_release_name(&version, template)
}
