//! Embedded default configuration files.
//!
//! The `templates/` directory of this crate is compiled into the binary with
//! `rust-embed`, so `summarizer init` works without any files on disk. With
//! the `debug-embed` feature, debug builds embed the files as well instead of
//! reading them at runtime.

use rust_embed::RustEmbed;

/// Embedded template files from `crates/core/templates/`.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "params.yaml", "config/config.yaml")
///
/// # Returns
/// The file content as a String, or None if the file doesn't exist.
///
/// # Example
/// ```
/// use summ_core::init::templates::get_template;
///
/// let config = get_template("config/config.yaml").expect("config.yaml should exist");
/// assert!(config.contains("artifacts_root:"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List template paths starting with `prefix`, sorted.
pub fn list_templates(prefix: &str) -> Vec<String> {
    let mut templates: Vec<String> = TemplateAssets::iter()
        .filter(|path| path.starts_with(prefix))
        .map(|path| path.to_string())
        .collect();
    templates.sort();
    templates
}
