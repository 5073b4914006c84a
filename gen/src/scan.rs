//! Descriptor discovery under the pages directory.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::route::RouteKey;

/// One discovered metadata descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Path relative to the project root, `/`-separated.
    pub rel_path: String,

    /// Route key derived from the path.
    pub route: RouteKey,

    /// Import identifier, unique per descriptor (`i0`, `i1`, ...).
    pub ident: String,

    /// Relative path with the descriptor extension stripped, used as the
    /// import specifier body.
    pub module_path: String,
}

/// Enumerate every descriptor matching the configured glob pattern.
///
/// Results come back in the order the glob yields (alphabetical), which
/// is stable for a fixed tree; identifiers are assigned by that discovery
/// index, so two files can never share one.
pub fn discover(config: &GeneratorConfig) -> Result<Vec<Descriptor>> {
    let pattern = config.pattern();
    let pages_dir = &config.pages_dir;
    let file_name = config.descriptor_file_name();
    let ext_suffix = format!(".{}", config.descriptor_ext);

    let mut descriptors = Vec::new();
    for (index, entry) in glob::glob(&pattern)?.enumerate() {
        let path = entry?;
        let rel = path
            .strip_prefix(config.project_root())
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");

        let route = RouteKey::derive(&rel, pages_dir, &file_name);
        let module_path = rel.strip_suffix(&ext_suffix).unwrap_or(&rel).to_string();

        descriptors.push(Descriptor {
            route,
            ident: format!("i{index}"),
            module_path,
            rel_path: rel,
        });
    }

    debug!("discovered {} descriptors under {pages_dir}", descriptors.len());
    Ok(descriptors)
}
