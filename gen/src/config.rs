//! Configuration for the map generator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for one generation target.
///
/// The defaults reproduce the layout of the client application: descriptor
/// files named `metadata.ts` under `client/pages/(main)`, emitted to
/// `src/meta-handler.map.ts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Project root all other paths are resolved against.
    pub project_root: PathBuf,

    /// Pages directory, relative to the project root, with `/` separators.
    pub pages_dir: String,

    /// File stem of a metadata descriptor.
    pub descriptor_stem: String,

    /// File extension of a metadata descriptor (no leading dot).
    pub descriptor_ext: String,

    /// Output path of the generated module, relative to the project root.
    pub output: PathBuf,

    /// Tool name written into the generated-file banner.
    pub tool_name: String,

    /// Prefix that makes descriptor paths resolvable from the generated
    /// module's own directory.
    pub import_prefix: String,
}

impl GeneratorConfig {
    /// Create a config for the given project root with the default layout.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            pages_dir: "client/pages/(main)".to_string(),
            descriptor_stem: "metadata".to_string(),
            descriptor_ext: "ts".to_string(),
            output: PathBuf::from("src/meta-handler.map.ts"),
            tool_name: "metamap".to_string(),
            import_prefix: "../".to_string(),
        }
    }

    /// Set the pages directory.
    pub fn with_pages_dir(mut self, dir: impl Into<String>) -> Self {
        self.pages_dir = dir.into();
        self
    }

    /// Set the descriptor file stem and extension.
    pub fn with_descriptor(mut self, stem: impl Into<String>, ext: impl Into<String>) -> Self {
        self.descriptor_stem = stem.into();
        self.descriptor_ext = ext.into();
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the banner tool name.
    pub fn with_tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }

    /// Glob pattern matching every descriptor under the pages directory.
    ///
    /// `**` matches zero or more path components, so a descriptor sitting
    /// directly in the pages directory is matched too.
    pub fn pattern(&self) -> String {
        format!(
            "{}/{}/**/{}.{}",
            self.project_root.display(),
            self.pages_dir,
            self.descriptor_stem,
            self.descriptor_ext
        )
    }

    /// Descriptor file name, e.g. `metadata.ts`.
    pub fn descriptor_file_name(&self) -> String {
        format!("{}.{}", self.descriptor_stem, self.descriptor_ext)
    }

    /// Absolute path of the watched pages directory.
    pub fn pages_path(&self) -> PathBuf {
        self.project_root.join(&self.pages_dir)
    }

    /// Absolute path of the generated module.
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output)
    }

    /// The project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout() {
        let config = GeneratorConfig::new("/srv/app");

        assert_eq!(
            config.pattern(),
            "/srv/app/client/pages/(main)/**/metadata.ts"
        );
        assert_eq!(config.descriptor_file_name(), "metadata.ts");
        assert_eq!(
            config.output_path(),
            PathBuf::from("/srv/app/src/meta-handler.map.ts")
        );
        assert_eq!(
            config.pages_path(),
            PathBuf::from("/srv/app/client/pages/(main)")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::new("/srv/app")
            .with_pages_dir("site/routes")
            .with_descriptor("meta", "tsx")
            .with_output("generated/map.ts")
            .with_tool_name("meta-gen");

        assert_eq!(config.pattern(), "/srv/app/site/routes/**/meta.tsx");
        assert_eq!(config.tool_name, "meta-gen");
        assert_eq!(
            config.output_path(),
            PathBuf::from("/srv/app/generated/map.ts")
        );
    }
}
