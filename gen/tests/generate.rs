//! Generation passes over real descriptor trees.

use std::fs;
use std::path::Path;
use std::time::Duration;

use metamap_gen::{GenerateOutcome, GeneratorConfig, MapGenerator};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn seed_descriptor(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "export default { title: \"t\" }\n").unwrap();
}

fn seed_project(root: &Path) -> GeneratorConfig {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("client/pages/(main)")).unwrap();
    GeneratorConfig::new(root)
}

#[tokio::test]
async fn full_tree_renders_expected_module() {
    let temp = TempDir::new().unwrap();
    let config = seed_project(temp.path());
    seed_descriptor(temp.path(), "client/pages/(main)/metadata.ts");
    seed_descriptor(temp.path(), "client/pages/(main)/users/[id]/metadata.ts");
    seed_descriptor(
        temp.path(),
        "client/pages/(main)/orgs/[orgId]/repos/[repoId]/metadata.ts",
    );

    let generator = MapGenerator::new(config.clone());
    let outcome = generator.generate().await.unwrap();
    assert_eq!(outcome, GenerateOutcome::Written { routes: 3 });

    let content = fs::read_to_string(config.output_path()).unwrap();
    let expected = "\
// This file is generated by `metamap`
import i0 from \"../client/pages/(main)/metadata\"
import i1 from \"../client/pages/(main)/orgs/[orgId]/repos/[repoId]/metadata\"
import i2 from \"../client/pages/(main)/users/[id]/metadata\"

export default {
  \"\": i0,
  \"/orgs/:orgId/repos/:repoId\": i1,
  \"/users/:id\": i2,
}
";
    assert_eq!(content, expected);
}

#[tokio::test]
async fn second_run_skips_write() {
    let temp = TempDir::new().unwrap();
    let config = seed_project(temp.path());
    seed_descriptor(temp.path(), "client/pages/(main)/about/metadata.ts");

    let generator = MapGenerator::new(config.clone());
    assert_eq!(
        generator.generate().await.unwrap(),
        GenerateOutcome::Written { routes: 1 }
    );

    let first_mtime = fs::metadata(config.output_path())
        .unwrap()
        .modified()
        .unwrap();

    // Coarse filesystem timestamps would hide a rewrite without this gap.
    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(
        generator.generate().await.unwrap(),
        GenerateOutcome::Unchanged
    );
    let second_mtime = fs::metadata(config.output_path())
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(first_mtime, second_mtime);
}

#[tokio::test]
async fn preseeded_identical_module_is_untouched() {
    let temp = TempDir::new().unwrap();
    let config = seed_project(temp.path());
    seed_descriptor(temp.path(), "client/pages/(main)/docs/metadata.ts");

    let expected = "\
// This file is generated by `metamap`
import i0 from \"../client/pages/(main)/docs/metadata\"

export default {
  \"/docs\": i0,
}
";
    fs::write(config.output_path(), expected).unwrap();

    let generator = MapGenerator::new(config.clone());
    assert_eq!(
        generator.generate().await.unwrap(),
        GenerateOutcome::Unchanged
    );
    assert_eq!(fs::read_to_string(config.output_path()).unwrap(), expected);
}

#[tokio::test]
async fn duplicate_routes_collapse_to_later_descriptor() {
    let temp = TempDir::new().unwrap();
    let config = seed_project(temp.path());
    // A literal `:id` directory derives the same key as `[id]`; `:` sorts
    // before `[`, so the bracketed descriptor is discovered later.
    seed_descriptor(temp.path(), "client/pages/(main)/users/:id/metadata.ts");
    seed_descriptor(temp.path(), "client/pages/(main)/users/[id]/metadata.ts");

    let generator = MapGenerator::new(config.clone());
    assert_eq!(
        generator.generate().await.unwrap(),
        GenerateOutcome::Written { routes: 1 }
    );

    let content = fs::read_to_string(config.output_path()).unwrap();
    // Both files keep their own import...
    assert!(content.contains("import i0 from"));
    assert!(content.contains("import i1 from"));
    // ...but the table binds the route once, to the later identifier.
    assert_eq!(content.matches("\"/users/:id\":").count(), 1);
    assert!(content.contains("  \"/users/:id\": i1,"));
}

#[tokio::test]
async fn missing_output_directory_propagates_io_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("client/pages/(main)")).unwrap();
    seed_descriptor(temp.path(), "client/pages/(main)/metadata.ts");

    // No src/ directory: the write must fail and surface as an error.
    let generator = MapGenerator::new(GeneratorConfig::new(temp.path()));
    assert!(generator.generate().await.is_err());
}
