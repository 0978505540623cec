//! Integration tests for dependency aggregation
//!
//! These tests run the discovery, merge and manifest stages together.

use depmerge::aggregate::{aggregate, AggregateError, Aggregator, DependencyList};
use depmerge::config::Config;
use depmerge::discovery::DescriptorFinder;
use depmerge::report::{verify_well_formed, write_avoiding_collision, ManifestTemplate};
use depmerge::merge_dependencies;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn write_descriptor(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write descriptor");
    path
}

fn summary_line(list: &DependencyList) -> Vec<(String, Option<String>, String)> {
    list.iter()
        .map(|d| {
            (
                d.artifact_id().to_string(),
                d.explicit_group_id().map(str::to_string),
                d.version().to_string(),
            )
        })
        .collect()
}

const DESCRIPTOR_A: &str = "<dependencies><dependency><artifactId>foo</artifactId><version>1.0</version></dependency></dependencies>";

const DESCRIPTOR_B: &str = "<dependencies><dependency><id>foo</id><version>2.0</version></dependency><dependency><artifactId>bar</artifactId><groupId>org.bar</groupId><version>3.0</version></dependency></dependencies>";

#[test]
fn test_two_descriptors_first_seen_wins() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let a = write_descriptor(temp.path(), "a.xml", DESCRIPTOR_A);
    let b = write_descriptor(temp.path(), "b.xml", DESCRIPTOR_B);

    let summary = aggregate(&[a, b]).expect("Aggregation should succeed");

    assert_eq!(summary.files_processed, 2);
    assert_eq!(
        summary_line(&summary.dependencies),
        vec![
            ("foo".to_string(), None, "1.0".to_string()),
            ("bar".to_string(), Some("org.bar".to_string()), "3.0".to_string()),
        ]
    );
}

#[test]
fn test_order_decides_surviving_version() {
    let merged = merge_dependencies(DESCRIPTOR_B, DependencyList::new());
    let merged = merge_dependencies(DESCRIPTOR_A, merged);

    assert_eq!(merged.get("foo").unwrap().version(), "2.0");
    let ids: Vec<_> = merged.iter().map(|d| d.artifact_id()).collect();
    assert_eq!(ids, vec!["foo", "bar"]);
}

#[test]
fn test_unreadable_descriptor_aborts() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let a = write_descriptor(temp.path(), "a.xml", DESCRIPTOR_A);
    let missing = temp.path().join("missing.xml");

    let err = aggregate(&[a, missing.clone()]).unwrap_err();
    match err {
        AggregateError::ReadDescriptor { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_fixture_tree() {
    let root = fixtures_path().join("tree");
    let config = Config::default();

    let files = DescriptorFinder::new(&config)
        .find_descriptors(&root)
        .expect("Discovery should succeed");

    let mut aggregator = Aggregator::new();
    for file in &files {
        aggregator.process_file(&file.path).expect("Fixture should be readable");
    }
    let summary = aggregator.finish();

    // components/thread, framework, meta; site and beanutils are excluded
    assert_eq!(summary.files_processed, 3);
    assert_eq!(
        summary_line(&summary.dependencies),
        vec![
            ("junit".to_string(), None, "3.8.2".to_string()),
            ("concurrent".to_string(), None, "1.3.4".to_string()),
            (
                "excalibur-pool-api".to_string(),
                Some("excalibur-pool".to_string()),
                "2.0.0".to_string()
            ),
            (
                "avalon-framework-api".to_string(),
                Some("avalon-framework".to_string()),
                "4.2.0".to_string()
            ),
        ]
    );
    assert!(!summary.dependencies.contains("logkit"));
    assert!(!summary.dependencies.contains("maven-xdoc-plugin"));
    assert!(!summary.dependencies.contains("commons-beanutils"));
}

#[test]
fn test_manifest_collision_writes_alternate() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let default_path = temp.path().join("project-all-deps.xml");
    fs::write(&default_path, "<project/>").unwrap();

    let merged = merge_dependencies(DESCRIPTOR_B, DependencyList::new());
    let rendered = ManifestTemplate::default().render(&merged);
    let written = write_avoiding_collision(&default_path, &rendered).unwrap();

    assert_eq!(written, temp.path().join("project-all-deps.xml.new"));
    assert_eq!(fs::read_to_string(&default_path).unwrap(), "<project/>");

    let contents = fs::read_to_string(&written).unwrap();
    verify_well_formed(&contents).expect("Manifest should be well-formed");
    assert!(contents.contains("<id>foo</id>\n        <version>2.0</version>\n    </dependency>"));
    assert!(contents.contains("<groupId>org.bar</groupId>"));
}
