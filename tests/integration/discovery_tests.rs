//! Descriptor discovery tests

use depmerge::config::Config;
use depmerge::discovery::DescriptorFinder;
use std::fs;
use std::path::{Path, PathBuf};

fn create_descriptor(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).expect("Failed to create dirs");
    fs::write(path, "<project/>").expect("Failed to write descriptor");
}

fn discover(config: &Config, root: &Path) -> Vec<PathBuf> {
    DescriptorFinder::new(config)
        .find_descriptors(root)
        .expect("Discovery should succeed")
        .into_iter()
        .map(|f| f.relative)
        .collect()
}

#[test]
fn test_depth_limit() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    create_descriptor(temp.path(), "a/b/c/project.xml");
    create_descriptor(temp.path(), "a/b/c/d/project.xml");

    let config = Config::default();
    assert_eq!(
        discover(&config, temp.path()),
        vec![PathBuf::from("a/b/c/project.xml")]
    );

    let shallow = Config {
        max_depth: 2,
        ..Config::default()
    };
    assert!(discover(&shallow, temp.path()).is_empty());
}

#[test]
fn test_stable_name_order() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    create_descriptor(temp.path(), "zeta/project.xml");
    create_descriptor(temp.path(), "alpha/project.xml");
    create_descriptor(temp.path(), "mid/inner/project.xml");

    let config = Config::default();
    assert_eq!(
        discover(&config, temp.path()),
        vec![
            PathBuf::from("alpha/project.xml"),
            PathBuf::from("mid/inner/project.xml"),
            PathBuf::from("zeta/project.xml"),
        ]
    );
}

#[test]
fn test_hidden_and_ignored_directories_are_scanned() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    create_descriptor(temp.path(), ".hidden/project.xml");
    fs::write(temp.path().join(".gitignore"), "ignored/\n").unwrap();
    create_descriptor(temp.path(), "ignored/project.xml");

    let config = Config::default();
    let found = discover(&config, temp.path());
    assert!(found.contains(&PathBuf::from(".hidden/project.xml")));
    assert!(found.contains(&PathBuf::from("ignored/project.xml")));
}

#[test]
fn test_custom_descriptor_and_exclusions() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    create_descriptor(temp.path(), "core/pom.xml");
    create_descriptor(temp.path(), "legacy/pom.xml");
    create_descriptor(temp.path(), "core/project.xml");

    let config = Config {
        descriptor_name: "pom.xml".to_string(),
        exclude: vec!["legacy".to_string()],
        ..Config::default()
    };
    assert_eq!(
        discover(&config, temp.path()),
        vec![PathBuf::from("core/pom.xml")]
    );
}

#[test]
fn test_root_ancestors_do_not_exclude() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let root = temp.path().join("website");
    create_descriptor(&root, "module/project.xml");

    let config = Config::default();
    assert_eq!(
        discover(&config, &root),
        vec![PathBuf::from("module/project.xml")]
    );
}
