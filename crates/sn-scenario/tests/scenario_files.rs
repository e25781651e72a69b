use std::path::{Path, PathBuf};

use sn_graph::SocialNetwork;
use sn_scenario::{ScenarioError, ValidationError, apply, demo, load};

fn scenarios_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenarios")
}

#[test]
fn reference_yaml_matches_demo() {
    let scenario = load(&scenarios_dir().join("reference.yaml")).unwrap();
    let builtin = demo();

    assert_eq!(scenario.members, builtin.members);
    assert_eq!(scenario.friendships, builtin.friendships);
}

#[test]
fn reference_yaml_renders() {
    let scenario = load(&scenarios_dir().join("reference.yaml")).unwrap();
    let mut network = SocialNetwork::new();
    let report = apply(&scenario, &mut network);

    assert_eq!(report.issues.len(), 2);
    assert!(network.validate().is_ok());
    assert_eq!(
        network.render_member("Alice").as_deref(),
        Some("Alice: Bob, Charlie, Frank")
    );
}

#[test]
fn json_scenario_loads_by_extension() {
    let scenario = load(&scenarios_dir().join("book_club.json")).unwrap();
    let mut network = SocialNetwork::new();
    let report = apply(&scenario, &mut network);

    assert!(report.is_clean());
    assert_eq!(network.friendship_count(), 3);
    assert_eq!(
        network.render_member("Judy").as_deref(),
        Some("Judy: No friends")
    );
}

#[test]
fn unsupported_version_is_rejected_on_load() {
    let path = std::env::temp_dir().join("sn_scenario_future_version.yaml");
    std::fs::write(&path, "version: 99\nname: Future\n").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::Validation(ValidationError::UnsupportedVersion { version: 99 })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let err = load(&scenarios_dir().join("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, ScenarioError::Io(_)));
}

#[test]
fn malformed_yaml_is_yaml_error() {
    let path = std::env::temp_dir().join("sn_scenario_malformed.yaml");
    std::fs::write(&path, "version: [not a number\n").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, ScenarioError::Yaml(_)));
}
