//! Integration tests for loading and rendering a version history.

use std::fs;
use std::path::PathBuf;

use clientview_cli::render::{render_disclosure, render_show};
use clientview_cli::report::{ShowOptions, build_view, load_settings, load_versions};
use clientview_core::{DisclosureState, ListId};
use clientview_model::{SnapshotId, SubjectId};

const VERSIONS: &str = r#"[
  {
    "timestamp": "2020-02-01T00:00:00Z",
    "id": "123",
    "fields": {
      "client_id": "C.1234",
      "fqdn": "foo.unknown-first"
    }
  },
  {
    "timestamp": "2020-03-01T00:00:00Z",
    "fields": {
      "client_id": "C.1234",
      "fqdn": "foo.unknown-changed",
      "users": ["foo", "bar", "hidden-username"],
      "fleetspeak_enabled": true
    }
  }
]"#;

fn unique_temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "clientview-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn sorted_load_selects_newest() {
    let path = unique_temp_file("versions.json", VERSIONS);
    let versions = load_versions(&path, true).unwrap();
    let view = build_view(versions, load_settings(None).unwrap(), &ShowOptions::default()).unwrap();

    assert_eq!(view.active_index(), Some(0));
    let fqdn = view.active_snapshot().and_then(|s| s.field("fqdn")).unwrap();
    assert_eq!(fqdn.to_string(), "foo.unknown-changed");

    let text = render_show(&view);
    assert!(text.contains("foo.unknown-changed"));
    assert!(text.contains("Fleetspeak"));
    assert!(text.contains("foo"));
    assert!(!text.contains("hidden-username"));
    assert!(text.contains("(+2 more)"));
    assert!(text.contains("show-more"));
    fs::remove_file(path).ok();
}

#[test]
fn unsorted_load_keeps_file_order() {
    let path = unique_temp_file("versions-unsorted.json", VERSIONS);
    let versions = load_versions(&path, false).unwrap();
    assert_eq!(versions.get(0).and_then(|s| s.id.as_ref()).map(SnapshotId::as_str), Some("123"));
    fs::remove_file(path).ok();
}

#[test]
fn anchor_and_expand_options_are_replayed() {
    let path = unique_temp_file("versions-anchor.json", VERSIONS);
    let versions = load_versions(&path, true).unwrap();
    let options = ShowOptions {
        subject: Some("C.1234".to_string()),
        anchor: Some("123".to_string()),
        select: None,
        expand: vec![ListId::USERS.to_string()],
    };
    let view = build_view(versions, load_settings(None).unwrap(), &options).unwrap();
    assert_eq!(view.active_index(), Some(1));
    assert_eq!(view.store().requested.as_ref().map(SubjectId::as_str), Some("C.1234"));
    // The anchored version has no users, so the toggle has nothing to do.
    assert_eq!(view.disclosure_state(&ListId::users()), DisclosureState::NoButton);
    fs::remove_file(path).ok();
}

#[test]
fn expanding_users_reveals_every_name() {
    let path = unique_temp_file("versions-expand.json", VERSIONS);
    let versions = load_versions(&path, true).unwrap();
    let options = ShowOptions {
        expand: vec![ListId::USERS.to_string()],
        ..ShowOptions::default()
    };
    let view = build_view(versions, load_settings(None).unwrap(), &options).unwrap();
    let text = render_show(&view);
    assert!(text.contains("hidden-username"));
    assert!(text.contains("show-less"));
    fs::remove_file(path).ok();
}

#[test]
fn settings_file_changes_caps() {
    let versions_path = unique_temp_file("versions-caps.json", VERSIONS);
    let settings_path = unique_temp_file("settings.toml", "[disclosure.caps]\nusers = 5\n");
    let settings = load_settings(Some(&settings_path)).unwrap();
    let versions = load_versions(&versions_path, true).unwrap();
    let view = build_view(versions, settings, &ShowOptions::default()).unwrap();
    assert_eq!(view.disclosure_state(&ListId::users()), DisclosureState::NoButton);
    assert!(render_show(&view).contains("hidden-username"));
    fs::remove_file(versions_path).ok();
    fs::remove_file(settings_path).ok();
}

#[test]
fn invalid_inputs_are_reported() {
    let path = unique_temp_file("versions-bad.json", "{");
    let error = load_versions(&path, false).unwrap_err();
    assert!(format!("{error:#}").contains("parse versions"));
    fs::remove_file(path).ok();

    let missing = PathBuf::from("/nonexistent/clientview/versions.json");
    assert!(load_versions(&missing, false).is_err());

    let options = ShowOptions {
        subject: Some("  ".to_string()),
        ..ShowOptions::default()
    };
    let versions = serde_json::from_str(VERSIONS).unwrap();
    assert!(build_view(versions, load_settings(None).unwrap(), &options).is_err());
}

#[test]
fn empty_history_renders_placeholder() {
    let view = build_view(
        clientview_model::VersionList::default(),
        load_settings(None).unwrap(),
        &ShowOptions::default(),
    )
    .unwrap();
    assert_eq!(render_show(&view), "No versions to show.");
}

#[test]
fn disclosure_lines() {
    let lines = [(3, 0, 2), (3, 3, 2), (3, 3, 3), (0, 1, 1)]
        .iter()
        .map(|&(total, shown, cap)| render_disclosure(total, shown, cap))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(lines, @r"
    total=3 shown=0 cap=2 -> show-more
    total=3 shown=3 cap=2 -> show-less
    total=3 shown=3 cap=3 -> no-button
    total=0 shown=1 cap=1 -> no-button
    ");
}
