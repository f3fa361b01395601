use std::fs;

use tempfile::tempdir;

use crate::gallery::DefaultSelection;

use super::{GalleryConfig, load_config, load_or_default, save_config};

#[test]
fn default_endpoints_match_the_collection() {
    let config = GalleryConfig::default();
    assert_eq!(
        config.listing_url(),
        "https://api.github.com/repos/RyuZinOh/.dotfiles/contents/thumbnails"
    );
    assert_eq!(
        config.full_image_url("sunset.jpg"),
        "https://raw.githubusercontent.com/RyuZinOh/.dotfiles/main/Pictures/sunset.jpg"
    );
    assert_eq!(config.picture_path("sunset.jpg"), "Pictures/sunset.jpg");
    assert_eq!(
        config.commits_url(),
        "https://api.github.com/repos/RyuZinOh/.dotfiles/commits"
    );
    assert_eq!(config.transition_ms, 120);
    assert!(config.validate().is_ok());
}

#[test]
fn trailing_slashes_are_tolerated() {
    let config = GalleryConfig {
        api_base: "https://api.example.test/".to_string(),
        pictures_path: "/walls/".to_string(),
        ..GalleryConfig::default()
    };
    assert!(config.listing_url().starts_with("https://api.example.test/repos/"));
    assert_eq!(config.picture_path("a.jpg"), "walls/a.jpg");
}

#[test]
fn partial_yaml_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gallery.yaml");
    fs::write(
        &path,
        "owner: someone\ndefault_selection:\n  policy: index\n  value: 3\n",
    )
    .expect("write config");
    let config = load_config(&path).expect("load yaml");
    assert_eq!(config.owner, "someone");
    assert_eq!(config.repo, ".dotfiles");
    assert_eq!(config.default_selection, DefaultSelection::Index(3));
}

#[test]
fn json_roundtrip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gallery.json");
    let config = GalleryConfig {
        default_selection: DefaultSelection::Name("maxxed_city.jpg".to_string()),
        transition_ms: 250,
        ..GalleryConfig::default()
    };
    save_config(&path, &config).expect("save");
    assert_eq!(load_config(&path).expect("load"), config);
}

#[test]
fn empty_identifiers_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gallery.json");
    fs::write(&path, r#"{"owner": "  "}"#).expect("write config");
    let error = load_config(&path).expect_err("must fail");
    assert!(error.to_string().contains("owner"));
}

#[test]
fn missing_path_uses_defaults() {
    assert_eq!(
        load_or_default(None).expect("defaults"),
        GalleryConfig::default()
    );
}
