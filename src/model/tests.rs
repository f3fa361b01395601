use super::{GalleryEntry, ImageAsset, RemoteFile, Viewport};

#[test]
fn asset_rejects_zero_dimensions() {
    assert!(ImageAsset::new("flat.jpg", 1920, 0, 10).is_err());
    assert!(ImageAsset::new("thin.jpg", 0, 1080, 10).is_err());
    let asset = ImageAsset::new("sunset.jpg", 1920, 1080, 10).expect("asset");
    assert_eq!(asset.pixel_count(), 2_073_600);
}

#[test]
fn asset_name_parts() {
    let asset = ImageAsset::new("maxxed_city.JPEG", 2560, 1080, 1).expect("asset");
    assert_eq!(asset.stem(), "maxxed_city");
    assert_eq!(asset.extension(), Some("JPEG"));

    let bare = ImageAsset::new("README", 1, 1, 1).expect("asset");
    assert_eq!(bare.stem(), "README");
    assert_eq!(bare.extension(), None);

    let hidden = ImageAsset::new(".jpg", 1, 1, 1).expect("asset");
    assert_eq!(hidden.extension(), None);
}

#[test]
fn entry_label_strips_only_last_extension() {
    let entry = GalleryEntry {
        name: "city.night.jpg".to_string(),
        thumb_url: String::new(),
        full_url: String::new(),
    };
    assert_eq!(entry.label(), "city.night");
}

#[test]
fn viewport_requires_positive_finite_sides() {
    assert!(Viewport::new(1920.0, 1080.0).is_ok());
    assert!(Viewport::new(0.0, 1080.0).is_err());
    assert!(Viewport::new(1920.0, f64::NAN).is_err());
    assert!(Viewport::new(f64::INFINITY, 1080.0).is_err());
}

#[test]
fn remote_file_tolerates_directories_and_extra_fields() {
    let raw = r#"[
        {"name": "a.jpg", "download_url": "https://example.test/a.jpg", "size": 12},
        {"name": "nested", "download_url": null, "type": "dir"}
    ]"#;
    let files: Vec<RemoteFile> = serde_json::from_str(raw).expect("listing");
    assert_eq!(files.len(), 2);
    assert_eq!(files[1].download_url, None);
}
