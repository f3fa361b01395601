use crate::config::GalleryConfig;
use crate::model::{ImageAsset, RemoteFile};

use super::{
    DefaultSelection, available_letters, build_entries, filter_by_letter, is_supported_name,
    parse_letter,
};

fn assets(names: &[&str]) -> Vec<ImageAsset> {
    names
        .iter()
        .map(|name| ImageAsset {
            name: (*name).to_string(),
            width: 1920,
            height: 1080,
            byte_size: 1,
        })
        .collect()
}

fn names(items: &[ImageAsset]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn letter_filter_is_case_insensitive_and_ordered() {
    let items = assets(&["Apple.jpg", "banana.jpg", "Avocado.jpg"]);
    let filtered = filter_by_letter(&items, Some('A'));
    assert_eq!(names(&filtered), vec!["Apple.jpg", "Avocado.jpg"]);
    assert_eq!(names(&filter_by_letter(&items, Some('B'))), vec!["banana.jpg"]);
}

#[test]
fn lowercase_letter_is_normalized() {
    let items = assets(&["Apple.jpg", "avocado.jpg"]);
    assert_eq!(filter_by_letter(&items, Some('a')).len(), 2);
}

#[test]
fn no_letter_is_identity() {
    let items = assets(&["Apple.jpg", "banana.jpg", "Avocado.jpg"]);
    assert_eq!(filter_by_letter(&items, None), items);
}

#[test]
fn no_match_is_empty() {
    let items = assets(&["Apple.jpg", "banana.jpg"]);
    assert!(filter_by_letter(&items, Some('Z')).is_empty());
    assert!(filter_by_letter::<ImageAsset>(&[], Some('A')).is_empty());
}

#[test]
fn letters_are_distinct_and_sorted() {
    let items = assets(&["banana.jpg", "Apple.jpg", "avocado.jpg", "1999.jpg"]);
    assert_eq!(available_letters(&items), vec!['A', 'B']);
}

#[test]
fn parse_letter_accepts_single_alphabetic() {
    assert_eq!(parse_letter("a").expect("letter"), 'A');
    assert_eq!(parse_letter(" Q ").expect("letter"), 'Q');
    assert!(parse_letter("ab").is_err());
    assert!(parse_letter("7").is_err());
    assert!(parse_letter("").is_err());
}

#[test]
fn listing_keeps_jpeg_only() {
    assert!(is_supported_name("a.jpg"));
    assert!(is_supported_name("B.JPEG"));
    assert!(!is_supported_name("c.png"));
    assert!(!is_supported_name("jpg"));

    let config = GalleryConfig::default();
    let files = vec![
        RemoteFile {
            name: "sunset.JPG".to_string(),
            download_url: Some("https://thumbs.test/sunset.JPG".to_string()),
        },
        RemoteFile {
            name: "notes.txt".to_string(),
            download_url: Some("https://thumbs.test/notes.txt".to_string()),
        },
        RemoteFile {
            name: "folder.jpg".to_string(),
            download_url: None,
        },
    ];
    let entries = build_entries(files, &config);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].thumb_url, "https://thumbs.test/sunset.JPG");
    assert_eq!(
        entries[0].full_url,
        "https://raw.githubusercontent.com/RyuZinOh/.dotfiles/main/Pictures/sunset.JPG"
    );
}

#[test]
fn default_selection_policies() {
    let items = assets(&["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(DefaultSelection::None.resolve(&items), None);
    assert_eq!(
        DefaultSelection::First.resolve(&items).map(|i| i.name.as_str()),
        Some("a.jpg")
    );
    assert_eq!(
        DefaultSelection::Index(2).resolve(&items).map(|i| i.name.as_str()),
        Some("c.jpg")
    );
    assert_eq!(
        DefaultSelection::Index(70).resolve(&items).map(|i| i.name.as_str()),
        Some("a.jpg")
    );
    assert_eq!(
        DefaultSelection::Name("B.JPG".to_string())
            .resolve(&items)
            .map(|i| i.name.as_str()),
        Some("b.jpg")
    );
    assert_eq!(DefaultSelection::First.resolve::<ImageAsset>(&[]), None);
}
