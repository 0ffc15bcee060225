//! Catalog files on disk and the startup fallback chain.

use bookcase::{initialize, load_catalog, BookcaseError, Catalog, Config};
use std::fs;

const JSON_CATALOG: &str = r#"{
  "books": [
    {"id": "a1", "title": "First", "author": "ann", "image": "a1.jpg",
     "description": "One.", "publishedDate": "2001-02-03T00:00:00.000Z", "genres": ["g"], "pages": 120},
    {"id": "a2", "title": "Second", "author": "ann", "image": "a2.jpg",
     "description": "Two.", "published": "2004-05-06", "genres": []}
  ],
  "authors": {"ann": "Ann Example"},
  "genres": {"g": "General"},
  "BOOKS_PER_PAGE": 1
}"#;

const TOML_CATALOG: &str = r#"
page_size = 3

[authors]
bo = "Bo Writer"

[genres]
poetry = "Poetry"

[[books]]
id = "t1"
title = "Verses"
author = "bo"
image = "t1.jpg"
description = "Short lines."
published = "1999-12-31"
genres = ["poetry"]
"#;

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(&path, JSON_CATALOG).unwrap();

    let catalog = Catalog::from_file(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.page_size(), 1);
    assert_eq!(catalog.entries()[0].published_year(), 2001);
    assert_eq!(catalog.entries()[1].published_year(), 2004);
    assert_eq!(catalog.authors().get("ann").map(String::as_str), Some("Ann Example"));
}

#[test]
fn loads_toml_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.TOML");
    fs::write(&path, TOML_CATALOG).unwrap();

    let catalog = Catalog::from_file(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.page_size(), 3);
    assert!(catalog.entries()[0].has_genre("poetry"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.json");
    fs::write(&path, JSON_CATALOG.replace("\"a2\"", "\"a1\"")).unwrap();

    assert!(matches!(Catalog::from_file(&path), Err(BookcaseError::Catalog(_))));
}

#[test]
fn missing_and_malformed_files_report_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Catalog::from_file(dir.path().join("absent.json")), Err(BookcaseError::Io(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(Catalog::from_file(&broken), Err(BookcaseError::Json(_))));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "books = [").unwrap();
    assert!(matches!(Catalog::from_file(&broken), Err(BookcaseError::Toml(_))));
}

#[test]
fn configured_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(&path, JSON_CATALOG).unwrap();

    let config = Config { catalog_file: Some(path.display().to_string()), ..Config::default() };
    let state = initialize(&config);
    assert_eq!(state.catalog.len(), 2);
    assert_eq!(state.surface.list_items.len(), 1);
    assert_eq!(state.surface.show_more.label, "Show more (1)");
    assert_eq!(state.surface.search.author_options.len(), 2);
}

#[test]
fn unreadable_file_falls_back_to_bundled_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        catalog_file: Some(dir.path().join("missing.json").display().to_string()),
        ..Config::default()
    };
    assert_eq!(load_catalog(&config), Catalog::bundled().unwrap());
}

#[test]
fn page_size_override_reaches_the_list() {
    let config = Config { page_size: Some(3), ..Config::default() };
    let state = initialize(&config);
    assert_eq!(state.catalog.page_size(), 3);
    assert_eq!(state.surface.list_items.len(), 3);
}
