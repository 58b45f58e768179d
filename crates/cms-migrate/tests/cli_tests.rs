//! Integration tests for the cms-migrate CLI
//!
//! These tests verify end-to-end functionality by running the actual
//! binary against temp data directories and mock HTTP endpoints.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

use cms_migrate::domain::{BlogRecord, PublishStatus};
use cms_migrate::MigrationStore;

fn cms_migrate() -> Command {
    Command::cargo_bin("cms-migrate").expect("binary builds")
}

fn record(name: &str, slug: &str) -> BlogRecord {
    BlogRecord {
        name: name.to_string(),
        slug: slug.to_string(),
        blog_text: "# Body".to_string(),
        status: PublishStatus::Published,
        content_type: "Blog".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_preview_renders_markdown_from_a_local_file() {
    let temp = TempDir::new().unwrap();
    let doc_path = temp.path().join("sample.json");
    fs::write(
        &doc_path,
        r#"{
            "nodeType": "document",
            "content": [
                {"nodeType": "heading-1", "content": [
                    {"nodeType": "text", "value": "Title", "marks": [{"type": "bold"}]}
                ]},
                {"nodeType": "paragraph", "content": [
                    {"nodeType": "text", "value": "Body text."}
                ]},
                {"nodeType": "embedded-asset-block",
                 "data": {"target": {"sys": {"id": "A1"}}}}
            ]
        }"#,
    )
    .unwrap();

    cms_migrate()
        .arg("preview")
        .arg(&doc_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# **Title**"))
        .stdout(predicate::str::contains("Body text."))
        .stdout(predicate::str::contains("1 embedded asset(s) referenced"));
}

#[test]
fn test_preview_assets_flag_lists_the_manifest() {
    let temp = TempDir::new().unwrap();
    let doc_path = temp.path().join("sample.json");
    fs::write(
        &doc_path,
        r#"{"blogText": {
            "nodeType": "document",
            "content": [
                {"nodeType": "embedded-asset-block", "data": {"target": {"sys": {"id": "A1"}}}},
                {"nodeType": "embedded-asset-block", "data": {"target": {"sys": {"id": "A2"}}}}
            ]
        }}"#,
    )
    .unwrap();

    let output = cms_migrate()
        .arg("preview")
        .arg(&doc_path)
        .arg("--assets")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    let a1 = stdout.find("A1").expect("first asset listed");
    let a2 = stdout.find("A2").expect("second asset listed");
    assert!(a1 < a2, "assets should list in document order");
}

#[test]
fn test_preview_json_mode_emits_the_envelope() {
    let temp = TempDir::new().unwrap();
    let doc_path = temp.path().join("sample.json");
    fs::write(
        &doc_path,
        r#"{"nodeType": "document", "content": [
            {"nodeType": "paragraph", "content": [{"nodeType": "text", "value": "hi"}]}
        ]}"#,
    )
    .unwrap();

    cms_migrate()
        .arg("preview")
        .arg(&doc_path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"markdown\": \"hi\""));
}

#[test]
fn test_import_without_staged_data_exits_not_found() {
    let temp = TempDir::new().unwrap();

    cms_migrate()
        .current_dir(temp.path())
        .env("MIGRATE_DATA_DIR", temp.path().join("data"))
        .arg("import")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Migration data not found"))
        .stderr(predicate::str::contains("cms-migrate migrate"));
}

#[test]
fn test_import_pushes_staged_records_and_tallies() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    let store = MigrationStore::new(&data_dir);
    store
        .save_records(&[record("Good Post", "good-post"), record("Bad Post", "bad-post")])
        .unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/blogs")
            .body_contains("\"slug\":\"good-post\"");
        then.status(200).json_body(json!({"data": {"id": 1}}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/blogs")
            .body_contains("\"slug\":\"bad-post\"");
        then.status(400).json_body(json!({
            "data": null,
            "error": {"status": 400, "name": "ValidationError", "message": "slug must be unique"}
        }));
    });

    cms_migrate()
        .current_dir(temp.path())
        .env("MIGRATE_DATA_DIR", &data_dir)
        .env("STRAPI_URL", server.base_url())
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Success: 1"))
        .stdout(predicate::str::contains("✗ Errors: 1"));
}

#[test]
fn test_import_csv_dry_run_snapshots_parsed_rows() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("blogs.csv"),
        "Name,Blog Text,Slug,status,Tags\n\
         First Post,# Hello,first-post,published,\"rust, cms\"\n",
    )
    .unwrap();

    cms_migrate()
        .current_dir(temp.path())
        .env("MIGRATE_DATA_DIR", &data_dir)
        .arg("import-csv")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 entries in CSV"));

    let snapshot = fs::read_to_string(data_dir.join("csv-parsed.json")).unwrap();
    assert!(snapshot.contains("First Post"));
    assert!(snapshot.contains("first-post"));
    assert!(snapshot.contains("rust"));
}

#[test]
fn test_import_csv_without_file_names_the_expected_location() {
    let temp = TempDir::new().unwrap();

    cms_migrate()
        .current_dir(temp.path())
        .env("MIGRATE_DATA_DIR", temp.path().join("data"))
        .arg("import-csv")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("CSV file not found"));
}

#[test]
fn test_check_count_against_mock_store() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/blogs");
        then.status(200).json_body(json!({
            "data": [
                {"id": 1, "attributes": {"name": "One", "slug": "one", "status": "published"}},
                {"id": 2, "attributes": {"name": "Two", "slug": "two", "status": "draft"}}
            ],
            "meta": {}
        }));
    });

    cms_migrate()
        .env("STRAPI_URL", server.base_url())
        .args(["check", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total blogs: 2"));
}

#[test]
fn test_check_by_missing_slug_exits_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/blogs");
        then.status(200).json_body(json!({"data": [], "meta": {}}));
    });

    cms_migrate()
        .env("STRAPI_URL", server.base_url())
        .args(["check", "--slug", "missing"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Blog not found"));
}

#[test]
fn test_schema_prints_the_migration_file_schema() {
    cms_migrate()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("blogText"))
        .stdout(predicate::str::contains("embeddedAssets"));
}
