//! Full pipeline: load configuration, export, and validate the result.

use std::fs;

use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

use flow::export::{self, ExportOptions, Manifest};
use flow::{check, config, markup};

use crate::common::fixtures::SiteFixture;
use crate::common::init_test_logging;

#[test]
fn scaffolded_site_exports_and_validates() {
    init_test_logging();
    let site = SiteFixture::complete();

    let (loaded, source) = config::load(Some(&site.config_path())).expect("load config");
    let base = source.base_dir();
    let out_dir = config::resolve_path(&loaded.build.out_dir, &base).expect("resolve out");
    let assets_dir =
        config::resolve_path(&loaded.build.assets_dir, &base).expect("resolve assets");

    let summary = export::run(&loaded, &out_dir, &assets_dir, ExportOptions::default())
        .expect("export");
    assert_eq!(summary.pages, markup::PAGES.len());
    assert!(summary.bytes_written > 0);

    // The exported page is byte-identical to an in-process render
    let exported = fs::read_to_string(out_dir.join("index.html")).expect("read export");
    let rendered = markup::PAGES[0].render(&loaded).into_string();
    assert_eq!(exported, rendered);

    // The same tree passes validation, even under strict
    let report = check::run(&loaded, &assets_dir, true);
    assert!(report.is_valid(), "issues: {:?}", report.issues);
}

#[test]
fn manifest_digests_match_written_files() {
    init_test_logging();
    let site = SiteFixture::complete();
    let (loaded, source) = config::load(Some(&site.config_path())).expect("load config");
    let base = source.base_dir();
    let out_dir = config::resolve_path(&loaded.build.out_dir, &base).expect("resolve out");
    let assets_dir =
        config::resolve_path(&loaded.build.assets_dir, &base).expect("resolve assets");

    export::run(&loaded, &out_dir, &assets_dir, ExportOptions::default()).expect("export");

    let manifest: Manifest = serde_json::from_str(
        &fs::read_to_string(out_dir.join(export::MANIFEST_FILE)).expect("read manifest"),
    )
    .expect("parse manifest");

    assert!(!manifest.files.is_empty());
    for entry in &manifest.files {
        let bytes = fs::read(out_dir.join(&entry.path)).expect("read exported file");
        assert_eq!(entry.bytes, bytes.len() as u64, "size of {}", entry.path);
        assert_eq!(
            entry.sha256,
            hex::encode(Sha256::digest(&bytes)),
            "digest of {}",
            entry.path
        );
    }
    // The manifest never lists itself
    assert!(manifest
        .files
        .iter()
        .all(|f| f.path != export::MANIFEST_FILE));
}

#[test]
fn re_export_requires_clean_then_replaces() {
    init_test_logging();
    let site = SiteFixture::complete();
    let (loaded, source) = config::load(Some(&site.config_path())).expect("load config");
    let base = source.base_dir();
    let out_dir = config::resolve_path(&loaded.build.out_dir, &base).expect("resolve out");
    let assets_dir =
        config::resolve_path(&loaded.build.assets_dir, &base).expect("resolve assets");

    export::run(&loaded, &out_dir, &assets_dir, ExportOptions::default()).expect("first export");
    fs::write(out_dir.join("extra.txt"), "leftover").expect("write extra file");

    let err = export::run(&loaded, &out_dir, &assets_dir, ExportOptions::default()).unwrap_err();
    assert!(matches!(err, flow::error::SiteError::OutputExists { .. }));

    export::run(
        &loaded,
        &out_dir,
        &assets_dir,
        ExportOptions {
            clean: true,
            skip_assets: false,
        },
    )
    .expect("clean export");
    assert!(!out_dir.join("extra.txt").exists());
    assert!(out_dir.join("index.html").exists());
}
