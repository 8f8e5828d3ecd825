//! Golden digest tests for emitted artifacts
//!
//! The fixture is a solid-color SVG whose rect overshoots the canvas, so the
//! rendered samples are exact and the artifact bytes are stable across
//! platforms. Goldens hold the hex SHA-256 of the artifact text.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::tempdir;

use svg2lvgl::{convert, ConvertConfig, SvgRasterizer};

fn golden_path(name: &str) -> PathBuf {
    Path::new("tests/goldens").join(name)
}

fn artifact_digest(use_alpha: bool) -> String {
    let dir = tempdir().expect("create temp dir");
    let out = dir.path().join("solid.c");
    let config = ConvertConfig {
        var_name: "solid".to_string(),
        size: None,
        use_alpha,
    };

    convert(
        &SvgRasterizer::new(),
        Path::new("tests/fixtures/solid.svg"),
        &out,
        &config,
    )
    .expect("convert fixture");

    let text = fs::read(&out).expect("read artifact");
    hex::encode(Sha256::digest(&text))
}

fn check_golden(name: &str, digest: &str) {
    let expected_path = golden_path(name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens").ok();
        fs::write(&expected_path, digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim());
}

#[test]
fn golden_color_artifact_matches_fixture() {
    check_golden("solid_color.sha256", &artifact_digest(false));
}

#[test]
fn golden_alpha_artifact_matches_fixture() {
    check_golden("solid_alpha.sha256", &artifact_digest(true));
}
