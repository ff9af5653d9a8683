//! Build script for the storefront crate.
//!
//! Fingerprints `static/css/main.css` so the base layout can link a
//! content-addressed copy under `static/css/derived/`.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    fingerprint_stylesheet();
}

/// Copy main.css to `derived/main.<hash>.css` and export `CSS_HASH`.
fn fingerprint_stylesheet() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_css = Path::new(&manifest_dir).join("static/css");
    let source = static_css.join("main.css");

    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(&source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = digest.get(..8).unwrap_or(&digest);

    println!("cargo:rustc-env=CSS_HASH={short}");

    let derived = static_css.join("derived");
    fs::create_dir_all(&derived).expect("Failed to create derived CSS directory");
    fs::copy(&source, derived.join(format!("main.{short}.css")))
        .expect("Failed to copy CSS to derived directory");
}
