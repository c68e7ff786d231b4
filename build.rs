use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed={}", CSS_DIR);
    if let Ok(entries) = fs::read_dir(CSS_DIR) {
        for entry in entries.flatten() {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }

    match bundle_css() {
        Ok(bytes) => println!("CSS bundled successfully: {} ({} bytes)", OUT_FILE, bytes),
        Err(e) => panic!("CSS bundling failed: {}", e),
    }
}

/// Resolve @imports from the entry stylesheet, minify, and write the bundle
fn bundle_css() -> Result<usize, String> {
    fs::create_dir_all(OUT_DIR).map_err(|e| format!("create {}: {}", OUT_DIR, e))?;

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .map_err(|e| format!("bundle {}: {}", CSS_ENTRY, e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {}", e))?;

    fs::write(OUT_FILE, &css.code).map_err(|e| format!("write {}: {}", OUT_FILE, e))?;
    Ok(css.code.len())
}
