//! # Content Transformation
//!
//! File: cli/src/commands/pack/transform.rs
//!
//! ## Overview
//!
//! Applies lint and minify to a staged file's text according to its
//! `Classification`. Lint always runs first and never changes the text;
//! minify runs second and returns the rewritten source.
//!
//! ## Architecture
//!
//! - **Lint** invokes an external program once per file (`glualint <path>` by
//!   default). Each non-blank output line is logged at WARN with the `[lint]`
//!   tag. Exit codes are ignored, and a linter that cannot be started only
//!   produces a warning: lint problems never stop a run.
//! - **Minify** is chosen by file extension: JavaScript through `oxc`, CSS
//!   through `lightningcss`. Other extensions, and sources that fail to parse,
//!   are staged unchanged with a warning.
//!
use super::filter::Classification;
use crate::common::process;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use std::path::Path;
use tracing::{debug, warn};

/// Tag prefixed to every forwarded linter output line.
pub const LINT_TAG: &str = "[lint]";

/// Runs lint and minify over file contents.
#[derive(Debug, Clone, Default)]
pub struct ContentTransformer {
    /// External linter program; `None` disables linting.
    linter: Option<String>,
}

impl ContentTransformer {
    pub fn new(linter: Option<String>) -> Self {
        Self { linter }
    }

    /// Applies the transformations selected by `classification` to `text`.
    pub async fn transform(&self, path: &str, text: String, classification: Classification) -> String {
        if classification.lint {
            self.lint(path).await;
        }
        if classification.minify {
            return minify(path, text);
        }
        text
    }

    /// Runs the external linter on `path`, forwarding its output to the log.
    ///
    /// Returns the forwarded diagnostic lines.
    pub async fn lint(&self, path: &str) -> Vec<String> {
        let Some(linter) = self.linter.as_deref() else {
            debug!("Linting disabled, skipping {}", path);
            return Vec::new();
        };
        match process::run_capture_lines(linter, &[path]).await {
            Ok(lines) => {
                for line in &lines {
                    warn!("{} {}", LINT_TAG, line);
                }
                lines
            }
            Err(e) => {
                warn!("{} Could not lint '{}': {:#}", LINT_TAG, path, e);
                Vec::new()
            }
        }
    }
}

/// Minifies `text` based on the extension of `path`, or returns it unchanged.
pub fn minify(path: &str, text: String) -> String {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let minified = match ext.as_deref() {
        Some("js") | Some("mjs") => minify_js(&text),
        Some("css") => minify_css(&text),
        _ => {
            warn!("No minifier for '{}', staging it unchanged", path);
            return text;
        }
    };
    match minified {
        Some(code) => {
            debug!("Minified '{}': {} -> {} bytes", path, text.len(), code.len());
            code
        }
        None => {
            warn!("Failed to minify '{}', staging it unchanged", path);
            text
        }
    }
}

/// Mangles and compresses an ES module with `oxc`.
///
/// `None` means the source has syntax errors; `minify` then stages the
/// original text.
fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if !parsed.errors.is_empty() {
        debug!("oxc reported {} parse errors", parsed.errors.len());
        return None;
    }

    let mut program = parsed.program;
    let minified = Minifier::new(MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    })
    .minify(&allocator, &mut program);

    let codegen_options = CodegenOptions {
        minify: true,
        comments: CommentOptions::disabled(),
        ..CodegenOptions::default()
    };
    let output = Codegen::new()
        .with_options(codegen_options)
        .with_scoping(minified.scoping)
        .build(&program);
    Some(output.code)
}

// Same contract as `minify_js`: `None` on a parse or print failure.
fn minify_css(source: &str) -> Option<String> {
    let printer = PrinterOptions {
        minify: true,
        ..PrinterOptions::default()
    };
    StyleSheet::parse(source, ParserOptions::default())
        .ok()
        .and_then(|sheet| sheet.to_css(printer).ok())
        .map(|printed| printed.code)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const LINT_ONLY: Classification = Classification {
        lint: true,
        minify: false,
    };
    const MINIFY_ONLY: Classification = Classification {
        lint: false,
        minify: true,
    };

    #[test]
    fn test_minify_js_shrinks_source() {
        let source = "function add(first, second) {\n    // sum\n    return first + second;\n}\nconsole.log(add(1, 2));\n";
        let out = minify("addon/html/app.js", source.to_string());
        assert!(out.len() < source.len());
        assert!(!out.contains("// sum"));
    }

    #[test]
    fn test_minify_css_shrinks_source() {
        let source = "body {\n    color: #ff0000;\n    margin: 0px;\n}\n";
        let out = minify("addon/html/style.css", source.to_string());
        assert!(out.len() < source.len());
        assert!(out.contains("body{"));
    }

    #[test]
    fn test_unsupported_extension_is_unchanged() {
        let source = "local x = 1 -- comment\n";
        assert_eq!(minify("addon/lua/x.lua", source.to_string()), source);
    }

    #[test]
    fn test_unparseable_js_is_unchanged() {
        let source = "function (";
        assert_eq!(minify("addon/bad.js", source.to_string()), source);
    }

    #[tokio::test]
    async fn test_lint_does_not_change_content() {
        let transformer = ContentTransformer::new(None);
        let out = transformer
            .transform("addon/x.js", "var a = 1;".to_string(), LINT_ONLY)
            .await;
        assert_eq!(out, "var a = 1;");
    }

    #[tokio::test]
    async fn test_missing_linter_is_not_fatal() {
        let transformer = ContentTransformer::new(Some("pienkuu-no-such-linter".to_string()));
        assert!(transformer.lint("addon/x.lua").await.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_lint_forwards_output_lines() {
        let transformer = ContentTransformer::new(Some("echo".to_string()));
        let lines = transformer.lint("addon/x.lua").await;
        assert_eq!(lines, vec!["addon/x.lua".to_string()]);
    }

    #[tokio::test]
    async fn test_minify_only_classification() {
        let transformer = ContentTransformer::default();
        let out = transformer
            .transform("addon/a.css", "a {  color : red ; }".to_string(), MINIFY_ONLY)
            .await;
        assert_eq!(out, "a{color:red}");
    }
}
