pub mod annotate;
pub mod config;
pub mod convert;
pub mod element;
pub mod error;
pub mod html;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod promote;
pub mod source;
pub mod visit;

use config::Config;
use error::{Error, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

pub use annotate::annotate_fences;
pub use pipeline::{Document, Pipeline};
pub use promote::promote_classes;

static RE_MARKDOWN_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(md|markdown)$").unwrap());

/// Markdown text to HTML, with both passes applied as configured.
pub fn render(text: &str, config: &Config) -> String {
    Pipeline::new(config).run(text).to_html(config.standalone)
}

pub fn list_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            let entries = std::fs::read_dir(p).map_err(|source| Error::Read {
                path: p.clone(),
                source,
            })?;
            for entry in entries {
                let entry = entry.map_err(|source| Error::Read {
                    path: p.clone(),
                    source,
                })?;
                let sub_path = entry.path();
                if sub_path.is_dir() {
                    out.extend(list_files(&[sub_path])?);
                } else if is_markdown(&sub_path) {
                    out.push(sub_path);
                }
            }
        } else if p.is_file() && is_markdown(p) {
            out.push(p.clone());
        }
    }

    out.sort();
    Ok(out)
}

fn is_markdown(path: &std::path::Path) -> bool {
    path.to_str().is_some_and(|s| RE_MARKDOWN_FILE.is_match(s))
}
