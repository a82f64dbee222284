use crate::error::{Error, Result};
use crate::list_files;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// An input file and its path relative to the input it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub relative: PathBuf,
}

pub fn collect_sources(inputs: &[PathBuf]) -> Result<Vec<Source>> {
    let mut out = Vec::new();
    for input in inputs {
        for path in list_files(std::slice::from_ref(input))? {
            let relative = if input.is_dir() {
                path.strip_prefix(input).unwrap_or(path.as_path()).to_path_buf()
            } else {
                PathBuf::from(path.file_name().unwrap_or(path.as_os_str()))
            };
            out.push(Source { path, relative });
        }
    }
    if out.is_empty() {
        return Err(Error::NoInputs);
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    Dir(PathBuf),
}

impl Destination {
    /// A single file is written only for one explicit file input and an
    /// output that does not name a directory.
    pub fn choose(inputs: &[PathBuf], output: Option<&Path>) -> Destination {
        let Some(out) = output else {
            return Destination::Stdout;
        };
        let names_dir = out.is_dir()
            || out.to_string_lossy().ends_with(MAIN_SEPARATOR)
            || out.to_string_lossy().ends_with('/');
        let single_file = inputs.len() == 1 && !inputs[0].is_dir();
        if names_dir || !single_file {
            Destination::Dir(out.to_path_buf())
        } else {
            Destination::File(out.to_path_buf())
        }
    }

    pub fn target(&self, source: &Source, extension: &str) -> Option<PathBuf> {
        match self {
            Destination::Stdout => None,
            Destination::File(path) => Some(path.clone()),
            Destination::Dir(dir) => Some(dir.join(&source.relative).with_extension(extension)),
        }
    }
}

/// Write each rendered document to its target. Returns the concatenated
/// text when the destination is stdout.
pub fn write_all(
    dest: &Destination,
    rendered: &[(Source, String)],
    extension: &str,
) -> Result<Option<String>> {
    if *dest == Destination::Stdout {
        let texts: Vec<&str> = rendered.iter().map(|(_, text)| text.as_str()).collect();
        return Ok(Some(texts.join("\n")));
    }

    let mut seen = HashSet::new();
    for (source, _) in rendered {
        if let Some(target) = dest.target(source, extension) {
            if !seen.insert(target.clone()) {
                return Err(Error::DuplicateTarget { path: target });
            }
        }
    }

    for (source, text) in rendered {
        let Some(target) = dest.target(source, extension) else {
            continue;
        };
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&target, text).map_err(|source| Error::Write {
            path: target.clone(),
            source,
        })?;
        log::info!("wrote {}", target.display());
    }
    Ok(None)
}
