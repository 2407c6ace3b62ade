use crate::error::{ProfileError, Result};
use ini::{EscapePolicy, Ini, ParseOption, Properties, WriteOption};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

fn write_option() -> WriteOption {
    WriteOption {
        escape_policy: EscapePolicy::Nothing,
        kv_separator: " = ",
        ..WriteOption::default()
    }
}

pub fn read_ordered(path: &Path) -> Result<Ini> {
    let contents = fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;

    parse_ordered(&contents, path)
}

pub fn parse_ordered(contents: &str, path: &Path) -> Result<Ini> {
    let option = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };

    let parsed = Ini::load_from_str_opt(contents, option).map_err(|e| ProfileError::Parse {
        path: path.to_owned(),
        message: e.to_string(),
    })?;

    Ok(merge_repeated_sections(&parsed))
}

/// Folds repeated headers into the first occurrence of the section; later values win.
fn merge_repeated_sections(parsed: &Ini) -> Ini {
    let mut merged = Ini::new();

    for (name, properties) in parsed.iter() {
        let section = merged
            .entry(name.map(str::to_owned))
            .or_insert(Properties::new());
        for (key, value) in properties.iter() {
            section.insert(key, value);
        }
    }

    merged
}

/// Replaces `path` with the serialized document in one step.
///
/// The document is written to a sibling temporary file which is then renamed over the
/// target, so a failure at any point leaves the previous contents in place.
pub fn write_ordered_atomic(document: &Ini, path: &Path) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(directory).map_err(|e| ProfileError::io(directory, e))?;
    debug!("Writing credentials to {}", temp.path().display());

    {
        let mut writer = BufWriter::new(temp.as_file());
        document
            .write_to_opt(&mut writer, write_option())
            .and_then(|_| writer.flush())
            .map_err(|e| ProfileError::io(temp.path(), e))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| ProfileError::io(temp.path(), e))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())
            .map_err(|e| ProfileError::io(temp.path(), e))?;
    }

    temp.persist(path)
        .map_err(|e| ProfileError::io(path, e.error))?;

    info!("AWS credentials file modified: {}", path.display());

    Ok(())
}
