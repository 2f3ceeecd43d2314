//! Files → [`CompiledSchema`] trees.
use std::path::{Path, PathBuf};
use serde_json::Value;

use crate::compiled::CompiledSchema;
use crate::error::LoadError;
use crate::path_de::from_slice_with_path;

/// Read a describe-JSON document and optionally select a sub-node by
/// JSON Pointer (e.g. `/schemas/user`).
pub fn load_schema(path: &Path, json_pointer: Option<&str>) -> Result<CompiledSchema, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut doc = from_slice_with_path::<Value>(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let node = match json_pointer {
        None => doc,
        Some(pointer) => doc
            .pointer_mut(pointer)
            .map(Value::take)
            .ok_or_else(|| LoadError::Pointer {
                path: path.to_path_buf(),
                pointer: pointer.to_owned(),
            })?,
    };
    tracing::debug!(path = %path.display(), "loaded schema");
    Ok(CompiledSchema::from(node))
}

/// Expand literal paths and glob patterns, in argument order.
pub fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, LoadError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern)? {
                out.push(entry?);
            }
            if out.len() == before {
                // explicit glob that matched nothing is an error, not an empty run
                return Err(LoadError::NoMatch(pattern.to_owned()));
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
