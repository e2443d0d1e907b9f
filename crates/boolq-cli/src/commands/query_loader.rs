use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use positional argument or -q/--query")]
    MissingQuery,

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nothing at '{0}' in the query document")]
    Pointer(String),
}

/// Read the query document from inline text, stdin (`-`), or a file.
pub fn load_query_text(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<String, LoadError> {
    if let Some(text) = query_text {
        return Ok(text.to_owned());
    }

    let Some(path) = query_path else {
        return Err(LoadError::MissingQuery);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }

    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Parse the document and pick the query out of it.
///
/// Without a pointer the whole document is the query.
pub fn select_query(document: &str, pointer: Option<&str>) -> Result<Value, LoadError> {
    let mut value: Value = serde_json::from_str(document)?;

    let Some(pointer) = pointer else {
        return Ok(value);
    };

    value
        .pointer_mut(pointer)
        .map(Value::take)
        .ok_or_else(|| LoadError::Pointer(pointer.to_owned()))
}
