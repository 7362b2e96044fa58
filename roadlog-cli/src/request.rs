//! Request files: existence checks and JSON decoding.

use std::io::BufReader;

use camino::Utf8Path;
use log::debug;
use roadlog_fs::open_utf8_file;
use serde::de::DeserializeOwned;

use crate::{ARG_REQUEST, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match roadlog_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON-encoded request of type `T` from disk.
pub(crate) fn load_json_request<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    require_existing(path, ARG_REQUEST)?;
    debug!("reading request from {path}");
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}
