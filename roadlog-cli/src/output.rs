//! Routes a rendered report to stdout or an output file.

use std::io::{BufWriter, Write};

use camino::Utf8Path;
use log::info;
use serde::Serialize;

use crate::CliError;

/// Render into `stdout`, or into a freshly created file at `path`.
pub(crate) fn emit<F>(path: Option<&Utf8Path>, stdout: &mut dyn Write, render: F) -> Result<(), CliError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), CliError>,
{
    let Some(path) = path else {
        return render(stdout);
    };
    let file = roadlog_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render(&mut writer)?;
    writer.flush().map_err(CliError::WriteReport)?;
    info!("wrote report to {path}");
    Ok(())
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
