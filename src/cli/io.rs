//! JSON output for one-shot commands

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a pretty-printed JSON value to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, data)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
