use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};

/// Ask the user for the directory to scan
pub fn prompt_for_directory() -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    read_directory(&mut stdin.lock(), &mut stdout)
}

fn read_directory(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    write!(output, "Enter the path to the folder containing font files: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = PathBuf::from(line.trim());

    if !path.is_dir() {
        return Err(Error::InvalidPath(path));
    }

    debug!("User input directory: {}", path.display());
    Ok(path)
}
