use std::fmt;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};

/// Text analyzed when the program is invoked with no input at all.
pub const SAMPLE_TEXT: &str = "VADER is smart, fast, and accurate!";

/// Where the analyzed text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Text,
    File,
    Stdin,
    Sample,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Text => write!(f, "text"),
            InputSource::File => write!(f, "file"),
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::Sample => write!(f, "sample"),
        }
    }
}

/// Resolve the text to analyze.
///
/// Precedence: `--file`, then positional arguments (joined with spaces),
/// then piped stdin. A bare invocation at a terminal falls back to the
/// built-in sample text, like running the original analyzer script with no
/// arguments.
pub fn resolve_input(text_args: &[String], file: Option<&Path>) -> Result<(String, InputSource)> {
    if let Some(path) = file {
        return Ok((read_text_file(path)?, InputSource::File));
    }

    if !text_args.is_empty() {
        return Ok((text_args.join(" "), InputSource::Text));
    }

    if !std::io::stdin().is_terminal() {
        return Ok((read_stdin()?, InputSource::Stdin));
    }

    Ok((SAMPLE_TEXT.to_string(), InputSource::Sample))
}

fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| SentimentError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| {
        SentimentError::InvalidInput(format!("{} is not valid UTF-8 text", path.display()))
    })
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin().lock().read_to_end(&mut bytes)?;

    String::from_utf8(bytes)
        .map_err(|_| SentimentError::InvalidInput("stdin is not valid UTF-8 text".to_string()))
}
