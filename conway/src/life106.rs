// life106.rs - Reader for the Life 1.06 pattern format
//
// The first line is a header and is discarded. Everything after it is a stream
// of whitespace-separated signed integer pairs `x y`, normally one per line.

use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum PatternError {
    Io(std::io::Error),
    /// A token that is not an integer.
    Parse { line: usize, token: String },
    /// An x coordinate with no y after it.
    Dangling { line: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Io(e) => write!(f, "cannot read pattern file: {}", e),
            PatternError::Parse { line, token } => {
                write!(f, "line {}: '{}' is not an integer coordinate", line, token)
            }
            PatternError::Dangling { line } => {
                write!(f, "line {}: x coordinate without a matching y", line)
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(e: std::io::Error) -> Self {
        PatternError::Io(e)
    }
}

/// Parses Life 1.06 text into (x, y) cell coordinates.
pub fn parse_life106(text: &str) -> Result<Vec<(i64, i64)>, PatternError> {
    let mut cells = Vec::new();
    let mut pending: Option<(i64, usize)> = None;

    for (i, line) in text.lines().enumerate().skip(1) {
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        for token in trimmed.split_whitespace() {
            let value: i64 = token.parse().map_err(|_| PatternError::Parse {
                line: line_no,
                token: token.to_string(),
            })?;
            match pending.take() {
                Some((x, _)) => cells.push((x, value)),
                None => pending = Some((value, line_no)),
            }
        }
    }

    if let Some((_, line)) = pending {
        return Err(PatternError::Dangling { line });
    }
    Ok(cells)
}

pub fn load_life106(path: impl AsRef<Path>) -> Result<Vec<(i64, i64)>, PatternError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let cells = parse_life106(&text)?;
    tracing::debug!(path = %path.as_ref().display(), cells = cells.len(), "loaded Life 1.06 pattern");
    Ok(cells)
}
