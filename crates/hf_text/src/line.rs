use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hf_seq::Producer;

// -----------------------------------------------------------------------------
// Line

/// One line of a text source, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: u32,
    /// The line's text, without its terminator.
    pub content: String,
}

// -----------------------------------------------------------------------------
// LineReader

/// A [`Producer`] of the numbered lines of a buffered reader.
///
/// Exhaustion is permanent: at end of input (or on a read error, which is
/// logged) the reader drops its input source and reports absence forever,
/// as the producer contract requires.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use hf_seq::Producer;
/// use hf_text::LineReader;
///
/// let mut lines = LineReader::new(Cursor::new("alpha\nbeta"));
///
/// assert_eq!(lines.produce().map(|line| line.content), Some("alpha".into()));
/// assert_eq!(lines.produce().map(|line| line.number), Some(2));
/// assert!(lines.produce().is_none());
/// assert!(lines.produce().is_none());
/// ```
pub struct LineReader<R> {
    // `None` once the source is exhausted or failed.
    input: Option<R>,
    line_number: u32,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps a buffered reader.
    pub fn new(input: R) -> Self {
        Self {
            input: Some(input),
            line_number: 0,
        }
    }
}

impl LineReader<BufReader<File>> {
    /// Opens a file for line production.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Producer for LineReader<R> {
    type Item = Line;

    fn produce(&mut self) -> Option<Box<Line>> {
        let input = self.input.as_mut()?;
        let mut content = String::new();
        match input.read_line(&mut content) {
            Ok(0) => {
                self.input = None;
                None
            }
            Ok(_) => {
                if content.ends_with('\n') {
                    content.pop();
                    if content.ends_with('\r') {
                        content.pop();
                    }
                }
                self.line_number += 1;
                Some(Box::new(Line {
                    number: self.line_number,
                    content,
                }))
            }
            Err(source) => {
                log::error!("line {} read failed: {source}", self.line_number + 1);
                self.input = None;
                None
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
