//! Physical source lines.

/// One newline-delimited line of the analyzed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number (1-indexed).
    pub index: usize,
    /// Line text without its terminator.
    pub raw: String,
    /// `raw` with trailing whitespace removed.
    pub stripped: String,
}

impl SourceLine {
    /// Creates a line from its text (terminator already removed).
    #[must_use]
    pub fn new(index: usize, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let stripped = raw.trim_end().to_string();
        Self {
            index,
            raw,
            stripped,
        }
    }

    /// Splits file text into lines.
    ///
    /// Both `\n` and `\r\n` terminate a line. A final terminator does not
    /// start an extra empty line.
    #[must_use]
    pub fn split(text: &str) -> Vec<Self> {
        text.split_inclusive('\n')
            .enumerate()
            .map(|(i, line)| {
                let raw = line
                    .strip_suffix('\n')
                    .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l));
                Self::new(i + 1, raw)
            })
            .collect()
    }

    /// Returns true if the line has no content besides whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.stripped.is_empty()
    }

    /// Length of the line in characters, terminator excluded.
    #[must_use]
    pub fn width(&self) -> usize {
        self.raw.chars().count()
    }
}

/// Byte offset and length of a 1-indexed line within `content`.
///
/// The span excludes the line terminator. Out-of-range lines yield an
/// empty span at the end of the content.
#[must_use]
pub fn line_span(content: &str, line: usize) -> (usize, usize) {
    let mut offset = 0;
    for (i, segment) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let body = segment.trim_end_matches(['\n', '\r']);
            return (offset, body.len());
        }
        offset += segment.len();
    }
    (content.len(), 0)
}
