use std::fmt;

/// Characters per sequence line.
pub const LINE_WIDTH: usize = 60;

/// A FASTA record ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Header without the leading `>`.
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Sequence split into `LINE_WIDTH` lines.
    pub fn lines(&self) -> Vec<&str> {
        wrap(&self.sequence, LINE_WIDTH)
    }
}

/// Renders `>header` followed by the wrapped sequence, without a trailing
/// newline.
impl fmt::Display for FastaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}", self.header)?;
        for line in self.lines() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Splits `seq` into lines of at most `width` characters.
///
/// # Example
///
/// ```rust, ignore
/// use gff2fa::output::wrap;
///
/// assert_eq!(wrap("ACGTA", 2), vec!["AC", "GT", "A"]);
/// ```
pub fn wrap(seq: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut lines = Vec::with_capacity(seq.len() / width + 1);
    let mut rest = seq;

    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        let (line, tail) = rest.split_at(split);
        lines.push(line);
        rest = tail;
    }

    lines
}
