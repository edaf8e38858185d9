mod attr;
pub use attr::*;

use thiserror::Error;

/// A single GFF3 feature line, borrowed from the input.
///
/// Start and end are kept as raw text; they are only parsed for the record
/// that ends up matching a query.
#[derive(Debug, PartialEq)]
pub struct GffRecord<'a> {
    pub seqid: &'a str,
    pub source: &'a str,
    pub feature: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub score: &'a str,
    pub strand: Strand,
    pub phase: &'a str,
    pub attr: &'a str,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
}

impl Strand {
    #[inline(always)]
    pub fn is_reverse(self) -> bool {
        matches!(self, Strand::Reverse)
    }
}

impl From<&str> for Strand {
    fn from(field: &str) -> Self {
        match field {
            "+" => Strand::Forward,
            "-" => Strand::Reverse,
            _ => Strand::Unknown,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
            Strand::Unknown => write!(f, "."),
        }
    }
}

impl<'a> GffRecord<'a> {
    /// Parses one line of a GFF3 file.
    ///
    /// Surrounding whitespace is trimmed first. Comment and directive lines
    /// (anything starting with `#`) and lines without exactly nine columns are
    /// rejected so callers can skip them.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gff2fa::gff::GffRecord;
    ///
    /// let record = GffRecord::parse("chrI\tSGD\tgene\t100\t160\t.\t+\t.\tID=YAR003W")?;
    /// assert_eq!(record.feature, "gene");
    /// ```
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        let line = line.trim();

        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        if line.starts_with('#') {
            return Err(ParseError::Comment);
        }

        let fields = line.split('\t').collect::<Vec<_>>();
        let [seqid, source, feature, start, end, score, strand, phase, attr] = fields[..] else {
            return Err(ParseError::FieldCount(fields.len()));
        };

        Ok(Self {
            seqid,
            source,
            feature,
            start,
            end,
            score,
            strand: Strand::from(strand),
            phase,
            attr,
        })
    }

    /// Builds the attribute map of this record.
    pub fn attributes(&self) -> Attributes<'a> {
        Attributes::parse(self.attr)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty line, cannot parse record")]
    Empty,

    #[error("Comment or directive line")]
    Comment,

    #[error("Expected 9 tab-separated fields, found {0}")]
    FieldCount(usize),
}
