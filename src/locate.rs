use crate::config::{Query, ScanMode};
use crate::error::{open_error, Gff2FaError, Result};
use crate::gff::{GffRecord, Strand};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Coordinates of the record selected by a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFeature {
    /// Sequence region the feature lives on (first GFF3 column).
    pub seqid: String,
    /// 1-based, inclusive.
    pub start: u64,
    /// 1-based, inclusive.
    pub end: u64,
    pub strand: Strand,
}

impl MatchedFeature {
    fn from_record(record: &GffRecord<'_>, line: usize) -> Result<Self> {
        Ok(Self {
            seqid: record.seqid.to_string(),
            start: parse_coordinate(record.start, "start", line)?,
            end: parse_coordinate(record.end, "end", line)?,
            strand: record.strand,
        })
    }
}

/// Outcome of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// First matching record in file order.
    pub feature: MatchedFeature,
    /// 1-based line number of that record.
    pub line: usize,
    /// Matching records seen; always 1 under `ScanMode::FirstMatch`.
    pub matches: usize,
}

/// Finds the first record of `query.feature_type` whose attribute equals
/// `query.value`.
///
/// Comment lines and lines without nine tab-separated columns are skipped.
/// A missing file is reported as `Gff2FaError::FileNotFound`.
///
/// # Arguments
///
/// * `path` - Path to the GFF3 file
/// * `query` - Type and attribute/value pair to match
/// * `mode` - Whether to stop at the first match or count all of them
///
/// # Errors
///
/// Returns `NoMatchingFeature` when nothing matches, `InvalidCoordinate` when
/// the matched record has a non-numeric start or end, and `Io` on read
/// failures.
///
/// # Example
///
/// ```rust, ignore
/// use gff2fa::{locate, Query, ScanMode};
/// use std::path::Path;
///
/// let query = Query::new("gene", "ID", "YAR003W");
/// let located = locate(Path::new("annotation.gff"), &query, ScanMode::FirstMatch)?;
/// println!("{}:{}-{}", located.feature.seqid, located.feature.start, located.feature.end);
/// ```
pub fn locate(path: &Path, query: &Query, mode: ScanMode) -> Result<Located> {
    info!("Searching {} for {}", path.display(), query);
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    locate_in(BufReader::new(file), query, mode)
}

/// Same as [`locate`] over any buffered reader.
pub fn locate_in<R: BufRead>(reader: R, query: &Query, mode: ScanMode) -> Result<Located> {
    let mut found: Option<Located> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;

        let record = match GffRecord::parse(&line) {
            Ok(record) => record,
            Err(_) => continue,
        };

        if !query.matches(&record) {
            continue;
        }

        match found.as_mut() {
            Some(located) => {
                located.matches += 1;
                debug!("Additional match for {} at line {}", query, line_number);
            }
            None => {
                let feature = MatchedFeature::from_record(&record, line_number)?;
                debug!(
                    "Matched {} at line {}: {}:{}-{} ({})",
                    query, line_number, feature.seqid, feature.start, feature.end, feature.strand
                );

                found = Some(Located {
                    feature,
                    line: line_number,
                    matches: 1,
                });

                if mode == ScanMode::FirstMatch {
                    break;
                }
            }
        }
    }

    let located = found.ok_or_else(|| query.no_match())?;
    if located.matches > 1 {
        warn!(
            "Multiple matches found ({}) for {}. Using the first one at line {}.",
            located.matches, query, located.line
        );
    }

    Ok(located)
}

fn parse_coordinate(raw: &str, field: &'static str, line: usize) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| Gff2FaError::InvalidCoordinate {
            line,
            field,
            value: raw.to_string(),
        })
}
