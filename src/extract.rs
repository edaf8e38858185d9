use crate::config::{Config, Query, SequenceMode};
use crate::error::{Gff2FaError, Result};
use crate::fasta::{extract_sequence_block, SequenceBlock};
use crate::locate::{locate, Located, MatchedFeature};
use crate::output::FastaRecord;
use crate::region::extract_region;
use log::{info, warn};
use std::borrow::Cow;
use std::time::{Duration, Instant};

/// Summary statistics for an extraction run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the extraction.
    pub elapsed: Duration,
}

/// Result of a successful extraction.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Record to print.
    pub record: FastaRecord,
    /// Where the feature was found.
    pub located: Located,
    pub stats: RunStats,
}

/// Runs an extraction with the provided configuration.
///
/// Locates the feature first and only reads the `##FASTA` section once a
/// record matched. The file is therefore scanned twice.
///
/// # Arguments
///
/// * `config` - Configuration containing the input path and query
///
/// # Errors
///
/// Returns the first failure of any phase; every error renders as the message
/// meant for the operator.
///
/// # Example
///
/// ```rust, ignore
/// use gff2fa::{run, Config, Query, ScanMode, SequenceMode};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("Saccharomyces_cerevisiae_S288C.annotation.gff"),
///     query: Query::new("gene", "ID", "YAR003W"),
///     scan_mode: ScanMode::FirstMatch,
///     sequence_mode: SequenceMode::ByRegion,
/// };
/// let extraction = run(&config)?;
/// println!("{}", extraction.record);
/// ```
pub fn run(config: &Config) -> Result<Extraction> {
    let start = Instant::now();

    let located = locate(&config.input, &config.query, config.scan_mode)?;
    let block = extract_sequence_block(&config.input)?;

    let sequence = select_sequence(&block, &located.feature, &config.query, config.sequence_mode)?;
    let extracted = extract_region(&sequence, &located.feature);

    if extracted.is_empty() {
        return Err(Gff2FaError::NoSequenceForFeature(config.query.label()));
    }

    let expected = located
        .feature
        .end
        .saturating_sub(located.feature.start)
        .saturating_add(1);
    if (extracted.chars().count() as u64) < expected {
        warn!(
            "Feature {} spans {} bp but only {} bp are available in {}",
            config.query,
            expected,
            extracted.chars().count(),
            located.feature.seqid
        );
    }

    let record = FastaRecord::new(config.query.label(), extracted);
    let elapsed = start.elapsed();
    info!(
        "Extracted {} bp for {} from {}:{}-{} ({})",
        record.sequence.len(),
        config.query,
        located.feature.seqid,
        located.feature.start,
        located.feature.end,
        located.feature.strand
    );

    Ok(Extraction {
        record,
        located,
        stats: RunStats { elapsed },
    })
}

/// Picks the sequence a feature is sliced from.
///
/// Under `SequenceMode::ByRegion` a section holding a single sequence is used
/// even when its name differs from the seqid.
fn select_sequence<'a>(
    block: &'a SequenceBlock,
    feature: &MatchedFeature,
    query: &Query,
    mode: SequenceMode,
) -> Result<Cow<'a, str>> {
    match mode {
        SequenceMode::Concatenated => Ok(Cow::Owned(block.concatenated())),
        SequenceMode::ByRegion => {
            if let Some(record) = block.get(&feature.seqid) {
                return Ok(Cow::Borrowed(record.sequence.as_str()));
            }

            match block.records() {
                [only] => {
                    warn!(
                        "No sequence named {}; using the only sequence {:?}",
                        feature.seqid, only.name
                    );
                    Ok(Cow::Borrowed(only.sequence.as_str()))
                }
                _ => Err(Gff2FaError::UnknownSequenceRegion {
                    seqid: feature.seqid.clone(),
                    label: query.label(),
                }),
            }
        }
    }
}
