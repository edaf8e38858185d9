use crate::error::{open_error, Gff2FaError, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Directive that opens the embedded sequence section of a GFF3 file.
pub const FASTA_DIRECTIVE: &str = "##FASTA";

/// One named sequence of the `##FASTA` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Header text after `>` up to the first whitespace. Empty for lines that
    /// precede any header.
    pub name: String,
    pub sequence: String,
}

impl SequenceRecord {
    fn from_header(header: &str) -> Self {
        Self {
            name: header.split_whitespace().next().unwrap_or_default().to_string(),
            sequence: String::new(),
        }
    }
}

/// Sequences found after the `##FASTA` directive, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBlock {
    records: Vec<SequenceRecord>,
}

impl SequenceBlock {
    /// Collects the `##FASTA` section of a GFF3 stream.
    ///
    /// Everything before the directive is ignored. Inside the section blank
    /// lines are skipped, `>` lines open a new record and every other line is
    /// trimmed and appended to the current one. A stream without the directive
    /// yields an empty block.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut records: Vec<SequenceRecord> = Vec::new();
        let mut in_block = false;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.starts_with(FASTA_DIRECTIVE) {
                in_block = true;
                continue;
            }

            if !in_block || line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                records.push(SequenceRecord::from_header(header));
                continue;
            }

            match records.last_mut() {
                Some(record) => record.sequence.push_str(line),
                None => records.push(SequenceRecord {
                    name: String::new(),
                    sequence: line.to_string(),
                }),
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    /// Number of records, named or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of sequence characters across all records.
    pub fn total_len(&self) -> usize {
        self.records.iter().map(|r| r.sequence.len()).sum()
    }

    /// First record whose name equals `name`.
    pub fn get(&self, name: &str) -> Option<&SequenceRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Joins every record in file order into one string.
    ///
    /// Header boundaries are not tracked, so coordinates are only meaningful
    /// against the first record or a single-record section.
    pub fn concatenated(&self) -> String {
        let mut joined = String::with_capacity(self.total_len());
        for record in &self.records {
            joined.push_str(&record.sequence);
        }
        joined
    }
}

/// Reads the `##FASTA` section of the GFF3 file at `path`.
///
/// # Arguments
///
/// * `path` - Path to the GFF3 file
///
/// # Errors
///
/// Returns `NoFastaData` when the file has no `##FASTA` directive or the
/// section holds no sequence characters, and `Io` on read failures.
///
/// # Example
///
/// ```rust, ignore
/// use gff2fa::extract_sequence_block;
/// use std::path::Path;
///
/// let block = extract_sequence_block(Path::new("annotation.gff"))?;
/// for record in block.records() {
///     println!("{}\t{}", record.name, record.sequence.len());
/// }
/// ```
pub fn extract_sequence_block(path: &Path) -> Result<SequenceBlock> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let block = SequenceBlock::from_reader(BufReader::new(file))?;

    if block.total_len() == 0 {
        return Err(Gff2FaError::NoFastaData(path.to_path_buf()));
    }

    info!(
        "Read {} sequences ({} bp) from {}",
        block.len(),
        block.total_len(),
        path.display()
    );
    for record in block.records() {
        debug!("Sequence {:?}: {} bp", record.name, record.sequence.len());
    }

    Ok(block)
}
