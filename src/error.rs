use std::path::PathBuf;
use thiserror::Error;

/// Error type for gff2fa operations.
///
/// Every variant renders as the message shown to the operator, so the entry
/// point only has to print it.
#[derive(Debug, Error)]
pub enum Gff2FaError {
    /// Input GFF3 file does not exist.
    #[error("Error: The file {} could not be found.", .0.display())]
    FileNotFound(PathBuf),
    /// No record matched the requested type and attribute/value pair.
    #[error(
        "No matching feature found for type={feature_type}, attribute={attribute}, value={value}."
    )]
    NoMatchingFeature {
        feature_type: String,
        attribute: String,
        value: String,
    },
    /// The file has no `##FASTA` section or the section holds no sequence.
    #[error("No FASTA data found in the GFF3 file {}.", .0.display())]
    NoFastaData(PathBuf),
    /// The FASTA section has no record named after the feature's seqid.
    #[error("No FASTA sequence named {seqid} found for feature {label}.")]
    UnknownSequenceRegion { seqid: String, label: String },
    /// The requested interval lies outside the sequence.
    #[error("No sequence found for feature {0}.")]
    NoSequenceForFeature(String),
    /// Start or end column of the matched record is not an unsigned integer.
    #[error("An error occurred: invalid {field} coordinate {value:?} at line {line}")]
    InvalidCoordinate {
        line: usize,
        field: &'static str,
        value: String,
    },
    /// Wraps standard I/O errors.
    #[error("An error occurred: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for gff2fa operations.
pub type Result<T> = std::result::Result<T, Gff2FaError>;

/// Maps an error raised while opening `path`, keeping a missing file distinct.
pub(crate) fn open_error(path: &std::path::Path, err: std::io::Error) -> Gff2FaError {
    if err.kind() == std::io::ErrorKind::NotFound {
        Gff2FaError::FileNotFound(path.to_path_buf())
    } else {
        Gff2FaError::Io(err)
    }
}
