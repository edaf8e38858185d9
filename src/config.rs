use crate::cli::Args;
use crate::error::Gff2FaError;
use crate::gff::GffRecord;
use std::fmt;
use std::path::PathBuf;

/// Feature type plus the attribute/value pair a record must carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Value expected in the third GFF3 column, e.g. `gene`.
    pub feature_type: String,
    /// Attribute key looked up in the ninth column, e.g. `ID`.
    pub attribute: String,
    /// Value the attribute must hold, e.g. `YAR003W`.
    pub value: String,
}

impl Query {
    pub fn new(
        feature_type: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            feature_type: feature_type.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Returns true when `record` has the queried type and attribute value.
    ///
    /// Attributes are only parsed for records whose type already matches.
    pub fn matches(&self, record: &GffRecord<'_>) -> bool {
        record.feature == self.feature_type
            && record.attributes().matches(&self.attribute, &self.value)
    }

    /// Label used as the FASTA header: `type:attribute:value`.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub(crate) fn no_match(&self) -> Gff2FaError {
        Gff2FaError::NoMatchingFeature {
            feature_type: self.feature_type.clone(),
            attribute: self.attribute.clone(),
            value: self.value.clone(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.feature_type, self.attribute, self.value)
    }
}

/// How far the locator reads once a record matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Stop reading at the first matching record.
    #[default]
    FirstMatch,
    /// Read the whole file and count every match; the first one still wins.
    Exhaustive,
}

/// Which part of the `##FASTA` section a feature is sliced from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SequenceMode {
    /// Sequence whose header name equals the feature's seqid.
    #[default]
    ByRegion,
    /// Every sequence joined in file order, header boundaries dropped.
    Concatenated,
}

/// Normalized configuration for an extraction run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input GFF3 path carrying a `##FASTA` section.
    pub input: PathBuf,
    /// Feature to extract.
    pub query: Query,
    /// Locator behaviour after the first match.
    pub scan_mode: ScanMode,
    /// Sequence selection strategy.
    pub sequence_mode: SequenceMode,
}

impl Config {
    /// Builds an extraction config from CLI arguments.
    ///
    /// # Arguments
    ///
    /// * `args` - Command-line arguments to convert into a configuration
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use clap::Parser;
    /// use gff2fa::{Args, Config};
    ///
    /// let args = Args::parse_from(["gff2fa", "annotation.gff", "gene", "ID", "YAR003W"]);
    /// let config = Config::from_args(&args);
    /// assert_eq!(config.query.label(), "gene:ID:YAR003W");
    /// ```
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.gff.clone(),
            query: Query::new(&args.feature_type, &args.attribute, &args.value),
            scan_mode: if args.exhaustive {
                ScanMode::Exhaustive
            } else {
                ScanMode::FirstMatch
            },
            sequence_mode: if args.concatenate {
                SequenceMode::Concatenated
            } else {
                SequenceMode::ByRegion
            },
        }
    }
}
