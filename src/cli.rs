//! extract a single GFF3 feature as FASTA from its embedded ##FASTA section
//! Alejandro Gonzales-Irribarren, 2025

use clap::{ArgAction, Parser};
use indoc::indoc;
use log::Level;
use std::path::PathBuf;
use thiserror::Error;

const AFTER_HELP: &str = indoc! {"
    Example:
      gff2fa Saccharomyces_cerevisiae_S288C.annotation.gff gene ID YAR003W

    The matched region is printed as FASTA with a `>type:attribute:value`
    header and 60 bases per line.
"};

#[derive(Parser, Debug)]
#[clap(
    name = "gff2fa",
    version = env!("CARGO_PKG_VERSION"),
    author = "Alejandro Gonzales-Irribarren <alejandrxgzi@gmail.com>",
    about = "extract a single GFF3 feature as FASTA from its embedded ##FASTA section",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// GFF3 file carrying both the annotation and a ##FASTA section.
    #[clap(help = "Path to GFF3 file", value_name = "SOURCE_GFF")]
    pub gff: PathBuf,

    /// Feature type, matched exactly against the third column.
    #[clap(help = "Feature type (e.g. gene)", value_name = "TYPE")]
    pub feature_type: String,

    /// Attribute key looked up in the ninth column.
    #[clap(help = "Attribute key (e.g. ID)", value_name = "ATTRIBUTE")]
    pub attribute: String,

    /// Value the attribute must hold.
    #[clap(help = "Attribute value (e.g. YAR003W)", value_name = "VALUE")]
    pub value: String,

    /// Reads the whole file and warns when more than one record matches.
    #[clap(
        short = 'x',
        long = "exhaustive",
        help = "Scan the whole file and warn on multiple matches",
        action = ArgAction::SetTrue
    )]
    pub exhaustive: bool,

    /// Treats every sequence of the ##FASTA section as one.
    #[clap(
        short = 'C',
        long = "concatenate",
        help = "Slice from all FASTA sequences joined in file order",
        action = ArgAction::SetTrue
    )]
    pub concatenate: bool,

    #[clap(
        short = 'L',
        long = "level",
        help = "Logging verbosity level",
        value_name = "LEVEL",
        default_value = "warn"
    )]
    pub level: Level,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Type, attribute and value are compared verbatim, so none may be empty.
    fn check_query(&self) -> Result<(), ArgError> {
        for (name, field) in [
            ("type", &self.feature_type),
            ("attribute", &self.attribute),
            ("value", &self.value),
        ] {
            if field.trim().is_empty() {
                let err = format!("{} must not be empty", name);
                return Err(ArgError::InvalidQuery(err));
            }
        }

        Ok(())
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_query()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// One of the query strings is empty.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args =
            Args::try_parse_from(["gff2fa", "annotation.gff", "gene", "ID", "YAR003W"]).unwrap();
        assert_eq!(args.gff, PathBuf::from("annotation.gff"));
        assert_eq!(args.feature_type, "gene");
        assert_eq!(args.attribute, "ID");
        assert_eq!(args.value, "YAR003W");
        assert!(!args.exhaustive);
        assert!(!args.concatenate);
        assert_eq!(args.level, Level::Warn);
        assert!(args.check().is_ok());
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Args::try_parse_from(["gff2fa", "annotation.gff", "gene", "ID"]).is_err());
        assert!(Args::try_parse_from([
            "gff2fa",
            "annotation.gff",
            "gene",
            "ID",
            "YAR003W",
            "extra"
        ])
        .is_err());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "gff2fa", "-x", "-C", "-L", "debug", "a.gff", "gene", "ID", "x",
        ])
        .unwrap();
        assert!(args.exhaustive);
        assert!(args.concatenate);
        assert_eq!(args.level, Level::Debug);
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let args = Args::try_parse_from(["gff2fa", "a.gff", "gene", "", "x"]).unwrap();
        assert!(matches!(args.check(), Err(ArgError::InvalidQuery(_))));
    }
}
