//! # gff2fa
//!
//! Extract a single GFF3 feature as FASTA from its embedded `##FASTA` section.
//!
//! A query is a feature type plus an attribute/value pair. The first record
//! in file order that matches is located, its 1-based inclusive interval is
//! sliced out of the sequence with the same name as its seqid, and the slice
//! is reverse-complemented when the feature sits on the `-` strand.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use gff2fa::{run, Config, Query, ScanMode, SequenceMode};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("Saccharomyces_cerevisiae_S288C.annotation.gff"),
//!     query: Query::new("gene", "ID", "YAR003W"),
//!     scan_mode: ScanMode::FirstMatch,
//!     sequence_mode: SequenceMode::ByRegion,
//! };
//!
//! let extraction = run(&config)?;
//! println!("{}", extraction.record);
//! ```
//!
//! ## Examples
//!
//! ### Using the phases directly
//!
//! ```rust, ignore
//! use gff2fa::{extract_region, extract_sequence_block, locate, Query, ScanMode};
//! use std::path::Path;
//!
//! let path = Path::new("annotation.gff");
//! let located = locate(path, &Query::new("mRNA", "Name", "SWD1"), ScanMode::Exhaustive)?;
//! let block = extract_sequence_block(path)?;
//! let seq = extract_region(&block.concatenated(), &located.feature);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fasta;
pub mod gff;
pub mod locate;
pub mod output;
pub mod region;

pub use cli::Args;
pub use config::{Config, Query, ScanMode, SequenceMode};
pub use error::{Gff2FaError, Result};
pub use extract::{run, Extraction, RunStats};
pub use fasta::{extract_sequence_block, SequenceBlock, SequenceRecord};
pub use locate::{locate, Located, MatchedFeature};
pub use output::FastaRecord;
pub use region::{extract_region, reverse_complement};
