//! # gff2fa
//!
//! Extract a single GFF3 feature as FASTA from its embedded `##FASTA` section.
//!
//! ## Usage
//!
//! ```bash
//! gff2fa [OPTIONS] <SOURCE_GFF> <TYPE> <ATTRIBUTE> <VALUE>
//!
//! Arguments:
//!   <SOURCE_GFF>  Path to GFF3 file
//!   <TYPE>        Feature type (e.g. gene)
//!   <ATTRIBUTE>   Attribute key (e.g. ID)
//!   <VALUE>       Attribute value (e.g. YAR003W)
//!
//! Options:
//!   -x, --exhaustive     Scan the whole file and warn on multiple matches
//!   -C, --concatenate    Slice from all FASTA sequences joined in file order
//!   -L, --level <LEVEL>  Logging verbosity level [default: warn]
//!   -h, --help           Print help
//!   -V, --version        Print version
//! ```
//!
//! ## Examples
//!
//! ```bash
//! gff2fa Saccharomyces_cerevisiae_S288C.annotation.gff gene ID YAR003W
//! ```
//!
//! ```bash
//! gff2fa -x -L info annotation.gff3 mRNA Name SWD1
//! ```
//!
//! Usage errors exit with a non-zero status. Every other outcome, including
//! a missing file or feature, prints one message on stdout and exits 0.
use clap::Parser;
use gff2fa::{run, Args, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    simple_logger::init_with_level(args.level)?;
    log::info!("{:?}", args);

    args.check()?;
    let config = Config::from_args(&args);

    match run(&config) {
        Ok(extraction) => {
            println!("{}", extraction.record);
            log::info!("Elapsed: {:.4?} secs", extraction.stats.elapsed.as_secs_f32());
        }
        Err(err) => println!("{}", err),
    }

    Ok(())
}
