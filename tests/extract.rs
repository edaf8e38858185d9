use gff2fa::{run, reverse_complement, Config, Gff2FaError, Query, ScanMode, SequenceMode};
use indoc::indoc;
use std::path::{Path, PathBuf};

/// Writes a file to the temporary directory and returns its path.
fn write_temp_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// 200 bp of chrI, wrapped at 60 like a regular FASTA section.
fn chromosome() -> String {
    "ACGTTGCA".repeat(25)
}

fn fasta_section(name: &str, seq: &str) -> String {
    let mut section = format!("##FASTA\n>{}\n", name);
    for chunk in seq.as_bytes().chunks(60) {
        section.push_str(std::str::from_utf8(chunk).unwrap());
        section.push('\n');
    }
    section
}

fn config(input: PathBuf, feature_type: &str, attribute: &str, value: &str) -> Config {
    Config {
        input,
        query: Query::new(feature_type, attribute, value),
        scan_mode: ScanMode::FirstMatch,
        sequence_mode: SequenceMode::ByRegion,
    }
}

const PLUS_GFF: &str = indoc! {"
    ##gff-version 3
    ##sequence-region chrI 1 200
    chrI\tSGD\tchromosome\t1\t200\t.\t.\t.\tID=chrI;dbxref=NCBI:NC_001133
    chrI\tSGD\tgene\t20\t40\t.\t-\t.\tID=YAL001C;Name=TFC3
    chrI\tSGD\tgene\t100\t160\t.\t+\t.\tID=YAR003W;Name=SWD1;gene=SWD1
    chrI\tSGD\tmRNA\t100\t160\t.\t+\t.\tID=YAR003W_mRNA;Parent=YAR003W
"};

/// Extracts a forward-strand gene and wraps it as 60 + 1 bases.
#[test]
fn extract_forward_gene() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!("{}{}", PLUS_GFF, fasta_section("chrI", &chromosome()));
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let extraction = run(&config(input, "gene", "ID", "YAR003W")).unwrap();
    let expected = &chromosome()[99..160];

    assert_eq!(extraction.record.header, "gene:ID:YAR003W");
    assert_eq!(extraction.record.sequence, expected);
    assert_eq!(extraction.located.line, 5);

    let rendered = extraction.record.to_string();
    let lines = rendered.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], ">gene:ID:YAR003W");
    assert_eq!(lines[1], &expected[..60]);
    assert_eq!(lines[2], &expected[60..]);
}

/// The same gene on the minus strand comes out reverse-complemented.
#[test]
fn extract_reverse_gene() {
    let dir = tempfile::tempdir().unwrap();
    let gff = PLUS_GFF.replace("100\t160\t.\t+\t.\tID=YAR003W;", "100\t160\t.\t-\t.\tID=YAR003W;");
    let contents = format!("{}{}", gff, fasta_section("chrI", &chromosome()));
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let extraction = run(&config(input, "gene", "ID", "YAR003W")).unwrap();

    assert_eq!(
        extraction.record.sequence,
        reverse_complement(&chromosome()[99..160])
    );
}

/// Attributes other than ID can be queried.
#[test]
fn extract_by_other_attribute() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!("{}{}", PLUS_GFF, fasta_section("chrI", &chromosome()));
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let extraction = run(&config(input, "gene", "Name", "TFC3")).unwrap();

    assert_eq!(extraction.record.header, "gene:Name:TFC3");
    assert_eq!(
        extraction.record.sequence,
        reverse_complement(&chromosome()[19..40])
    );
}

/// A query that matches nothing reports the query back.
#[test]
fn no_matching_feature() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!("{}{}", PLUS_GFF, fasta_section("chrI", &chromosome()));
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let err = run(&config(input, "gene", "ID", "YBR000W")).unwrap_err();

    assert!(matches!(err, Gff2FaError::NoMatchingFeature { .. }));
    assert_eq!(
        err.to_string(),
        "No matching feature found for type=gene, attribute=ID, value=YBR000W."
    );
}

/// A matched feature in a file without ##FASTA reports missing FASTA data.
#[test]
fn no_fasta_section() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_temp_file(dir.path(), "annotation.gff", PLUS_GFF);

    let err = run(&config(input.clone(), "gene", "ID", "YAR003W")).unwrap_err();

    assert!(matches!(err, Gff2FaError::NoFastaData(_)));
    assert_eq!(
        err.to_string(),
        format!("No FASTA data found in the GFF3 file {}.", input.display())
    );
}

/// A ##FASTA directive followed only by headers counts as missing data.
#[test]
fn empty_fasta_section() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!("{}##FASTA\n>chrI\n\n", PLUS_GFF);
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let err = run(&config(input, "gene", "ID", "YAR003W")).unwrap_err();
    assert!(matches!(err, Gff2FaError::NoFastaData(_)));
}

/// Coordinates past the end of the sequence yield no sequence.
#[test]
fn feature_outside_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!(
        "{}chrI\tSGD\tgene\t500\t600\t.\t+\t.\tID=far\n{}",
        PLUS_GFF,
        fasta_section("chrI", &chromosome())
    );
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let err = run(&config(input, "gene", "ID", "far")).unwrap_err();

    assert!(matches!(err, Gff2FaError::NoSequenceForFeature(_)));
    assert_eq!(err.to_string(), "No sequence found for feature gene:ID:far.");
}

/// Coordinates that run past the end are truncated, not rejected.
#[test]
fn feature_partially_outside_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!(
        "{}chrI\tSGD\tgene\t191\t260\t.\t+\t.\tID=edge\n{}",
        PLUS_GFF,
        fasta_section("chrI", &chromosome())
    );
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let extraction = run(&config(input, "gene", "ID", "edge")).unwrap();
    assert_eq!(extraction.record.sequence, &chromosome()[190..]);
}

/// A missing input file is reported, not raised.
#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.gff");

    let err = run(&config(input.clone(), "gene", "ID", "YAR003W")).unwrap_err();

    assert!(matches!(err, Gff2FaError::FileNotFound(_)));
    assert_eq!(
        err.to_string(),
        format!("Error: The file {} could not be found.", input.display())
    );
}

/// Duplicate matches keep the first record; exhaustive mode counts them.
#[test]
fn duplicate_matches_use_first() {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!(
        "{}chrI\tSGD\tgene\t1\t10\t.\t+\t.\tID=YAR003W;Note=duplicate\n{}",
        PLUS_GFF,
        fasta_section("chrI", &chromosome())
    );
    let input = write_temp_file(dir.path(), "annotation.gff", &contents);

    let mut first = config(input, "gene", "ID", "YAR003W");
    let extraction = run(&first).unwrap();
    assert_eq!(extraction.located.matches, 1);
    assert_eq!(extraction.record.sequence, &chromosome()[99..160]);

    first.scan_mode = ScanMode::Exhaustive;
    let extraction = run(&first).unwrap();
    assert_eq!(extraction.located.matches, 2);
    assert_eq!(extraction.located.feature.start, 100);
    assert_eq!(extraction.record.sequence, &chromosome()[99..160]);
}
