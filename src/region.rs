use crate::locate::MatchedFeature;

/// Watson-Crick complement for every byte value. Bases outside `ACGTN`
/// (either case) map to themselves.
static COMPLEMENT: [u8; 256] = complement_table();

const fn complement_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut idx = 0;
    while idx < table.len() {
        table[idx] = idx as u8;
        idx += 1;
    }

    table[b'A' as usize] = b'T';
    table[b'T' as usize] = b'A';
    table[b'C' as usize] = b'G';
    table[b'G' as usize] = b'C';
    table[b'a' as usize] = b't';
    table[b't' as usize] = b'a';
    table[b'c' as usize] = b'g';
    table[b'g' as usize] = b'c';

    table
}

/// Complement of a single base; case is preserved.
#[inline(always)]
pub fn complement(base: char) -> char {
    if base.is_ascii() {
        COMPLEMENT[base as usize] as char
    } else {
        base
    }
}

/// Reverses `seq` and complements each base.
///
/// # Example
///
/// ```rust, ignore
/// use gff2fa::region::reverse_complement;
///
/// assert_eq!(reverse_complement("AACgtN"), "NacGTT");
/// ```
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}

/// Slices the 1-based inclusive interval `[start, end]` out of `sequence`.
///
/// Out-of-range parts are clamped, so the result may be short or empty but
/// never panics. `start == 0` is treated as the first base.
pub fn slice_region(sequence: &str, start: u64, end: u64) -> String {
    let from = usize::try_from(start.saturating_sub(1)).unwrap_or(usize::MAX);
    let to = usize::try_from(end).unwrap_or(usize::MAX);

    if to <= from {
        return String::new();
    }

    sequence.chars().skip(from).take(to - from).collect()
}

/// Extracts the sequence of `feature`, reverse-complemented on the `-` strand.
///
/// `+` and `.` strands are returned in forward orientation. An empty result
/// signals coordinates outside `sequence`.
///
/// # Example
///
/// ```rust, ignore
/// use gff2fa::region::extract_region;
///
/// let seq = extract_region(&block.concatenated(), &located.feature);
/// ```
pub fn extract_region(sequence: &str, feature: &MatchedFeature) -> String {
    let region = slice_region(sequence, feature.start, feature.end);

    if feature.strand.is_reverse() {
        reverse_complement(&region)
    } else {
        region
    }
}
