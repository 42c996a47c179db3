//! Levenshtein edit distance and closest-candidate selection.
//!
//! Backs the typo-tolerant command suggestion ("Did you mean ...?") and the
//! fuzzy content search in `grep`.

/// Classic Levenshtein distance: insertions, deletions and substitutions
/// each cost 1. Computed over characters with a two-row DP table.
pub fn distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != *b_char);
            current[j + 1] = (prev[j + 1] + 1).min(current[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b_chars.len()]
}

/// The candidate closest to `target`, if its distance is strictly below
/// `threshold`. Ties resolve to the first candidate encountered.
pub fn closest<'a, I>(candidates: I, target: &str, threshold: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let d = distance(candidate, target);
        if best.map_or(true, |(_, min)| d < min) {
            best = Some((candidate, d));
        }
    }
    best.filter(|(_, d)| *d < threshold).map(|(candidate, _)| candidate)
}

// ============================================================================
// Tests
// ============================================================================
