//! Edit distance used for typo tolerance.
//!
//! Distances are computed with the optimal string alignment variant of
//! Damerau-Levenshtein: insertions, deletions, substitutions and swaps of two
//! adjacent characters each cost one edit.

use std::cmp::min;

/// Calculate the Damerau-Levenshtein (optimal string alignment) distance.
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    osa(&a, &b, usize::MAX).unwrap_or(usize::MAX)
}

/// Smallest distance between `query` and either the whole of `word` or the
/// prefix of `word` with as many characters as `query`.
///
/// Returns `None` as soon as both distances are known to exceed `threshold`.
///
/// This lets a half-typed word with a typo (`"resmap"`) still reach a longer
/// candidate (`"resample"`).
pub fn prefix_distance_within(query: &str, word: &str, threshold: usize) -> Option<usize> {
    let q: Vec<char> = query.chars().collect();
    let w: Vec<char> = word.chars().collect();

    let whole = if q.len().abs_diff(w.len()) <= threshold {
        osa(&q, &w, threshold)
    } else {
        None
    };

    let prefix = if w.len() > q.len() {
        osa(&q, &w[..q.len()], threshold)
    } else {
        None
    };

    match (whole, prefix) {
        (Some(x), Some(y)) => Some(min(x, y)),
        (x, y) => x.or(y),
    }
}

/// Similarity in `[0.0, 1.0]` derived from a distance and the query length.
pub fn similarity(distance: usize, query_len: usize) -> f64 {
    if query_len == 0 {
        return 0.0;
    }
    (1.0 - distance as f64 / query_len as f64).max(0.0)
}

fn osa(a: &[char], b: &[char], threshold: usize) -> Option<usize> {
    if a.is_empty() {
        return (b.len() <= threshold).then_some(b.len());
    }
    if b.is_empty() {
        return (a.len() <= threshold).then_some(a.len());
    }

    // Three rolling rows: the transposition step looks two rows back.
    let mut before: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut row_min = i;

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut value = min(min(prev[j] + 1, curr[j - 1] + 1), prev[j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                value = min(value, before[j - 2] + 1);
            }

            curr[j] = value;
            row_min = min(row_min, value);
        }

        if row_min > threshold {
            return None;
        }

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= threshold).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damerau_levenshtein_distance() {
        assert_eq!(damerau_levenshtein_distance("", ""), 0);
        assert_eq!(damerau_levenshtein_distance("", "abc"), 3);
        assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein_distance("search", "serach"), 1);
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(damerau_levenshtein_distance("subset", "subset"), 0);
    }

    #[test]
    fn test_prefix_distance() {
        assert_eq!(prefix_distance_within("resmap", "resample", 1), Some(1));
        assert_eq!(prefix_distance_within("mosiac", "mosaic", 1), Some(1));
        assert_eq!(prefix_distance_within("calib", "calibration", 1), Some(0));
        assert_eq!(prefix_distance_within("xyzzy", "resample", 2), None);
        assert_eq!(prefix_distance_within("kitten", "sittin", 2), Some(2));
        assert_eq!(prefix_distance_within("kitten", "sittin", 1), None);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity(0, 5), 1.0);
        assert!((similarity(1, 4) - 0.75).abs() < 1e-9);
        assert_eq!(similarity(9, 4), 0.0);
        assert_eq!(similarity(0, 0), 0.0);
    }

    #[test]
    fn test_common_typos() {
        let common_typos = vec![
            ("terrain", "terrian"),
            ("speckle", "spekcle"),
            ("subset", "subst"),
            ("merge", "mrege"),
        ];

        for (correct, typo) in common_typos {
            let distance = damerau_levenshtein_distance(correct, typo);
            assert_eq!(distance, 1, "{correct} -> {typo}");
        }
    }
}
