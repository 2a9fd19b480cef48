//! Majority vote over label codes.

/// Returns the value occurring most often in `values`, or `None` if the
/// slice is empty.
///
/// Ties are broken in favor of the value whose first occurrence comes
/// earliest. When the input is neighbor labels sorted by ascending
/// distance, a tied vote therefore goes to the label of the closer
/// neighbor — a deterministic rule, unlike counting through an unordered
/// map.
pub fn majority_label(values: &[f64]) -> Option<f64> {
    // Tally in encounter order; label sets are tiny (one entry per class).
    let mut tally: Vec<(f64, usize)> = Vec::new();
    for &v in values {
        match tally.iter_mut().find(|(code, _)| *code == v) {
            Some((_, count)) => *count += 1,
            None => tally.push((v, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for &(code, count) in &tally {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((code, count)),
        }
    }
    best.map(|(code, _)| code)
}
