//! Unweighted Levenshtein edit distance.
//!
//! Insertions, deletions and substitutions each cost 1; transpositions are not
//! recognised. Sequences are compared element by element, so callers decide
//! the unit (the scorer passes Unicode scalar values).

/// Returns the minimum number of single-element edits turning `a` into `b`.
///
/// Runs in `O(n * m)` time and keeps only two rows of the cost table, sized
/// by the shorter input.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Distance is symmetric, so let the shorter sequence size the rows.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0usize; short.len() + 1];

    for (i, long_item) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, short_item) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(long_item != short_item);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

/// Convenience wrapper comparing two strings by `char`.
pub fn str_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}
