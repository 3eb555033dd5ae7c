//! Edit distance scoring

/// Levenshtein distance between `candidate` and `query`
///
/// Insertions, deletions and substitutions each cost 1. Uses a single DP row
/// of `query.len() + 1` cells that is updated left to right, so memory stays
/// proportional to the query while time is `O(|candidate| * |query|)`.
/// Lengths are counted in `char`s, not bytes.
#[must_use]
pub fn edit_distance(candidate: &str, query: &str) -> usize {
    let query: Vec<char> = query.chars().collect();
    let mut row: Vec<usize> = (0..=query.len()).collect();

    for (i, c) in candidate.chars().enumerate() {
        // row[0] is the cost of deleting the first i + 1 candidate chars
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, q) in query.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(c != *q);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[query.len()]
}
