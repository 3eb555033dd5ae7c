//! Candidates and the ranking pipeline

use super::distance::edit_distance;
use super::error::SearchError;
use super::matcher::SubsequenceMatcher;
use super::sort::sort_by_distance;
use std::sync::Arc;

/// One selectable string with a stable original index
///
/// The text and index never change for the life of a finder session;
/// only the distance and validity are recomputed on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    text: Arc<str>,
    index: usize,
    distance: usize,
    valid: bool,
}

impl Candidate {
    /// Create a candidate that passes the (empty) initial filter
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
            distance: 0,
            valid: true,
        }
    }

    /// Create a candidate with a precomputed distance
    #[must_use]
    pub fn scored(text: impl Into<Arc<str>>, index: usize, distance: usize) -> Self {
        Self {
            distance,
            ..Self::new(text, index)
        }
    }

    /// Build candidates from items, assigning indices `0..n` in order
    #[must_use]
    pub fn from_items<I, S>(items: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, text)| Self::new(text, index))
            .collect()
    }

    /// The candidate text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the candidate in the list it was created from
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Edit distance to the last query (lower is closer)
    #[must_use]
    pub const fn distance(&self) -> usize {
        self.distance
    }

    /// Whether the candidate passed the last query's filter
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Ordering key: distance first, then original index
    #[must_use]
    pub const fn sort_key(&self) -> (usize, usize) {
        (self.distance, self.index)
    }

    fn rescore(&mut self, matcher: &SubsequenceMatcher, query: &str) {
        self.valid = matcher.is_match(&self.text);
        self.distance = if self.valid {
            edit_distance(&self.text, query)
        } else {
            0
        };
    }
}

/// Filter and rank `candidates` against `query`
///
/// Every candidate's validity and distance is recomputed (no incremental
/// filtering). The returned list holds the valid candidates sorted by
/// ascending distance, ties in original order.
///
/// # Errors
///
/// Returns `SearchError::Pattern` if the query cannot be compiled.
pub fn rank(candidates: &mut [Candidate], query: &str) -> Result<Vec<Candidate>, SearchError> {
    let matcher = SubsequenceMatcher::new(query)?;

    let mut ranked: Vec<Candidate> = candidates
        .iter_mut()
        .filter_map(|candidate| {
            candidate.rescore(&matcher, query);
            candidate.valid.then(|| candidate.clone())
        })
        .collect();

    sort_by_distance(&mut ranked);
    Ok(ranked)
}
