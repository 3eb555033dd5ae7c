//! Candidate ranking engine
//!
//! Pure functions that turn a query and a candidate list into the ranked
//! list shown by the finder:
//!
//! 1. [`SubsequenceMatcher`] keeps candidates containing the query
//!    characters in order (other characters may sit in between)
//! 2. [`edit_distance`] scores every surviving candidate against the
//!    literal query
//! 3. [`sort_by_distance`] orders them, closest first
//!
//! [`rank`] runs the whole pipeline. Nothing here depends on the UI.
//!
//! ```
//! use hashi::search::{Candidate, rank};
//!
//! let mut candidates = Candidate::from_items(["alpha", "beta"]);
//! let ranked = rank(&mut candidates, "beta").unwrap();
//!
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].index(), 1);
//! assert_eq!(ranked[0].distance(), 0);
//! ```

mod candidate;
mod distance;
pub mod error;
mod matcher;
mod sort;

pub use candidate::{Candidate, rank};
pub use distance::edit_distance;
pub use error::SearchError;
pub use matcher::SubsequenceMatcher;
pub use sort::sort_by_distance;
