//! Filtering and searching over snapshot trees

pub mod filter;
pub mod search;

pub use filter::{AttributePredicate, TreeFilter, filter_tree};
pub use search::{MatchKind, SearchHit, search};
