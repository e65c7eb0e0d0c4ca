//! Search Module
//!
//! Relevance scoring of catalog products against free-text queries and
//! autocomplete suggestion extraction. Both are pure functions over a
//! product slice and never fail.

mod scoring;
mod suggest;
mod tokenizer;


pub use scoring::{compute_score, rank, ScoredProduct};
pub use suggest::{extract_suggestions, suggest, suggest_from_source, MIN_SUGGESTION_QUERY_LEN};
pub use tokenizer::tokenize_query;
