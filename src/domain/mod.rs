//! Core vocabulary types and update rules.

mod notes;
mod review;
mod word;

pub use notes::merge_notes;
pub use review::{COOLDOWN, ReviewDecision, decide_review, parse_last_reviewed};
pub use word::{ParseWordTextError, WordText};
