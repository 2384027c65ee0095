//! Waypoint matching
//!
//! Scores typed phrases against aetheryte and zone names and picks the best
//! entry of a catalog.

pub mod aliases;
pub mod selector;
pub mod similarity;

pub use selector::{find_best_match, MatchOutcome, MatchResult};
pub use similarity::similarity;
