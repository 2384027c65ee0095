//! AetherGo Library
//!
//! Abbreviation-friendly matching of typed phrases against aetheryte and
//! zone names, plus the `/go` command built on top of it.

pub mod catalog;
pub mod chat;
pub mod command;
pub mod config;
pub mod error;
pub mod go;
pub mod matching;
pub mod teleport;

pub use catalog::{Aetheryte, CandidateSource, Catalog};
pub use error::{GoError, GoResult};
pub use matching::{find_best_match, similarity, MatchOutcome, MatchResult};
