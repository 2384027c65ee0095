//! Best-match selection over a catalog
//!
//! Every usable entry is scored twice, once by its aetheryte name and once by
//! its zone, and the single highest score wins. Ties keep the earlier entry.

use super::aliases::{comparison_name, FIXED_ALIASES, PRIVATE_VARIANT_NAME};
use super::similarity::similarity;
use crate::catalog::{Aetheryte, CandidateSource};
use tracing::debug;

/// No candidate can beat this, so selection stops once it is reached
const PERFECT_SCORE: f64 = 1.0;

/// The winning destination of a search
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Display name, or the apartment name for private residences
    pub name: String,
    pub zone: String,
    pub id: u32,
    pub sub_id: u8,
    pub score: f64,
}

/// Result of [`find_best_match`]
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Found(MatchResult),
    /// Nothing scored above zero
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_found(self) -> Option<MatchResult> {
        match self {
            Self::Found(result) => Some(result),
            Self::NoMatch => None,
        }
    }
}

/// Running best while walking the catalog
struct Leader {
    score: f64,
    result: Option<MatchResult>,
}

impl Leader {
    /// Take over when `score` is strictly higher
    fn offer(&mut self, score: f64, result: impl FnOnce() -> MatchResult) {
        if score > self.score {
            let mut result = result();
            result.score = score;
            self.score = score;
            self.result = Some(result);
        }
    }
}

/// Find the catalog entry that best matches `query`.
///
/// `query` must already be lowercased and trimmed. Entries missing either
/// name are skipped. After the catalog, the fixed aliases get a chance to
/// win by scoring strictly higher than the best entry.
pub fn find_best_match<S: CandidateSource + ?Sized>(query: &str, source: &S) -> MatchOutcome {
    let mut leader = Leader {
        score: 0.0,
        result: None,
    };

    for aetheryte in source.candidates() {
        let Some(name) = aetheryte.primary_name.as_deref() else {
            debug!("Skipping aetheryte {}: no place name", aetheryte.id);
            continue;
        };
        let Some(zone) = aetheryte.secondary_name.as_deref() else {
            debug!("Skipping aetheryte {}: no territory name", aetheryte.id);
            continue;
        };

        let (display, compare) = if aetheryte.is_private_variant {
            // Compared as written, so only case-matching queries hit it
            (PRIVATE_VARIANT_NAME, PRIVATE_VARIANT_NAME.to_string())
        } else {
            (name, comparison_name(name))
        };

        leader.offer(similarity(query, &compare), || {
            result_for(aetheryte, display, zone)
        });
        leader.offer(similarity(query, &zone.to_lowercase()), || {
            result_for(aetheryte, display, zone)
        });

        if leader.score == PERFECT_SCORE {
            debug!("Perfect match for '{}', stopping early", query);
            break;
        }
    }

    for alias in FIXED_ALIASES {
        leader.offer(similarity(query, alias.key), || MatchResult {
            name: alias.name.to_string(),
            zone: alias.zone.to_string(),
            id: alias.id,
            sub_id: alias.sub_id,
            score: 0.0,
        });
    }

    match leader.result {
        Some(result) if !result.name.is_empty() => MatchOutcome::Found(result),
        _ => MatchOutcome::NoMatch,
    }
}

fn result_for(aetheryte: &Aetheryte, name: &str, zone: &str) -> MatchResult {
    MatchResult {
        name: name.to_string(),
        zone: zone.to_string(),
        id: aetheryte.id,
        sub_id: aetheryte.sub_id,
        score: 0.0,
    }
}
