//! The `/go` command
//!
//! Ties the pieces together: parse the arguments, pick the best aetheryte,
//! teleport there and tell the user what happened.

use crate::catalog::CandidateSource;
use crate::chat::{ChatLevel, ChatLevels, ChatSink};
use crate::command::GoRequest;
use crate::matching::{find_best_match, MatchOutcome, MatchResult};
use crate::teleport::Teleporter;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Handles `/go` invocations against a catalog
pub struct GoCommand<S, T, C> {
    source: S,
    teleporter: T,
    chat: C,
    /// Chat levels used when the command passes no flags
    defaults: ChatLevels,
}

impl<S, T, C> GoCommand<S, T, C>
where
    S: CandidateSource,
    T: Teleporter,
    C: ChatSink,
{
    pub fn new(source: S, teleporter: T, chat: C, defaults: ChatLevels) -> Self {
        Self {
            source,
            teleporter,
            chat,
            defaults,
        }
    }

    /// Handle the raw text typed after `/go`
    ///
    /// Returns `None` when there are no arguments and nothing was done.
    pub fn handle(&mut self, args: &str) -> Option<MatchOutcome> {
        let Some(request) = GoRequest::parse(args, self.defaults) else {
            debug!("Ignoring /go without arguments");
            return None;
        };
        Some(self.run(&request))
    }

    /// Match, teleport and report for a parsed request
    pub fn run(&mut self, request: &GoRequest) -> MatchOutcome {
        let started = Instant::now();
        let outcome = find_best_match(&request.search, &self.source);

        match &outcome {
            MatchOutcome::Found(result) => {
                info!(
                    "🎯 '{}' → {} in {} ({:.3})",
                    request.search, result.name, result.zone, result.score
                );
                if let Err(e) = self.teleporter.teleport(result.id, result.sub_id) {
                    warn!("❌ Failed to teleport to {}: {}", result.name, e);
                    request.levels.emit(
                        &mut self.chat,
                        ChatLevel::Error,
                        &format!("Unable to teleport to {}: {}", result.name, e),
                    );
                    return outcome;
                }
                request
                    .levels
                    .emit(&mut self.chat, ChatLevel::Info, &arrival_message(result));
                request.levels.emit(
                    &mut self.chat,
                    ChatLevel::Verbose,
                    &details_message(&request.search, result, started.elapsed()),
                );
            }
            MatchOutcome::NoMatch => {
                info!("No aetheryte matched '{}'", request.search);
                request.levels.emit(
                    &mut self.chat,
                    ChatLevel::Error,
                    &format!("Unable to find a matching aetheryte for {}", request.search),
                );
            }
        }

        outcome
    }
}

/// One-line summary, omitting the zone when it repeats the name
pub fn arrival_message(result: &MatchResult) -> String {
    if result.name == result.zone {
        format!("Go → {}", result.name)
    } else {
        format!("Go → {} in {}", result.name, result.zone)
    }
}

fn details_message(input: &str, result: &MatchResult, elapsed: Duration) -> String {
    format!(
        "Match found:\nInput: {}\nAetheryte: {} - Zone: {}\nSimilarity: {}\nAetheryteID: {} - Aetheryte SubID: {}\nTime spent: {}s",
        input,
        result.name,
        result.zone,
        result.score,
        result.id,
        result.sub_id,
        elapsed.as_secs_f64()
    )
}
