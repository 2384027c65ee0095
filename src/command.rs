//! `/go` command arguments
//!
//! Splits the raw argument string into chat flags and the search phrase.

use crate::chat::ChatLevels;

pub const HELP_TEXT: &str = "/go <location> → Teleports to a matching location.

Example usage:
· /go limsa → Limsa Lominsa Lower Decks

Features:
· Matches against aetheryte or zones
  · /go sum → Summerford Farms in Middle La Noscea
  · /go azys → Helix in Azys Lla
· Word prefixes are prioritized
  · /go old → Old Sharlayan
  · /go ost → Ostall Imperative in Lakeland
· Multi-word support
  · /go c shroud → Bentbranch Meadows in Central Shroud
  · /go n than → Camp Bluefog in Northern Thanalan
· Common prefixes ('the', 'camp') are ignored
  · /go dry → Camp Drybone in Eastern Thanalan
· Will match against 'Ishgard'
  · /go ish → Foundation

Supported flags:
Verbose: --verbose or -v
\t\tDisplays extended information in chat. Overrides config.
Info: --info or -i
\t\tDisplays basic plugin output in chat. Overrides config.
Error: --error or -e
\t\tDisplays plugin error output in chat. Overrides config.
Silent: --silent or -s
\t\tWill not show output in chat. Overrides config.";

/// A parsed `/go` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoRequest {
    /// Lowercased search phrase
    pub search: String,
    pub levels: ChatLevels,
}

impl GoRequest {
    /// Parse the text typed after `/go`.
    ///
    /// Flags may appear anywhere and apply in order, so `-s -v` ends up
    /// verbose only. Every other word joins the search phrase. Returns `None`
    /// only for empty input; whitespace still runs an (empty) search.
    pub fn parse(args: &str, defaults: ChatLevels) -> Option<Self> {
        if args.is_empty() {
            return None;
        }

        let mut levels = defaults;
        let mut search = String::new();

        for word in args.split(' ') {
            match word {
                "--verbose" | "-v" => levels.verbose = true,
                "--info" | "-i" => levels.info = true,
                "--error" | "-e" => levels.error = true,
                "--silent" | "-s" => levels = ChatLevels::silent(),
                _ => {
                    // Leading blanks vanish; inner double spaces survive
                    if !search.is_empty() {
                        search.push(' ');
                    }
                    search.push_str(&word.to_lowercase());
                }
            }
        }

        Some(Self {
            search: search.trim().to_string(),
            levels,
        })
    }
}
