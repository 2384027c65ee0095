//! Abbreviation-friendly phrase similarity
//!
//! Rewards query words found at the start of a name word, in name words near
//! the front of the name. Not an edit distance: "sum" scores a perfect match
//! against "summerford farms" while a typo like "smu" does not match at all.

/// Best score of a query word that no candidate word contains
const UNMATCHED: f64 = -1.0;

/// Penalty per character a query word starts into a candidate word
const DISTANCE_PENALTY: usize = 10;

/// Penalty per character a candidate word starts into the candidate text
const WORD_OFFSET_PENALTY: usize = 1;

/// Score `query` against `text`.
///
/// Both inputs are expected to be lowercased already. Each space-separated
/// query word takes its best score over the words of `text`, and the result
/// is the average of those. A query word that appears nowhere counts as
/// -1.0, so the result can drop below zero; 1.0 is only reached when every
/// query word starts a word that opens the text.
///
/// Returns 0.0 if either input is empty or whitespace.
pub fn similarity(query: &str, text: &str) -> f64 {
    if query.trim().is_empty() || text.trim().is_empty() {
        return 0.0;
    }

    // Consecutive spaces yield empty words on purpose
    let query_words: Vec<&str> = query.split(' ').collect();
    let total: f64 = query_words
        .iter()
        .map(|word| best_word_score(word, text))
        .sum();

    total / query_words.len() as f64
}

fn best_word_score(word: &str, text: &str) -> f64 {
    if word.is_empty() {
        return 0.0;
    }

    let weight = text.chars().count() * DISTANCE_PENALTY;

    text.split(' ')
        .filter_map(|text_word| {
            let distance = char_offset(text_word, word)?;
            // First occurrence, so a repeated word scores by its earliest position
            let word_offset = char_offset(text, text_word)?;
            let penalty = distance * DISTANCE_PENALTY + word_offset * WORD_OFFSET_PENALTY;
            Some((weight as f64 - penalty as f64) / weight as f64)
        })
        .fold(UNMATCHED, f64::max)
}

/// Character (not byte) offset of the first `needle` in `haystack`
fn char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}
