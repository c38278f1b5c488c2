//! Basic text manipulation helpers.

use std::collections::{HashMap, HashSet};

use regex::Regex;

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Set of unique whitespace-separated words in `text`.
pub fn unique_words(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// `text` with the order of whitespace-separated words reversed.
///
/// Runs of whitespace are normalised to single spaces.
pub fn reverse_words(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    words.reverse();
    words.join(" ")
}

/// Number of Unicode scalar values in `text`.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// `text` with ASCII punctuation characters removed.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// The most frequently occurring whitespace-separated word.
///
/// Ties are broken alphabetically so the result is deterministic. When
/// `case_sensitive` is `false` words are lowercased before counting.
/// Returns an empty string for whitespace-only input.
pub fn most_common_word(text: &str, case_sensitive: bool) -> String {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in text.split_whitespace() {
        let key = if case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    let Some(max_count) = counts.values().copied().max() else {
        return String::new();
    };

    counts
        .into_iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(word, _)| word)
        .min()
        .unwrap_or_default()
}

/// `text` in title case: the first letter of every alphabetic run is
/// uppercased and the rest lowercased.
pub fn to_title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Whether `text` reads the same forwards and backwards, ignoring case and
/// any non-alphanumeric characters.
pub fn is_palindrome(text: &str) -> bool {
    let re = Regex::new(r"[^A-Za-z0-9]").expect("regex is valid");
    let cleaned = re.replace_all(text, "").to_lowercase();
    let reversed: String = cleaned.chars().rev().collect();
    cleaned == reversed
}

// ── Tests ─────────────────────────────────────────────────────────────────────
