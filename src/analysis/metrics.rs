use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

/// Failure raised by the word-selection metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The document contains no words, so there is nothing to compare.
    #[error("invalid input: document contains no words")]
    InvalidInput,
}

/// Word occurrence counts with keys iterated in first-seen order.
///
/// The stored `frequency` result renders this table as a JSON object, so the
/// serialization emits members in the same first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Counts one sighting of `word`, remembering its position on first sight.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(move |word| (word.as_str(), self.counts[word.as_str()]))
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (word, count) in self.entries() {
            map.serialize_entry(word, &count)?;
        }
        map.end()
    }
}

/// Number of characters in the raw text excluding every whitespace character,
/// not just the separators between words.
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Builds the occurrence table for the document, one increment per word.
pub fn word_frequency(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for word in text.split_whitespace() {
        table.record(word);
    }
    table
}

/// Scans words left to right, replacing the running best only on a strictly
/// longer word. Ties keep the earlier word.
pub fn longest_word(text: &str) -> Result<String, AnalysisError> {
    let mut words = text.split_whitespace();
    let mut longest = words.next().ok_or(AnalysisError::InvalidInput)?;
    for word in words {
        if word.len() > longest.len() {
            longest = word;
        }
    }
    Ok(longest.to_string())
}

/// Same scan as [`longest_word`] with a strictly-shorter comparison; the
/// initial best is the first word.
pub fn shortest_word(text: &str) -> Result<String, AnalysisError> {
    let mut words = text.split_whitespace();
    let mut shortest = words.next().ok_or(AnalysisError::InvalidInput)?;
    for word in words {
        if word.len() < shortest.len() {
            shortest = word;
        }
    }
    Ok(shortest.to_string())
}

/// Words occurring more than once, joined by single spaces in the frequency
/// table's first-seen order. No sorting.
pub fn repeated_words(text: &str) -> String {
    let table = word_frequency(text);
    table
        .entries()
        .filter(|(_, count)| *count > 1)
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(" ")
}
