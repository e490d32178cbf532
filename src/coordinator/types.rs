use crate::analysis::metrics::{self, AnalysisError};

// --- Fixed store keys ---

/// Character count excluding whitespace.
pub const KEY_LETTER_COUNT: &str = "letterCount";
/// First word of maximal length.
pub const KEY_LONGEST_WORD: &str = "longestWord";
/// First word of minimal length.
pub const KEY_SHORTEST_WORD: &str = "shortestWord";
/// Words occurring more than once, space-joined.
pub const KEY_REPEATED_WORD: &str = "repeatedWord";
/// Word-frequency table rendered as a JSON object.
pub const KEY_FREQUENCY: &str = "frequency";
/// Wall-clock nanoseconds of the sequential pass.
pub const KEY_SEQUENTIAL_TIME: &str = "sequentialTime";
/// Wall-clock nanoseconds of the concurrent pass.
pub const KEY_THREADED_TIME: &str = "threadedTime";
/// Ratio of sequential to concurrent duration.
pub const KEY_SPEEDUP: &str = "speedup";

/// One of the five text statistics.
///
/// Each metric owns exactly one store key, so the five concurrent tasks of the
/// parallel pass never write to the same entry. That key disjointness is the
/// correctness invariant that makes the concurrent writes safe without any
/// per-key locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    LetterCount,
    LongestWord,
    ShortestWord,
    RepeatedWord,
    Frequency,
}

impl Metric {
    /// The five metrics in the order the sequential pass computes them.
    pub const ALL: [Metric; 5] = [
        Metric::LetterCount,
        Metric::LongestWord,
        Metric::ShortestWord,
        Metric::RepeatedWord,
        Metric::Frequency,
    ];

    /// The fixed store key this metric writes to.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::LetterCount => KEY_LETTER_COUNT,
            Metric::LongestWord => KEY_LONGEST_WORD,
            Metric::ShortestWord => KEY_SHORTEST_WORD,
            Metric::RepeatedWord => KEY_REPEATED_WORD,
            Metric::Frequency => KEY_FREQUENCY,
        }
    }

    /// Computes the metric over `text` and renders it to its stored string form.
    pub fn compute(&self, text: &str) -> Result<String, AnalysisError> {
        match self {
            Metric::LetterCount => Ok(metrics::letter_count(text).to_string()),
            Metric::LongestWord => metrics::longest_word(text),
            Metric::ShortestWord => metrics::shortest_word(text),
            Metric::RepeatedWord => Ok(metrics::repeated_words(text)),
            Metric::Frequency => {
                let table = metrics::word_frequency(text);
                // String keys and integer counts only; this cannot fail.
                Ok(serde_json::to_string(&table)
                    .expect("frequency table serializes infallibly"))
            }
        }
    }
}
