//! Canned Sample Corpus
//!
//! A fixed set of sample documents and the generator that draws one of them at
//! random. The random source is injected and seedable so tests can pin the
//! chosen sample deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// The fixed corpus served by `generateText`.
pub(crate) const SAMPLE_TEXTS: [&str; 3] = [
    "A key-value store keeps data as pairs of keys and values, trading rich query \
languages for predictable latency and a small operational surface. Reads and writes \
address a single key, which makes the access pattern easy to reason about and easy \
to shard: hash the key, pick a bucket, and the bucket owns the entry. In-memory \
variants push this further by dropping durability entirely, holding the whole data \
set in process memory and accepting that a restart starts from nothing. That \
trade-off suits caches, session state, and computed results that can always be \
rebuilt from their inputs. The interesting engineering problems appear once several \
writers touch the store at the same time: either the structure itself must tolerate \
concurrent mutation, or the application must partition the key space so that no two \
writers ever collide on the same entry.",
    "Concurrency and parallelism are related but distinct ideas. A concurrent program \
structures its work as independent tasks that may be interleaved, while a parallel \
program actually executes work at the same physical instant on multiple cores. \
Splitting a computation into tasks does not guarantee it runs faster; the split \
adds scheduling and synchronization costs that the work itself must amortize. A \
common way to judge whether the split paid off is to measure the same workload \
twice, once sequentially and once with the tasks running freely, and compare the \
elapsed times. The ratio between them is called the speedup. For small inputs the \
ratio often lands below one, because spawning and joining the tasks costs more \
than the computation they carry, and only as the input grows does the parallel \
version pull ahead.",
    "Tokenization is the first step of almost every text-processing pipeline. The \
simplest scheme splits the input on runs of whitespace and treats every segment \
as a word, punctuation attached and case preserved. Crude as it is, the scheme is \
fast, allocation-friendly, and completely predictable, which makes it a good \
foundation for counting statistics: word frequencies, repeated words, extremes of \
word length. More elaborate pipelines normalize case, strip punctuation, stem \
suffixes, and filter stop words before counting, but each refinement embeds a \
linguistic assumption that may not hold for the next language or the next corpus. \
Keeping the tokenizer primitive keeps the statistics honest; the numbers describe \
the text exactly as it arrived.",
];

/// Draws sample documents from the fixed corpus.
///
/// The corpus is selected by index, so the returned string's length depends
/// only on which sample the RNG picks, never on the caller's requested length.
pub struct TextGenerator {
    rng: Mutex<StdRng>,
}

impl TextGenerator {
    /// Entropy-seeded generator for production use.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator; tests pin the drawn sample with this.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns one corpus entry.
    ///
    /// `length` is accepted for interface compatibility but not used to trim
    /// or pad the result.
    pub fn generate(&self, _length: usize) -> String {
        let index = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .gen_range(0..SAMPLE_TEXTS.len());
        SAMPLE_TEXTS[index].to_string()
    }
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self::new()
    }
}
