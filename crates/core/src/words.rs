//! Word corpus, custom keyword ingestion, and the selection pool.
//!
//! The pool a session draws from is the built-in corpus unioned with any
//! custom keywords extracted from user-supplied text. Pools are immutable once
//! built and cheap to clone, so several sessions can share one.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::error::CipherError;
use crate::rng::RandomSource;
use crate::types::{MAX_KEYWORDS_PER_INGEST, MIN_WORD_LEN};

/// Built-in corpus.
pub const BUILTIN_WORDS: &[&str] = &[
    "ALGORITHM",
    "BANDWIDTH",
    "CYBERPUNK",
    "DATABASE",
    "ENCRYPTION",
    "FIREWALL",
    "GIGABYTE",
    "HARDWARE",
    "INTERFACE",
    "JAVASCRIPT",
    "KERNEL",
    "LATENCY",
    "MALWARE",
    "NETWORK",
    "OPERATING",
    "PROTOCOL",
    "QUANTUM",
    "RUNTIME",
    "SERVER",
    "TERMINAL",
    "MAINFRAME",
    "BACKDOOR",
    "DECRYPT",
    "BINARY",
    "HEXADECIMAL",
    "SYNTAX",
    "COMPILE",
    "DEBUGGER",
    "ETHERNET",
    "FIRMWARE",
    "GATEWAY",
    "HACKER",
    "IPADDRESS",
    "KEYLOGGER",
    "LOGICBOMB",
    "MEMORY",
    "NANOTECH",
    "OVERCLOCK",
    "PACKET",
    "PHISHING",
    "ROOTKIT",
    "SPYWARE",
    "TROJAN",
    "UPLOAD",
    "VIRTUAL",
    "WIRELESS",
    "ZERODAY",
    "AUTHENTICATE",
    "BLOCKCHAIN",
    "CLOUD",
];

fn keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u:\b)[a-zA-Z]{5,}(?-u:\b)").expect("keyword pattern is valid"))
}

/// Whether `word` can appear in a pool: upper-case ASCII letters, at least
/// [`MIN_WORD_LEN`] long.
pub fn is_valid_word(word: &str) -> bool {
    word.len() >= MIN_WORD_LEN && word.bytes().all(|b| b.is_ascii_uppercase())
}

/// Extract puzzle keywords from arbitrary text.
///
/// Runs of five or more Latin letters on ASCII word boundaries (any
/// non-ASCII character separates words) are upper-cased,
/// deduplicated in first-seen order, and capped at
/// [`MAX_KEYWORDS_PER_INGEST`].
///
/// ```
/// use cipher_terminal_core::words::extract_keywords;
///
/// let words = extract_keywords("fn main() { let socket = bind(); socket.listen(); }");
/// assert_eq!(words, vec!["SOCKET", "LISTEN"]);
/// ```
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    keyword_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_uppercase())
        .filter(|w| seen.insert(w.clone()))
        .take(MAX_KEYWORDS_PER_INGEST)
        .collect()
}

/// Running set of user-supplied keywords.
///
/// Ingestions are unioned into the pool, never replacing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomPool {
    words: Vec<String>,
}

impl CustomPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `words` into the pool. Tokens are upper-cased; anything that is
    /// still not a valid word is dropped. Returns how many were new.
    pub fn merge<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.words.len();
        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();
            if is_valid_word(&word) && !self.words.contains(&word) {
                self.words.push(word);
            }
        }
        self.words.len() - before
    }

    /// Extract keywords from `text` and merge them. Returns how many were new.
    pub fn ingest(&mut self, text: &str) -> usize {
        self.merge(extract_keywords(text))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Immutable selection pool: corpus ∪ custom words, deduplicated.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Arc<[String]>,
    custom_count: usize,
}

impl WordPool {
    /// Built-in corpus plus `custom`.
    pub fn with_custom(custom: &CustomPool) -> Result<Self, CipherError> {
        Self::from_parts(BUILTIN_WORDS, custom)
    }

    /// Arbitrary corpus plus `custom`.
    ///
    /// Fails with [`CipherError::EmptyWordPool`] if the union is empty, so no
    /// session can ever be built on an empty pool.
    pub fn from_parts(corpus: &[&str], custom: &CustomPool) -> Result<Self, CipherError> {
        let mut seen = HashSet::new();
        let mut words = Vec::with_capacity(corpus.len() + custom.len());
        for word in corpus.iter().copied() {
            if seen.insert(word) {
                words.push(word.to_string());
            }
        }
        let mut custom_count = 0;
        for word in custom.words() {
            if seen.insert(word.as_str()) {
                words.push(word.clone());
                custom_count += 1;
            }
        }

        if words.is_empty() {
            return Err(CipherError::EmptyWordPool);
        }

        Ok(Self {
            words: words.into(),
            custom_count,
        })
    }

    /// Draw a word uniformly.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction.
        let idx = rng.next_range(self.words.len() as u32) as usize;
        &self.words[idx]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of custom words that were not already in the corpus.
    pub fn custom_count(&self) -> usize {
        self.custom_count
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
            custom_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_builtin_corpus_is_valid() {
        assert!(!BUILTIN_WORDS.is_empty());
        for word in BUILTIN_WORDS {
            assert!(is_valid_word(word), "invalid corpus word: {}", word);
        }
    }

    #[test]
    fn test_extract_keywords_filters_short_and_mixed_tokens() {
        let text = "The quick brown foxes jumped over lazy dogs; x86_64 ptr2 kernel!";
        let words = extract_keywords(text);
        assert_eq!(words, vec!["QUICK", "BROWN", "FOXES", "JUMPED", "KERNEL"]);
    }

    #[test]
    fn test_extract_keywords_splits_on_non_ascii() {
        let words = extract_keywords("Übermensch naïveword plain");
        assert_eq!(words, vec!["BERMENSCH", "VEWORD", "PLAIN"]);
    }

    #[test]
    fn test_extract_keywords_dedupes_case_insensitively() {
        let words = extract_keywords("Socket socket SOCKET sockets");
        assert_eq!(words, vec!["SOCKET", "SOCKETS"]);
    }

    #[test]
    fn test_extract_keywords_cap() {
        // 26 * 26 distinct five-letter tokens
        let mut text = String::new();
        for a in b'a'..=b'z' {
            for b in b'a'..=b'z' {
                text.push_str(&format!("abc{}{} ", a as char, b as char));
            }
        }
        assert_eq!(extract_keywords(&text).len(), MAX_KEYWORDS_PER_INGEST);
    }

    #[test]
    fn test_custom_pool_merge_is_union() {
        let mut pool = CustomPool::new();
        assert_eq!(pool.merge(["router", "SWITCH"]), 2);
        assert_eq!(pool.merge(["ROUTER", "ab", "proxy9"]), 0);
        assert_eq!(pool.merge(["daemon"]), 1);
        assert_eq!(pool.words(), &["ROUTER", "SWITCH", "DAEMON"]);
    }

    #[test]
    fn test_custom_pool_ingest() {
        let mut pool = CustomPool::new();
        let added = pool.ingest("def handler(request): return response");
        assert_eq!(added, 4);
        assert_eq!(pool.words(), &["HANDLER", "REQUEST", "RETURN", "RESPONSE"]);
        assert_eq!(pool.ingest("return handler"), 0);
    }

    #[test]
    fn test_word_pool_union_dedupes() {
        let mut custom = CustomPool::new();
        custom.merge(["KERNEL", "DAEMON"]);
        let pool = WordPool::with_custom(&custom).unwrap();
        assert_eq!(pool.len(), BUILTIN_WORDS.len() + 1);
        assert_eq!(pool.custom_count(), 1);
        assert!(pool.contains("DAEMON"));
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let err = WordPool::from_parts(&[], &CustomPool::new()).unwrap_err();
        assert_eq!(err, CipherError::EmptyWordPool);
    }

    #[test]
    fn test_custom_only_pool() {
        let mut custom = CustomPool::new();
        custom.merge(["DAEMON"]);
        let pool = WordPool::from_parts(&[], &custom).unwrap();
        let mut rng = SimpleRng::new(4);
        assert_eq!(pool.pick(&mut rng), "DAEMON");
    }

    #[test]
    fn test_pick_draws_from_pool() {
        let pool = WordPool::default();
        let mut rng = SimpleRng::new(42);
        for _ in 0..100 {
            assert!(pool.contains(pool.pick(&mut rng)));
        }
    }

    #[test]
    fn test_pool_clone_shares_storage() {
        let pool = WordPool::default();
        let other = pool.clone();
        assert!(Arc::ptr_eq(&pool.words, &other.words));
    }
}
