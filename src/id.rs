//! Chapter identifier sources.
//!
//! The parser asks for one fresh id per emitted chapter. Ids only need to be
//! unique within a session, so the default source pairs a millisecond
//! timestamp with a short random suffix.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Supplies identifiers for newly parsed chapters.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// `"{unix_millis}-{base36 suffix}"` ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
            .collect();
        format!("{millis}-{suffix}")
    }
}

/// Deterministic `"{prefix}-{n}"` ids, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("chapter")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
