use crate::error::{Result, SketchGenError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed ordered pool of render API keys with a round-robin cursor.
///
/// Every checkout advances the cursor, including checkouts whose request
/// later fails, so usage is spread rather than perfectly balanced. The
/// cursor is atomic; concurrent checkouts stay in range but may observe
/// interleaved positions.
pub struct KeyPool {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl KeyPool {
    pub fn new(keys: Vec<String>) -> Result<Self> {
        if keys.is_empty() {
            return Err(SketchGenError::ConfigError(
                "at least one render API key is required".into(),
            ));
        }

        Ok(Self {
            keys,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Returns the key at the cursor and advances the cursor modulo pool
    /// size.
    pub fn next_key(&self) -> &str {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        &self.keys[index]
    }

    /// Current cursor position, already reduced modulo pool size.
    pub fn position(&self) -> usize {
        self.cursor.load(Ordering::Relaxed) % self.keys.len()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
