use tracing::{info, warn};

use crate::store::KeyValueStore;

/// Current and best score. The best score survives restarts and is written
/// through to the store whenever it is beaten.
pub struct ScoreBoard {
    score: u32,
    best: u32,
    key: String,
    store: Box<dyn KeyValueStore>,
}

impl ScoreBoard {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut board = Self {
            score: 0,
            best: 0,
            key: key.into(),
            store,
        };
        board.reset();
        board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Zero the score and reload the best score from the store.
    /// Absent or unparsable values count as 0.
    pub fn reset(&mut self) {
        self.score = 0;
        self.best = self
            .store
            .get(&self.key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0);
    }

    /// Count one eaten food. Returns true when this set a new best score.
    pub fn record_eat(&mut self) -> bool {
        self.score += 1;
        if self.score <= self.best {
            return false;
        }

        self.best = self.score;
        info!(best = self.best, "new_best_score");
        if let Err(error) = self.store.set(&self.key, &self.best.to_string()) {
            warn!(error = %format!("{error:#}"), "best_score_not_saved");
        }
        true
    }
}
