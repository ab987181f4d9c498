//! `RunStats` tracks what happened to each line of the word list during one
//! scan.

use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub raw_lines: u64,
    pub empty: u64,
    pub too_short: u64,
    pub too_long: u64,
    pub duplicates: u64,
    pub no_vector: u64,
    pub scored: u64,
    /// True when scanning stopped at the word cap.
    pub capped: bool,
    /// Targets added by the self-score patch because the list lacked them.
    pub inserted_targets: u64,
    /// Targets the oracle has no vector for.
    pub missing_target_vectors: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_line(&mut self) {
        self.raw_lines += 1;
    }

    pub fn log_scored(&mut self) {
        self.scored += 1;
    }

    pub fn report(&self) {
        info!(
            "Processed {} lines: scored {}, no vector {}, duplicates {}, too short {}, too long {}, empty {}{}",
            self.raw_lines,
            self.scored,
            self.no_vector,
            self.duplicates,
            self.too_short,
            self.too_long,
            self.empty,
            if self.capped { " (stopped at word cap)" } else { "" }
        );
        if self.inserted_targets > 0 {
            info!("{} target words were missing from the list and inserted", self.inserted_targets);
        }
        if self.missing_target_vectors > 0 {
            info!("{} target words have no vector", self.missing_target_vectors);
        }
    }
}
