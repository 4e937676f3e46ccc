//! Session construction settings.
use crate::board::DEFAULT_BOARD_SIZE;

/// Settings used to start a `GameSession`.
///
/// `size` plays two roles: the grid size of a freshly generated board, and the
/// expected size of an externally supplied one. When it is `None`, generated
/// boards use `DEFAULT_BOARD_SIZE` and supplied boards are accepted at any size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Requested grid size.
    pub size: Option<usize>,
    /// Seed for the tile spawner. `None` draws a seed from the OS.
    pub seed: Option<u64>,
    /// Score the session starts from.
    pub initial_score: u64,
}

impl SessionConfig {
    /// Config for a generated board of the given size.
    pub fn with_size(size: usize) -> Self {
        SessionConfig {
            size: Some(size),
            ..Default::default()
        }
    }

    /// Builder-style seed setter.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Grid size to use when generating a board.
    pub fn generated_size(&self) -> usize {
        self.size.unwrap_or(DEFAULT_BOARD_SIZE)
    }
}
