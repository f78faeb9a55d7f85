//! Move generator configuration.

/// Bounds on the work the edge-exchange generator does for one proposal.
///
/// # Examples
///
/// ```
/// use u_circuit::moves::MoveConfig;
///
/// let config = MoveConfig::default()
///     .with_max_propagation_rounds(16)
///     .with_max_consecutive_retries(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveConfig {
    /// Narrowing rounds allowed before a move attempt is abandoned.
    pub max_propagation_rounds: usize,

    /// Consecutive abandoned attempts tolerated before the proposal fails
    /// with [`MoveError::RetriesExhausted`](crate::error::MoveError::RetriesExhausted).
    pub max_consecutive_retries: usize,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            max_propagation_rounds: 8,
            max_consecutive_retries: 100,
        }
    }
}

impl MoveConfig {
    pub fn with_max_propagation_rounds(mut self, n: usize) -> Self {
        self.max_propagation_rounds = n;
        self
    }

    pub fn with_max_consecutive_retries(mut self, n: usize) -> Self {
        self.max_consecutive_retries = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_propagation_rounds == 0 {
            return Err("max_propagation_rounds must be at least 1".into());
        }
        if self.max_consecutive_retries == 0 {
            return Err("max_consecutive_retries must be at least 1".into());
        }
        Ok(())
    }
}
