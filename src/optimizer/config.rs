//! Optimizer configuration.

/// Configuration for a slot search.
///
/// # Examples
///
/// ```
/// use conference_slots::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_total_duration(6)
///     .with_parallel(false);
/// assert_eq!(config.total_duration, 6);
/// assert_eq!(config.slot_count, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    /// Length every partition must sum to, in whole hours.
    pub total_duration: u32,
    /// Requested number of slots.
    ///
    /// Accepted and validated but not used to bound the search: every slot
    /// count from `total_duration` down to 1 is always explored.
    pub slot_count: usize,
    /// Whether to resolve partitions in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            total_duration: 8,
            slot_count: 3,
            parallel: true,
        }
    }
}

impl OptimizerConfig {
    /// Default configuration with the given total duration.
    pub fn new(total_duration: u32) -> Self {
        Self {
            total_duration,
            ..Self::default()
        }
    }

    pub fn with_total_duration(mut self, hours: u32) -> Self {
        self.total_duration = hours;
        self
    }

    pub fn with_slot_count(mut self, slots: usize) -> Self {
        self.slot_count = slots;
        self
    }

    /// Enables or disables parallel resolution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.total_duration == 0 {
            return Err("total_duration must be positive".into());
        }
        if self.slot_count == 0 {
            return Err("slot_count must be positive".into());
        }
        Ok(())
    }
}
