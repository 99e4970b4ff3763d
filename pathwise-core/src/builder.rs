//! Builder utilities for configuring [`Solver`] instances.

use std::time::Duration;

use crate::{Result, error::ConfigError, solver::Solver};

/// Configures and constructs [`Solver`] instances.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use pathwise_core::SolverBuilder;
///
/// let solver = SolverBuilder::new()
///     .with_deadline(Duration::from_secs(2))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.deadline(), Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    deadline: Option<Duration>,
}

impl SolverBuilder {
    /// Creates a builder with no deadline.
    ///
    /// # Examples
    /// ```
    /// use pathwise_core::SolverBuilder;
    ///
    /// assert_eq!(SolverBuilder::new().deadline(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the wall-clock time of a solve.
    ///
    /// The deadline is checked once per outer iteration, so a solve may
    /// overrun it by up to one `n²` sweep.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the configured deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Validates the configuration and constructs a [`Solver`].
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroDeadline`] when the deadline is zero.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    ///
    /// use pathwise_core::{ConfigError, PathwiseError, SolverBuilder};
    ///
    /// let err = SolverBuilder::new()
    ///     .with_deadline(Duration::ZERO)
    ///     .build()
    ///     .expect_err("zero deadline must fail");
    /// assert_eq!(err, PathwiseError::Config(ConfigError::ZeroDeadline));
    /// ```
    pub fn build(self) -> Result<Solver> {
        if self.deadline.is_some_and(|deadline| deadline.is_zero()) {
            return Err(ConfigError::ZeroDeadline.into());
        }
        Ok(Solver {
            deadline: self.deadline,
        })
    }
}
