use thiserror::Error;

/// Which quantity gates convergence of the Newton loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Converged when `|f(x) - y| < y_tol`.
    #[default]
    OnResidual,

    /// Converged when the last applied step satisfies `|dx| < x_tol`.
    OnStep,

    /// Converged when both the residual and step tests hold.
    OnBoth,
}

impl Mode {
    /// Returns true if this mode tests the step size and needs an x tolerance.
    #[must_use]
    pub fn uses_step(self) -> bool {
        matches!(self, Self::OnStep | Self::OnBoth)
    }

    /// Returns true if this mode tests the residual.
    #[must_use]
    pub fn uses_residual(self) -> bool {
        matches!(self, Self::OnResidual | Self::OnBoth)
    }
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("y_tol must be finite and positive, got {0}")]
    YTol(f64),

    #[error("x_tol must be finite and positive, got {0}")]
    XTol(f64),

    #[error("mode {0:?} requires an x_tol")]
    MissingXTol(Mode),
}

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    mode: Mode,
    y_tol: f64,
    x_tol: Option<f64>,
    max_iters: usize,
    record_history: bool,
}

impl Default for Config {
    /// Residual-only convergence at `1e-12` with a budget of 50 iterations.
    fn default() -> Self {
        Self {
            mode: Mode::OnResidual,
            y_tol: 1e-12,
            x_tol: None,
            max_iters: 50,
            record_history: false,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// `x_tol` may be `None` only for [`Mode::OnResidual`].
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is non-positive or non-finite, or if
    /// the mode tests the step size and no `x_tol` is given.
    pub fn new(
        mode: Mode,
        y_tol: f64,
        x_tol: Option<f64>,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !y_tol.is_finite() || y_tol <= 0.0 {
            return Err(ConfigError::YTol(y_tol));
        }
        match x_tol {
            Some(tol) if !tol.is_finite() || tol <= 0.0 => return Err(ConfigError::XTol(tol)),
            None if mode.uses_step() => return Err(ConfigError::MissingXTol(mode)),
            _ => {}
        }

        Ok(Self {
            mode,
            y_tol,
            x_tol,
            max_iters,
            record_history: false,
        })
    }

    /// Creates a residual-only config.
    ///
    /// # Errors
    ///
    /// Returns an error if `y_tol` is non-positive or non-finite.
    pub fn on_residual(y_tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Self::new(Mode::OnResidual, y_tol, None, max_iters)
    }

    /// Returns a copy that records the step applied at every iteration.
    #[must_use]
    pub fn with_history(self) -> Self {
        Self {
            record_history: true,
            ..self
        }
    }

    /// Returns a copy with step recording disabled.
    #[must_use]
    pub fn without_history(self) -> Self {
        Self {
            record_history: false,
            ..self
        }
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn y_tol(&self) -> f64 {
        self.y_tol
    }

    #[must_use]
    pub fn x_tol(&self) -> Option<f64> {
        self.x_tol
    }

    /// Returns the iteration budget.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if the solver records its step history.
    #[must_use]
    pub fn record_history(&self) -> bool {
        self.record_history
    }

    /// Applies the convergence predicate for the configured mode.
    #[must_use]
    pub fn is_converged(&self, residual: f64, step: f64) -> bool {
        let residual_ok = residual.abs() < self.y_tol;
        // Construction guarantees x_tol is present when the mode needs it.
        let step_ok = self.x_tol.is_some_and(|tol| step.abs() < tol);

        match self.mode {
            Mode::OnResidual => residual_ok,
            Mode::OnStep => step_ok,
            Mode::OnBoth => residual_ok && step_ok,
        }
    }
}
