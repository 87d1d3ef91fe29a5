use invnewton_core::{DomainBounds, Function, Observer};

use crate::{
    batch::{BatchResult, Dispatcher},
    fit::{self, FitError, FitOrder},
    newton::{self, Action, Config, Event, Solution},
    seed::{Seed, SeedError, SeedTable},
};

/// A function bundled with its seed table and a batch dispatcher.
///
/// The inverter owns everything needed to answer `x = f⁻¹(y)` for one
/// function, so callers only pass targets and a solver [`Config`].
#[derive(Debug)]
pub struct Inverter<F> {
    function: F,
    table: SeedTable,
    dispatcher: Dispatcher,
}

impl<F: Function> Inverter<F> {
    /// Creates an inverter from a function and a prebuilt seed table.
    ///
    /// Batches run on rayon's global pool until a dispatcher is supplied
    /// with [`Inverter::with_dispatcher`].
    #[must_use]
    pub fn new(function: F, table: SeedTable) -> Self {
        Self {
            function,
            table,
            dispatcher: Dispatcher::global(),
        }
    }

    /// Fits a seed table for `function` and wraps both in an inverter.
    ///
    /// See [`fit::build`] for how the table is constructed.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be fitted.
    pub fn fit(
        function: F,
        x_range: [f64; 2],
        knots: usize,
        order: FitOrder,
    ) -> Result<Self, FitError> {
        let table = fit::build(&function, x_range, knots, order)?;
        Ok(Self::new(function, table))
    }

    /// Replaces the dispatcher used for batch solves.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    #[must_use]
    pub fn function(&self) -> &F {
        &self.function
    }

    #[must_use]
    pub fn table(&self) -> &SeedTable {
        &self.table
    }

    #[must_use]
    pub fn bounds(&self) -> &DomainBounds {
        self.table.bounds()
    }

    /// Returns the seed table's initial guess at `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if `y` is outside the table's domain.
    pub fn seed(&self, y: f64) -> Result<Seed, SeedError> {
        self.table.seed(y)
    }

    /// Inverts the function at `y`.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn solve(&self, y: f64, config: &Config) -> Result<Solution, newton::Error> {
        newton::solve_unobserved(&self.function, &self.table, y, config)
    }

    /// Inverts the function at `y`, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn solve_observed<Obs>(
        &self,
        y: f64,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, newton::Error>
    where
        Obs: Observer<Event, Action>,
    {
        newton::solve(&self.function, &self.table, y, config, observer)
    }

    /// Inverts every element of `ys` in parallel.
    ///
    /// See [`Dispatcher::solve_batch`].
    #[must_use]
    pub fn solve_batch(&self, ys: &[f64], config: &Config) -> BatchResult
    where
        F: Sync,
    {
        self.dispatcher
            .solve_batch(&self.function, &self.table, ys, config)
    }

    /// Consumes the inverter and returns its function and table.
    pub fn into_parts(self) -> (F, SeedTable) {
        (self.function, self.table)
    }
}
