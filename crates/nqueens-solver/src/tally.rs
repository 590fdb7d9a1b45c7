use std::{
    iter::Sum,
    ops::{Add, AddAssign},
    time::Duration,
};

/// Partial result of one or more units of search work.
///
/// Every unit of work owns its tally; tallies are combined with `+` or
/// [`Sum`] at join points, so no counter is shared while the search runs.
///
/// `solutions` is the raw doubled count. [`Tally::finish`] applies the
/// single-queen correction.
///
/// # Examples
///
/// ```
/// use nqueens_solver::Tally;
///
/// let parts = [Tally::new(4, 10, 1), Tally::new(6, 12, 1)];
/// let total: Tally = parts.into_iter().sum();
/// assert_eq!(total, Tally::new(10, 22, 2));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Completed boards found, counted twice each for the mirrored half.
    pub solutions: u64,
    /// Queen placements performed (diagnostic).
    pub placements: u64,
    /// Units of work executed.
    pub tasks: u64,
}

impl Tally {
    /// Creates a tally from its parts.
    #[must_use]
    pub const fn new(solutions: u64, placements: u64, tasks: u64) -> Self {
        Self {
            solutions,
            placements,
            tasks,
        }
    }

    /// Turns the combined tally of a whole run into its final summary.
    ///
    /// A 1×1 board has exactly one solution, which is its own mirror image, so
    /// the doubled count is halved for `size == 1`.
    #[must_use]
    pub fn finish(self, strategy: &'static str, size: usize, elapsed: Duration) -> SearchSummary {
        let solutions = if size == 1 {
            self.solutions / 2
        } else {
            self.solutions
        };
        SearchSummary {
            strategy,
            size,
            solutions,
            placements: self.placements,
            tasks: self.tasks,
            elapsed,
        }
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.solutions += rhs.solutions;
        self.placements += rhs.placements;
        self.tasks += rhs.tasks;
    }
}

impl Sum for Tally {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::default(), Add::add)
    }
}

/// Final result of counting the solutions of one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    /// Name of the strategy that produced the result.
    pub strategy: &'static str,
    /// Board size.
    pub size: usize,
    /// Number of distinct solutions.
    pub solutions: u64,
    /// Queen placements performed (diagnostic).
    pub placements: u64,
    /// Units of work executed.
    pub tasks: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}
