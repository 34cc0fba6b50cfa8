//! Core traits for Simulated Annealing.

use crate::random::RandomSource;

/// Defines a Simulated Annealing problem over explicitly managed solutions.
///
/// Solutions are lightweight handles into storage owned by the problem
/// (an arena, a pool, or simply the value itself). The driver asks the
/// problem for neighbours, compares their costs, and hands back every
/// handle it no longer references through [`dispose`](SaProblem::dispose).
///
/// Two handles compare equal when they refer to the same storage. The
/// driver relies on this to avoid disposing a solution that is still held
/// as both "current" and "best".
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use u_tsp::random::RandomSource;
/// use u_tsp::sa::SaProblem;
///
/// /// Minimizes `(x - 7)^2` over the integers, one step at a time.
/// struct Walk;
///
/// impl SaProblem for Walk {
///     type Solution = i64;
///
///     fn cost(&self, x: &mut i64) -> f64 {
///         ((*x - 7) * (*x - 7)) as f64
///     }
///
///     fn neighbour<R: RandomSource + ?Sized>(&mut self, x: &i64, rng: &mut R) -> i64 {
///         if rng.real() < 0.5 { x - 1 } else { x + 1 }
///     }
///
///     fn dispose(&mut self, _x: i64) {}
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem {
    /// The solution handle type.
    type Solution: Clone + PartialEq;

    /// Returns the cost of a solution. Lower is better.
    ///
    /// Takes the handle mutably so that implementations may cache the
    /// value inside it on first access.
    fn cost(&self, solution: &mut Self::Solution) -> f64;

    /// Generates a neighbour of `solution` as a new, independently owned
    /// handle. The source handle is left untouched.
    fn neighbour<R: RandomSource + ?Sized>(
        &mut self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Self::Solution;

    /// Releases a handle the driver will never reference again.
    fn dispose(&mut self, solution: Self::Solution);
}

/// Snapshot of one completed SA iteration.
#[derive(Debug)]
pub struct SaRound<'a, S> {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Number of reheats so far; the reset at iteration 0 is reheat 0.
    pub reheat_count: usize,
    /// Temperature after this iteration's cooling step.
    pub temperature: f64,
    /// The current solution after the accept/reject decision.
    pub solution: &'a S,
    /// Cost of `solution`.
    pub cost: f64,
}

/// Receives a [`SaRound`] after every iteration, synchronously and in order.
///
/// Observers get shared access to the problem only, so they can read the
/// current solution but cannot disturb the run.
pub trait SaObserver<P: SaProblem + ?Sized> {
    fn on_round(&mut self, problem: &P, round: &SaRound<'_, P::Solution>);
}

/// Observer that ignores every round.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<P: SaProblem + ?Sized> SaObserver<P> for NoopObserver {
    fn on_round(&mut self, _problem: &P, _round: &SaRound<'_, P::Solution>) {}
}
