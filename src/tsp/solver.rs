//! Top-level TSP solve: nearest neighbour, then simulated annealing.

use tracing::{debug, instrument};

use super::construction::nearest_neighbour;
use super::matrix::CostMatrix;
use super::moves;
use super::pool::{PooledTour, TourPool};
use crate::error::TspError;
use crate::random::{RandomSource, RngSource};
use crate::sa::{NoopObserver, SaConfig, SaObserver, SaProblem, SaRound, SaRunner};

/// Smallest tour length the move operators can perturb.
const MIN_ANNEALED_PATH: usize = 4;

impl SaProblem for TourPool<'_> {
    type Solution = PooledTour;

    fn cost(&self, tour: &mut PooledTour) -> f64 {
        tour.ensure_cost(self)
    }

    fn neighbour<R: RandomSource + ?Sized>(
        &mut self,
        tour: &PooledTour,
        rng: &mut R,
    ) -> PooledTour {
        moves::neighbour(self, tour, rng)
    }

    fn dispose(&mut self, tour: PooledTour) {
        self.reclaim(tour);
    }
}

/// The state of a solve after one annealing iteration.
#[derive(Debug, Clone, Copy)]
pub struct TourRound<'a> {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Number of reheats so far.
    pub reheat_count: usize,
    /// Temperature after this iteration's cooling step.
    pub temperature: f64,
    /// The current tour.
    pub tour: &'a [usize],
    /// Cost of `tour`.
    pub cost: f64,
}

/// Per-iteration callback.
pub type RoundCallback<'c> = dyn FnMut(&TourRound<'_>) + 'c;

/// Forwards driver rounds to a [`RoundCallback`] as tour slices.
struct ForwardRounds<'o, 'c> {
    callback: &'o mut RoundCallback<'c>,
}

impl<'m> SaObserver<TourPool<'m>> for ForwardRounds<'_, '_> {
    fn on_round(&mut self, pool: &TourPool<'m>, round: &SaRound<'_, PooledTour>) {
        (self.callback)(&TourRound {
            iteration: round.iteration,
            reheat_count: round.reheat_count,
            temperature: round.temperature,
            tour: pool.tour(round.solution),
            cost: round.cost,
        });
    }
}

/// Result of a TSP solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult {
    /// Best tour found: `n` nodes, or `n + 1` for a round trip.
    pub tour: Vec<usize>,
    /// Cost of `tour`.
    pub cost: f64,
    /// Whether annealing ran; `false` means `tour` is the nearest-neighbour tour.
    pub annealed: bool,
    /// Annealing iterations executed.
    pub iterations: usize,
    /// Temperature resets after the initial one.
    pub reheats: usize,
    /// Accepted moves, including improvements.
    pub accepted_moves: usize,
    /// Improving moves.
    pub improving_moves: usize,
    /// Temperature after the last iteration.
    pub final_temperature: f64,
}

/// Runs the nearest-neighbour heuristic followed by simulated annealing.
pub struct TspSolver;

impl TspSolver {
    /// Solves with a random source built from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::sa::SaConfig;
    /// use u_tsp::tsp::{CostMatrix, TspSolver};
    ///
    /// let matrix = CostMatrix::from_fn(6, |i, j| (i as f64 - j as f64).abs()).unwrap();
    /// let config = SaConfig::default().with_iterations(2_000).with_seed(42);
    ///
    /// let result = TspSolver::solve(&matrix, true, &config).unwrap();
    /// assert_eq!(result.tour.len(), 7);
    /// assert_eq!(result.cost, 10.0);
    /// ```
    pub fn solve(
        matrix: &CostMatrix,
        roundtrip: bool,
        config: &SaConfig,
    ) -> Result<TspResult, TspError> {
        let mut rng = RngSource::from_seed_option(config.seed);
        Self::solve_with(matrix, roundtrip, config, &mut rng, None)
    }

    /// Solves with an injected random source and an optional per-round
    /// callback.
    ///
    /// The callback runs synchronously once per iteration, in order. It is
    /// not called when annealing is skipped.
    #[instrument(
        skip_all,
        fields(nodes = matrix.node_count(), roundtrip = roundtrip, iterations = config.iterations)
    )]
    pub fn solve_with<R: RandomSource + ?Sized>(
        matrix: &CostMatrix,
        roundtrip: bool,
        config: &SaConfig,
        rng: &mut R,
        on_round: Option<&mut RoundCallback<'_>>,
    ) -> Result<TspResult, TspError> {
        config.validate()?;

        let mut pool = TourPool::new(matrix, roundtrip);
        let mut initial = nearest_neighbour(&mut pool);

        if config.iterations == 0 || pool.path_size() < MIN_ANNEALED_PATH {
            let cost = initial.ensure_cost(&pool);
            debug!(
                path_size = pool.path_size(),
                cost, "annealing skipped, returning nearest-neighbour tour"
            );
            return Ok(TspResult {
                tour: pool.tour(&initial).to_vec(),
                cost,
                annealed: false,
                iterations: 0,
                reheats: 0,
                accepted_moves: 0,
                improving_moves: 0,
                final_temperature: config.initial_temperature,
            });
        }

        let result = match on_round {
            Some(callback) => SaRunner::run(
                &mut pool,
                initial,
                config,
                rng,
                &mut ForwardRounds { callback },
            )?,
            None => SaRunner::run(&mut pool, initial, config, rng, &mut NoopObserver)?,
        };

        let tour = pool.tour(&result.best).to_vec();
        debug_assert!(is_valid_tour(&tour, matrix.node_count(), roundtrip));

        Ok(TspResult {
            tour,
            cost: result.best_cost,
            annealed: true,
            iterations: result.iterations,
            reheats: result.reheats,
            accepted_moves: result.accepted_moves,
            improving_moves: result.improving_moves,
            final_temperature: result.final_temperature,
        })
    }
}

/// Solves a TSP instance given as rows of a cost matrix.
///
/// Returns the best tour found: `n` node indices, or `n + 1` for a round
/// trip, which starts and ends at node 0. Open tours start at node 0 and
/// end at node `n - 1`.
///
/// Fails before any search if the matrix is empty, ragged, or contains a
/// non-finite cost, or if `config` is invalid.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
/// use u_tsp::tsp::solve_tsp;
///
/// let costs = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0], vec![3.0, 2.0, 0.0]];
/// let config = SaConfig::default().with_iterations(1_000).with_seed(1);
///
/// assert_eq!(solve_tsp(&costs, false, &config, None).unwrap(), vec![0, 1, 2]);
/// assert_eq!(solve_tsp(&costs, true, &config, None).unwrap(), vec![0, 2, 1, 0]);
/// ```
pub fn solve_tsp(
    cost_matrix: &[Vec<f64>],
    roundtrip: bool,
    config: &SaConfig,
    on_round: Option<&mut RoundCallback<'_>>,
) -> Result<Vec<usize>, TspError> {
    config.validate()?;
    let matrix = CostMatrix::from_rows(cost_matrix)?;
    let mut rng = RngSource::from_seed_option(config.seed);
    TspSolver::solve_with(&matrix, roundtrip, config, &mut rng, on_round).map(|r| r.tour)
}

/// Whether `tour` visits every node of an `n`-node instance exactly once,
/// starting at node 0 and, for a round trip, returning to it.
pub fn is_valid_tour(tour: &[usize], n: usize, roundtrip: bool) -> bool {
    let expected_len = n + usize::from(roundtrip);
    if n == 0 || tour.len() != expected_len || tour[0] != 0 {
        return false;
    }
    if roundtrip && tour[n] != 0 {
        return false;
    }
    let mut seen = vec![false; n];
    for &node in &tour[..n] {
        if node >= n || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}
