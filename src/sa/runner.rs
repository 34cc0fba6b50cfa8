//! SA execution loop.
//!
//! # Algorithm
//!
//! For each of `N` iterations:
//!
//! 1. Reset the temperature to `T0` every `reheat_interval` iterations
//! 2. Ask the problem for a neighbour of the current solution
//! 3. Accept it if it is cheaper, otherwise accept with the Metropolis
//!    probability `exp(-delta / T)`; dispose whichever handle lost
//! 4. Cool geometrically, `T = T * cooling_factor`
//! 5. Report the round to the observer

use std::mem;

use tracing::{debug, info, trace};

use super::config::SaConfig;
use super::types::{SaObserver, SaProblem, SaRound};
use crate::error::SaConfigError;
use crate::random::RandomSource;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S> {
    /// The best solution found. Still owned by the problem's storage.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbour evaluations).
    pub iterations: usize,

    /// Number of temperature resets after the initial one.
    pub reheats: usize,

    /// Temperature after the last iteration.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost sampled every `history_interval` iterations.
    pub cost_history: Vec<f64>,
}

/// Metropolis acceptance probability for a move that changes the cost by
/// `delta` at temperature `temperature`.
///
/// Always in `[0, 1]`: improvements give 1, a frozen (zero, negative or
/// NaN) temperature gives 0 for any non-improving move, and a NaN
/// intermediate collapses to 0.
#[inline]
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if !(temperature > 0.0) {
        return 0.0;
    }
    let p = (-delta / temperature).exp();
    if p.is_nan() {
        0.0
    } else {
        p.min(1.0)
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA starting from `initial`.
    ///
    /// The configuration is validated before the problem is touched. On
    /// return, every handle other than [`SaResult::best`] has been disposed.
    pub fn run<P, R, O>(
        problem: &mut P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SaResult<P::Solution>, SaConfigError>
    where
        P: SaProblem,
        R: RandomSource + ?Sized,
        O: SaObserver<P> + ?Sized,
    {
        config.validate()?;
        let reheat_interval = config.effective_reheat_interval();

        let mut current = initial;
        let mut current_cost = problem.cost(&mut current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut reheat_count = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history =
            Vec::with_capacity(config.iterations / config.history_interval + 2);
        cost_history.push(best_cost);

        for iteration in 0..config.iterations {
            if iteration % reheat_interval == 0 {
                if iteration > 0 {
                    reheat_count += 1;
                    trace!(iteration, reheat_count, "reheat");
                }
                temperature = config.initial_temperature;
            }

            let mut candidate = problem.neighbour(&current, rng);
            let candidate_cost = problem.cost(&mut candidate);

            if candidate_cost < current_cost {
                improving_moves += 1;
                accepted_moves += 1;

                let previous = mem::replace(&mut current, candidate);
                if previous != best {
                    problem.dispose(previous);
                }
                current_cost = candidate_cost;

                if current_cost < best_cost {
                    let previous_best = mem::replace(&mut best, current.clone());
                    if previous_best != current {
                        problem.dispose(previous_best);
                    }
                    best_cost = current_cost;
                    debug!(iteration, best_cost, "new best");
                }
            } else if rng.real()
                < acceptance_probability(candidate_cost - current_cost, temperature)
            {
                accepted_moves += 1;

                let previous = mem::replace(&mut current, candidate);
                if previous != best {
                    problem.dispose(previous);
                }
                current_cost = candidate_cost;
            } else {
                problem.dispose(candidate);
            }

            temperature *= config.cooling_factor;

            observer.on_round(
                problem,
                &SaRound {
                    iteration,
                    reheat_count,
                    temperature,
                    solution: &current,
                    cost: current_cost,
                },
            );

            if (iteration + 1) % config.history_interval == 0 {
                cost_history.push(best_cost);
            }
        }

        if current != best {
            problem.dispose(current);
        }

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        info!(
            iterations = config.iterations,
            reheats = reheat_count,
            accepted_moves,
            improving_moves,
            best_cost,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations: config.iterations,
            reheats: reheat_count,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
