//! Traveling Salesman Problem over an arbitrary cost matrix.
//!
//! A greedy nearest-neighbour tour seeds the [`sa`](crate::sa) driver,
//! which perturbs it with three segment moves (reversal, rotation, swap)
//! over tours stored in a reusable [`TourPool`].
//!
//! Tours start at node 0. A round trip returns to node 0 and has `n + 1`
//! positions; an open tour has `n` positions and ends at node `n - 1`.
//! Instances with fewer than four positions, or a zero iteration budget,
//! are answered by the nearest-neighbour tour alone.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

mod construction;
mod matrix;
mod moves;
mod pool;
mod solver;
pub mod tsplib;

pub use construction::nearest_neighbour;
pub use matrix::CostMatrix;
pub use moves::{neighbour, random_segment, swap, translate, two_opt, TourMove};
pub use pool::{PooledTour, TourPool};
pub use solver::{is_valid_tour, solve_tsp, RoundCallback, TourRound, TspResult, TspSolver};
