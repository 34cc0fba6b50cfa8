//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases with the temperature, allowing the search to escape local
//! optima. Temperature cools geometrically and is periodically reset
//! ("reheated") to its initial value.
//!
//! The driver is generic over [`SaProblem`], whose solutions are handles
//! that the driver explicitly disposes once superseded, and over an
//! [`SaObserver`] that sees every round.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{acceptance_probability, SaResult, SaRunner};
pub use types::{NoopObserver, SaObserver, SaProblem, SaRound};
