//! Traveling salesman solver built on a generic simulated-annealing driver.
//!
//! - **Simulated Annealing (SA)**: single-solution trajectory optimization
//!   with geometric cooling and periodic reheating, generic over the
//!   solution handle type.
//! - **TSP**: nearest-neighbour construction, pooled tour storage, and
//!   2-opt / translate / swap neighbourhood moves over an arbitrary,
//!   possibly asymmetric, cost matrix.
//!
//! # Example
//!
//! ```
//! use u_tsp::sa::SaConfig;
//! use u_tsp::tsp::solve_tsp;
//!
//! let costs = vec![
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![1.0, 0.0, 6.0, 4.0],
//!     vec![15.0, 7.0, 0.0, 8.0],
//!     vec![6.0, 3.0, 12.0, 0.0],
//! ];
//! let config = SaConfig::default().with_iterations(10_000).with_seed(42);
//!
//! let tour = solve_tsp(&costs, true, &config, None).unwrap();
//! assert_eq!(tour.len(), 5);
//! assert_eq!((tour[0], tour[4]), (0, 0));
//! ```

pub mod error;
pub mod random;
pub mod sa;
pub mod tsp;

pub use error::{MatrixError, SaConfigError, TspError, TsplibError};
