//! tsp-planner
//!
//! Exact round-trip planning over small sets of cities.

pub mod error;
pub mod haversine;
pub mod matrix;
pub mod osrm;
pub mod report;
pub mod solver;
pub mod traits;

pub use error::{LocationsError, PlanError, ProviderError, ValidationError};
pub use matrix::DistanceMatrix;
pub use solver::{plan, plan_batch, solve, SolveOptions, Tour, TourResult, MAX_CITIES};
