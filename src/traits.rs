//! Seams between the solver and the sources of its cost matrices.

use crate::error::{LocationsError, ProviderError};
use crate::matrix::DistanceMatrix;
use crate::solver::{plan, SolveOptions, TourResult};

/// Provides a travel-cost matrix for a set of locations.
///
/// The matrix is indexed by the provided location order, so the first
/// location becomes the tour origin.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Result<DistanceMatrix, ProviderError>;
}

/// Build a matrix for `locations` (lat, lng) and find the optimal round trip
/// starting at the first one.
pub fn solve_locations<M>(
    provider: &M,
    locations: &[(f64, f64)],
    options: &SolveOptions,
) -> Result<TourResult, LocationsError>
where
    M: DistanceMatrixProvider + ?Sized,
{
    let matrix = provider.matrix_for(locations)?;
    Ok(plan(&matrix, options)?)
}
