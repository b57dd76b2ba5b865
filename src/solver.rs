//! Exact tour solver (Held–Karp dynamic programming over city subsets).

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PlanError;
use crate::matrix::DistanceMatrix;

/// Widest instance the solver will allocate tables for.
///
/// `2^24 * 24` states take ~400 MB of cost table alone.
pub const MAX_CITIES: usize = 24;

/// Marks a state with no predecessor (the origin).
const NO_PARENT: u8 = u8::MAX;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Instances larger than this are refused by [`plan`].
    pub max_cities: usize,
    /// Instances larger than this are solved but logged as slow.
    pub warn_threshold: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_cities: 20,
            warn_threshold: 14,
        }
    }
}

/// A closed tour starting and ending at city 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub cost: f64,
    pub path: Vec<usize>,
}

impl Tour {
    /// Sum of the edge costs along `path`, computed from `dist`.
    ///
    /// Self-loops are not travelled, so the single-city tour `[0, 0]` costs 0
    /// whatever the diagonal holds.
    pub fn cost_along(&self, dist: &DistanceMatrix) -> f64 {
        self.path
            .windows(2)
            .filter(|edge| edge[0] != edge[1])
            .map(|edge| dist.get(edge[0], edge[1]))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TourResult {
    Tour(Tour),
    /// No Hamiltonian cycle with finite cost exists.
    NoTour,
}

impl TourResult {
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            TourResult::Tour(tour) => Some(tour),
            TourResult::NoTour => None,
        }
    }

    pub fn into_tour(self) -> Option<Tour> {
        match self {
            TourResult::Tour(tour) => Some(tour),
            TourResult::NoTour => None,
        }
    }

    pub fn is_tour(&self) -> bool {
        matches!(self, TourResult::Tour(_))
    }

    pub fn cost(&self) -> Option<f64> {
        self.tour().map(|tour| tour.cost)
    }
}

/// Find a minimum-cost tour through every city, starting and ending at 0.
///
/// Runs in `O(n^2 * 2^n)` time and `O(n * 2^n)` memory. Callers are expected
/// to bound `n` (see [`plan`]).
///
/// Infinite entries are edges that cannot be travelled. A tour made of finite
/// edges whose sum overflows `f64` is still returned, with an infinite cost.
///
/// # Panics
///
/// Panics if the matrix has more than [`MAX_CITIES`] cities.
pub fn solve(dist: &DistanceMatrix) -> TourResult {
    let n = dist.len();
    assert!(n <= MAX_CITIES, "{} cities exceeds MAX_CITIES ({})", n, MAX_CITIES);

    if n == 1 {
        return TourResult::Tour(Tour {
            cost: 0.0,
            path: vec![0, 0],
        });
    }

    let states = 1usize << n;
    let mut cost = vec![f64::INFINITY; states * n];
    let mut parent = vec![NO_PARENT; states * n];

    // The path holding only the origin: mask {0}, ending at city 0.
    let origin = n;
    cost[origin] = 0.0;

    // Every other state is reached once it has a parent. Reachability is kept
    // apart from cost so a sum overflowing to infinity is not mistaken for an
    // unreachable state.
    let reached = |parent: &[u8], state: usize| state == origin || parent[state] != NO_PARENT;

    // Masks grow by one bit per transition, so ascending order finalizes a
    // subset before it is extended. Masks without the origin stay unreachable.
    for mask in (1..states).step_by(2) {
        for u in 0..n {
            if mask & (1 << u) == 0 || !reached(&parent, mask * n + u) {
                continue;
            }
            let base = cost[mask * n + u];

            for v in 0..n {
                if mask & (1 << v) != 0 {
                    continue;
                }
                let edge = dist.get(u, v);
                if edge == f64::INFINITY {
                    continue;
                }
                let next = (mask | (1 << v)) * n + v;
                let candidate = base + edge;
                if parent[next] == NO_PARENT || candidate < cost[next] {
                    cost[next] = candidate;
                    parent[next] = u as u8;
                }
            }
        }
    }

    let full = states - 1;
    let mut best_cost = f64::INFINITY;
    let mut last = None;
    for i in 1..n {
        let closing = dist.get(i, 0);
        if !reached(&parent, full * n + i) || closing == f64::INFINITY {
            continue;
        }
        let total = cost[full * n + i] + closing;
        if last.is_none() || total < best_cost {
            best_cost = total;
            last = Some(i);
        }
    }

    let Some(last) = last else {
        return TourResult::NoTour;
    };

    let mut path = Vec::with_capacity(n + 1);
    let mut mask = full;
    let mut city = last;
    loop {
        path.push(city);
        let prev = parent[mask * n + city];
        if prev == NO_PARENT {
            break;
        }
        mask ^= 1 << city;
        city = prev as usize;
    }
    path.reverse();
    path.push(0);

    TourResult::Tour(Tour {
        cost: best_cost,
        path,
    })
}

/// Solve `dist` after checking it against the configured size limits.
pub fn plan(dist: &DistanceMatrix, options: &SolveOptions) -> Result<TourResult, PlanError> {
    let cities = dist.len();
    let limit = options.max_cities.min(MAX_CITIES);
    if cities > limit {
        return Err(PlanError::TooManyCities { cities, limit });
    }

    if cities > options.warn_threshold {
        warn!(cities, threshold = options.warn_threshold, "large instance, solve may be slow");
    }

    let start = Instant::now();
    let result = solve(dist);
    debug!(
        cities,
        found = result.is_tour(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "solved"
    );

    Ok(result)
}

/// Plan several independent instances in parallel.
///
/// Results are returned in input order.
pub fn plan_batch(matrices: &[DistanceMatrix], options: &SolveOptions) -> Vec<Result<TourResult, PlanError>> {
    matrices.par_iter().map(|dist| plan(dist, options)).collect()
}
