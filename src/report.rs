//! Plain-text rendering of matrices and results for the command line.

use std::fmt::Write;

use crate::matrix::DistanceMatrix;
use crate::solver::TourResult;

/// The matrix as right-aligned columns, one row per line.
pub fn render_matrix(matrix: &DistanceMatrix) -> String {
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in &cells {
        let line = row
            .iter()
            .map(|cell| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line);
    }
    out
}

/// City count, then the cost and path of the tour or `No tour exists`.
pub fn render_result(result: &TourResult, cities: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cities: {}", cities);
    match result {
        TourResult::Tour(tour) => {
            let path = tour
                .path
                .iter()
                .map(|city| city.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            let _ = writeln!(out, "Cost: {}", tour.cost);
            let _ = writeln!(out, "Path: {}", path);
        }
        TourResult::NoTour => {
            let _ = writeln!(out, "No tour exists");
        }
    }
    out
}
