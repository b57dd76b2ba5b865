//! Validated distance matrices.
//!
//! A [`DistanceMatrix`] can only be built through validation, so the solver
//! never re-checks shape or numeric invariants.

use crate::error::ValidationError;

/// Square table of travel costs, `get(u, v)` being the cost from `u` to `v`.
///
/// Off-diagonal entries are non-negative; `f64::INFINITY` marks an edge that
/// cannot be travelled. Diagonal entries are never read by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let n = rows.len();
        if n == 0 {
            return Err(ValidationError::Empty);
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(ValidationError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }

            for (col, &value) in values.iter().enumerate() {
                if value.is_nan() {
                    return Err(ValidationError::NotANumber { row, col });
                }
                if row != col && value < 0.0 {
                    return Err(ValidationError::Negative { row, col, value });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Parse comma-separated rows, one per line.
    ///
    /// Blank lines and empty cells are skipped, so trailing commas are allowed.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| parse_row(row, line))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rows)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Never true for a validated matrix.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<f64>, ValidationError> {
    line.split(',')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            cell.parse::<f64>().map_err(|_| ValidationError::InvalidNumber {
                row,
                value: cell.to_string(),
            })
        })
        .collect()
}
