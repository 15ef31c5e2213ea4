//! Volume heatmap for display consumers
//!
//! A `n_levels x n_steps` matrix of combined bid+ask volume and the price
//! path projected into the same grid, centred at `n_levels / 2`. Data only.

use serde::{Deserialize, Serialize};
use types::result::SimulationResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heatmap {
    pub n_levels: usize,
    pub n_steps: usize,
    /// Row-major by level: `cells[level][step]`
    pub cells: Vec<Vec<f64>>,
    /// Mid-price path in grid units
    pub price_path: Vec<f64>,
}

impl Heatmap {
    pub fn cell(&self, level: usize, step: usize) -> Option<f64> {
        self.cells.get(level)?.get(step).copied()
    }

    /// All levels at one step.
    pub fn column(&self, step: usize) -> Option<Vec<f64>> {
        if step >= self.n_steps {
            return None;
        }
        self.cells.iter().map(|row| row.get(step).copied()).collect()
    }

    pub fn max_cell(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Project a run into heatmap form.
pub fn build(result: &SimulationResult, tick_size: f64) -> Heatmap {
    let n_steps = result.book_snapshots.len();
    let n_levels = result.book_snapshots.first().map_or(0, |b| b.n_levels());

    let mut cells = vec![vec![0.0; n_steps]; n_levels];
    for (step, book) in result.book_snapshots.iter().enumerate() {
        for (level, row) in cells.iter_mut().enumerate() {
            row[step] = book.total_at(level).unwrap_or(0.0);
        }
    }

    let origin = result.price_series.first().unwrap_or(0.0);
    let centre = n_levels as f64 / 2.0;
    let price_path = result
        .price_series
        .iter()
        .map(|mid| (mid - origin) / tick_size + centre)
        .collect();

    Heatmap {
        n_levels,
        n_steps,
        cells,
        price_path,
    }
}
