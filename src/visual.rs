//! Rendering seam for external visualizers.
//!
//! The core never draws. A backend implements [`CityVisualizer`] and
//! `render_city` walks grid state, tower records, and data paths read-only,
//! forwarding one call per drawable element.

use crate::error::{CityGridError, Result};
use crate::grid::{CellState, CityGrid, TowerId};
use crate::location::Location;
use crate::paths::{find_all_data_paths, SearchLimits};
use itertools::Itertools;

pub trait CityVisualizer {
    fn obstruction(&mut self, location: Location);
    fn tower(&mut self, location: Location, id: TowerId, radius: u32);
    fn path_segment(&mut self, from: Location, to: Location);
}

/// Walk the whole city: obstructions, towers, then every data path as a
/// chain of segments between consecutive hops.
pub fn render_city(grid: &CityGrid, limits: &SearchLimits, visualizer: &mut impl CityVisualizer) {
    for (location, cell) in grid.iter() {
        if cell == CellState::Obstructed {
            visualizer.obstruction(location);
        }
    }

    for (&id, &radius) in grid.towers() {
        if let Ok(location) = grid.tower_coordinates(id) {
            visualizer.tower(location, id, radius);
        }
    }

    for path in find_all_data_paths(grid, limits) {
        let hops: Vec<Location> = path
            .iter()
            .filter_map(|&id| grid.tower_coordinates(id).ok())
            .collect();
        for (from, to) in hops.into_iter().tuple_windows() {
            visualizer.path_segment(from, to);
        }
    }
}

/// The cells inside a tower's square coverage footprint, clipped to the
/// grid. Every cell of the bounding box is within the Chebyshev radius.
pub fn tower_coverage(grid: &CityGrid, id: TowerId) -> Result<Vec<Location>> {
    let center = grid.tower_coordinates(id)?;
    let radius = grid
        .tower_radius(id)
        .ok_or(CityGridError::TowerNotFound(id))? as i32;

    let row_start = (center.row() as i32 - radius).max(0);
    let row_end = (center.row() as i32 + radius).min(grid.rows() as i32 - 1);
    let col_start = (center.col() as i32 - radius).max(0);
    let col_end = (center.col() as i32 + radius).min(grid.cols() as i32 - 1);

    let mut cells = Vec::new();
    for row in row_start..=row_end {
        for col in col_start..=col_end {
            cells.push(Location::from_coords(row as u32, col as u32));
        }
    }
    Ok(cells)
}
