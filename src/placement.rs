//! Automatic tower placement by connected-region decomposition.
//!
//! Free cells are partitioned into maximal 4-connected regions; each region
//! gets one tower at its center with a radius just large enough to cover the
//! whole region under Chebyshev distance.

use crate::grid::CityGrid;
use crate::location::Location;
use crate::region::find_connected_region;
use fnv::FnvHashSet;
use log::{debug, warn};

/// Rebuild the entire tower layout from the current obstruction pattern.
///
/// All existing towers are removed first (registry emptied, their cells reset
/// to free), then every free cell is assigned to exactly one region tower.
/// Regions are consumed in row-major seed order, so the resulting ids are
/// deterministic for a given grid.
pub fn optimize_tower_placement(grid: &mut CityGrid) {
    grid.clear_towers();

    let mut remaining: Vec<Location> = grid.free_cells().collect();
    while let Some(&seed) = remaining.first() {
        let region = find_connected_region(grid, seed);
        let center = region_center(&region);
        let radius = region
            .iter()
            .map(|member| center.distance_to(*member))
            .max()
            .unwrap_or(0);

        match grid.place_tower(center.row() as i32, center.col() as i32, radius as i32) {
            Ok(id) => debug!(
                "tower {} covers a {}-cell region from ({}, {}) with radius {}",
                id,
                region.len(),
                center.row(),
                center.col(),
                radius
            ),
            // Cannot happen: the center is a member of a free region.
            Err(err) => warn!("skipping region at ({}, {}): {}", seed.row(), seed.col(), err),
        }

        remaining.retain(|loc| !region.contains(loc));
    }
}

/// The floored mean of the region coordinates, validated for membership.
///
/// Irregular regions can push the mean onto a cell outside the region; in
/// that case fall back to the member with the smallest maximum distance to
/// the rest, ties broken in row-major order.
fn region_center(region: &FnvHashSet<Location>) -> Location {
    let count = region.len() as u64;
    let row_sum: u64 = region.iter().map(|loc| loc.row() as u64).sum();
    let col_sum: u64 = region.iter().map(|loc| loc.col() as u64).sum();
    let centroid = Location::from_coords((row_sum / count) as u32, (col_sum / count) as u32);
    if region.contains(&centroid) {
        return centroid;
    }

    region
        .iter()
        .copied()
        .min_by_key(|candidate| {
            let eccentricity = region
                .iter()
                .map(|other| candidate.distance_to(*other))
                .max()
                .unwrap_or(0);
            (eccentricity, candidate.packed_repr())
        })
        .expect("regions are non-empty")
}
