//! The implicit tower communication graph.
//!
//! There is no materialized adjacency structure: edges are a pure predicate
//! over the tower registry, so they can never desynchronize from radius or
//! position changes.

use crate::grid::{CityGrid, TowerId};

/// Whether `from` can reach `to`: the Chebyshev distance between the two
/// tower cells must be within `from`'s radius. Directed and intentionally
/// asymmetric; a missing tower on either side yields `false`.
pub fn can_communicate(grid: &CityGrid, from: TowerId, to: TowerId) -> bool {
    match (
        grid.tower_coordinates(from),
        grid.tower_coordinates(to),
        grid.tower_radius(from),
    ) {
        (Ok(from_loc), Ok(to_loc), Some(radius)) => from_loc.distance_to(to_loc) <= radius,
        _ => false,
    }
}

/// All towers reachable from `id` in one hop, ascending by id.
pub fn connected_towers(grid: &CityGrid, id: TowerId) -> Vec<TowerId> {
    grid.towers()
        .keys()
        .copied()
        .filter(|&other| other != id && can_communicate(grid, id, other))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_asymmetric() {
        let mut grid = CityGrid::new(10, 10, 0);
        let a = grid.place_tower(0, 0, 5).unwrap();
        let b = grid.place_tower(0, 3, 1).unwrap();

        // Distance 3: within a's radius 5, outside b's radius 1.
        assert!(can_communicate(&grid, a, b));
        assert!(!can_communicate(&grid, b, a));
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let mut grid = CityGrid::new(10, 10, 0);
        let a = grid.place_tower(2, 2, 2).unwrap();
        let b = grid.place_tower(4, 4, 2).unwrap();
        let c = grid.place_tower(2, 5, 2).unwrap();

        // Chebyshev distance a-b is exactly 2.
        assert!(can_communicate(&grid, a, b));
        // Distance a-c is 3.
        assert!(!can_communicate(&grid, a, c));
    }

    #[test]
    fn missing_towers_never_communicate() {
        let mut grid = CityGrid::new(5, 5, 0);
        let a = grid.place_tower(0, 0, 4).unwrap();
        assert!(!can_communicate(&grid, a, 99));
        assert!(!can_communicate(&grid, 99, a));
    }

    #[test]
    fn connected_towers_excludes_self_and_sorts() {
        let mut grid = CityGrid::new(10, 10, 0);
        let a = grid.place_tower(5, 5, 3).unwrap();
        let b = grid.place_tower(5, 7, 1).unwrap();
        let c = grid.place_tower(3, 4, 1).unwrap();
        let d = grid.place_tower(0, 0, 1).unwrap();

        assert_eq!(connected_towers(&grid, a), vec![b, c]);
        assert_eq!(connected_towers(&grid, d), Vec::<TowerId>::new());
    }
}
