//! End-to-end scenarios over the public API.

use citygrid::{
    can_communicate, find_all_data_paths, find_reliable_path, optimize_tower_placement, CellState,
    CityGrid, SearchLimits,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn relay_scenario_on_an_open_grid() {
    let mut city = CityGrid::new(5, 5, 0);
    let a = city.place_tower(2, 2, 1).unwrap();
    let b = city.place_tower(2, 4, 1).unwrap();
    assert_eq!((a, b), (1, 2));

    // Distance 2 exceeds both radii.
    assert!(!can_communicate(&city, a, b));
    assert_eq!(find_reliable_path(&city, a, b), None);

    let c = city.place_tower(2, 3, 1).unwrap();
    assert_eq!(c, 3);
    assert!(can_communicate(&city, a, c));
    assert!(can_communicate(&city, c, a));
    assert_eq!(find_reliable_path(&city, a, b), Some(vec![1, 3, 2]));
}

#[test]
fn optimized_city_routes_between_all_towers_of_a_region() {
    // No obstructions: one region, one tower, no pairs to route.
    let mut city = CityGrid::new(8, 8, 0);
    optimize_tower_placement(&mut city);
    assert_eq!(city.towers().len(), 1);
    assert!(find_all_data_paths(&city, &SearchLimits::default()).is_empty());
}

#[test]
fn obstructed_city_is_fully_partitioned() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut city = CityGrid::new_with_rng(20, 20, 40, &mut rng);

    let obstructed = city
        .iter()
        .filter(|&(_, cell)| cell == CellState::Obstructed)
        .count();
    assert_eq!(obstructed, 160);

    let free_before = city.free_cells().count();
    optimize_tower_placement(&mut city);

    let towers = city.towers().len();
    assert!(towers >= 1);
    let free_after = city.free_cells().count();
    // Every region gave up exactly one cell to its tower.
    assert_eq!(free_before, free_after + towers);

    // Bulk placement assigns ids sequentially from 1.
    let ids: Vec<_> = city.towers().keys().copied().collect();
    assert_eq!(ids, (1..=towers as u32).collect::<Vec<_>>());
}

#[test]
fn degenerate_grids_terminate() {
    let mut tiny = CityGrid::new(1, 1, 0);
    optimize_tower_placement(&mut tiny);
    assert_eq!(tiny.towers().len(), 1);

    let mut blocked = CityGrid::new(6, 6, 100);
    assert_eq!(blocked.free_cells().count(), 0);
    optimize_tower_placement(&mut blocked);
    assert!(blocked.towers().is_empty());
    assert!(find_all_data_paths(&blocked, &SearchLimits::default()).is_empty());
}
