//! Connected-region discovery over free cells.

use crate::grid::CityGrid;
use crate::location::Location;
use fnv::FnvHashSet;

/// Neighbor offsets for 4-directional (cardinal) movement.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Explicit-stack flood fill of the maximal 4-connected free region
/// containing `start`. Obstructed and tower cells are boundaries. Returns
/// the empty set when the start cell is not free.
pub fn find_connected_region(grid: &CityGrid, start: Location) -> FnvHashSet<Location> {
    let mut region = FnvHashSet::default();
    if !grid.is_free(start.row() as i32, start.col() as i32) {
        return region;
    }

    let mut stack = vec![start];
    while let Some(loc) = stack.pop() {
        if !region.insert(loc) {
            continue;
        }

        for &(dr, dc) in &NEIGHBORS_4 {
            let nr = loc.row() as i32 + dr;
            let nc = loc.col() as i32 + dc;
            if grid.is_free(nr, nc) {
                let neighbor = Location::from_coords(nr as u32, nc as u32);
                if !region.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    region
}
