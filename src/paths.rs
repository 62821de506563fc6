//! Graph traversals over the tower communication graph.
//!
//! Two queries: the fewest-hop route between two towers (breadth-first), and
//! exhaustive enumeration of all simple paths between every ordered pair
//! (depth-first with an explicit stack, so dense graphs cannot exhaust the
//! call stack).

use crate::comms::connected_towers;
use crate::grid::{CityGrid, TowerId};
use fnv::FnvHashSet;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::VecDeque;

/// Limits applied to exhaustive path enumeration.
///
/// All-paths enumeration is exponential in tower degree by nature; the
/// optional cap on path node count is the safety valve for dense graphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    /// Maximum number of towers allowed on a single path. `None` leaves
    /// enumeration unbounded.
    pub max_path_len: Option<usize>,
}

/// Fewest-hop route from `source` to `target` over directed communication
/// edges. Returns `None` when either tower is missing or no route exists.
///
/// Nodes are marked visited when dequeued, not when enqueued: a node may sit
/// in the queue several times via different prefixes, and among paths that
/// reach the target the strictly shortest discovered one wins.
pub fn find_reliable_path(
    grid: &CityGrid,
    source: TowerId,
    target: TowerId,
) -> Option<Vec<TowerId>> {
    if !grid.towers().contains_key(&source) || !grid.towers().contains_key(&target) {
        return None;
    }

    let mut visited: FnvHashSet<TowerId> = FnvHashSet::default();
    let mut queue: VecDeque<(TowerId, Vec<TowerId>)> = VecDeque::new();
    queue.push_back((source, vec![source]));
    let mut best: Option<Vec<TowerId>> = None;

    while let Some((current, path)) = queue.pop_front() {
        visited.insert(current);

        if current == target {
            if best.as_ref().map_or(true, |b| path.len() < b.len()) {
                best = Some(path);
            }
            continue;
        }

        for neighbor in connected_towers(grid, current) {
            if !visited.contains(&neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor);
                queue.push_back((neighbor, extended));
            }
        }
    }

    trace!("reliable path {} -> {}: {:?}", source, target, best);
    best
}

/// One frame of the iterative depth-first path enumeration: a node's
/// neighbor list and a cursor into it.
struct PathFrame {
    neighbors: Vec<TowerId>,
    next_index: usize,
}

/// All simple paths (no repeated tower) from `source` to `target`.
pub fn all_simple_paths(
    grid: &CityGrid,
    source: TowerId,
    target: TowerId,
    limits: &SearchLimits,
) -> Vec<Vec<TowerId>> {
    if !grid.towers().contains_key(&source) || !grid.towers().contains_key(&target) {
        return Vec::new();
    }
    if source == target {
        return vec![vec![source]];
    }

    let mut paths = Vec::new();
    let mut path = vec![source];
    let mut stack = vec![PathFrame {
        neighbors: connected_towers(grid, source),
        next_index: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next_index >= frame.neighbors.len() {
            stack.pop();
            path.pop();
            continue;
        }
        let neighbor = frame.neighbors[frame.next_index];
        frame.next_index += 1;

        if path.contains(&neighbor) {
            // Already on the current path; extending would form a cycle.
            continue;
        }
        let extended_len = path.len() + 1;
        if limits.max_path_len.map_or(false, |max| extended_len > max) {
            continue;
        }
        if neighbor == target {
            let mut found = path.clone();
            found.push(neighbor);
            paths.push(found);
            continue;
        }

        path.push(neighbor);
        stack.push(PathFrame {
            neighbors: connected_towers(grid, neighbor),
            next_index: 0,
        });
    }

    paths
}

/// All simple paths between every ordered pair of distinct towers, pairs
/// enumerated in ascending id order.
pub fn find_all_data_paths(grid: &CityGrid, limits: &SearchLimits) -> Vec<Vec<TowerId>> {
    let ids: Vec<TowerId> = grid.towers().keys().copied().collect();

    let mut all = Vec::new();
    for (source, target) in ids.iter().copied().cartesian_product(ids.iter().copied()) {
        if source != target {
            all.extend(all_simple_paths(grid, source, target, limits));
        }
    }

    debug!(
        "enumerated {} data paths over {} towers",
        all.len(),
        ids.len()
    );
    all
}
