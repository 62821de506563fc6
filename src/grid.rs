//! The city aggregate: an n x m cell array plus the tower registry.
//!
//! `CityGrid` is the single exclusively-owned piece of mutable state in the
//! crate. Every other module computes over it through `&CityGrid` and all
//! mutation goes through `&mut self` methods here.

use crate::error::{CityGridError, Result};
use crate::location::Location;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tower ids are positive and assigned sequentially starting at 1.
pub type TowerId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Free,
    Obstructed,
    Tower(TowerId),
}

#[derive(Clone, Serialize, Deserialize)]
pub struct CityGrid {
    rows: u16,
    cols: u16,
    cells: Vec<CellState>,
    /// id -> communication radius. A `BTreeMap` because id order is part of
    /// the contract: the next id is `max + 1` and pair enumeration is
    /// deterministic in ascending id order.
    towers: BTreeMap<TowerId, u32>,
}

impl CityGrid {
    /// Build a grid with roughly `obstruction_percent` of its cells
    /// obstructed. Dimensions below 1 are coerced to 1; a negative percent
    /// is coerced to 1.
    pub fn new(rows: i32, cols: i32, obstruction_percent: i32) -> CityGrid {
        Self::new_with_rng(rows, cols, obstruction_percent, &mut rand::thread_rng())
    }

    /// As [`CityGrid::new`], with a caller-supplied RNG for deterministic
    /// construction.
    pub fn new_with_rng(
        rows: i32,
        cols: i32,
        obstruction_percent: i32,
        rng: &mut impl Rng,
    ) -> CityGrid {
        let rows = rows.clamp(1, u16::MAX as i32) as u16;
        let cols = cols.clamp(1, u16::MAX as i32) as u16;
        let percent = if obstruction_percent < 0 {
            1
        } else {
            obstruction_percent
        } as u64;

        let total = rows as usize * cols as usize;
        let mut grid = CityGrid {
            rows,
            cols,
            cells: vec![CellState::Free; total],
            towers: BTreeMap::new(),
        };
        grid.generate_obstructions(percent, rng);
        grid
    }

    /// Sample uniformly random free cells until the target count is
    /// obstructed. The target is capped at the cell count so the
    /// retry-on-collision loop always terminates.
    fn generate_obstructions(&mut self, percent: u64, rng: &mut impl Rng) {
        let total = self.cells.len() as u64;
        let target = (total * percent / 100).min(total);

        let mut obstructed = 0;
        while obstructed < target {
            let row = rng.gen_range(0..self.rows);
            let col = rng.gen_range(0..self.cols);
            let index = self.index(row, col);
            if self.cells[index] != CellState::Free {
                continue;
            }
            self.cells[index] = CellState::Obstructed;
            obstructed += 1;
        }

        debug!("obstructed {} of {} cells", target, total);
    }

    #[inline]
    fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < self.rows as i32 && col < self.cols as i32
    }

    pub fn cell_state(&self, row: i32, col: i32) -> Result<CellState> {
        if !self.in_bounds(row, col) {
            return Err(CityGridError::OutOfRange { row, col });
        }
        Ok(self.cells[self.index(row as u16, col as u16)])
    }

    pub fn is_free(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col)
            && self.cells[self.index(row as u16, col as u16)] == CellState::Free
    }

    /// Place a tower on a free cell, assigning the next sequential id.
    /// This is both the grid primitive and the manual placement entry point.
    pub fn place_tower(&mut self, row: i32, col: i32, radius: i32) -> Result<TowerId> {
        if !self.in_bounds(row, col) {
            return Err(CityGridError::OutOfRange { row, col });
        }
        if radius < 0 {
            return Err(CityGridError::InvalidRadius(radius));
        }
        let index = self.index(row as u16, col as u16);
        if self.cells[index] != CellState::Free {
            return Err(CityGridError::CellOccupied { row, col });
        }

        let id = self
            .towers
            .last_key_value()
            .map(|(id, _)| id + 1)
            .unwrap_or(1);
        self.cells[index] = CellState::Tower(id);
        self.towers.insert(id, radius as u32);

        debug!(
            "placed tower {} at ({}, {}) with radius {}",
            id, row, col, radius
        );
        Ok(id)
    }

    /// Linear scan for the cell holding the given tower id.
    pub fn tower_coordinates(&self, id: TowerId) -> Result<Location> {
        self.cells
            .iter()
            .position(|&cell| cell == CellState::Tower(id))
            .map(|index| {
                Location::from_coords(
                    (index / self.cols as usize) as u32,
                    (index % self.cols as usize) as u32,
                )
            })
            .ok_or(CityGridError::TowerNotFound(id))
    }

    pub fn tower_radius(&self, id: TowerId) -> Option<u32> {
        self.towers.get(&id).copied()
    }

    /// Read-only view of the tower registry (id -> radius).
    pub fn towers(&self) -> &BTreeMap<TowerId, u32> {
        &self.towers
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(index, &cell)| {
            let row = (index / self.cols as usize) as u32;
            let col = (index % self.cols as usize) as u32;
            (Location::from_coords(row, col), cell)
        })
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter()
            .filter(|&(_, cell)| cell == CellState::Free)
            .map(|(loc, _)| loc)
    }

    /// Drop every tower: empty the registry and reset tower cells to free.
    pub(crate) fn clear_towers(&mut self) {
        for cell in &mut self.cells {
            if matches!(cell, CellState::Tower(_)) {
                *cell = CellState::Free;
            }
        }
        self.towers.clear();
    }

    #[cfg(test)]
    pub(crate) fn obstruct(&mut self, row: u16, col: u16) {
        let index = self.index(row, col);
        self.cells[index] = CellState::Obstructed;
    }
}
