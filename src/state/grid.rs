//! Local mirror of the service's grid map.
//!
//! Cells are stored row-major so a position resolves to its entry in O(1).
//! Whatever the service sends is normalised on `replace` so the map stays
//! dense: one cell per in-bounds position, nothing else.

use log::warn;

use crate::error::GridError;
use crate::model::{Cell, GridMap, MapType, Position};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridState {
    width: u32,
    height: u32,
    map_type: MapType,
    cells: Vec<Cell>,
}

impl GridState {
    pub fn new(map: GridMap) -> Self {
        let mut grid = Self::default();
        grid.replace(map);
        grid
    }

    /// Wholesale substitution after create/clear/get.
    pub fn replace(&mut self, map: GridMap) {
        let GridMap {
            width,
            height,
            map_type,
            cells,
        } = map;
        let mut slots: Vec<Option<Cell>> = vec![None; (width as usize) * (height as usize)];
        let mut dropped = 0usize;
        for cell in cells {
            if cell.x >= width || cell.y >= height {
                dropped += 1;
                continue;
            }
            let idx = (cell.y * width + cell.x) as usize;
            if slots[idx].is_some() {
                dropped += 1;
            }
            slots[idx] = Some(cell);
        }
        let mut filled = 0usize;
        let cells = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.unwrap_or_else(|| {
                    filled += 1;
                    Cell::open(i as u32 % width, i as u32 / width)
                })
            })
            .collect();
        if dropped > 0 || filled > 0 {
            warn!(
                "map {}x{} normalised: {} stray/duplicate cells dropped, {} missing cells filled",
                width, height, dropped, filled
            );
        }
        self.width = width;
        self.height = height;
        self.map_type = map_type;
        self.cells = cells;
    }

    /// Replaces the entry at the cell's position. No-op when the position is
    /// not on this map (e.g. a late response for a larger, replaced map).
    pub fn apply_cell_update(&mut self, cell: Cell) -> bool {
        match self.index(cell.x as i64, cell.y as i64) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Result<&Cell, GridError> {
        self.index(x, y)
            .map(|idx| &self.cells[idx])
            .ok_or(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    /// In-bounds position for signed coordinates.
    pub fn position(&self, x: i64, y: i64) -> Option<Position> {
        self.index(x, y).map(|_| Position::new(x as u32, y as u32))
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.get(pos.x as i64, pos.y as i64)
            .map(|c| c.is_obstacle)
            .unwrap_or(false)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn is_loaded(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Row-major iteration.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TerrainType;

    #[test]
    fn test_new_map_has_one_open_cell_per_position() {
        for (w, h) in [(1, 1), (10, 10), (200, 3)] {
            let grid = GridState::new(GridMap::blank(w, h, MapType::Simple));
            assert_eq!(grid.len(), (w * h) as usize);
            for y in 0..h {
                for x in 0..w {
                    let c = grid.get(x as i64, y as i64).unwrap();
                    assert_eq!(c, &Cell::open(x, y));
                }
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = GridState::new(GridMap::blank(4, 3, MapType::Simple));
        assert_eq!(
            grid.get(4, 0),
            Err(GridError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(grid.get(-1, 2).is_err());
        assert!(grid.get(0, 3).is_err());
    }

    #[test]
    fn test_replace_normalises_sparse_and_shuffled_input() {
        let mut map = GridMap::blank(3, 2, MapType::Complex);
        map.cells.reverse();
        map.cells.remove(0); // drops (2,1)
        map.cells.push(Cell::open(7, 7)); // stray
        map.cells.push(Cell {
            is_obstacle: true,
            ..Cell::open(0, 0)
        }); // duplicate, last wins
        let grid = GridState::new(map);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(2, 1).unwrap(), &Cell::open(2, 1));
        assert!(grid.get(0, 0).unwrap().is_obstacle);
        let order: Vec<_> = grid.cells().map(|c| c.position()).collect();
        assert_eq!(order[1], Position::new(1, 0));
        assert_eq!(order[3], Position::new(0, 1));
    }

    #[test]
    fn test_apply_cell_update_matches_by_position() {
        let mut grid = GridState::new(GridMap::blank(5, 5, MapType::Complex));
        let mountain = Cell {
            terrain_type: TerrainType::Mountain,
            cost: 2.0,
            ..Cell::open(2, 2)
        };
        assert!(grid.apply_cell_update(mountain.clone()));
        assert_eq!(grid.get(2, 2).unwrap(), &mountain);
        assert_eq!(grid.len(), 25);
        assert!(!grid.apply_cell_update(Cell::open(9, 9)));
        assert_eq!(grid.len(), 25);
    }

    #[test]
    fn test_position_and_obstacle_lookup() {
        let mut grid = GridState::new(GridMap::blank(2, 2, MapType::Simple));
        grid.apply_cell_update(Cell {
            is_obstacle: true,
            ..Cell::open(1, 0)
        });
        assert_eq!(grid.position(1, 1), Some(Position::new(1, 1)));
        assert_eq!(grid.position(2, 1), None);
        assert!(grid.is_obstacle(Position::new(1, 0)));
        assert!(!grid.is_obstacle(Position::new(0, 0)));
    }
}
