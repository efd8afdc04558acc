// Map statistics for the summary panel.

use crate::model::TerrainType;

use super::grid::GridState;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapSummary {
    pub width: u32,
    pub height: u32,
    pub total_cells: usize,
    pub obstacle_count: usize,
    pub free_cells: usize,
    /// Per terrain type, in `TerrainType::ALL` order; complex maps only.
    pub terrain_counts: Option<[usize; 3]>,
}

impl MapSummary {
    pub fn of(grid: &GridState) -> Self {
        let total_cells = grid.len();
        let obstacle_count = grid.cells().filter(|c| c.is_obstacle).count();
        let terrain_counts = grid.map_type().has_terrain().then(|| {
            let mut counts = [0usize; 3];
            for cell in grid.cells() {
                let slot = TerrainType::ALL
                    .iter()
                    .position(|t| *t == cell.terrain_type)
                    .unwrap_or(0);
                counts[slot] += 1;
            }
            counts
        });
        Self {
            width: grid.width(),
            height: grid.height(),
            total_cells,
            obstacle_count,
            free_cells: total_cells - obstacle_count,
            terrain_counts,
        }
    }

    pub fn obstacle_ratio(&self) -> f64 {
        ratio(self.obstacle_count, self.total_cells)
    }

    pub fn free_ratio(&self) -> f64 {
        ratio(self.free_cells, self.total_cells)
    }
}

pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, GridMap, MapType};

    #[test]
    fn test_summary_counts() {
        let mut grid = GridState::new(GridMap::blank(4, 5, MapType::Complex));
        grid.apply_cell_update(Cell {
            is_obstacle: true,
            ..Cell::open(0, 0)
        });
        grid.apply_cell_update(Cell {
            terrain_type: TerrainType::Water,
            cost: 3.0,
            ..Cell::open(1, 0)
        });
        let s = MapSummary::of(&grid);
        assert_eq!(s.total_cells, 20);
        assert_eq!(s.obstacle_count, 1);
        assert_eq!(s.free_cells, 19);
        assert_eq!(s.obstacle_ratio(), 0.05);
        assert_eq!(s.terrain_counts, Some([19, 0, 1]));
    }

    #[test]
    fn test_simple_map_has_no_terrain_stats() {
        let grid = GridState::new(GridMap::blank(2, 2, MapType::Maze));
        assert_eq!(MapSummary::of(&grid).terrain_counts, None);
    }

    #[test]
    fn test_empty_grid_ratios() {
        let s = MapSummary::of(&GridState::default());
        assert_eq!(s.free_ratio(), 0.0);
    }
}
