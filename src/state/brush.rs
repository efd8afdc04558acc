//! Square brush footprint and the per-cell edits each tool produces.

use crate::model::{Cell, Position, TerrainType};

use super::grid::GridState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    /// Point picking only; never mutates cells.
    #[default]
    Select,
    DrawObstacle,
    EraseObstacle,
    /// Paints the selected terrain; complex maps only.
    Terrain,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::DrawObstacle, Tool::EraseObstacle, Tool::Terrain];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::DrawObstacle => "Draw obstacle",
            Tool::EraseObstacle => "Erase obstacle",
            Tool::Terrain => "Paint terrain",
        }
    }
}

/// Offset range covered on each axis: `-(b/2)..=b/2`.
fn half_extent(brush_size: u32) -> i64 {
    (brush_size.max(1) / 2) as i64
}

/// Positions covered by a brush of `brush_size` centered on `(cx, cy)`,
/// clipped to the grid, row-major. Empty when the center is off the grid.
pub fn footprint(center: (i64, i64), brush_size: u32, grid: &GridState) -> Vec<Position> {
    let (cx, cy) = center;
    if grid.position(cx, cy).is_none() {
        return Vec::new();
    }
    let r = half_extent(brush_size);
    let mut out = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            if let Some(p) = grid.position(x, y) {
                out.push(p);
            }
        }
    }
    out
}

/// Target value for one cell under `tool`. Independent of the cell's
/// current state; `None` when the tool does not edit this map.
pub fn target_cell(pos: Position, tool: Tool, terrain: TerrainType, grid: &GridState) -> Option<Cell> {
    let mut cell = Cell::open(pos.x, pos.y);
    match tool {
        Tool::Select => return None,
        Tool::DrawObstacle => cell.is_obstacle = true,
        Tool::EraseObstacle => {}
        Tool::Terrain => {
            if !grid.map_type().has_terrain() {
                return None;
            }
            cell.terrain_type = terrain;
            cell.cost = terrain.cost();
        }
    }
    Some(cell)
}

/// Brush application state: tool, terrain radio and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushEditor {
    pub tool: Tool,
    pub terrain: TerrainType,
    size: u32,
    max_size: u32,
}

impl BrushEditor {
    pub fn new(size: u32, max_size: u32) -> Self {
        let max_size = max_size.max(1);
        Self {
            tool: Tool::default(),
            terrain: TerrainType::default(),
            size: size.clamp(1, max_size),
            max_size,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(1, self.max_size);
    }

    /// One update intent per covered cell.
    pub fn intents(&self, center: (i64, i64), grid: &GridState) -> Vec<Cell> {
        if self.tool == Tool::Select {
            return Vec::new();
        }
        footprint(center, self.size, grid)
            .into_iter()
            .filter_map(|p| target_cell(p, self.tool, self.terrain, grid))
            .collect()
    }
}

impl Default for BrushEditor {
    fn default() -> Self {
        Self::new(1, 10)
    }
}
