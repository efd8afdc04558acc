//! Core data models for the grid path studio.
//! Shapes mirror the JSON exchanged with the map and path services.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Smallest accepted map side.
pub const MIN_DIMENSION: i64 = 1;
/// Largest accepted map side.
pub const MAX_DIMENSION: i64 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Traversal cost category. Encoded on the wire as `0`, `1`, `2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum TerrainType {
    #[default]
    Flat,
    Mountain,
    Water,
}

impl TerrainType {
    pub const ALL: [TerrainType; 3] = [TerrainType::Flat, TerrainType::Mountain, TerrainType::Water];

    /// Fixed terrain -> cost coupling.
    pub fn cost(self) -> f64 {
        match self {
            TerrainType::Flat => 1.0,
            TerrainType::Mountain => 2.0,
            TerrainType::Water => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TerrainType::Flat => "Flat",
            TerrainType::Mountain => "Mountain",
            TerrainType::Water => "Water",
        }
    }
}

// Unknown codes (the service has experimental terrain kinds) render as flat.
impl From<u8> for TerrainType {
    fn from(code: u8) -> Self {
        match code {
            1 => TerrainType::Mountain,
            2 => TerrainType::Water,
            _ => TerrainType::Flat,
        }
    }
}

impl From<TerrainType> for u8 {
    fn from(t: TerrainType) -> Self {
        match t {
            TerrainType::Flat => 0,
            TerrainType::Mountain => 1,
            TerrainType::Water => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Simple,
    /// Generated maze; edits and rendering behave like `Simple`.
    Maze,
    Complex,
}

impl MapType {
    pub const ALL: [MapType; 3] = [MapType::Simple, MapType::Maze, MapType::Complex];

    /// Only complex maps carry meaningful terrain.
    pub fn has_terrain(self) -> bool {
        matches!(self, MapType::Complex)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MapType::Simple => "simple",
            MapType::Maze => "maze",
            MapType::Complex => "complex",
        }
    }

    pub fn parse(s: &str) -> Option<MapType> {
        MapType::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            MapType::Simple => "Simple (random obstacles)",
            MapType::Maze => "Maze",
            MapType::Complex => "Complex terrain",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    #[serde(default)]
    pub is_obstacle: bool,
    #[serde(default)]
    pub terrain_type: TerrainType,
    /// Obstacles report a non-finite cost, which arrives as `null`.
    #[serde(default = "unit_cost", deserialize_with = "null_as_infinity")]
    pub cost: f64,
}

impl Cell {
    /// Open flat cell, the state of every cell on a fresh map.
    pub fn open(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            is_obstacle: false,
            terrain_type: TerrainType::Flat,
            cost: TerrainType::Flat.cost(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

fn unit_cost() -> f64 {
    1.0
}

fn null_as_infinity<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::INFINITY))
}

fn null_as_zero<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridMap {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub map_type: MapType,
    /// Row-major as sent by the service; one entry per position.
    pub cells: Vec<Cell>,
}

impl GridMap {
    /// Dense map of open flat cells.
    pub fn blank(width: u32, height: u32, map_type: MapType) -> Self {
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::open(x, y));
            }
        }
        Self {
            width,
            height,
            map_type,
            cells,
        }
    }
}

/// Body of a create-map request, validated before it can exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CreateMapRequest {
    pub width: u32,
    pub height: u32,
    pub map_type: MapType,
}

impl CreateMapRequest {
    pub fn new(width: i64, height: i64, map_type: MapType) -> Result<Self, ValidationError> {
        let ok = |v: i64| (MIN_DIMENSION..=MAX_DIMENSION).contains(&v);
        if !ok(width) || !ok(height) {
            return Err(ValidationError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            map_type,
        })
    }
}

/// Solver selection made in the side panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    pub algorithm: String,
    pub heuristic: String,
    pub smooth: bool,
    pub check_collision: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            algorithm: "astar".to_string(),
            heuristic: "euclidean".to_string(),
            smooth: false,
            check_collision: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    pub start_x: u32,
    pub start_y: u32,
    pub goal_x: u32,
    pub goal_y: u32,
    pub algorithm: String,
    pub heuristic: String,
    pub smooth: bool,
    pub check_collision: bool,
}

impl PathQuery {
    pub fn new(start: Position, goal: Position, options: &PathOptions) -> Self {
        Self {
            start_x: start.x,
            start_y: start.y,
            goal_x: goal.x,
            goal_y: goal.y,
            algorithm: options.algorithm.clone(),
            heuristic: options.heuristic.clone(),
            smooth: options.smooth,
            check_collision: options.check_collision,
        }
    }
}

/// The solver's full answer to one find-path request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Empty when no path exists.
    #[serde(default)]
    pub path: Vec<Position>,
    #[serde(default)]
    pub explored: Vec<Position>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub path_length: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub path_cost: f64,
    #[serde(default)]
    pub nodes_explored: u64,
    /// Seconds.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub computation_time: f64,
}

impl PathResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn computation_ms(&self) -> f64 {
        self.computation_time * 1000.0
    }
}

/// One entry of the solver's algorithm or heuristic list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverOption {
    pub id: String,
    pub name: String,
}

impl SolverOption {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

pub fn default_algorithms() -> Vec<SolverOption> {
    vec![
        SolverOption::new("astar", "A*"),
        SolverOption::new("adaptive_astar", "Adaptive A*"),
    ]
}

pub fn default_heuristics() -> Vec<SolverOption> {
    vec![
        SolverOption::new("euclidean", "Euclidean"),
        SolverOption::new("manhattan", "Manhattan"),
        SolverOption::new("diagonal", "Diagonal"),
    ]
}
