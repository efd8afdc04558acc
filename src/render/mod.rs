//! Frame composition.
//!
//! [`compose`] turns a [`Scene`] into a flat display list; [`canvas::paint`]
//! replays it onto the 2d context. Layers are drawn in a fixed order: cells,
//! explored markers, path, start, goal.

pub mod canvas;

use crate::model::{Cell, MapType, PathResult, Position, TerrainType};
use crate::state::grid::GridState;
use crate::state::mapper::CoordinateMapper;
use crate::state::EditorState;

pub const OBSTACLE_COLOR: &str = "black";
pub const FLAT_COLOR: &str = "white";
pub const MOUNTAIN_COLOR: &str = "#964B00";
pub const WATER_COLOR: &str = "#3399FF";
pub const GRID_COLOR: &str = "#ccc";
pub const EXPLORED_COLOR: &str = "rgba(173, 216, 230, 0.5)";
pub const PATH_COLOR: &str = "red";
pub const PATH_WIDTH: f64 = 2.0;
pub const START_COLOR: &str = "green";
pub const GOAL_COLOR: &str = "blue";

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f64,
        height: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &'static str,
    },
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &'static str,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        color: &'static str,
        line_width: f64,
    },
}

/// Everything one frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub grid: &'a GridState,
    pub mapper: &'a CoordinateMapper,
    pub start: Option<Position>,
    pub goal: Option<Position>,
    pub path: Option<&'a PathResult>,
}

impl<'a> Scene<'a> {
    pub fn of(editor: &'a EditorState) -> Self {
        Self {
            grid: editor.grid(),
            mapper: editor.mapper(),
            start: editor.start(),
            goal: editor.goal(),
            path: editor.path(),
        }
    }
}

pub fn terrain_color(terrain: TerrainType) -> &'static str {
    match terrain {
        TerrainType::Flat => FLAT_COLOR,
        TerrainType::Mountain => MOUNTAIN_COLOR,
        TerrainType::Water => WATER_COLOR,
    }
}

/// Fill for one cell. Terrain only shows on complex maps.
pub fn cell_color(cell: &Cell, map_type: MapType) -> &'static str {
    if cell.is_obstacle {
        OBSTACLE_COLOR
    } else if map_type.has_terrain() {
        terrain_color(cell.terrain_type)
    } else {
        FLAT_COLOR
    }
}

pub fn compose(scene: &Scene) -> Vec<DrawOp> {
    let (width, height) = scene.mapper.surface_size();
    let mut ops = vec![DrawOp::Clear { width, height }];
    cell_layer(scene, &mut ops);
    if let Some(result) = scene.path {
        explored_layer(&result.explored, scene.mapper, &mut ops);
        path_layer(&result.path, scene.mapper, &mut ops);
    }
    if let Some(start) = scene.start {
        marker(start, START_COLOR, scene.mapper, &mut ops);
    }
    if let Some(goal) = scene.goal {
        marker(goal, GOAL_COLOR, scene.mapper, &mut ops);
    }
    ops
}

fn cell_layer(scene: &Scene, ops: &mut Vec<DrawOp>) {
    let size = scene.mapper.cell_size();
    let map_type = scene.grid.map_type();
    for cell in scene.grid.cells() {
        let r = scene.mapper.to_display(cell.x, cell.y);
        ops.push(DrawOp::FillRect {
            x: r.left,
            y: r.top,
            w: size,
            h: size,
            color: cell_color(cell, map_type),
        });
        ops.push(DrawOp::StrokeRect {
            x: r.left,
            y: r.top,
            w: size,
            h: size,
            color: GRID_COLOR,
        });
    }
}

fn explored_layer(explored: &[Position], mapper: &CoordinateMapper, ops: &mut Vec<DrawOp>) {
    let radius = mapper.cell_size() / 4.0;
    ops.extend(explored.iter().map(|p| {
        let r = mapper.to_display(p.x, p.y);
        DrawOp::FillCircle {
            x: r.center_x,
            y: r.center_y,
            radius,
            color: EXPLORED_COLOR,
        }
    }));
}

fn path_layer(path: &[Position], mapper: &CoordinateMapper, ops: &mut Vec<DrawOp>) {
    if path.is_empty() {
        return;
    }
    let points = path
        .iter()
        .map(|p| {
            let r = mapper.to_display(p.x, p.y);
            (r.center_x, r.center_y)
        })
        .collect();
    ops.push(DrawOp::Polyline {
        points,
        color: PATH_COLOR,
        line_width: PATH_WIDTH,
    });
}

fn marker(pos: Position, color: &'static str, mapper: &CoordinateMapper, ops: &mut Vec<DrawOp>) {
    let r = mapper.to_display(pos.x, pos.y);
    ops.push(DrawOp::FillCircle {
        x: r.center_x,
        y: r.center_y,
        radius: mapper.cell_size() / 2.0,
        color,
    });
}
