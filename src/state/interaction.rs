//! Pointer/tool mode state machine.
//!
//! The controller never talks to the network or the canvas. It turns pointer
//! and control events into [`Command`]s that the app shell executes, which is
//! what keeps the mode logic testable without a browser.

use log::debug;

use crate::error::ValidationError;
use crate::model::{Cell, CreateMapRequest, MapType, PathOptions, PathQuery, Position, TerrainType};

use super::brush::{BrushEditor, Tool};
use super::editor::EditorState;

/// Signed cell coordinates straight from the mapper; may lie off the grid.
pub type CellCoord = (i64, i64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Painting {
        /// Last cell the brush was applied at.
        last: Option<CellCoord>,
    },
    PickingStart,
    PickingGoal,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Painting { .. } => "Painting",
            Mode::PickingStart => "PickingStart",
            Mode::PickingGoal => "PickingGoal",
        }
    }

    pub fn is_picking(&self) -> bool {
        matches!(self, Mode::PickingStart | Mode::PickingGoal)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerInput {
    Down(CellCoord),
    Move(CellCoord),
    Up,
    Click(CellCoord),
}

/// Work the app shell must carry out.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    UpdateCell(Cell),
    SetStart(Position),
    SetGoal(Position),
    CreateMap(CreateMapRequest),
    ClearMap,
    FindPath(PathQuery),
    ClearPath,
    Reject(ValidationError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionController {
    mode: Mode,
    brush: BrushEditor,
    /// Set when a Down..Up stroke ends, so the trailing click is not painted twice.
    stroke_ended: bool,
}

impl InteractionController {
    pub fn new(brush: BrushEditor) -> Self {
        Self {
            mode: Mode::Idle,
            brush,
            stroke_ended: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn brush(&self) -> &BrushEditor {
        &self.brush
    }

    pub fn tool(&self) -> Tool {
        self.brush.tool
    }

    pub fn terrain(&self) -> TerrainType {
        self.brush.terrain
    }

    /// Tool changes never alter the current mode.
    pub fn set_tool(&mut self, tool: Tool) {
        self.brush.tool = tool;
    }

    pub fn set_terrain(&mut self, terrain: TerrainType) {
        self.brush.terrain = terrain;
        self.brush.tool = Tool::Terrain;
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.brush.set_size(size);
    }

    /// Terrain radios are offered for complex maps while a painting tool is active.
    pub fn terrain_controls_visible(&self, map_type: MapType) -> bool {
        map_type.has_terrain() && self.brush.tool != Tool::Select
    }

    pub fn request_start_pick(&mut self) {
        self.enter_pick(Mode::PickingStart);
    }

    pub fn request_goal_pick(&mut self) {
        self.enter_pick(Mode::PickingGoal);
    }

    pub fn cancel_pick(&mut self) {
        if self.mode.is_picking() {
            self.mode = Mode::Idle;
        }
    }

    fn enter_pick(&mut self, mode: Mode) {
        self.mode = mode;
        self.brush.tool = Tool::Select;
        self.stroke_ended = false;
    }

    pub fn pointer(&mut self, input: PointerInput, editor: &EditorState) -> Vec<Command> {
        let before = self.mode;
        let commands = match (self.mode, input) {
            (Mode::PickingStart, PointerInput::Click(at)) => {
                self.mode = Mode::Idle;
                self.resolve_pick(at, editor, true)
            }
            (Mode::PickingGoal, PointerInput::Click(at)) => {
                self.mode = Mode::Idle;
                self.resolve_pick(at, editor, false)
            }
            (Mode::PickingStart | Mode::PickingGoal, _) => Vec::new(),
            (Mode::Idle | Mode::Painting { .. }, PointerInput::Down(at)) => {
                self.stroke_ended = false;
                self.mode = Mode::Painting { last: Some(at) };
                self.paint(at, editor)
            }
            (Mode::Painting { last }, PointerInput::Move(at)) => {
                if last == Some(at) {
                    Vec::new()
                } else {
                    self.mode = Mode::Painting { last: Some(at) };
                    self.paint(at, editor)
                }
            }
            (Mode::Painting { .. }, PointerInput::Up) => {
                self.mode = Mode::Idle;
                self.stroke_ended = true;
                Vec::new()
            }
            (Mode::Idle, PointerInput::Click(at)) => {
                if self.stroke_ended {
                    self.stroke_ended = false;
                    Vec::new()
                } else {
                    self.paint(at, editor)
                }
            }
            _ => Vec::new(),
        };
        if before.name() != self.mode.name() {
            debug!("interaction {} -> {}", before.name(), self.mode.name());
        }
        commands
    }

    fn paint(&self, at: CellCoord, editor: &EditorState) -> Vec<Command> {
        self.brush
            .intents(at, editor.grid())
            .into_iter()
            .map(Command::UpdateCell)
            .collect()
    }

    fn resolve_pick(&self, at: CellCoord, editor: &EditorState, start: bool) -> Vec<Command> {
        let grid = editor.grid();
        let Some(pos) = grid.position(at.0, at.1) else {
            return Vec::new();
        };
        let rejected = match (grid.is_obstacle(pos), start) {
            (true, true) => Some(ValidationError::StartOnObstacle { x: pos.x, y: pos.y }),
            (true, false) => Some(ValidationError::GoalOnObstacle { x: pos.x, y: pos.y }),
            (false, _) => None,
        };
        match (rejected, start) {
            (Some(err), _) => vec![Command::Reject(err)],
            (None, true) => vec![Command::SetStart(pos)],
            (None, false) => vec![Command::SetGoal(pos)],
        }
    }

    pub fn create_map(&self, width: i64, height: i64, map_type: MapType) -> Command {
        match CreateMapRequest::new(width, height, map_type) {
            Ok(req) => Command::CreateMap(req),
            Err(err) => Command::Reject(err),
        }
    }

    pub fn find_path(&self, editor: &EditorState, options: &PathOptions) -> Command {
        match (editor.start(), editor.goal()) {
            (Some(start), Some(goal)) => Command::FindPath(PathQuery::new(start, goal, options)),
            _ => Command::Reject(ValidationError::MissingEndpoints),
        }
    }
}
