//! Session context: the live map mirror, endpoints, last path result and
//! everything else the canvas and panels render from.
//!
//! All mutation goes through [`EditorAction`] so yew re-renders (and the
//! canvas redraws) after every change; `version` counts reductions.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

use crate::api::PathTicket;
use crate::error::ValidationError;
use crate::model::{Cell, GridMap, PathResult, Position};

use super::grid::GridState;
use super::mapper::CoordinateMapper;

/// Blocking message shown to the operator until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Rejected(ValidationError),
    PathRequestFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Rejected(err) => write!(f, "{}", err),
            Notice::PathRequestFailed => write!(f, "Path request failed. See the console for details."),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub version: u64,
    grid: GridState,
    mapper: CoordinateMapper,
    start: Option<Position>,
    goal: Option<Position>,
    path: Option<PathResult>,
    /// Latest issued path query; responses for any other ticket are stale.
    pending_path: Option<PathTicket>,
    /// Cells whose most recent update request failed.
    failed_cells: BTreeSet<Position>,
    notice: Option<Notice>,
}

impl EditorState {
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    pub fn path(&self) -> Option<&PathResult> {
        self.path.as_ref()
    }

    pub fn path_pending(&self) -> bool {
        self.pending_path.is_some()
    }

    pub fn failed_cells(&self) -> &BTreeSet<Position> {
        &self.failed_cells
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn endpoint_allowed(&self, pos: Position) -> bool {
        self.grid.contains(pos) && !self.grid.is_obstacle(pos)
    }
}

#[derive(Clone, Debug)]
pub enum EditorAction {
    /// Fresh map from create (`reset_endpoints`) or clear/get.
    MapLoaded { map: GridMap, reset_endpoints: bool },
    /// Service accepted an update; carries the value it echoed.
    CellAccepted(Cell),
    CellRejected(Position),
    SetStart(Position),
    SetGoal(Position),
    PathRequested(PathTicket),
    PathResolved { ticket: PathTicket, result: PathResult },
    PathFailed { ticket: PathTicket },
    ClearPath,
    Notify(Notice),
    DismissNotice,
}

impl Reducible for EditorState {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use EditorAction::*;
        let mut new = (*self).clone();
        match action {
            MapLoaded { map, reset_endpoints } => {
                info!("map loaded: {}x{} {}", map.width, map.height, map.map_type.as_str());
                new.mapper = CoordinateMapper::new(map.width, map.height);
                new.grid.replace(map);
                new.path = None;
                new.pending_path = None;
                new.failed_cells.clear();
                if reset_endpoints {
                    new.start = None;
                    new.goal = None;
                } else {
                    new.start = new.start.filter(|p| new.endpoint_allowed(*p));
                    new.goal = new.goal.filter(|p| new.endpoint_allowed(*p));
                }
            }
            CellAccepted(cell) => {
                let pos = cell.position();
                if !new.grid.apply_cell_update(cell) {
                    debug!("update for ({}, {}) has no cell on this map", pos.x, pos.y);
                    return self;
                }
                new.failed_cells.remove(&pos);
            }
            CellRejected(pos) => {
                if !new.grid.contains(pos) {
                    return self;
                }
                new.failed_cells.insert(pos);
            }
            SetStart(pos) => {
                if !new.endpoint_allowed(pos) {
                    return self;
                }
                new.start = Some(pos);
            }
            SetGoal(pos) => {
                if !new.endpoint_allowed(pos) {
                    return self;
                }
                new.goal = Some(pos);
            }
            PathRequested(ticket) => {
                new.pending_path = Some(ticket);
            }
            PathResolved { ticket, result } => {
                if new.pending_path != Some(ticket) {
                    debug!("discarding superseded path response {:?}", ticket);
                    return self;
                }
                info!(
                    "path {:?}: {} steps, {} nodes explored",
                    ticket,
                    result.path.len(),
                    result.nodes_explored
                );
                new.pending_path = None;
                new.path = Some(result);
            }
            PathFailed { ticket } => {
                if new.pending_path != Some(ticket) {
                    return self;
                }
                new.pending_path = None;
                new.notice = Some(Notice::PathRequestFailed);
            }
            ClearPath => {
                new.path = None;
                new.pending_path = None;
            }
            Notify(notice) => {
                new.notice = Some(notice);
            }
            DismissNotice => {
                new.notice = None;
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
