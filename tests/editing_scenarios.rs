//! End-to-end editing sessions: controller and reducer driven together
//! against a scripted in-memory service whose responses are delivered on
//! demand, in any order.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use grid_path_studio::api::PathSequencer;
use grid_path_studio::model::{
    Cell, GridMap, MapType, PathOptions, PathQuery, PathResult, Position, TerrainType,
};
use grid_path_studio::render::{self, DrawOp, Scene};
use grid_path_studio::state::{
    BrushEditor, Command, EditorAction, EditorState, InteractionController, Notice, PointerInput,
    Tool,
};
use yew::Reducible;

/// Service double: owns the authoritative map and answers with a breadth-first solver.
struct ScriptedService {
    map: GridMap,
    calls: usize,
}

impl ScriptedService {
    fn cell_mut(&mut self, x: u32, y: u32) -> &mut Cell {
        let w = self.map.width;
        &mut self.map.cells[(y * w + x) as usize]
    }

    fn update(&mut self, cell: Cell) -> Cell {
        self.calls += 1;
        let mut accepted = cell;
        if accepted.is_obstacle {
            accepted.cost = f64::INFINITY;
        }
        *self.cell_mut(accepted.x, accepted.y) = accepted.clone();
        accepted
    }

    fn find(&mut self, q: &PathQuery) -> PathResult {
        self.calls += 1;
        let (w, h) = (self.map.width as i64, self.map.height as i64);
        let free = |x: i64, y: i64| {
            x >= 0 && y >= 0 && x < w && y < h && !self.map.cells[(y * w + x) as usize].is_obstacle
        };
        let start = (q.start_x as i64, q.start_y as i64);
        let goal = (q.goal_x as i64, q.goal_y as i64);
        let mut came_from = HashMap::new();
        came_from.insert(start, start);
        let mut queue = VecDeque::from([start]);
        let mut explored = Vec::new();
        while let Some((x, y)) = queue.pop_front() {
            explored.push(Position::new(x as u32, y as u32));
            if (x, y) == goal {
                break;
            }
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let next = (x + dx, y + dy);
                if free(next.0, next.1) && !came_from.contains_key(&next) {
                    came_from.insert(next, (x, y));
                    queue.push_back(next);
                }
            }
        }
        let mut path = Vec::new();
        if came_from.contains_key(&goal) {
            let mut at = goal;
            while at != start {
                path.push(Position::new(at.0 as u32, at.1 as u32));
                at = came_from[&at];
            }
            path.push(Position::new(start.0 as u32, start.1 as u32));
            path.reverse();
        }
        let steps = path.len().saturating_sub(1) as f64;
        PathResult {
            nodes_explored: explored.len() as u64,
            path_length: steps,
            path_cost: steps,
            path,
            explored,
            computation_time: 0.001,
        }
    }
}

struct Session {
    state: Rc<EditorState>,
    controller: InteractionController,
    service: ScriptedService,
    sequencer: PathSequencer,
    options: PathOptions,
    /// Responses not yet delivered, in issue order.
    inflight: Vec<EditorAction>,
}

impl Session {
    fn new(width: u32, height: u32, map_type: MapType) -> Self {
        let mut session = Self {
            state: Rc::new(EditorState::default()),
            controller: InteractionController::new(BrushEditor::new(1, 10)),
            service: ScriptedService {
                map: GridMap::blank(0, 0, MapType::Simple),
                calls: 0,
            },
            sequencer: PathSequencer::default(),
            options: PathOptions::default(),
            inflight: Vec::new(),
        };
        let cmd = session
            .controller
            .create_map(width as i64, height as i64, map_type);
        session.run(cmd);
        session.deliver();
        session
    }

    fn dispatch(&mut self, action: EditorAction) {
        self.state = self.state.clone().reduce(action);
    }

    fn run(&mut self, cmd: Command) {
        match cmd {
            Command::UpdateCell(cell) => {
                let accepted = self.service.update(cell);
                self.inflight.push(EditorAction::CellAccepted(accepted));
            }
            Command::SetStart(p) => self.dispatch(EditorAction::SetStart(p)),
            Command::SetGoal(p) => self.dispatch(EditorAction::SetGoal(p)),
            Command::CreateMap(req) => {
                self.service.calls += 1;
                self.service.map = GridMap::blank(req.width, req.height, req.map_type);
                self.inflight.push(EditorAction::MapLoaded {
                    map: self.service.map.clone(),
                    reset_endpoints: true,
                });
            }
            Command::ClearMap => {
                self.service.calls += 2;
                let (w, h, t) = (self.service.map.width, self.service.map.height, self.service.map.map_type);
                self.service.map = GridMap::blank(w, h, t);
                self.inflight.push(EditorAction::MapLoaded {
                    map: self.service.map.clone(),
                    reset_endpoints: false,
                });
            }
            Command::FindPath(query) => {
                let ticket = self.sequencer.issue();
                self.dispatch(EditorAction::PathRequested(ticket));
                let result = self.service.find(&query);
                self.inflight.push(EditorAction::PathResolved { ticket, result });
            }
            Command::ClearPath => self.dispatch(EditorAction::ClearPath),
            Command::Reject(err) => self.dispatch(EditorAction::Notify(Notice::Rejected(err))),
        }
    }

    fn deliver(&mut self) {
        for action in std::mem::take(&mut self.inflight) {
            self.dispatch(action);
        }
    }

    fn deliver_reversed(&mut self) {
        let mut pending = std::mem::take(&mut self.inflight);
        pending.reverse();
        for action in pending {
            self.dispatch(action);
        }
    }

    fn pointer(&mut self, input: PointerInput) {
        let cmds = self.controller.pointer(input, &self.state);
        for cmd in cmds {
            self.run(cmd);
        }
    }

    /// What the browser sends for a plain click: down, up, click.
    fn click(&mut self, x: i64, y: i64) {
        self.pointer(PointerInput::Down((x, y)));
        self.pointer(PointerInput::Up);
        self.pointer(PointerInput::Click((x, y)));
    }

    fn drag(&mut self, cells: &[(i64, i64)]) {
        let (first, rest) = cells.split_first().expect("non-empty stroke");
        self.pointer(PointerInput::Down(*first));
        for c in rest {
            self.pointer(PointerInput::Move(*c));
        }
        self.pointer(PointerInput::Up);
    }

    fn place_start(&mut self, x: i64, y: i64) {
        self.controller.request_start_pick();
        self.click(x, y);
    }

    fn place_goal(&mut self, x: i64, y: i64) {
        self.controller.request_goal_pick();
        self.click(x, y);
    }

    fn find_path(&mut self) {
        let cmd = self.controller.find_path(&self.state, &self.options);
        self.run(cmd);
    }

    fn cell(&self, x: i64, y: i64) -> Cell {
        self.state.grid().get(x, y).expect("cell on map").clone()
    }

    fn fill_at(&self, x: u32, y: u32) -> &'static str {
        let r = self.state.mapper().to_display(x, y);
        render::compose(&Scene::of(&self.state))
            .into_iter()
            .find_map(|op| match op {
                DrawOp::FillRect { x, y, color, .. } if x == r.left && y == r.top => Some(color),
                _ => None,
            })
            .expect("cell drawn")
    }
}

#[test]
fn test_walled_off_goal_finds_no_path() {
    let mut s = Session::new(10, 10, MapType::Simple);
    assert_eq!(s.state.grid().len(), 100);
    assert!(s.state.grid().cells().all(|c| *c == Cell::open(c.x, c.y)));

    s.place_start(0, 0);
    s.place_goal(9, 9);
    assert_eq!(s.state.start(), Some(Position::new(0, 0)));
    assert_eq!(s.state.goal(), Some(Position::new(9, 9)));

    s.controller.set_tool(Tool::DrawObstacle);
    s.drag(&[(8, 9), (8, 8), (9, 8)]);
    s.deliver();
    for (x, y) in [(8, 9), (8, 8), (9, 8)] {
        assert!(s.cell(x, y).is_obstacle);
    }

    s.find_path();
    assert!(s.state.path_pending());
    s.deliver();
    let result = s.state.path().expect("path result").clone();
    assert!(result.path.is_empty());
    assert!(result.nodes_explored > 0);
    assert_eq!(result.path_cost, 0.0);
    assert_eq!(result.path_length, 0.0);
    assert!(s.state.notice().is_none());

    let ops = render::compose(&Scene::of(&s.state));
    assert!(!ops.iter().any(|op| matches!(op, DrawOp::Polyline { .. })));
}

#[test]
fn test_open_map_path_is_drawn() {
    let mut s = Session::new(10, 10, MapType::Simple);
    s.place_start(0, 0);
    s.place_goal(3, 0);
    s.find_path();
    s.deliver();
    let result = s.state.path().expect("path result");
    assert_eq!(result.path.len(), 4);
    assert_eq!(result.path_length, 3.0);
    let ops = render::compose(&Scene::of(&s.state));
    assert!(ops.iter().any(|op| matches!(op, DrawOp::Polyline { points, .. } if points.len() == 4)));
}

#[test]
fn test_mountain_paint_then_erase() {
    let mut s = Session::new(5, 5, MapType::Complex);
    s.controller.set_terrain(TerrainType::Mountain);
    s.click(2, 2);
    s.deliver();
    let cell = s.cell(2, 2);
    assert_eq!(cell.terrain_type, TerrainType::Mountain);
    assert_eq!(cell.cost, 2.0);
    assert!(!cell.is_obstacle);
    assert_eq!(s.fill_at(2, 2), render::MOUNTAIN_COLOR);

    s.controller.set_tool(Tool::EraseObstacle);
    s.click(2, 2);
    s.deliver();
    assert_eq!(s.cell(2, 2), Cell::open(2, 2));
    assert_eq!(s.fill_at(2, 2), render::FLAT_COLOR);
}

#[test]
fn test_click_after_stroke_paints_once() {
    let mut s = Session::new(5, 5, MapType::Simple);
    s.controller.set_tool(Tool::DrawObstacle);
    s.click(1, 1);
    assert_eq!(s.inflight.len(), 1);
    s.deliver();
    // a click with no preceding stroke still paints
    s.pointer(PointerInput::Click((3, 3)));
    assert_eq!(s.inflight.len(), 1);
}

#[test]
fn test_overlapping_strokes_last_response_wins() {
    let mut s = Session::new(5, 5, MapType::Complex);
    s.controller.set_tool(Tool::DrawObstacle);
    s.controller.set_brush_size(3);
    s.click(2, 2);
    s.controller.set_brush_size(1);
    s.controller.set_terrain(TerrainType::Water);
    s.click(3, 3);
    assert_eq!(s.inflight.len(), 10);

    // water issued last but the obstacle response completes last
    s.deliver_reversed();
    assert!(s.cell(3, 3).is_obstacle);
    assert_eq!(s.fill_at(3, 3), render::OBSTACLE_COLOR);

    // erase issued first, water second; water completes first and loses
    s.controller.set_tool(Tool::EraseObstacle);
    s.click(3, 3);
    s.controller.set_terrain(TerrainType::Water);
    s.click(3, 3);
    s.deliver_reversed();
    assert_eq!(s.cell(3, 3), Cell::open(3, 3));
    assert_eq!(s.fill_at(3, 3), render::FLAT_COLOR);
}

#[test]
fn test_find_path_needs_both_endpoints() {
    let mut s = Session::new(10, 10, MapType::Simple);
    s.place_start(0, 0);
    let calls = s.service.calls;
    s.find_path();
    assert_eq!(s.service.calls, calls);
    assert!(s.inflight.is_empty());
    assert!(!s.state.path_pending());
    assert!(matches!(s.state.notice(), Some(Notice::Rejected(_))));
}

#[test]
fn test_invalid_size_is_rejected_locally() {
    let mut s = Session::new(10, 10, MapType::Simple);
    let calls = s.service.calls;
    let cmd = s.controller.create_map(0, 10, MapType::Simple);
    s.run(cmd);
    let cmd = s.controller.create_map(10, 201, MapType::Complex);
    s.run(cmd);
    assert_eq!(s.service.calls, calls);
    assert_eq!(s.state.grid().width(), 10);
    assert!(s.state.notice().is_some());
}

#[test]
fn test_endpoint_on_obstacle_keeps_previous() {
    let mut s = Session::new(5, 5, MapType::Simple);
    s.place_start(0, 0);
    s.controller.set_tool(Tool::DrawObstacle);
    s.click(4, 4);
    s.deliver();
    s.place_start(4, 4);
    assert_eq!(s.state.start(), Some(Position::new(0, 0)));
    assert!(matches!(s.state.notice(), Some(Notice::Rejected(_))));
    s.dispatch(EditorAction::DismissNotice);
    s.place_goal(4, 4);
    assert_eq!(s.state.goal(), None);
}

#[test]
fn test_superseded_path_query_is_ignored() {
    let mut s = Session::new(10, 10, MapType::Simple);
    s.place_start(0, 0);
    s.place_goal(5, 0);
    s.find_path();
    s.place_goal(0, 2);
    s.find_path();
    s.deliver_reversed();
    let result = s.state.path().expect("path result");
    assert_eq!(result.path.last(), Some(&Position::new(0, 2)));
}

#[test]
fn test_clear_map_keeps_valid_endpoints() {
    let mut s = Session::new(6, 6, MapType::Simple);
    s.place_start(1, 1);
    s.place_goal(4, 4);
    s.controller.set_tool(Tool::DrawObstacle);
    s.drag(&[(2, 2), (3, 2)]);
    s.deliver();
    s.run(Command::ClearMap);
    s.deliver();
    assert!(s.state.grid().cells().all(|c| !c.is_obstacle));
    assert_eq!(s.state.start(), Some(Position::new(1, 1)));
    assert_eq!(s.state.goal(), Some(Position::new(4, 4)));
}
