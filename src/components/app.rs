use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel, grid_canvas::GridCanvas, legend_panel::LegendPanel,
    map_info_panel::MapInfoPanel, notice_modal::NoticeModal, path_stats_panel::PathStatsPanel,
    solver_panel::SolverPanel,
};
use crate::api::{HttpClient, MapServiceClient, PathServiceClient};
use crate::config::ClientConfig;
use crate::model::{MapType, PathOptions, TerrainType, default_algorithms, default_heuristics};
use crate::state::{
    BrushEditor, Command, EditorAction, EditorState, InteractionController, MapSummary, Notice,
    PointerInput, Tool,
};

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: ClientConfig,
}

/// Service clients shared by every command.
#[derive(Clone, PartialEq)]
pub struct Services {
    pub map: MapServiceClient,
    pub path: PathServiceClient,
}

impl Services {
    pub fn new(config: &ClientConfig) -> Self {
        let http = HttpClient::new(config.api_base.clone(), config.request_timeout_ms);
        Self {
            map: MapServiceClient::new(http.clone()),
            path: PathServiceClient::new(http),
        }
    }
}

/// Carries out one controller command. Network work is spawned; its
/// completion feeds back into the reducer.
fn execute(
    cmd: Command,
    editor: &UseReducerHandle<EditorState>,
    services: &Services,
    config: &Rc<RefCell<ClientConfig>>,
) {
    match cmd {
        Command::UpdateCell(cell) => {
            let editor = editor.clone();
            let map = services.map.clone();
            spawn_local(async move {
                let pos = cell.position();
                debug!("update cell ({}, {})", pos.x, pos.y);
                match map.update_cell(&cell).await {
                    Ok(accepted) => editor.dispatch(EditorAction::CellAccepted(accepted)),
                    Err(e) => {
                        warn!("cell ({}, {}) update failed: {}", pos.x, pos.y, e);
                        editor.dispatch(EditorAction::CellRejected(pos));
                    }
                }
            });
        }
        Command::SetStart(pos) => editor.dispatch(EditorAction::SetStart(pos)),
        Command::SetGoal(pos) => editor.dispatch(EditorAction::SetGoal(pos)),
        Command::CreateMap(req) => {
            let remembered = config.borrow().with_last_map(req.width, req.height, req.map_type);
            remembered.save();
            *config.borrow_mut() = remembered;
            let editor = editor.clone();
            let map = services.map.clone();
            spawn_local(async move {
                match map.create_map(&req).await {
                    Ok(grid) => editor.dispatch(EditorAction::MapLoaded {
                        map: grid,
                        reset_endpoints: true,
                    }),
                    Err(e) => error!("map creation failed: {}", e),
                }
            });
        }
        Command::ClearMap => {
            let editor = editor.clone();
            let map = services.map.clone();
            spawn_local(async move {
                if let Err(e) = map.clear_map().await {
                    error!("map clear failed: {}", e);
                    return;
                }
                match map.current_map().await {
                    Ok(grid) => editor.dispatch(EditorAction::MapLoaded {
                        map: grid,
                        reset_endpoints: false,
                    }),
                    Err(e) => error!("fetching the cleared map failed: {}", e),
                }
            });
        }
        Command::FindPath(query) => {
            let ticket = services.path.begin();
            editor.dispatch(EditorAction::PathRequested(ticket));
            let editor = editor.clone();
            let path = services.path.clone();
            spawn_local(async move {
                match path.find_path(&query).await {
                    Ok(result) => editor.dispatch(EditorAction::PathResolved { ticket, result }),
                    Err(e) => {
                        error!("path request {:?} failed: {}", ticket, e);
                        editor.dispatch(EditorAction::PathFailed { ticket });
                    }
                }
            });
        }
        Command::ClearPath => editor.dispatch(EditorAction::ClearPath),
        Command::Reject(err) => {
            info!("rejected: {}", err);
            editor.dispatch(EditorAction::Notify(Notice::Rejected(err)));
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let editor = use_reducer(EditorState::default);
    let config = use_mut_ref(|| props.config.clone());
    let services = {
        let config = props.config.clone();
        use_memo((), move |_| Services::new(&config))
    };
    let controller = use_mut_ref(|| {
        InteractionController::new(BrushEditor::new(
            props.config.default_brush_size,
            props.config.max_brush_size,
        ))
    });
    // Controller changes live outside the reducer; this re-renders the panels.
    let refresh = use_force_update();
    let form_width = use_state(|| props.config.default_width.to_string());
    let form_height = use_state(|| props.config.default_height.to_string());
    let form_map_type = use_state(|| props.config.default_map_type);
    let options = use_state(PathOptions::default);
    let algorithms = use_state(default_algorithms);
    let heuristics = use_state(default_heuristics);

    // First map and solver option lists
    {
        let editor = editor.clone();
        let services = services.clone();
        let config = config.clone();
        let controller = controller.clone();
        let algorithms = algorithms.clone();
        let heuristics = heuristics.clone();
        use_effect_with((), move |_| {
            let c = config.borrow().clone();
            let cmd = controller.borrow().create_map(
                c.default_width as i64,
                c.default_height as i64,
                c.default_map_type,
            );
            execute(cmd, &editor, &services, &config);
            let path = services.path.clone();
            spawn_local(async move {
                match path.algorithms().await {
                    Ok(list) if !list.is_empty() => algorithms.set(list),
                    Ok(_) => {}
                    Err(e) => warn!("algorithm list unavailable, keeping built-in list: {}", e),
                }
                match path.heuristics().await {
                    Ok(list) if !list.is_empty() => heuristics.set(list),
                    Ok(_) => {}
                    Err(e) => warn!("heuristic list unavailable, keeping built-in list: {}", e),
                }
            });
            || ()
        });
    }

    // Escape cancels a pending start/goal pick
    {
        let controller = controller.clone();
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Escape" && controller.borrow().mode().is_picking() {
                    controller.borrow_mut().cancel_pick();
                    refresh.force_update();
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_pointer = {
        let controller = controller.clone();
        let editor = editor.clone();
        let services = services.clone();
        let config = config.clone();
        let refresh = refresh.clone();
        Callback::from(move |input: PointerInput| {
            let was_picking = controller.borrow().mode().is_picking();
            let commands = controller.borrow_mut().pointer(input, &editor);
            for cmd in commands {
                execute(cmd, &editor, &services, &config);
            }
            if controller.borrow().mode().is_picking() != was_picking {
                refresh.force_update();
            }
        })
    };
    // Mutates the controller, then re-renders.
    let with_controller = |f: fn(&mut InteractionController)| {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            f(&mut controller.borrow_mut());
            refresh.force_update();
        })
    };
    let on_pick_start = with_controller(InteractionController::request_start_pick);
    let on_pick_goal = with_controller(InteractionController::request_goal_pick);
    let on_tool = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |tool: Tool| {
            controller.borrow_mut().set_tool(tool);
            refresh.force_update();
        })
    };
    let on_terrain = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |terrain: TerrainType| {
            controller.borrow_mut().set_terrain(terrain);
            refresh.force_update();
        })
    };
    let on_brush_size = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |size: u32| {
            controller.borrow_mut().set_brush_size(size);
            refresh.force_update();
        })
    };
    let on_width = {
        let form_width = form_width.clone();
        Callback::from(move |v: String| form_width.set(v))
    };
    let on_height = {
        let form_height = form_height.clone();
        Callback::from(move |v: String| form_height.set(v))
    };
    let on_map_type = {
        let form_map_type = form_map_type.clone();
        Callback::from(move |t: MapType| form_map_type.set(t))
    };
    let on_create = {
        let controller = controller.clone();
        let editor = editor.clone();
        let services = services.clone();
        let config = config.clone();
        let form_width = form_width.clone();
        let form_height = form_height.clone();
        let form_map_type = form_map_type.clone();
        Callback::from(move |_: ()| {
            // Unparseable input is reported like any other out-of-range size.
            let w = form_width.trim().parse::<i64>().unwrap_or(0);
            let h = form_height.trim().parse::<i64>().unwrap_or(0);
            let cmd = controller.borrow().create_map(w, h, *form_map_type);
            execute(cmd, &editor, &services, &config);
        })
    };
    let on_clear = {
        let editor = editor.clone();
        let services = services.clone();
        let config = config.clone();
        Callback::from(move |_: ()| execute(Command::ClearMap, &editor, &services, &config))
    };
    let on_options = {
        let options = options.clone();
        Callback::from(move |o: PathOptions| options.set(o))
    };
    let on_find = {
        let controller = controller.clone();
        let editor = editor.clone();
        let services = services.clone();
        let config = config.clone();
        let options = options.clone();
        Callback::from(move |_: ()| {
            let cmd = controller.borrow().find_path(&editor, &options);
            execute(cmd, &editor, &services, &config);
        })
    };
    let on_clear_path = {
        let editor = editor.clone();
        let services = services.clone();
        let config = config.clone();
        Callback::from(move |_: ()| execute(Command::ClearPath, &editor, &services, &config))
    };
    let on_dismiss = {
        let editor = editor.clone();
        Callback::from(move |_: ()| editor.dispatch(EditorAction::DismissNotice))
    };

    let (mode, tool, terrain, brush_size, max_brush_size) = {
        let ctl = controller.borrow();
        (
            ctl.mode(),
            ctl.tool(),
            ctl.terrain(),
            ctl.brush().size(),
            ctl.brush().max_size(),
        )
    };
    let live_map_type = editor.grid().map_type();
    let show_terrain = controller.borrow().terrain_controls_visible(live_map_type);
    let summary = MapSummary::of(editor.grid());

    html! {
        <div style="position:relative; display:flex; gap:12px; padding:12px; min-height:100vh; box-sizing:border-box; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <div style="display:flex; flex-direction:column; gap:12px; width:260px; flex-shrink:0;">
                <ControlsPanel
                    width={(*form_width).clone()}
                    height={(*form_height).clone()}
                    map_type={*form_map_type}
                    {on_width}
                    {on_height}
                    {on_map_type}
                    {on_create}
                    {on_clear}
                    {tool}
                    {on_tool}
                    {live_map_type}
                    {show_terrain}
                    {terrain}
                    {on_terrain}
                    {brush_size}
                    {max_brush_size}
                    {on_brush_size}
                />
                <SolverPanel
                    start={editor.start()}
                    goal={editor.goal()}
                    {mode}
                    {on_pick_start}
                    {on_pick_goal}
                    algorithms={(*algorithms).clone()}
                    heuristics={(*heuristics).clone()}
                    options={(*options).clone()}
                    {on_options}
                    {on_find}
                    {on_clear_path}
                />
            </div>
            <div style="flex:1; overflow:auto;">
                <GridCanvas editor={editor.clone()} {on_pointer} picking={mode.is_picking()} />
            </div>
            <div style="display:flex; flex-direction:column; gap:12px; width:220px; flex-shrink:0;">
                <PathStatsPanel result={editor.path().cloned()} pending={editor.path_pending()} />
                <MapInfoPanel {summary} unsynced={editor.failed_cells().len()} />
                <LegendPanel show_terrain={live_map_type.has_terrain()} />
            </div>
            <NoticeModal message={editor.notice().map(|n| n.to_string())} {on_dismiss} />
        </div>
    }
}
