use crate::model::{PathOptions, Position, SolverOption};
use crate::state::Mode;
use crate::util::fmt_position;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SolverPanelProps {
    pub start: Option<Position>,
    pub goal: Option<Position>,
    pub mode: Mode,
    pub on_pick_start: Callback<()>,
    pub on_pick_goal: Callback<()>,
    pub algorithms: Vec<SolverOption>,
    pub heuristics: Vec<SolverOption>,
    pub options: PathOptions,
    pub on_options: Callback<PathOptions>,
    pub on_find: Callback<()>,
    pub on_clear_path: Callback<()>,
}

fn select(list: &[SolverOption], current: &str, onchange: Callback<Event>) -> Html {
    html! {
        <select {onchange}>
            { for list.iter().map(|o| html!{ <option value={o.id.clone()} selected={o.id == current}>{ o.name.clone() }</option> }) }
        </select>
    }
}

#[function_component]
pub fn SolverPanel(props: &SolverPanelProps) -> Html {
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let algorithm_cb = {
        let cb = props.on_options.clone();
        let options = props.options.clone();
        Callback::from(move |e: Event| {
            let algorithm = e.target_unchecked_into::<HtmlSelectElement>().value();
            cb.emit(PathOptions { algorithm, ..options.clone() });
        })
    };
    let heuristic_cb = {
        let cb = props.on_options.clone();
        let options = props.options.clone();
        Callback::from(move |e: Event| {
            let heuristic = e.target_unchecked_into::<HtmlSelectElement>().value();
            cb.emit(PathOptions { heuristic, ..options.clone() });
        })
    };
    let smooth_cb = {
        let cb = props.on_options.clone();
        let options = props.options.clone();
        Callback::from(move |_: MouseEvent| cb.emit(PathOptions { smooth: !options.smooth, ..options.clone() }))
    };
    let collision_cb = {
        let cb = props.on_options.clone();
        let options = props.options.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(PathOptions {
                check_collision: !options.check_collision,
                ..options.clone()
            })
        })
    };
    let hint = match props.mode {
        Mode::PickingStart => "Click a free cell to place the start (Esc cancels)",
        Mode::PickingGoal => "Click a free cell to place the goal (Esc cancels)",
        _ => "",
    };

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
        <div style="font-weight:600;">{"Path"}</div>
        <div style="display:flex; gap:6px;">
            <button onclick={emit(&props.on_pick_start)} style="flex:1;">{"Set start"}</button>
            <button onclick={emit(&props.on_pick_goal)} style="flex:1;">{"Set goal"}</button>
        </div>
        <div style="font-size:13px;">{ format!("Start: {}", fmt_position(props.start)) }</div>
        <div style="font-size:13px;">{ format!("Goal: {}", fmt_position(props.goal)) }</div>
        { if hint.is_empty() { html!{} } else { html!{ <div style="font-size:11px; color:#58a6ff;">{ hint }</div> } } }
        <label>{"Algorithm "}{ select(&props.algorithms, &props.options.algorithm, algorithm_cb) }</label>
        <label>{"Heuristic "}{ select(&props.heuristics, &props.options.heuristic, heuristic_cb) }</label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.options.smooth} onclick={smooth_cb} />
            <span>{"Smooth path"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={props.options.check_collision} onclick={collision_cb} />
            <span>{"Check collisions"}</span>
        </label>
        <div style="display:flex; gap:6px;">
            <button onclick={emit(&props.on_find)} style="flex:1;">{"Find path"}</button>
            <button onclick={emit(&props.on_clear_path)} style="flex:1;">{"Clear path"}</button>
        </div>
    </div>}
}
