use crate::model::PathResult;
use crate::util::fmt_2dp;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PathStatsPanelProps {
    pub result: Option<PathResult>,
    pub pending: bool,
}

#[function_component]
pub fn PathStatsPanel(props: &PathStatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let row = |label: &'static str, value: String| {
        html! {
            <div style={row_style}>
                <span style={label_style}>{ label }</span>
                <span style={value_style}>{ value }</span>
            </div>
        }
    };
    let body = match &props.result {
        None => html! { <div style="opacity:0.7;">{"No path computed yet"}</div> },
        Some(r) if !r.found() => html! { <>
            <div style="color:#f85149; font-weight:600;">{"No path found"}</div>
            { row("Nodes explored", r.nodes_explored.to_string()) }
            { row("Time (ms)", fmt_2dp(r.computation_ms())) }
        </> },
        Some(r) => html! { <>
            { row("Path length", fmt_2dp(r.path_length)) }
            { row("Path cost", fmt_2dp(r.path_cost)) }
            { row("Nodes explored", r.nodes_explored.to_string()) }
            { row("Time (ms)", fmt_2dp(r.computation_ms())) }
        </> },
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style="font-weight:600;">{"Path statistics"}</div>
            { if props.pending { html!{ <div style="font-size:11px; color:#58a6ff;">{"Searching..."}</div> } } else { html!{} } }
            { body }
        </div>
    }
}
