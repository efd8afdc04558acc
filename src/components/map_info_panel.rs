use crate::model::TerrainType;
use crate::state::MapSummary;
use crate::util::fmt_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapInfoPanelProps {
    pub summary: MapSummary,
    /// Cells whose last update request failed.
    pub unsynced: usize,
}

#[function_component]
pub fn MapInfoPanel(props: &MapInfoPanelProps) -> Html {
    let s = &props.summary;
    let line = |label: String, value: String| {
        html! {
            <div style="display:flex; justify-content:space-between; gap:8px;">
                <span>{ label }</span>
                <span style="font-variant-numeric:tabular-nums;">{ value }</span>
            </div>
        }
    };
    let terrain = match s.terrain_counts {
        Some(counts) => TerrainType::ALL
            .iter()
            .zip(counts)
            .map(|(t, n)| line(t.label().to_string(), n.to_string()))
            .collect::<Html>(),
        None => html! {},
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:4px; font-size:13px;">
            <div style="font-weight:600; margin-bottom:4px;">{"Map"}</div>
            { line("Size".into(), format!("{} x {}", s.width, s.height)) }
            { line("Cells".into(), s.total_cells.to_string()) }
            { line("Obstacles".into(), format!("{} ({})", s.obstacle_count, fmt_percent(s.obstacle_ratio()))) }
            { line("Free".into(), format!("{} ({})", s.free_cells, fmt_percent(s.free_ratio()))) }
            { terrain }
            { if props.unsynced > 0 {
                html!{ <div style="margin-top:6px; font-size:11px; color:#f0883e;">{ format!("{} cell edit(s) not saved by the service", props.unsynced) }</div> }
            } else { html!{} } }
        </div>
    }
}
