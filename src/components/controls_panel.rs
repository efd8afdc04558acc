use crate::model::{MapType, TerrainType};
use crate::state::Tool;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    /// Raw input text; validated only when a map is created.
    pub width: String,
    pub height: String,
    pub map_type: MapType,
    pub on_width: Callback<String>,
    pub on_height: Callback<String>,
    pub on_map_type: Callback<MapType>,
    pub on_create: Callback<()>,
    pub on_clear: Callback<()>,
    pub tool: Tool,
    pub on_tool: Callback<Tool>,
    /// Type of the map currently loaded, not the one in the form.
    pub live_map_type: MapType,
    pub show_terrain: bool,
    pub terrain: TerrainType,
    pub on_terrain: Callback<TerrainType>,
    pub brush_size: u32,
    pub max_brush_size: u32,
    pub on_brush_size: Callback<u32>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let width_cb = {
        let cb = props.on_width.clone();
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let height_cb = {
        let cb = props.on_height.clone();
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let map_type_cb = {
        let cb = props.on_map_type.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(t) = MapType::parse(&value) {
                cb.emit(t);
            }
        })
    };
    let create_cb = {
        let cb = props.on_create.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let brush_cb = {
        let cb = props.on_brush_size.clone();
        Callback::from(move |e: InputEvent| {
            if let Ok(v) = e.target_unchecked_into::<HtmlInputElement>().value().parse::<u32>() {
                cb.emit(v);
            }
        })
    };

    let tools = Tool::ALL
        .iter()
        .copied()
        .filter(|t| *t != Tool::Terrain || props.live_map_type.has_terrain())
        .map(|t| {
            let cb = props.on_tool.clone();
            html! {
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="radio" name="edit-tool" checked={props.tool == t} onclick={Callback::from(move |_: MouseEvent| cb.emit(t))} />
                    <span>{ t.label() }</span>
                </label>
            }
        })
        .collect::<Html>();
    let terrains = if props.show_terrain {
        let radios = TerrainType::ALL
            .iter()
            .copied()
            .map(|t| {
                let cb = props.on_terrain.clone();
                html! {
                    <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                        <input type="radio" name="terrain" checked={props.terrain == t && props.tool == Tool::Terrain} onclick={Callback::from(move |_: MouseEvent| cb.emit(t))} />
                        <span>{ format!("{} (cost {})", t.label(), t.cost()) }</span>
                    </label>
                }
            })
            .collect::<Html>();
        html! { <div style="padding-left:12px; border-left:2px solid #30363d;">{ radios }</div> }
    } else {
        html! {}
    };

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
        <div style="font-weight:600;">{"Map"}</div>
        <div style="display:flex; gap:6px;">
            <label>{"W "}<input type="number" min="1" max="200" style="width:60px;" value={props.width.clone()} oninput={width_cb} /></label>
            <label>{"H "}<input type="number" min="1" max="200" style="width:60px;" value={props.height.clone()} oninput={height_cb} /></label>
        </div>
        <select onchange={map_type_cb}>
            { for MapType::ALL.iter().map(|t| html!{ <option value={t.as_str()} selected={*t == props.map_type}>{ t.label() }</option> }) }
        </select>
        <div style="display:flex; gap:6px;">
            <button onclick={create_cb} style="flex:1;">{"Create map"}</button>
            <button onclick={clear_cb} style="flex:1;">{"Clear map"}</button>
        </div>
        <div style="font-weight:600; margin-top:6px;">{"Edit tool"}</div>
        { tools }
        { terrains }
        <label style="display:flex; align-items:center; gap:8px;">
            <span>{ format!("Brush {}", props.brush_size) }</span>
            <input type="range" min="1" max={props.max_brush_size.to_string()} value={props.brush_size.to_string()} oninput={brush_cb} />
        </label>
    </div>}
}
