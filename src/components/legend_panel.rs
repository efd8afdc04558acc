use super::legend::LegendRow;
use crate::render::{
    EXPLORED_COLOR, FLAT_COLOR, GOAL_COLOR, MOUNTAIN_COLOR, OBSTACLE_COLOR, PATH_COLOR, START_COLOR,
    WATER_COLOR,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    /// Terrain rows only mean something on complex maps.
    pub show_terrain: bool,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <LegendRow color={OBSTACLE_COLOR} label="Obstacle"/>
        { if props.show_terrain { html!{ <>
            <LegendRow color={FLAT_COLOR} label="Flat (cost 1)"/>
            <LegendRow color={MOUNTAIN_COLOR} label="Mountain (cost 2)"/>
            <LegendRow color={WATER_COLOR} label="Water (cost 3)"/>
        </> } } else { html!{ <LegendRow color={FLAT_COLOR} label="Free"/> } } }
        <LegendRow color={EXPLORED_COLOR} label="Explored" round={true}/>
        <LegendRow color={PATH_COLOR} label="Path"/>
        <LegendRow color={START_COLOR} label="Start" round={true}/>
        <LegendRow color={GOAL_COLOR} label="Goal" round={true}/>
    </div>}
}
