pub mod app;
pub mod controls_panel;
pub mod grid_canvas;
pub mod legend;
pub mod legend_panel;
pub mod map_info_panel;
pub mod notice_modal;
pub mod path_stats_panel;
pub mod solver_panel;
