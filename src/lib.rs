pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod state;
pub mod util;
