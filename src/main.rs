use grid_path_studio::components::app::App;
use grid_path_studio::config::ClientConfig;
use grid_path_studio::util::init_logging;

fn main() {
    console_error_panic_hook::set_once();
    let config = ClientConfig::load();
    init_logging(config.level_filter());
    log::info!("grid path studio starting, service at {:?}", config.api_base);
    yew::Renderer::<App>::with_props(grid_path_studio::components::app::AppProps { config }).render();
}
