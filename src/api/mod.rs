pub mod http;
pub mod map_service;
pub mod path_service;

pub use http::HttpClient;
pub use map_service::MapServiceClient;
pub use path_service::{PathSequencer, PathServiceClient, PathTicket};
