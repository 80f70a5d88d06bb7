mod image_loader;
mod search_endpoint;

pub use image_loader::ImageLoader;
pub use search_endpoint::SearchEndpoint;
