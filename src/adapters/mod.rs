mod http_image_loader;
mod http_search_endpoint;
mod system_browser_link_opener;

pub use http_image_loader::HttpImageLoader;
pub use http_search_endpoint::HttpSearchEndpoint;
pub use system_browser_link_opener::SystemBrowserLinkOpener;
