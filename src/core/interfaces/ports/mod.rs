mod link_opener;
mod results_surface;

pub use link_opener::LinkOpener;
pub use results_surface::{ResultsSurface, SurfaceEntry};
