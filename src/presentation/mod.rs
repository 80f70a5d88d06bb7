pub mod app_theme;
mod results_pane;

pub use results_pane::{ImageSlot, ResultsPane, ResultsPaneMessage};
