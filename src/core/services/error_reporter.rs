use crate::core::interfaces::ports::ResultsSurface;
use crate::global_constants;

pub fn report_error(message: &str, surface: &mut dyn ResultsSurface) {
    log::warn!("[SEARCH] Reporting error: {}", message);

    surface.clear();
    surface.write_text(format!("{}{}", global_constants::ERROR_PREFIX, message));
}
