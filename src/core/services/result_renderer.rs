use crate::core::interfaces::ports::ResultsSurface;
use crate::core::models::{RenderedNode, ResultPayload, SearchMode};

/// Wipes the surface and appends one node per payload token, in payload order.
pub fn render_payload(payload: &str, mode: SearchMode, surface: &mut dyn ResultsSurface) -> usize {
    surface.clear();

    let payload = ResultPayload::new(payload);
    let mut node_count = 0;
    for token in payload.tokens() {
        surface.append_node(RenderedNode::from_token(token, mode));
        node_count += 1;
    }

    log::debug!("[SEARCH] Rendered {} {} node(s)", node_count, mode);
    node_count
}
