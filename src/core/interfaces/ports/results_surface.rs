use crate::core::models::RenderedNode;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEntry {
    Node(RenderedNode),
    Text(String),
}

/// The region that displays search results. Owned by the view, lent to renderers.
pub trait ResultsSurface {
    fn clear(&mut self);

    fn append_node(&mut self, node: RenderedNode);

    fn write_text(&mut self, text: String);

    fn entries(&self) -> &[SurfaceEntry];

    fn nodes(&self) -> Vec<&RenderedNode> {
        self.entries()
            .iter()
            .filter_map(|entry| match entry {
                SurfaceEntry::Node(node) => Some(node),
                SurfaceEntry::Text(_) => None,
            })
            .collect()
    }

    fn text_content(&self) -> String {
        self.entries()
            .iter()
            .map(|entry| match entry {
                SurfaceEntry::Node(RenderedNode::Link { text, .. }) => text.as_str(),
                SurfaceEntry::Node(RenderedNode::Image { .. }) => "",
                SurfaceEntry::Text(text) => text.as_str(),
            })
            .collect()
    }
}
