use crate::core::models::SearchMode;
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    NewWindow,
}

/// A display node derived one-to-one from a payload token.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedNode {
    Link {
        href: String,
        text: String,
        target: LinkTarget,
        marker_class: &'static str,
    },
    Image {
        src: String,
        alt: String,
        marker_class: &'static str,
        max_width: f32,
    },
}

impl RenderedNode {
    pub fn from_token(token: &str, mode: SearchMode) -> Self {
        match mode {
            SearchMode::Links => RenderedNode::Link {
                href: token.to_string(),
                text: token.to_string(),
                target: LinkTarget::NewWindow,
                marker_class: global_constants::LINK_MARKER_CLASS,
            },
            SearchMode::Images => RenderedNode::Image {
                src: token.to_string(),
                alt: token.to_string(),
                marker_class: global_constants::IMAGE_MARKER_CLASS,
                max_width: global_constants::IMAGE_MAX_WIDTH_PX,
            },
        }
    }

    pub fn url(&self) -> &str {
        match self {
            RenderedNode::Link { href, .. } => href,
            RenderedNode::Image { src, .. } => src,
        }
    }
}
