use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::SearchError;
use crate::core::interfaces::adapters::SearchEndpoint;
use crate::core::interfaces::ports::{ResultsSurface, SurfaceEntry};
use crate::core::models::{RenderedNode, SearchMode, SearchQuery};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    entries: Vec<SurfaceEntry>,
    pub clear_count: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_hrefs(&self) -> Vec<String> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                RenderedNode::Link { href, .. } => Some(href.clone()),
                RenderedNode::Image { .. } => None,
            })
            .collect()
    }

    pub fn image_sources(&self) -> Vec<String> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                RenderedNode::Image { src, .. } => Some(src.clone()),
                RenderedNode::Link { .. } => None,
            })
            .collect()
    }
}

impl ResultsSurface for RecordingSurface {
    fn clear(&mut self) {
        self.clear_count += 1;
        self.entries.clear();
    }

    fn append_node(&mut self, node: RenderedNode) {
        self.entries.push(SurfaceEntry::Node(node));
    }

    fn write_text(&mut self, text: String) {
        self.entries.push(SurfaceEntry::Text(text));
    }

    fn entries(&self) -> &[SurfaceEntry] {
        &self.entries
    }
}

pub struct MockSearchEndpoint {
    submitted: Arc<Mutex<Vec<(String, SearchMode)>>>,
    response: Result<String, SearchError>,
}

impl MockSearchEndpoint {
    pub fn responding_with(body: &str) -> Self {
        Self {
            submitted: Arc::new(Mutex::new(Vec::new())),
            response: Ok(body.to_string()),
        }
    }

    pub fn failing_with(error: SearchError) -> Self {
        Self {
            submitted: Arc::new(Mutex::new(Vec::new())),
            response: Err(error),
        }
    }

    pub fn get_submit_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    pub fn get_submissions(&self) -> Vec<(String, SearchMode)> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchEndpoint for MockSearchEndpoint {
    async fn submit(&self, query: &SearchQuery, mode: SearchMode) -> Result<String, SearchError> {
        self.submitted
            .lock()
            .unwrap()
            .push((query.as_str().to_string(), mode));
        self.response.clone()
    }
}
