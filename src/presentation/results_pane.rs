use std::collections::HashMap;

use iced::widget::{button, column, container, image, text, Column, Row, Space};
use iced::{Color, Element, Length, Theme};

use crate::core::interfaces::ports::{ResultsSurface, SurfaceEntry};
use crate::core::models::RenderedNode;
use crate::global_constants;
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Loaded(image::Handle),
    Failed,
}

#[derive(Debug, Clone)]
pub enum ResultsPaneMessage {
    OpenLink(String),
}

/// The results surface of the main window.
#[derive(Debug, Default)]
pub struct ResultsPane {
    entries: Vec<SurfaceEntry>,
    image_slots: HashMap<usize, ImageSlot>,
}

impl ResultsSurface for ResultsPane {
    fn clear(&mut self) {
        self.entries.clear();
        self.image_slots.clear();
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

impl ResultsPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image nodes that have not started loading yet, marked as loading on return.
    pub fn take_unloaded_images(&mut self) -> Vec<(usize, String)> {
        let mut unloaded = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if let SurfaceEntry::Node(RenderedNode::Image { src, .. }) = entry {
                if !self.image_slots.contains_key(&index) {
                    unloaded.push((index, src.clone()));
                }
            }
        }

        for (index, _) in &unloaded {
            self.image_slots.insert(*index, ImageSlot::Loading);
        }

        unloaded
    }

    pub fn apply_image_bytes(&mut self, index: usize, result: Result<Vec<u8>, String>) {
        if !self.image_slots.contains_key(&index) {
            log::debug!("[IMAGES] Ignoring bytes for cleared slot {}", index);
            return;
        }

        let slot = match result {
            Ok(bytes) => ImageSlot::Loaded(image::Handle::from_bytes(bytes)),
            Err(error) => {
                log::warn!("[IMAGES] Image {} failed to load: {}", index, error);
                ImageSlot::Failed
            }
        };
        self.image_slots.insert(index, slot);
    }

    pub fn image_slot(&self, index: usize) -> Option<&ImageSlot> {
        self.image_slots.get(&index)
    }

    pub fn render_ui(&self, theme: &Theme) -> Element<'_, ResultsPaneMessage> {
        let mut children: Vec<Element<'_, ResultsPaneMessage>> = Vec::new();
        let mut image_run: Vec<Element<'_, ResultsPaneMessage>> = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if let SurfaceEntry::Node(RenderedNode::Image { alt, max_width, .. }) = entry {
                image_run.push(self.render_image(index, alt, *max_width));
                continue;
            }

            if !image_run.is_empty() {
                children.push(Row::with_children(std::mem::take(&mut image_run)).wrap().into());
            }

            match entry {
                SurfaceEntry::Node(RenderedNode::Link { href, text: label, .. }) => {
                    children.push(render_link(href, label));
                }
                SurfaceEntry::Text(message) => {
                    children.push(render_text(message, theme));
                }
                SurfaceEntry::Node(RenderedNode::Image { .. }) => {}
            }
        }

        if !image_run.is_empty() {
            children.push(Row::with_children(image_run).wrap().into());
        }

        Column::with_children(children)
            .width(Length::Fill)
            .into()
    }

    fn render_image<'a>(
        &'a self,
        index: usize,
        alt: &'a str,
        max_width: f32,
    ) -> Element<'a, ResultsPaneMessage> {
        let content: Element<'a, ResultsPaneMessage> = match self.image_slots.get(&index) {
            Some(ImageSlot::Loaded(handle)) => image(handle.clone()).into(),
            Some(ImageSlot::Loading) | Some(ImageSlot::Failed) | None => text(alt)
                .size(12)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(app_theme::muted_text_color()),
                })
                .into(),
        };

        container(content)
            .max_width(max_width)
            .padding(global_constants::IMAGE_MARGIN_PX)
            .into()
    }
}

fn render_link<'a>(href: &'a str, label: &'a str) -> Element<'a, ResultsPaneMessage> {
    column![
        button(text(label).size(15))
            .padding(0)
            .style(app_theme::link_button_style)
            .on_press(ResultsPaneMessage::OpenLink(href.to_string())),
        Space::new().height(Length::Fixed(18.0)),
    ]
    .into()
}

fn render_text<'a>(message: &'a str, theme: &Theme) -> Element<'a, ResultsPaneMessage> {
    let color: Option<Color> = message
        .starts_with(global_constants::ERROR_PREFIX)
        .then(|| app_theme::error_text_color(theme));

    text(message)
        .size(15)
        .style(move |_theme: &Theme| iced::widget::text::Style { color })
        .into()
}
