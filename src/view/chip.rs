use super::{import::*, Element};

/// The parts of a chip that react to clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTarget {
    Chip,
    Text,
    Delete,
}

/// What a chip asks its owner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipIntent {
    Destroy(Tag),
}

/// Renders a single Tag as a chip:
/// the tag's name followed by a delete control.
#[derive(Debug, Clone)]
pub struct ChipView {
    tag: Tag,
    el: Element,
}

impl ChipView {

    pub fn new(tag: Tag) -> Self {
        let mut view = Self { tag, el: Element::new("div").with_class(TAG_CLASS) };
        view.render();
        view
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn el(&self) -> &Element {
        &self.el
    }

    /// Rebuild the chip's contents from the current tag.
    /// The chip's own style survives.
    pub fn render(&mut self) -> &Element {
        self.el.empty();
        self.el.append(Element::new("div").with_class(TEXT_CLASS).with_text(self.tag.as_str()));
        self.el.append(Element::new("a").with_class(DELETE_CLASS).with_text("x"));
        &self.el
    }

    /// The backing tag changed, show the new state
    pub fn update(&mut self, tag: Tag) -> &Element {
        self.tag = tag;
        self.render()
    }

    /// Overwrite the displayed text without touching the tag.
    /// Only the measurement chip does this.
    pub fn set_text(&mut self, text: &str) {
        if let Some(e) = self.el.find_class_mut(TEXT_CLASS) {
            e.set_text(text);
        }
    }

    pub fn text(&self) -> String {
        self.el.find_class(TEXT_CLASS).map(|e| e.text()).unwrap_or_default()
    }

    pub fn set_style(&mut self, key: &'static str, value: String) {
        self.el.set_style(key, value);
    }

    pub fn click(&self, target: ChipTarget) -> Option<ChipIntent> {
        match target {
            ChipTarget::Delete => Some(ChipIntent::Destroy(self.tag.clone())),
            ChipTarget::Chip | ChipTarget::Text => None,
        }
    }
}
