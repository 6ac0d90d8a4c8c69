use super::{
    import::*,
    ChipIntent, ChipTarget, ChipView, Clock, Deferred, Element, Font, FontMetrics, Measure, SystemClock,
};
use crate::token::{self, Tokenizer};
use chrono::Duration;

/// Everything an editor needs to be constructed
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Fixed width of the whole control in pixels
    pub width: u32,
    /// Initial tags, in display order
    pub tags: Vec<String>,
    pub font: Font,
    /// Debounce delay for input width measurements
    pub measure_delay: Duration,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            width: 300,
            tags: Vec::new(),
            font: Font::default(),
            measure_delay: Duration::milliseconds(MEASURE_DELAY_MS),
        }
    }
}

/// A key as seen by the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Other,
}

/// Where a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Field,
    Input,
    Chip(usize, ChipTarget),
}

/// State of the live text input
#[derive(Debug, Default)]
struct Input {
    value: String,
    width: u32,
    font: Option<Font>,
    focused: bool,
}

impl Input {
    fn el(&self) -> Element {
        let mut e = Element::new("input").with_class(INPUT_CLASS);
        e.set_attr("value", self.value.clone());
        e.set_style("width", format!("{}px", self.width));
        if let Some(font) = &self.font {
            e.set_style("font", font.css());
        }
        e
    }
}

/// The composite tag editor.
///
/// Owns the tag collection, one chip per tag (always
/// index-aligned with the collection), the text input and a
/// hidden measurement chip used to size the input.
///
/// Chips are never touched directly: every handler mutates
/// the collection and then replays the collection's change
/// notifications onto the chips and the element tree.
pub struct TagEditorView<M: Measure = FontMetrics> {
    width: u32,
    collection: Tags,
    chips: Vec<ChipView>,
    measure: ChipView,
    input: Input,
    field: Element,
    rendered: bool,
    deferred: Deferred,
    clock: Box<dyn Clock>,
    metrics: M,
    font: Font,
}

impl TagEditorView<FontMetrics> {

    /// Create an editor measuring with the default
    /// font metrics against the wall clock
    pub fn new(options: EditorOptions) -> Self {
        Self::with_parts(options, FontMetrics::default(), Box::new(SystemClock))
    }
}

impl<M: Measure> TagEditorView<M> {

    pub fn with_parts(options: EditorOptions, metrics: M, clock: Box<dyn Clock>) -> Self {
        let collection = Tags::from_names(options.tags.iter().map(|s| s.as_str()));
        let chips = collection.iter().map(|t| ChipView::new(t.clone())).collect();
        let mut measure = ChipView::new(Tag::new(""));
        measure.set_style("position", "absolute".into());
        measure.set_style("left", "-999px".into());
        measure.set_style("font", options.font.css());
        Self {
            width: options.width,
            collection,
            chips,
            measure,
            input: Input::default(),
            field: Element::new("div").with_class(FIELD_CLASS),
            rendered: false,
            deferred: Deferred::new(options.measure_delay),
            clock,
            metrics,
            font: options.font,
        }
    }

    pub fn collection(&self) -> &Tags {
        &self.collection
    }

    /// Return the tag names in display order
    pub fn names(&self) -> Vec<&str> {
        self.collection.names()
    }

    pub fn chips(&self) -> &[ChipView] {
        &self.chips
    }

    pub fn value(&self) -> &str {
        &self.input.value
    }

    pub fn input_width(&self) -> u32 {
        self.input.width
    }

    pub fn input_font(&self) -> Option<&Font> {
        self.input.font.as_ref()
    }

    pub fn is_focused(&self) -> bool {
        self.input.focused
    }

    pub fn is_measure_pending(&self) -> bool {
        self.deferred.is_pending()
    }

    /// The element tree, empty until the first render
    pub fn el(&self) -> &Element {
        &self.field
    }

    pub fn to_html(&self) -> String {
        self.field.to_html()
    }

    /// Check that there is exactly one chip per tag, in order
    pub fn is_aligned(&self) -> bool {
        self.chips.len() == self.collection.len()
            && self.chips.iter().zip(self.collection.iter()).all(|(c, t)| c.tag() == t)
    }

    /// Rebuild the whole element tree
    pub fn render(&mut self) -> &Element {
        for change in self.collection.drain_changes() {
            self.apply(change);
        }
        self.field.empty();
        self.field.append(self.measure.el().clone());
        for chip in self.chips.iter_mut() {
            self.field.append(chip.render().clone());
        }
        self.field.append(self.input.el());
        self.field.set_style("width", format!("{}px", self.width));
        self.rendered = true;
        self.adjust_input_width("");
        self.refresh();
        &self.field
    }

    /// Handle a key press before the input sees it.
    /// Returns true if the key's default effect on the
    /// input was suppressed.
    pub fn key_down(&mut self, key: Key) -> bool {
        let prevented = match key {
            Key::Backspace if self.input.value.is_empty() => {
                match self.collection.pop() {
                    Some(tag) => {
                        debug!("removed last tag: '{}'", tag);
                        self.focus_input();
                        true
                    },
                    None => false,
                }
            },
            Key::Backspace => { self.input.value.pop(); false },
            Key::Char(c) => { self.input.value.push(c); false },
            Key::Other => false,
        };
        self.refresh();
        prevented
    }

    /// Handle a key release. Commits the input if it ends with
    /// separators, otherwise schedules a width measurement.
    pub fn key_up(&mut self) {
        let value = self.input.value.clone();
        match token::terminated_content(&value) {
            Some(content) => self.may_insert_tags(content),
            None => self.adjust_input_width(&value),
        }
        self.refresh();
    }

    /// Press and release a key
    pub fn press(&mut self, key: Key) -> bool {
        let prevented = self.key_down(key);
        self.key_up();
        prevented
    }

    /// Type some text one key at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(Key::Char(c));
        }
    }

    /// Insert text at once, as from the clipboard
    pub fn paste(&mut self, text: &str) {
        self.input.value.push_str(text);
        self.key_up();
    }

    pub fn focus(&mut self) {
        self.focus_input();
        self.refresh();
    }

    /// Losing focus terminates whatever is left in the input
    pub fn blur(&mut self) {
        self.input.focused = false;
        let value = self.input.value.clone();
        self.may_insert_tags(&value);
        self.refresh();
    }

    /// Any click focuses the input; a click on a chip's
    /// delete control removes that chip's tag first.
    pub fn click(&mut self, target: Target) {
        if let Target::Chip(index, part) = target {
            let intent = self.chips.get(index).and_then(|chip| chip.click(part));
            if let Some(ChipIntent::Destroy(tag)) = intent {
                if let Some((i, _)) = self.collection.remove(tag.as_str()) {
                    debug!("deleted tag '{}' at {}", tag, i);
                }
            }
        }
        self.focus_input();
        self.refresh();
    }

    /// Delete the tag behind the chip at index
    pub fn delete(&mut self, index: usize) -> Option<Tag> {
        let tag = self.chips.get(index).map(|chip| chip.tag().clone());
        self.click(Target::Chip(index, ChipTarget::Delete));
        tag
    }

    /// Rename a tag in place. Refused if the new name is not
    /// a single token or already belongs to another tag.
    pub fn rename(&mut self, name: &str, new_name: &str) -> bool {
        if !token::is_token(new_name) {
            trace!("refusing to rename '{}' to '{}': not a single tag", name, new_name);
            return false
        }
        if name != new_name && self.collection.find_by_name(new_name).is_some() {
            trace!("refusing to rename '{}' to '{}': duplicate", name, new_name);
            return false
        }
        let renamed = self.collection.rename(name, new_name);
        self.refresh();
        renamed
    }

    /// Mutate the collection from the outside. Chips follow
    /// the changes once the closure returns.
    pub fn update<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Tags) -> R
    {
        let result = f(&mut self.collection);
        self.refresh();
        result
    }

    /// Apply a due width measurement. Returns true if one was applied.
    pub fn tick(&mut self) -> bool {
        if !self.deferred.fire(self.clock.now()) {
            return false
        }
        self.input.width = if self.input.focused || !self.input.value.is_empty() {
            self.metrics.width(&self.measure.text(), &self.font)
        } else {
            0
        };
        trace!("input width: {}px", self.input.width);
        self.refresh();
        true
    }

    fn focus_input(&mut self) {
        if self.input.focused {
            return
        }
        self.input.focused = true;
        self.input.font = Some(self.font.clone());
        let value = self.input.value.clone();
        self.adjust_input_width(&value);
    }

    /// Measure the text plus some padding, the input picks
    /// up the result once the measurement is due.
    fn adjust_input_width(&mut self, value: &str) {
        self.measure.set_text(&format!("{}{}", value, MEASURE_PADDING));
        let due = self.deferred.schedule(self.clock.now());
        trace!("measuring '{}' at {}", value, due);
    }

    /// Split on separators and commit every new token.
    /// Duplicates and empty tokens are dropped silently.
    fn may_insert_tags(&mut self, text: &str) {
        for word in Tokenizer::new(text) {
            if self.collection.find_by_name(word).is_some() {
                trace!("dropping duplicate tag: '{}'", word);
            } else {
                debug!("adding tag: '{}'", word);
                self.collection.push(Tag::new(word));
            }
        }
        self.input.value.clear();
        self.adjust_input_width("");
    }

    /// Replay collection changes onto the chips and
    /// bring the tree up to date.
    fn refresh(&mut self) {
        for change in self.collection.drain_changes() {
            self.apply(change);
        }
        debug_assert!(self.is_aligned(), "chips out of sync with tags");
        if self.rendered {
            let last = self.chips.len() + 1;
            self.field.replace(0, self.measure.el().clone());
            self.field.replace(last, self.input.el());
        }
    }

    fn apply(&mut self, change: Change) {
        match change {
            Change::Add { index, tag } => {
                trace!("chip added: '{}' at {}", tag, index);
                let chip = ChipView::new(tag);
                if self.rendered {
                    self.field.insert(index + 1, chip.el().clone());
                }
                self.chips.insert(index, chip);
            },
            Change::Remove { index, tag } => {
                trace!("chip removed: '{}' at {}", tag, index);
                if index < self.chips.len() {
                    self.chips.remove(index);
                    if self.rendered {
                        self.field.remove(index + 1);
                    }
                }
            },
            Change::Update { index, tag } => {
                trace!("chip changed: '{}' at {}", tag, index);
                if let Some(chip) = self.chips.get_mut(index) {
                    let el = chip.update(tag).clone();
                    if self.rendered {
                        self.field.replace(index + 1, el);
                    }
                }
            },
        }
    }
}
