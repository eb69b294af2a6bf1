use serde::Serialize;

/// A positioned piece of text. Glyph rasterization is left to the consumer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub color: [u8; 4],
    pub centered: bool,
}

impl TextRun {
    pub fn new<S: Into<String>>(
        text: S,
        x: u32,
        y: u32,
        size: u32,
        color: image::Rgba<u8>,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            color: color.0,
            centered: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

/// Greedy word wrap by character count. Words longer than a line keep a line of their own.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps and keeps at most `max_lines`, adding a `...` line when something was cut.
pub fn clamp_lines(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, max_chars);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        lines.push("...".to_string());
    }
    lines
}
