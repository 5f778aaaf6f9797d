//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text input field widget. The cursor is a char index into `value`.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    disabled: bool,
    invalid: bool,
    multiline: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            disabled: false,
            invalid: false,
            multiline: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Allows newlines in the value.
    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Greys the input out and blocks editing.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Marks the input as failing validation.
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value and moves cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Inserts character at cursor. Returns whether the value changed.
    pub fn input_char(&mut self, c: char) -> bool {
        if self.disabled || (c == '\n' && !self.multiline) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Inserts a line break in multiline inputs.
    pub fn insert_newline(&mut self) -> bool {
        self.input_char('\n')
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) -> bool {
        if self.disabled || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) -> bool {
        if self.disabled || self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn display_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    /// Row and display column of the cursor when laid out `width` columns wide.
    fn cursor_position(&self, width: usize) -> (usize, usize) {
        let before = &self.value[..self.byte_index(self.cursor)];
        if !self.multiline {
            return (0, before.width());
        }

        let rows = wrap_rows(before, width);
        let row = rows.len() - 1;
        let col = rows[row].width();
        if width > 0 && col >= width {
            (row + 1, 0)
        } else {
            (row, col)
        }
    }
}

/// Breaks text into rows at newlines and wherever the next char would pass `width`.
///
/// Greedy per char, so the rows of a prefix are a prefix of the rows of the whole.
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let mut rows = vec![String::new()];
    let mut col = 0;

    for c in text.chars() {
        if c == '\n' {
            rows.push(String::new());
            col = 0;
            continue;
        }

        let w = c.width().unwrap_or(0);
        if width > 0 && col > 0 && col + w > width {
            rows.push(String::new());
            col = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        col += w;
    }

    rows
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.invalid {
            Style::default().fg(Color::Red)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() || self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        let width = usize::from(inner.width);
        let height = usize::from(inner.height);

        let (row, col) = self.cursor_position(width);
        let scroll = if self.focused && row >= height {
            row + 1 - height
        } else {
            0
        };

        let paragraph = if self.multiline {
            let lines: Vec<Line> = wrap_rows(self.display_text(), width)
                .into_iter()
                .map(Line::from)
                .collect();
            Paragraph::new(lines)
        } else {
            Paragraph::new(self.display_text())
        };
        let paragraph = paragraph
            .style(text_style)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && !self.disabled && inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x.saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
            let cursor_y = inner
                .y
                .saturating_add(u16::try_from(row - scroll).unwrap_or(u16::MAX));
            if cursor_x < inner.x + inner.width && cursor_y < inner.y + inner.height {
                buf[(cursor_x, cursor_y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Test");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Name");
        for c in "Jalāl".chars() {
            input.input_char(c);
        }
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Jaāl");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "aāl");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = TextInput::new("Single");
        assert!(!single.insert_newline());
        assert!(single.value().is_empty());

        let mut multi = TextInput::new("Multi").multiline();
        multi.input_char('a');
        assert!(multi.insert_newline());
        multi.input_char('b');
        assert_eq!(multi.value(), "a\nb");
        assert_eq!(multi.cursor_position(10), (1, 1));
    }

    #[test]
    fn test_cursor_follows_soft_wrap() {
        let mut input = TextInput::new("Notes").multiline();
        input.set_value("abcdef");
        assert_eq!(input.cursor_position(4), (1, 2));

        input.set_value("abcd");
        assert_eq!(input.cursor_position(4), (1, 0));

        input.set_value("ab\ncdefg");
        assert_eq!(input.cursor_position(4), (2, 1));
    }

    #[test]
    fn test_wrapped_cursor_cell_is_highlighted() {
        let mut input = TextInput::new("Notes").multiline();
        input.set_value("abcdef");
        input.set_focused(true);

        // 4x3 interior inside the border
        let area = Rect::new(0, 0, 6, 5);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "a");
        assert_eq!(buf[(1, 2)].symbol(), "e");
        assert_eq!(buf[(3, 2)].bg, Color::White);
        assert_ne!(buf[(4, 1)].bg, Color::White);
    }

    #[test]
    fn test_cursor_scrolls_into_view() {
        let mut input = TextInput::new("Notes").multiline();
        input.set_value("a\nb\nc\nd");
        input.set_focused(true);

        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "c");
        assert_eq!(buf[(1, 2)].symbol(), "d");
        assert_eq!(buf[(2, 2)].bg, Color::White);
    }

    #[test]
    fn test_disabled_rejects_edits() {
        let mut input = TextInput::new("Locked");
        input.set_value("keep");
        input.set_disabled(true);

        assert!(!input.input_char('x'));
        assert!(!input.backspace());
        assert_eq!(input.value(), "keep");
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let mut input = TextInput::new("Gmail").placeholder("yourname@gmail.com");
        assert_eq!(input.display_text(), "yourname@gmail.com");

        input.set_value("a@gmail.com");
        assert_eq!(input.display_text(), "a@gmail.com");
    }
}
