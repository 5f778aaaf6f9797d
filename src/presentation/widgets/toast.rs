use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};

/// Toast anchored to the top-right corner.
pub struct Toast<'a> {
    notification: &'a Notification,
}

impl<'a> Toast<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Area the toast occupies inside `area`.
    #[must_use]
    pub fn popup_area(&self, area: Rect) -> Rect {
        let title = format!(" {} ", self.notification.title);
        let message = &self.notification.message;

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, 10);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 1;

        area.intersection(Rect::new(x, y, width, height))
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        if popup.area() == 0 {
            return;
        }

        let color = match self.notification.level {
            NotificationLevel::Default => Color::Cyan,
            NotificationLevel::Destructive => Color::Red,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.notification.title))
            .style(Style::default().fg(color));

        let para = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(popup, buf);
        para.render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_sits_top_right() {
        let notification = Notification::new(NotificationLevel::Default, "Saved", "All good");
        let area = Rect::new(0, 0, 100, 40);

        let popup = Toast::new(&notification).popup_area(area);

        assert_eq!(popup.y, 1);
        assert_eq!(popup.x + popup.width, 98);
        assert!(popup.height >= 3);
    }

    #[test]
    fn test_destructive_renders_red_border() {
        let notification =
            Notification::new(NotificationLevel::Destructive, "Submission Failed", "Retry");
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        let popup = Toast::new(&notification).popup_area(area);
        Toast::new(&notification).render(area, &mut buf);

        assert_eq!(buf[(popup.x, popup.y)].fg, Color::Red);
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let notification = Notification::new(NotificationLevel::Default, "T", "M");
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);

        Toast::new(&notification).render(area, &mut buf);
    }
}
