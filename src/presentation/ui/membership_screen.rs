//! Membership signup screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::{BeginSubmit, FormController, SubmitOutcome};
use crate::domain::FormField;
use crate::domain::errors::SubmissionError;
use crate::domain::ports::NotificationPort;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::TextInput;

const TITLE: &str = "Galal Academy";
const SUBTITLE: &str = "🎉 Thank you for becoming a Member !";
const SUBMIT_LABEL: &str = "Join Galal Academy";
const SUBMITTING_LABEL: &str = "Submitting...";
const CONSENT: &str = "By submitting this form, you agree to join our learning community";

/// What the host should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    /// Nothing beyond redrawing.
    None,
    /// Start a submission.
    Submit,
}

/// Signup form screen; the inputs mirror the controller's values.
pub struct MembershipScreen {
    controller: FormController,
    inputs: [TextInput; 4],
    focus: FormField,
}

impl MembershipScreen {
    #[must_use]
    pub fn new() -> Self {
        let inputs = FormField::ALL.map(|field| {
            let input = TextInput::new(field.label()).placeholder(field.placeholder());
            if field == FormField::Suggestions {
                input.multiline()
            } else {
                input
            }
        });

        let mut screen = Self {
            controller: FormController::new(),
            inputs,
            focus: FormField::FullName,
        };
        screen.input_mut(FormField::FullName).set_focused(true);
        screen
    }

    #[must_use]
    pub const fn controller(&self) -> &FormController {
        &self.controller
    }

    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    fn input(&self, field: FormField) -> &TextInput {
        &self.inputs[field as usize]
    }

    fn input_mut(&mut self, field: FormField) -> &mut TextInput {
        &mut self.inputs[field as usize]
    }

    fn set_focus(&mut self, field: FormField) {
        self.input_mut(self.focus).set_focused(false);
        self.focus = field;
        self.input_mut(field).set_focused(true);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> MembershipAction {
        if self.controller.is_submitting() {
            return MembershipAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            return MembershipAction::Submit;
        }

        let focus = self.focus;
        let edited = match key.code {
            KeyCode::Enter if focus == FormField::Suggestions => {
                self.input_mut(focus).insert_newline()
            }
            KeyCode::Enter => return MembershipAction::Submit,
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(focus.next());
                false
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(focus.previous());
                false
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_mut(focus).input_char(c)
            }
            KeyCode::Backspace => self.input_mut(focus).backspace(),
            KeyCode::Delete => self.input_mut(focus).delete(),
            KeyCode::Left => {
                self.input_mut(focus).move_left();
                false
            }
            KeyCode::Right => {
                self.input_mut(focus).move_right();
                false
            }
            KeyCode::Home => {
                self.input_mut(focus).move_start();
                false
            }
            KeyCode::End => {
                self.input_mut(focus).move_end();
                false
            }
            _ => false,
        };

        if edited {
            let value = self.input(focus).value().to_string();
            self.controller.set_field(focus, value);
            self.sync_inputs();
        }

        MembershipAction::None
    }

    /// Starts a submission and locks the inputs when it goes ahead.
    pub fn begin_submit(&mut self) -> BeginSubmit {
        let result = self.controller.begin_submit();
        self.sync_inputs();
        result
    }

    /// Applies the delivery result and unlocks the inputs.
    pub fn finish_submit(
        &mut self,
        result: &Result<(), SubmissionError>,
        notifier: &dyn NotificationPort,
    ) -> SubmitOutcome {
        let outcome = self.controller.finish_submit(result, notifier);
        if outcome == SubmitOutcome::Submitted {
            self.set_focus(FormField::FullName);
        }
        self.sync_inputs();
        outcome
    }

    fn sync_inputs(&mut self) {
        let submitting = self.controller.is_submitting();
        for field in FormField::ALL {
            let value = self.controller.value(field).to_string();
            let invalid = self.controller.error(field).is_some();
            let input = self.input_mut(field);
            if input.value() != value {
                input.set_value(value);
            }
            input.set_disabled(submitting);
            input.set_invalid(invalid);
        }
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(28),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(72),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Membership ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let areas = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas::<15>(inner);

        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .render(areas[0], buf);
        Paragraph::new(SUBTITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .render(areas[1], buf);

        let slots = [
            (FormField::FullName, areas[3], Some(areas[4])),
            (FormField::YoutubeName, areas[5], Some(areas[6])),
            (FormField::Gmail, areas[7], Some(areas[8])),
            (FormField::Suggestions, areas[9], None),
        ];
        for (field, input_area, error_area) in slots {
            self.input(field).render(input_area, buf);
            if let (Some(error_area), Some(message)) = (error_area, self.controller.error(field)) {
                Paragraph::new(message)
                    .style(Style::default().fg(Color::Red))
                    .render(error_area, buf);
            }
        }

        let (label, style) = if self.controller.is_submitting() {
            (
                SUBMITTING_LABEL,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            (
                SUBMIT_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };
        Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)))
            .alignment(Alignment::Center)
            .render(areas[11], buf);

        let hints = Line::from(vec![
            Span::styled("Enter/Ctrl+S: Submit", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Next field", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(areas[12], buf);

        Paragraph::new(CONSENT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .render(areas[14], buf);
    }
}

impl Default for MembershipScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &MembershipScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
