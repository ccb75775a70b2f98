//! Toast widget: a one-line notification that disappears after a while.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::submit::{Notification, NotificationKind};

/// A notification together with the moment it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    shown_at: Instant,
}

impl Toast {
    pub fn new(notification: Notification, shown_at: Instant) -> Self {
        Self {
            notification,
            shown_at,
        }
    }

    /// Returns `true` once the notification's display time has elapsed at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notification.duration()
    }
}

/// Renders the toast centered on one line; renders nothing without one.
#[mutants::skip]
pub fn draw_toast(toast: Option<&Toast>, frame: &mut Frame, area: Rect) {
    let Some(toast) = toast else {
        return;
    };

    let (icon, color) = match toast.notification.kind {
        NotificationKind::Success => ("✔", Color::Green),
        NotificationKind::Error => ("✘", Color::Red),
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(format!("{icon} "), style),
        Span::styled(toast.notification.message.clone(), style),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
