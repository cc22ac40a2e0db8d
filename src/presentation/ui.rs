use crate::application::{App, AppMode, Focus};
use crate::domain::{Field, FormView, SubmittedSnapshot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let view = app.form.view();

    render_header(f, chunks[0]);
    for (i, field) in Field::ALL.into_iter().enumerate() {
        render_input(f, app, &view, field, chunks[1 + i * 2]);
        render_field_error(f, &view, field, chunks[2 + i * 2]);
    }
    render_buttons(f, app, chunks[7]);
    if let Some(snapshot) = view.submitted {
        render_submitted(f, snapshot, chunks[8]);
    }
    render_status_bar(f, app, chunks[9]);

    match app.mode {
        AppMode::Acknowledge => {
            if let Some(ref message) = app.acknowledgement {
                render_acknowledgement(f, message);
            }
        }
        AppMode::Help => render_help_popup(f),
        AppMode::Editing => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Sign Up")
        .alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

/// Returns the tail of `text` that keeps the cursor within `width` columns,
/// and the cursor column inside that tail.
fn input_window(text: &str, cursor: usize, width: usize) -> (String, u16) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let columns = |c: &char| UnicodeWidthChar::width(*c).unwrap_or(0);

    // one column stays free for the cursor itself
    let room = width.saturating_sub(1);
    let mut start = 0;
    let mut before: usize = chars[..cursor].iter().map(columns).sum();
    while before > room && start < cursor {
        before -= columns(&chars[start]);
        start += 1;
    }

    let visible: String = chars[start..].iter().collect();
    (visible, u16::try_from(before).unwrap_or(u16::MAX))
}

fn render_input(f: &mut Frame, app: &App, view: &FormView<'_>, field: Field, area: Rect) {
    let value = view.values.get(field);
    let focused = app.focus == Focus::Input(field);

    let shown = match field {
        Field::Password => "*".repeat(value.chars().count()),
        _ => value.to_string(),
    };
    let inner_width = usize::from(area.width.saturating_sub(2));
    let cursor = if focused { app.cursor_position } else { 0 };
    let (visible, cursor_x) = input_window(&shown, cursor, inner_width);

    let (text, text_style) = if shown.is_empty() && !focused {
        (field.label().to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (visible, Style::default())
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else if view.errors.get(field).is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label()),
    );
    f.render_widget(input, area);

    if focused && app.mode == AppMode::Editing {
        let x = area.x.saturating_add(1).saturating_add(cursor_x);
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_field_error(f: &mut Frame, view: &FormView<'_>, field: Field, area: Rect) {
    if let Some(error) = view.errors.get(field) {
        let text = Paragraph::new(error.message()).style(Style::default().fg(Color::Red));
        f.render_widget(text, area);
    }
}

fn render_buttons(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let button = |label: &str, focus: Focus, color: Color| {
        let style = if app.focus == focus {
            Style::default().bg(color).fg(Color::Black).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Paragraph::new(format!("[ {} ]", label))
            .alignment(ratatui::layout::Alignment::Center)
            .style(style)
    };

    f.render_widget(button("Submit", Focus::Submit, Color::Blue), halves[0]);
    f.render_widget(button("Reset", Focus::Reset, Color::Red), halves[1]);
}

fn render_submitted(f: &mut Frame, snapshot: &SubmittedSnapshot, area: Rect) {
    let mut lines = vec![Line::styled(
        "Submitted Data:",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for field in Field::ALL {
        lines.push(Line::from(format!("{}: {}", field.label(), snapshot.get(field))));
    }

    let result = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black)),
    );
    f.render_widget(result, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Editing => app.status_message.clone().unwrap_or_else(|| {
            "Tab/↑↓: move | Enter: submit | Ctrl+S: submit | Ctrl+R: reset | F1: help | Esc: quit"
                .to_string()
        }),
        AppMode::Acknowledge => "Enter/Esc: dismiss".to_string(),
        AppMode::Help => "Esc/F1: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Editing if app.form.has_errors() => Style::default().fg(Color::Red),
            AppMode::Editing => Style::default(),
            AppMode::Acknowledge => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_acknowledgement(f: &mut Frame, message: &str) {
    let message_width = u16::try_from(UnicodeWidthStr::width(message)).unwrap_or(u16::MAX);
    let popup_area = centered_popup(f.area(), message_width.saturating_add(6), 5);
    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(vec![Line::from(message), Line::from(""), Line::from("[ OK ]")])
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(popup, popup_area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(HELP_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Sign Up Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"=== FIELDS ===
Name        required, at least 3 characters
Email       required, must look like name@host.domain
Password    required, at least 6 characters

=== KEYS ===
Tab / ↓         Next field or button
Shift+Tab / ↑   Previous field or button
←→ Home End     Move the cursor within a field
Backspace/Del   Delete characters
Enter           Submit (Reset when the Reset button is focused)
Space           Press the focused button
Ctrl+S          Submit from anywhere
Ctrl+R          Reset the form
F1              Toggle this help
Esc / Ctrl+C    Quit"#;
