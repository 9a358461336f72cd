//! Screen chrome shared by the runner views: the bordered split layout,
//! the two-line status bar, the sidebar frame and the crash banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A key hint shown in the status bar: (key label, action).
pub type KeyHint<'a> = (&'a str, &'a str);

/// Areas carved out by `split_screen`.
pub struct RunnerLayout {
    /// Where the world is drawn.
    pub play_field: Rect,
    /// Two lines under the play field.
    pub status_bar: Rect,
    /// Bordered column on the right.
    pub sidebar: Rect,
}

/// Clear `area`, draw the outer border and split what is inside it.
///
/// ```text
/// ┌─ Dino Runner ──────────────────┬─ Info ─────┐
/// │ play field                     │ sidebar    │
/// │                                │            │
/// │ status (2 lines)               │            │
/// └────────────────────────────────┴────────────┘
/// ```
pub fn split_screen(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    min_field_height: u16,
    sidebar_width: u16,
) -> RunnerLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, sidebar] = split2(
        inner,
        Direction::Horizontal,
        Constraint::Min(20),
        Constraint::Length(sidebar_width),
    );
    let [play_field, status_bar] = split2(
        left,
        Direction::Vertical,
        Constraint::Min(min_field_height),
        Constraint::Length(2),
    );

    RunnerLayout {
        play_field,
        status_bar,
        sidebar,
    }
}

fn split2(area: Rect, direction: Direction, first: Constraint, second: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Status text on the first line, key hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    color: Color,
    hints: &[KeyHint],
) {
    if area.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height > 1 && !hints.is_empty() {
        frame.render_widget(
            Paragraph::new(hint_line(hints)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn hint_line<'a>(hints: &[KeyHint<'a>]) -> Line<'a> {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, &(key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Draw the sidebar border and return the area inside it.
pub fn render_sidebar_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Crash banner centered over the play field. Only the banner is cleared so
/// the frozen scene stays visible around it.
pub fn render_crash_banner(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    detail: &str,
    hints: &[KeyHint],
) {
    const HEIGHT: u16 = 5;
    let width = area.width.min(44);
    if area.height < HEIGHT || width < 20 {
        return;
    }

    let banner = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - HEIGHT) / 2,
        width,
        height: HEIGHT,
    };
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let body = Paragraph::new(vec![
        Line::styled(
            title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::styled(detail, Style::default().fg(Color::White)),
        hint_line(hints),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, inner);
}

/// Zero-padded five-digit score.
pub fn format_score(score: u32) -> String {
    format!("{:05}", score)
}
