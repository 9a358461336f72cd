//! Dino Runner scene rendering.
//!
//! World geometry lives in pixel space; the play field scales it onto the
//! terminal grid. Everything is drawn into a cell buffer first (so shapes
//! can overlap with per-cell colors) and then stamped row by row as
//! Paragraph widgets.

use super::game_common::{
    format_score, render_crash_banner, render_sidebar_frame, render_status_bar, split_screen,
};
use crate::core::constants::{GROUND_Y, WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Hitbox;
use crate::runner::difficulty::speed_percent;
use crate::runner::{ObstacleKind, RunnerGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_CHAR: char = '▔';
const PEBBLE_CHARS: [char; 3] = ['.', '·', '˙'];
const PLAYER_COLOR: Color = Color::White;
const CACTUS_COLOR: Color = Color::Rgb(60, 140, 60);
const PTERODACTYL_COLOR: Color = Color::Rgb(160, 80, 160);
const CLOUD_COLOR: Color = Color::Rgb(70, 70, 80);
const GROUND_COLOR: Color = Color::Rgb(150, 150, 150);

/// Render the whole runner screen.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let layout = split_screen(frame, area, " Dino Runner ", 10, 20);

    render_play_field(frame, layout.play_field, game);

    if game.is_game_over() {
        render_crash_banner(
            frame,
            layout.play_field,
            "GAME OVER",
            &format!("Score {}", format_score(game.score)),
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        );
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.sidebar, game);
}

/// Cell in the render buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cell {
    pub ch: char,
    pub fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// World-to-grid projection for one play field size.
#[derive(Clone, Copy)]
struct Projection {
    width: usize,
    height: usize,
    x_scale: f64,
    y_scale: f64,
}

impl Projection {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as usize,
            height: height as usize,
            x_scale: width as f64 / WORLD_WIDTH,
            y_scale: height as f64 / WORLD_HEIGHT,
        }
    }

    fn ground_row(&self) -> usize {
        ((GROUND_Y * self.y_scale).round() as usize).min(self.height - 1)
    }

    /// Cell span covered by a world rectangle: (col0, col1, row0, row1),
    /// end-exclusive. Always at least one cell in each direction.
    fn span(&self, hb: &Hitbox) -> (i32, i32, i32, i32) {
        let col0 = (hb.x * self.x_scale).round() as i32;
        let col1 = ((hb.right() * self.x_scale).round() as i32).max(col0 + 1);
        let row1 = (hb.bottom() * self.y_scale).round() as i32;
        let row0 = ((hb.y * self.y_scale).round() as i32).min(row1 - 1);
        (col0, col1, row0, row1)
    }
}

/// Paint every in-bounds cell of `hb` with `glyph(dx, dy, w, h)`, in cells,
/// where `dy` counts rows from the top of the shape.
fn fill(
    buffer: &mut [Vec<Cell>],
    proj: &Projection,
    hb: &Hitbox,
    fg: Color,
    glyph: impl Fn(i32, i32, i32, i32) -> char,
) {
    let (col0, col1, row0, row1) = proj.span(hb);
    let (w, h) = (col1 - col0, row1 - row0);
    for row in row0..row1 {
        if row < 0 || row as usize >= proj.height {
            continue;
        }
        for col in col0..col1 {
            if col < 0 || col as usize >= proj.width {
                continue;
            }
            let ch = glyph(col - col0, row - row0, w, h);
            if ch != ' ' {
                buffer[row as usize][col as usize] = Cell { ch, fg };
            }
        }
    }
}

/// Build the play field cell grid for a `width` × `height` area.
pub(crate) fn build_play_field(game: &RunnerGame, width: u16, height: u16) -> Vec<Vec<Cell>> {
    let mut buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    if width == 0 || height == 0 {
        return buffer;
    }
    let proj = Projection::new(width, height);
    let ground_row = proj.ground_row();

    // ── Clouds ────────────────────────────────────────────────────────
    for cloud in &game.clouds {
        let hb = Hitbox::new(cloud.x, cloud.y, cloud.width, cloud.height);
        fill(&mut buffer, &proj, &hb, CLOUD_COLOR, |_, _, _, _| '░');
    }

    // ── Ground line with scrolling pebbles below it ───────────────────
    for cell in buffer[ground_row].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: GROUND_COLOR,
        };
    }
    if ground_row + 1 < proj.height {
        let scroll = (game.distance * proj.x_scale) as usize;
        for (col, cell) in buffer[ground_row + 1].iter_mut().enumerate() {
            let phase = (col + scroll) % 11;
            if phase < PEBBLE_CHARS.len() && (col + scroll) % 3 == 0 {
                *cell = Cell {
                    ch: PEBBLE_CHARS[phase],
                    fg: Color::DarkGray,
                };
            }
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &game.obstacles {
        let hb = obstacle.hitbox();
        match obstacle.kind {
            ObstacleKind::Pterodactyl => {
                let wing = if obstacle.wings_up() { '▀' } else { '▄' };
                fill(&mut buffer, &proj, &hb, PTERODACTYL_COLOR, |dx, _, w, _| {
                    if dx == 0 || dx == w - 1 {
                        wing
                    } else {
                        '■'
                    }
                });
            }
            _ => {
                // Arms on the outer columns, trunk in the middle
                fill(&mut buffer, &proj, &hb, CACTUS_COLOR, |dx, dy, w, _| {
                    if w > 2 && (dx == 0 || dx == w - 1) && dy == 0 {
                        ' '
                    } else {
                        '█'
                    }
                });
            }
        }
    }

    // ── Player ────────────────────────────────────────────────────────
    let player = &game.player;
    let stride = (game.tick_count / 6) % 2;
    fill(
        &mut buffer,
        &proj,
        &player.hitbox(),
        PLAYER_COLOR,
        |dx, dy, w, h| {
            if player.ducking {
                if dy == 0 && dx == w - 1 {
                    '▄'
                } else {
                    '█'
                }
            } else if dy == h - 1 && player.on_ground && h > 1 {
                // Feet: alternate legs while running
                match (stride, dx) {
                    (0, 0) => '▘',
                    (1, x) if x == w - 1 => '▝',
                    _ => ' ',
                }
            } else {
                '█'
            }
        },
    );

    // ── Score (top-right) ─────────────────────────────────────────────
    let blink_hidden =
        game.milestone_flash > 0.0 && ((game.milestone_flash / 0.125) as u32) % 2 == 1;
    let mut label = String::new();
    if game.high_score > 0 {
        label.push_str(&format!("HI {}  ", format_score(game.high_score)));
    }
    let hi_len = label.chars().count();
    label.push_str(&format_score(game.score));
    let start = proj.width.saturating_sub(label.chars().count() + 1);
    for (i, ch) in label.chars().enumerate() {
        let col = start + i;
        if col >= proj.width {
            break;
        }
        let is_current = i >= hi_len;
        if is_current && blink_hidden {
            continue;
        }
        buffer[0][col] = Cell {
            ch,
            fg: if is_current {
                Color::White
            } else {
                Color::DarkGray
            },
        };
    }

    buffer
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let buffer = build_play_field(game, area.width, area.height);

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, Style::default().fg(current_fg)));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

/// Render the status bar below the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if game.is_game_over() {
        render_status_bar(
            frame,
            area,
            "Crashed!",
            Color::Red,
            &[("[R]", "Restart"), ("[Q/Esc]", "Quit")],
        );
        return;
    }

    let status = if game.player.ducking {
        "Ducking"
    } else if !game.player.on_ground {
        "Airborne"
    } else {
        "Run!"
    };
    render_status_bar(
        frame,
        area,
        status,
        Color::White,
        &[
            ("[Space/Up]", "Jump"),
            ("[Down]", "Duck"),
            ("[Q/Esc]", "Quit"),
        ],
    );
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let inner = render_sidebar_frame(frame, area);
    let speed_pct = speed_percent(game.game_speed, &game.tuning);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_score(game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_score(game.high_score),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}%", speed_pct), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(PLAYER_COLOR)),
            Span::styled("Runner", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(CACTUS_COLOR)),
            Span::styled("Cactus (jump)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ■ ", Style::default().fg(PTERODACTYL_COLOR)),
            Span::styled("Flyer (duck)", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
