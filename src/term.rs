//! Crossterm terminal frontend
//!
//! Scales the 700x500 playfield onto a character grid, queues the draw
//! commands for one frame, and translates terminal key events into the
//! simulation's per-tick input batch. Terminals report presses rather than
//! releases, so each W/S press counts as held for the tick it arrived in.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{QueueableCommand, cursor, terminal};

use crate::consts::{SCREEN_H, SCREEN_W};
use crate::scene::{Overlay, Scene, SpriteRect};
use crate::sim::{InputEvent, Key, TickInput, Winner};

/// Character grid the playfield is scaled onto
const COLS: usize = 70;
const ROWS: usize = 25;

/// Terminal session holder; restores the terminal on drop
pub struct Terminal {
    out: io::BufWriter<io::Stdout>,
}

impl Terminal {
    /// Enter raw mode and clear the screen
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::BufWriter::new(io::stdout());
        out.queue(terminal::Clear(terminal::ClearType::All))?
            .queue(cursor::Hide)?
            .flush()?;
        Ok(Self { out })
    }

    /// Drain all pending terminal events into one tick's input batch
    pub fn poll_input(&mut self) -> io::Result<TickInput> {
        let mut input = TickInput::default();
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                input.events.push(InputEvent::Quit);
                continue;
            }
            match key.code {
                KeyCode::Char('1') => input.events.push(InputEvent::KeyDown(Key::Num1)),
                KeyCode::Char('2') => input.events.push(InputEvent::KeyDown(Key::Num2)),
                KeyCode::Char('3') => input.events.push(InputEvent::KeyDown(Key::Num3)),
                KeyCode::Char('w' | 'W') => {
                    input.move_up = true;
                    input.events.push(InputEvent::KeyDown(Key::W));
                }
                KeyCode::Char('s' | 'S') => {
                    input.move_down = true;
                    input.events.push(InputEvent::KeyDown(Key::S));
                }
                KeyCode::Char('p' | 'P') => input.events.push(InputEvent::KeyDown(Key::P)),
                KeyCode::Char('m' | 'M') => input.events.push(InputEvent::KeyDown(Key::M)),
                KeyCode::Char('c' | 'C') => input.events.push(InputEvent::KeyDown(Key::C)),
                KeyCode::Char('x' | 'X') => input.events.push(InputEvent::KeyDown(Key::X)),
                KeyCode::Char(' ') => input.events.push(InputEvent::KeyDown(Key::Space)),
                KeyCode::Esc => input.events.push(InputEvent::KeyDown(Key::Escape)),
                // Unrecognized keys are silently ignored
                _ => {}
            }
        }
        Ok(input)
    }

    /// Queue and flush one frame
    pub fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        let lines = compose(scene);
        self.out
            .queue(cursor::MoveTo(0, 0))?
            .queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        for (row, line) in lines.iter().enumerate() {
            self.out
                .queue(cursor::MoveTo(0, row as u16))?
                .queue(Print(line))?;
        }
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.out.queue(cursor::MoveTo(0, (ROWS + 3) as u16));
        let _ = self.out.queue(cursor::Show);
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Render the scene into terminal lines: HUD, border, field, border
fn compose(scene: &Scene) -> Vec<String> {
    let mut lines = Vec::with_capacity(ROWS + 3);
    lines.push(hud_line(scene));
    lines.push("▀".repeat(COLS));

    let mut field = vec![vec![' '; COLS]; ROWS];
    for sprite in &scene.sprites {
        blit(&mut field, sprite);
    }
    if let Some(overlay) = &scene.overlay {
        overlay_text(&mut field, overlay);
    }
    lines.extend(field.into_iter().map(|row| row.into_iter().collect()));

    lines.push("▀".repeat(COLS));
    lines
}

fn hud_line(scene: &Scene) -> String {
    let left = format!("P1 {:>2}", scene.score.0);
    let mut right = format!("{:>2} AI", scene.score.1);
    if scene.muted {
        right.push_str("  [MUTED]");
    }
    if let Some(fps) = scene.fps {
        right.push_str(&format!("  {fps:>3} FPS"));
    }
    let clock = format!("{:02}", scene.time_left_secs);

    let mut line = vec![' '; COLS];
    put(&mut line, 1, &left);
    put(&mut line, (COLS - clock.chars().count()) / 2, &clock);
    put(&mut line, COLS.saturating_sub(right.chars().count() + 1), &right);
    line.into_iter().collect()
}

/// Rasterize one playfield rectangle into grid cells
fn blit(field: &mut [Vec<char>], sprite: &SpriteRect) {
    let glyph = if sprite.flash { '▓' } else { '█' };
    let col0 = sprite.pos.x.clamp(0, SCREEN_W - 1) as usize * COLS / SCREEN_W as usize;
    let col1 = (sprite.pos.x + sprite.w - 1).clamp(0, SCREEN_W - 1) as usize * COLS / SCREEN_W as usize;
    let row0 = sprite.pos.y.clamp(0, SCREEN_H - 1) as usize * ROWS / SCREEN_H as usize;
    let row1 = (sprite.pos.y + sprite.h - 1).clamp(0, SCREEN_H - 1) as usize * ROWS / SCREEN_H as usize;
    for row in &mut field[row0..=row1] {
        for cell in &mut row[col0..=col1] {
            *cell = glyph;
        }
    }
}

fn overlay_text(field: &mut [Vec<char>], overlay: &Overlay) {
    match overlay {
        Overlay::Menu => {
            center(field, 3, "P O N G");
            center(field, 7, "Select difficulty:");
            center(field, 10, "1  EASY");
            center(field, 12, "2  MEDIUM");
            center(field, 14, "3  HARD");
            center(field, 19, "P PAUSE    M MUTE    X QUIT");
        }
        Overlay::Countdown { label } => {
            center(field, ROWS / 2, label);
        }
        Overlay::Paused => {
            center(field, ROWS / 2 - 1, "PAUSED");
            center(field, ROWS / 2 + 2, "Press C to continue, X to quit, M to mute");
        }
        Overlay::Ended { winner } => {
            let banner = match winner {
                Winner::Player => "PLAYER 1 WINS!",
                Winner::Ai => "AI WINS!",
                Winner::Draw => "DRAW!",
            };
            center(field, ROWS / 2 - 1, banner);
            center(field, ROWS / 2 + 2, "Press SPACE or X to quit   |   M to mute");
        }
    }
}

/// Write `text` centered on the given field row
fn center(field: &mut [Vec<char>], row: usize, text: &str) {
    let start = (COLS.saturating_sub(text.chars().count())) / 2;
    put(&mut field[row], start, text);
}

fn put(line: &mut [char], start: usize, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        if let Some(cell) = line.get_mut(start + i) {
            *cell = ch;
        }
    }
}
