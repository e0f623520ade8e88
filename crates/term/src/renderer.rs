//! TerminalRenderer: flushes a character frame to a real terminal.
//!
//! The first frame (and any frame after [`TerminalRenderer::invalidate`] or
//! [`TerminalRenderer::clear_screen`]) is a full redraw; later frames only
//! rewrite runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::types::{Point, RenderBuffer, ShapeKind, BORDER_GLYPH};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<RenderBuffer>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Blank the screen; the next draw is a full redraw.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Draw a frame, keeping it to diff the next one against.
    pub fn draw(&mut self, frame: RenderBuffer) -> Result<()> {
        match self.last.take() {
            Some(prev) => self.diff_redraw(&frame, &prev)?,
            None => self.full_redraw(&frame)?,
        }
        self.last = Some(frame);
        Ok(())
    }

    fn full_redraw(&mut self, frame: &RenderBuffer) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;

        let mut current_color: Option<Color> = None;
        for (y, row) in frame.rows().enumerate() {
            for &ch in row {
                self.print_cell(ch, &mut current_color)?;
            }
            if y + 1 < frame.height() {
                self.out.queue(Print("\r\n"))?;
            }
        }

        self.out.queue(ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &RenderBuffer, prev: &RenderBuffer) -> Result<()> {
        let mut current_color: Option<Color> = None;

        for (x, y, len) in changed_runs(prev, next) {
            self.out.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let ch = next
                    .get(Point::new((x + dx) as i16, y as i16))
                    .unwrap_or(' ');
                self.print_cell(ch, &mut current_color)?;
            }
        }

        self.out.queue(ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn print_cell(&mut self, ch: char, current_color: &mut Option<Color>) -> Result<()> {
        let color = glyph_color(ch);
        if *current_color != Some(color) {
            self.out.queue(SetForegroundColor(color))?;
            *current_color = Some(color);
        }
        self.out.queue(Print(ch))?;
        Ok(())
    }
}

/// Display colour of a glyph; text and empty cells keep the terminal default.
pub fn glyph_color(ch: char) -> Color {
    if ch == BORDER_GLYPH {
        return Color::DarkGrey;
    }
    match ShapeKind::from_glyph(ch) {
        Some(ShapeKind::I) => Color::Cyan,
        Some(ShapeKind::O) => Color::Yellow,
        Some(ShapeKind::T) => Color::Magenta,
        Some(ShapeKind::S) => Color::Green,
        Some(ShapeKind::Z) => Color::Red,
        Some(ShapeKind::J) => Color::Blue,
        Some(ShapeKind::L) => Color::DarkYellow,
        None => Color::Reset,
    }
}

/// Runs of changed cells as `(x, y, len)`, row by row, left to right.
fn changed_runs(prev: &RenderBuffer, next: &RenderBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();

    for (y, (a, b)) in prev.rows().zip(next.rows()).enumerate() {
        let mut x = 0;
        while x < b.len() {
            if a[x] == b[x] {
                x += 1;
                continue;
            }

            let start = x;
            while x < b.len() && a[x] != b[x] {
                x += 1;
            }
            runs.push((start as u16, y as u16, (x - start) as u16));
        }
    }

    runs
}
