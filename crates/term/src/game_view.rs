//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{StatusMessage, CARD_BACK_GLYPH, TOKEN_GLYPHS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the card grid.
pub struct BoardView {
    /// Card width in terminal columns.
    cell_w: u16,
    /// Card height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 4x2 keeps cards roughly square under typical glyph aspect ratios
        // and still fits a 10x10 board in an 80x24 terminal.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// `cursor` is the (col, row) of the selection cursor. Callers can reuse
    /// a framebuffer across frames; it is resized to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: (u8, u8),
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let size = snap.size as u16;
        let board_px_w = size * self.cell_w;
        let board_px_h = size * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..size {
            for col in 0..size {
                let id = (row * size + col) as usize;
                let is_cursor = (col as u8, row as u8) == cursor;
                self.draw_card(fb, snap, id, start_x, start_y, col, row, is_cursor);
            }
        }

        self.draw_message_line(fb, snap, start_x, start_y, frame_w, frame_h);
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.won {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WON!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: (u8, u8), viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        id: usize,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        is_cursor: bool,
    ) {
        let (glyph, mut style) = if snap.solved[id] {
            (
                TOKEN_GLYPHS[snap.tokens[id] as usize],
                CellStyle {
                    fg: Rgb::new(240, 255, 240),
                    bg: Rgb::new(40, 150, 80),
                    bold: false,
                    dim: false,
                },
            )
        } else if snap.face_up[id] {
            (
                TOKEN_GLYPHS[snap.tokens[id] as usize],
                CellStyle {
                    fg: Rgb::new(255, 255, 255),
                    bg: Rgb::new(60, 100, 200),
                    bold: true,
                    dim: false,
                },
            )
        } else {
            (
                CARD_BACK_GLYPH,
                CellStyle {
                    fg: Rgb::new(200, 200, 210),
                    bg: Rgb::new(70, 70, 85),
                    bold: false,
                    dim: false,
                },
            )
        };

        if is_cursor {
            style.bg = highlight(style.bg);
            style.bold = true;
        }

        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(
            px + (self.cell_w - 1) / 2,
            py + (self.cell_h - 1) / 2,
            glyph,
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_message_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let Some(message) = snap.message else {
            return;
        };
        let text = message.as_str();
        let style = CellStyle {
            fg: match message {
                StatusMessage::Matched => Rgb::new(120, 230, 120),
                StatusMessage::AlreadyMatched => Rgb::new(240, 210, 80),
            },
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, start_y + frame_h, text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SIZE", label);
        y = y.saturating_add(1);
        let x = fb.put_u32(panel_x, y, snap.size as u32, value);
        fb.put_char(x, y, 'x', dim);
        fb.put_u32(x + 1, y, snap.size as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let x = fb.put_u32(panel_x, y, (snap.solved_count / 2) as u32, value);
        fb.put_char(x, y, '/', dim);
        fb.put_u32(x + 1, y, (snap.matchable_count / 2) as u32, value);
        y = y.saturating_add(2);

        for (key, what) in [
            ("arrows", "move"),
            ("enter", "flip"),
            ("+/-", "size"),
            ("r", "new"),
            ("q", "quit"),
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, dim);
            fb.put_str(panel_x + 7, y, what, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn highlight(bg: Rgb) -> Rgb {
    Rgb::new(
        bg.r.saturating_add(70),
        bg.g.saturating_add(70),
        bg.b.saturating_add(70),
    )
}
