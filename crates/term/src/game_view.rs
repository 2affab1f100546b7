//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The frame is a bordered block holding, top to bottom: the score line, the
//! board (one cell per terminal column), a blank row and the control hint.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PADDLE_HEIGHT;

/// Static help line shown under the board.
pub const CONTROLS_HINT: &str = "Controls: W/S for left paddle, ↑/↓ for right paddle, Q to quit";

const PADDLE_GLYPH: char = '█';
const BALL_GLYPH: char = '●';

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

/// Frame geometry for one snapshot, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    /// Top-left cell of the content area (inside the border).
    fn inner(&self) -> (u16, u16) {
        (self.start_x.saturating_add(1), self.start_y.saturating_add(1))
    }

    /// Terminal row of board row 0.
    fn board_top(&self) -> u16 {
        self.inner().1.saturating_add(1)
    }
}

/// A lightweight terminal view of the Pong table.
#[derive(Debug, Clone)]
pub struct GameView {
    border: CellStyle,
    text: CellStyle,
    paddle: CellStyle,
    ball: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            // xterm-256 colour 63.
            border: CellStyle::fg(Rgb::new(95, 95, 255)),
            text: CellStyle::default(),
            paddle: CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(240, 240, 240))
            },
            ball: CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(255, 220, 80))
            },
        }
    }
}

impl GameView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted every call.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap, viewport);
        let (inner_x, inner_y) = layout.inner();

        self.draw_border(fb, &layout);

        fb.put_str(inner_x, inner_y, &score_line(snap), self.text);

        self.draw_paddles(fb, snap, &layout);
        if let Some((bx, by)) = snap.ball_cell() {
            let top = layout.board_top();
            fb.put_char(
                inner_x.saturating_add(bx),
                top.saturating_add(by),
                BALL_GLYPH,
                self.ball,
            );
        }

        // Blank row between the board and the hint.
        let hint_y = layout
            .board_top()
            .saturating_add(snap.height)
            .saturating_add(1);
        fb.put_str(inner_x, hint_y, CONTROLS_HINT, self.text);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Size of the bordered frame for a snapshot: `(width, height)`.
    pub fn frame_size(snap: &GameSnapshot) -> (u16, u16) {
        let text_w = [score_line(snap).chars().count(), CONTROLS_HINT.chars().count()]
            .into_iter()
            .max()
            .unwrap_or(0);
        let content_w = snap.width.max(u16::try_from(text_w).unwrap_or(u16::MAX));
        // Score line, board rows, blank row, hint.
        let content_h = snap.height.saturating_add(3);
        (content_w.saturating_add(2), content_h.saturating_add(2))
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = Self::frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let Layout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = *layout;
        let style = self.border;

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

    fn draw_paddles(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let (inner_x, _) = layout.inner();
        let top = layout.board_top();
        let right_col = snap.width.saturating_sub(1);

        for (col, paddle_y) in [(0, snap.paddle_left_y), (right_col, snap.paddle_right_y)] {
            let first = paddle_y as i64;
            for i in 0..i64::from(PADDLE_HEIGHT) {
                let row = first + i;
                if row < 0 || row >= i64::from(snap.height) {
                    continue;
                }
                fb.put_char(
                    inner_x.saturating_add(col),
                    top.saturating_add(row as u16),
                    PADDLE_GLYPH,
                    self.paddle,
                );
            }
        }
    }
}

/// Header line, e.g. `Score: 3 - 1`.
pub fn score_line(snap: &GameSnapshot) -> String {
    format!("Score: {} - {}", snap.score_left, snap.score_right)
}
