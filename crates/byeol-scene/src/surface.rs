//! Virtual-pixel drawing surface over the terminal buffer.
//!
//! The scene works in pixels; one terminal cell covers an 8x16 px box.
//! The painter rasterizes points, streaks, text, and sprite art into
//! buffer cells, alpha-blending foregrounds toward the night-sky
//! gradient behind them.

use byeol_core::Rgb;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

/// Horizontal pixel extent of one terminal cell.
pub const CELL_PX_W: f32 = 8.0;
/// Vertical pixel extent of one terminal cell.
pub const CELL_PX_H: f32 = 16.0;

/// Night-sky gradient endpoints.
const BG_TOP: Rgb = Rgb::new(0x0A, 0x0A, 0x23);
const BG_BOTTOM: Rgb = Rgb::new(0x0C, 0x00, 0x04);

/// Point glyphs by radius class.
const POINT_CHARS: [char; 3] = ['·', '*', '✦'];
/// Glyphs for shooting-star streaks: head, then trail.
const STREAK_HEAD: char = '✦';
const STREAK_TRAIL: char = '╲';

/// Per-frame painter over a region of the terminal buffer.
pub struct Painter<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> Painter<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    /// Surface width in virtual pixels.
    pub fn px_width(&self) -> f32 {
        self.area.width as f32 * CELL_PX_W
    }

    /// Surface height in virtual pixels.
    pub fn px_height(&self) -> f32 {
        self.area.height as f32 * CELL_PX_H
    }

    /// The background gradient color behind a given cell row.
    fn bg_at_row(&self, row: i32) -> Rgb {
        let span = (self.area.height.saturating_sub(1)).max(1) as f32;
        let t = (row.max(0) as f32 / span).clamp(0.0, 1.0);
        Rgb::lerp(BG_TOP, BG_BOTTOM, t)
    }

    /// Write one glyph at cell coordinates, blended over the gradient.
    /// Out-of-area writes are dropped.
    fn put(&mut self, col: i32, row: i32, ch: char, color: Rgb, alpha: f32) {
        if col < 0 || row < 0 || col >= self.area.width as i32 || row >= self.area.height as i32 {
            return;
        }
        let fg = color.over(self.bg_at_row(row), alpha);
        let pos = Position::new(self.area.x + col as u16, self.area.y + row as u16);
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(ch);
            cell.set_fg(fg.into());
        }
    }

    /// Clear the surface to the vertical night-sky gradient.
    pub fn clear_background(&mut self) {
        for row in 0..self.area.height {
            let bg = self.bg_at_row(row as i32);
            for col in 0..self.area.width {
                let pos = Position::new(self.area.x + col, self.area.y + row);
                if let Some(cell) = self.buf.cell_mut(pos) {
                    cell.set_char(' ');
                    cell.set_bg(bg.into());
                    cell.set_fg(bg.into());
                }
            }
        }
    }

    /// Plot a point at pixel coordinates. Radius selects the glyph.
    pub fn point_px(&mut self, px: f32, py: f32, radius: f32, color: Rgb, alpha: f32) {
        let glyph = if radius < 0.9 {
            POINT_CHARS[0]
        } else if radius < 1.5 {
            POINT_CHARS[1]
        } else {
            POINT_CHARS[2]
        };
        self.put(
            (px / CELL_PX_W).floor() as i32,
            (py / CELL_PX_H).floor() as i32,
            glyph,
            color,
            alpha,
        );
    }

    /// Stroke a streak from head to tail with opacity fading to zero at
    /// the tail end.
    pub fn streak_px(&mut self, head: (f32, f32), tail: (f32, f32), color: Rgb, head_alpha: f32) {
        let steps = (((tail.0 - head.0) / CELL_PX_W).abs())
            .max(((tail.1 - head.1) / CELL_PX_H).abs())
            .ceil()
            .max(1.0) as i32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let px = head.0 + (tail.0 - head.0) * t;
            let py = head.1 + (tail.1 - head.1) * t;
            let alpha = head_alpha * (1.0 - t);
            let ch = if step == 0 { STREAK_HEAD } else { STREAK_TRAIL };
            self.put(
                (px / CELL_PX_W).floor() as i32,
                (py / CELL_PX_H).floor() as i32,
                ch,
                color,
                alpha,
            );
        }
    }

    /// Draw text centered on the given pixel position. A glow radius of
    /// three or more pixels adds dim copies on the adjacent rows.
    pub fn text_px(&mut self, cx: f32, cy: f32, text: &str, color: Rgb, alpha: f32, glow_px: f32) {
        let len = text.chars().count() as i32;
        if len == 0 {
            return;
        }
        let row = (cy / CELL_PX_H).floor() as i32;
        let start = (cx / CELL_PX_W).floor() as i32 - len / 2;

        if glow_px >= 3.0 {
            let halo = alpha * 0.25;
            for (offset, ch) in text.chars().enumerate() {
                if ch != ' ' {
                    self.put(start + offset as i32, row - 1, ch, color, halo);
                    self.put(start + offset as i32, row + 1, ch, color, halo);
                }
            }
        }
        for (offset, ch) in text.chars().enumerate() {
            if ch != ' ' {
                self.put(start + offset as i32, row, ch, color, alpha);
            }
        }
    }

    /// Blit sprite art centered on the given pixel position, scaled by
    /// nearest-neighbor sampling into a square of `size_px` per side.
    pub fn sprite_px(
        &mut self,
        cx: f32,
        cy: f32,
        size_px: f32,
        sprite: &byeol_assets::Sprite,
        tint: Rgb,
        alpha: f32,
    ) {
        let cols = (size_px / CELL_PX_W).round().max(1.0) as i32;
        let rows = (size_px / CELL_PX_H).round().max(1.0) as i32;
        let origin_col = (cx / CELL_PX_W).floor() as i32 - cols / 2;
        let origin_row = (cy / CELL_PX_H).floor() as i32 - rows / 2;

        for j in 0..rows {
            for i in 0..cols {
                let u = (i as f32 + 0.5) / cols as f32;
                let v = (j as f32 + 0.5) / rows as f32;
                if let Some(ch) = sprite.sample(u, v) {
                    self.put(origin_col + i, origin_row + j, ch, tint, alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byeol_assets::Sprite;

    fn painter_buf(cols: u16, rows: u16) -> Buffer {
        Buffer::empty(Rect::new(0, 0, cols, rows))
    }

    fn glyph_at(buf: &Buffer, col: u16, row: u16) -> String {
        buf.cell(Position::new(col, row)).unwrap().symbol().to_string()
    }

    #[test]
    fn test_px_dimensions() {
        let mut buf = painter_buf(80, 24);
        let painter = Painter::new(&mut buf, Rect::new(0, 0, 80, 24));
        assert_eq!(painter.px_width(), 640.0);
        assert_eq!(painter.px_height(), 384.0);
    }

    #[test]
    fn test_point_lands_in_cell() {
        let mut buf = painter_buf(10, 4);
        let mut painter = Painter::new(&mut buf, Rect::new(0, 0, 10, 4));
        painter.point_px(20.0, 40.0, 1.0, Rgb::WHITE, 1.0);
        assert_eq!(glyph_at(&buf, 2, 2), "*");
    }

    #[test]
    fn test_offscreen_draws_are_dropped() {
        let mut buf = painter_buf(4, 2);
        let mut painter = Painter::new(&mut buf, Rect::new(0, 0, 4, 2));
        painter.point_px(-8.0, 0.0, 1.0, Rgb::WHITE, 1.0);
        painter.point_px(999.0, 999.0, 1.0, Rgb::WHITE, 1.0);
        for col in 0..4 {
            for row in 0..2 {
                assert_eq!(glyph_at(&buf, col, row), " ");
            }
        }
    }

    #[test]
    fn test_text_is_centered_and_skips_spaces() {
        let mut buf = painter_buf(11, 3);
        let mut painter = Painter::new(&mut buf, Rect::new(0, 0, 11, 3));
        // Center of an 11-cell row is column 5.
        painter.text_px(5.5 * CELL_PX_W, 1.5 * CELL_PX_H, "a b", Rgb::WHITE, 1.0, 0.0);
        assert_eq!(glyph_at(&buf, 4, 1), "a");
        assert_eq!(glyph_at(&buf, 5, 1), " ");
        assert_eq!(glyph_at(&buf, 6, 1), "b");
    }

    #[test]
    fn test_glow_adds_adjacent_rows() {
        let mut buf = painter_buf(5, 3);
        let mut painter = Painter::new(&mut buf, Rect::new(0, 0, 5, 3));
        painter.text_px(2.5 * CELL_PX_W, 1.5 * CELL_PX_H, "x", Rgb::WHITE, 1.0, 5.0);
        assert_eq!(glyph_at(&buf, 2, 0), "x");
        assert_eq!(glyph_at(&buf, 2, 1), "x");
        assert_eq!(glyph_at(&buf, 2, 2), "x");
    }

    #[test]
    fn test_sprite_blit_fills_target_box() {
        let mut buf = painter_buf(8, 4);
        let mut painter = Painter::new(&mut buf, Rect::new(0, 0, 8, 4));
        let sprite = Sprite::parse("##\n##").unwrap();
        painter.sprite_px(4.0 * CELL_PX_W, 2.0 * CELL_PX_H, 2.0 * CELL_PX_W, &sprite, Rgb::WHITE, 1.0);
        assert_eq!(glyph_at(&buf, 3, 2), "#");
        assert_eq!(glyph_at(&buf, 4, 2), "#");
    }

    #[test]
    fn test_streak_fades_to_tail() {
        let mut buf = painter_buf(10, 10);
        let mut painter = Painter::new(&mut buf, Rect::new(0, 0, 10, 10));
        painter.streak_px((72.0, 24.0), (8.0, 152.0), Rgb::WHITE, 1.0);
        assert_eq!(glyph_at(&buf, 9, 1), "✦");
    }
}
