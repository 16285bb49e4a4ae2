//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session. No game logic is performed; this module only projects the
//! viewport onto the terminal grid and translates state into commands.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};
use glam::Vec2;
use space_dodge::sim::{Category, Entity, GameSession};
use space_dodge::TravelAxis;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_DECORATION: Color = Color::Grey;
const C_BANNER: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Background per variant: sky for side-scrolling, deep space for vertical
fn background(axis: TravelAxis) -> Color {
    match axis {
        TravelAxis::Horizontal => Color::DarkCyan,
        TravelAxis::Vertical => Color::DarkBlue,
    }
}

fn glyph(category: Category) -> (&'static str, Color) {
    match category {
        Category::Player => ("█", C_PLAYER),
        Category::Enemy => ("▓", C_ENEMY),
        Category::Decoration => ("░", C_DECORATION),
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps viewport coordinates (origin bottom-left, y up) onto terminal cells.
/// Row 0 is the HUD and the last row the controls hint, so the play field
/// spans rows `1..rows-1`.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    viewport: Vec2,
    cols: u16,
    rows: u16,
}

/// Inclusive cell rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub col0: u16,
    pub row0: u16,
    pub col1: u16,
    pub row1: u16,
}

impl Projection {
    pub fn new(viewport: Vec2, cols: u16, rows: u16) -> Self {
        Self {
            viewport,
            cols: cols.max(1),
            rows: rows.max(3),
        }
    }

    fn field_rows(&self) -> u16 {
        self.rows - 2
    }

    /// Cells covered by `entity`, clipped to the play field.
    /// `None` when the entity is entirely off screen.
    pub fn cells(&self, entity: &Entity) -> Option<CellRect> {
        let sx = self.cols as f32 / self.viewport.x;
        let sy = self.field_rows() as f32 / self.viewport.y;

        let left = entity.left() * sx;
        let right = entity.right() * sx;
        // Screen rows grow downward
        let top = (self.viewport.y - entity.top()) * sy;
        let bottom = (self.viewport.y - entity.bottom()) * sy;

        if right <= 0.0 || bottom <= 0.0 {
            return None;
        }
        if left >= self.cols as f32 || top >= self.field_rows() as f32 {
            return None;
        }

        let max_col = self.cols - 1;
        let max_row = self.field_rows() - 1;
        let col0 = (left.max(0.0).floor() as u16).min(max_col);
        let col1 = ((right.ceil() as u16).saturating_sub(1)).clamp(col0, max_col);
        let row0 = (top.max(0.0).floor() as u16).min(max_row);
        let row1 = ((bottom.ceil() as u16).saturating_sub(1)).clamp(row0, max_row);

        Some(CellRect {
            col0,
            row0: row0 + 1,
            col1,
            row1: row1 + 1,
        })
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let projection = Projection::new(session.config().viewport(), cols, rows);

    out.queue(style::SetBackgroundColor(background(
        session.config().travel_axis,
    )))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // Player first, everything else on top in spawn order
    for entity in session.registry.all() {
        draw_entity(out, &projection, entity)?;
    }

    draw_hud(out, session)?;
    draw_controls_hint(out, rows)?;

    if let Some(banner) = session.banner() {
        draw_banner(out, &banner, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(
    out: &mut W,
    projection: &Projection,
    entity: &Entity,
) -> std::io::Result<()> {
    let Some(rect) = projection.cells(entity) else {
        return Ok(());
    };
    let (fill, color) = glyph(entity.category);
    let line = fill.repeat((rect.col1 - rect.col0 + 1) as usize);

    out.queue(style::SetForegroundColor(color))?;
    for row in rect.row0..=rect.row1 {
        out.queue(cursor::MoveTo(rect.col0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(session.score_text()))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("IJKL / arrows : Move   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Pause / game-over overlay ─────────────────────────────────────────────────

fn draw_banner<W: Write>(out: &mut W, banner: &str, cols: u16, rows: u16) -> std::io::Result<()> {
    let lines: Vec<&str> = banner.lines().collect();
    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetForegroundColor(C_BANNER))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(1, Category::Enemy, Vec2::new(x, y), Vec2::new(w, h))
    }

    // 80 columns, 42 rows -> 40 play-field rows, 10x20 units per cell
    fn projection() -> Projection {
        Projection::new(Vec2::new(800.0, 800.0), 80, 42)
    }

    #[test]
    fn test_bottom_left_corner_maps_to_last_field_row() {
        let rect = projection().cells(&entity(0.0, 0.0, 10.0, 20.0)).unwrap();
        assert_eq!(
            rect,
            CellRect {
                col0: 0,
                row0: 40,
                col1: 0,
                row1: 40
            }
        );
    }

    #[test]
    fn test_top_right_corner_maps_to_first_field_row() {
        let rect = projection()
            .cells(&entity(790.0, 780.0, 10.0, 20.0))
            .unwrap();
        assert_eq!((rect.col0, rect.row0), (79, 1));
        assert_eq!((rect.col1, rect.row1), (79, 1));
    }

    #[test]
    fn test_offscreen_entities_are_skipped() {
        let p = projection();
        assert!(p.cells(&entity(800.0, 100.0, 40.0, 20.0)).is_none());
        assert!(p.cells(&entity(-50.0, 100.0, 40.0, 20.0)).is_none());
        assert!(p.cells(&entity(100.0, 800.0, 40.0, 20.0)).is_none());
    }

    #[test]
    fn test_partially_visible_entity_is_clipped() {
        let rect = projection()
            .cells(&entity(780.0, 100.0, 60.0, 20.0))
            .unwrap();
        assert_eq!(rect.col0, 78);
        assert_eq!(rect.col1, 79);
    }
}
