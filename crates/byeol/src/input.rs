//! Pointer input: drag pans the camera, the wheel zooms.

use byeol_scene::{CELL_PX_H, CELL_PX_W, Camera};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Tracks an in-progress drag and routes pointer events to the camera.
#[derive(Debug, Default)]
pub struct InputController {
    dragging: bool,
    last_col: u16,
    last_row: u16,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one mouse event to the camera.
    pub fn on_mouse(&mut self, event: MouseEvent, camera: &mut Camera) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.dragging = true;
                self.last_col = event.column;
                self.last_row = event.row;
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                let dx = (event.column as i32 - self.last_col as i32) as f32 * CELL_PX_W;
                let dy = (event.row as i32 - self.last_row as i32) as f32 * CELL_PX_H;
                camera.drag_px(dx, dy);
                self.last_col = event.column;
                self.last_row = event.row;
            }
            MouseEventKind::Up(MouseButton::Left) => self.dragging = false,
            MouseEventKind::ScrollUp => camera.zoom_in(),
            MouseEventKind::ScrollDown => camera.zoom_out(),
            _ => {}
        }
    }

    /// End any drag in progress (pointer left the surface).
    pub fn cancel_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_drag_pans_camera() {
        let mut input = InputController::new();
        let mut camera = Camera::new(800.0, 400.0);
        input.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), &mut camera);
        assert!(input.is_dragging());
        // Drag 2 cells right: 16 px at zoom 1 shifts the projection by
        // 16 px at the focal plane.
        input.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5), &mut camera);
        let proj = camera.project(0.0, 0.0, byeol_scene::FOCAL_LENGTH_PX);
        assert!((proj.x - 416.0).abs() < 1e-3);
        input.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 12, 5), &mut camera);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_move_without_press_does_not_pan() {
        let mut input = InputController::new();
        let mut camera = Camera::new(800.0, 400.0);
        input.on_mouse(mouse(MouseEventKind::Moved, 30, 10), &mut camera);
        let proj = camera.project(0.0, 0.0, byeol_scene::FOCAL_LENGTH_PX);
        assert_eq!(proj.x, 400.0);
    }

    #[test]
    fn test_wheel_zooms_with_clamp() {
        let mut input = InputController::new();
        let mut camera = Camera::new(800.0, 400.0);
        for _ in 0..100 {
            input.on_mouse(mouse(MouseEventKind::ScrollUp, 0, 0), &mut camera);
        }
        assert!((camera.zoom() - 5.0).abs() < 1e-3);
        for _ in 0..100 {
            input.on_mouse(mouse(MouseEventKind::ScrollDown, 0, 0), &mut camera);
        }
        assert!((camera.zoom() - 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_focus_loss_cancels_drag() {
        let mut input = InputController::new();
        let mut camera = Camera::new(800.0, 400.0);
        input.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 4), &mut camera);
        input.cancel_drag();
        input.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 9), &mut camera);
        let proj = camera.project(0.0, 0.0, byeol_scene::FOCAL_LENGTH_PX);
        assert_eq!(proj.x, 400.0);
    }
}
