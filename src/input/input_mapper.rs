//! Input mapping from raw events to semantic actions
//!
//! One canonical key scheme serves both the 3D and the 4D scene. Keys step
//! a *named* rotation plane, so W/S spin the same visual plane regardless
//! of shape dimension; the mapper resolves the name to that dimension's
//! angle-vector index.
//!
//! | Keys  | Plane (3D index / 4D index) | Shift held: axis |
//! |-------|-----------------------------|------------------|
//! | W / S | YZ, "about X" (0 / 3)       | y                |
//! | A / D | XZ, "about Y" (1 / 1)       | x                |
//! | Q / E | XY, "about Z" (2 / 0)       | z                |
//! | U / J | XW (4D only, 2)             | w                |
//! | I / K | YW (4D only, 4)             | -                |
//! | O / L | ZW (4D only, 5)             | -                |
//!
//! P toggles projection, R resets the rotation and translation vectors,
//! F toggles fullscreen, Escape exits.

use winit::keyboard::KeyCode;

use wire4d_core::ViewCommand;

/// Actions produced by the keyboard mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Mutate the view state (rotation, translation, projection, reset).
    View(ViewCommand),
    /// Toggle fullscreen mode (F key).
    ToggleFullscreen,
    /// Exit the application (Escape).
    Exit,
}

/// Maps key presses to semantic actions.
///
/// The mapper is pure: window state (shift held, scene dimension) comes in
/// as arguments, which keeps it testable without an event loop.
pub struct InputMapper;

impl InputMapper {
    /// Map one pressed key. Returns `None` for unmapped keys.
    pub fn map_key(key: KeyCode, shift: bool, dimension: usize) -> Option<InputAction> {
        use InputAction::*;

        match key {
            KeyCode::Escape => return Some(Exit),
            KeyCode::KeyF => return Some(ToggleFullscreen),
            KeyCode::KeyP => return Some(View(ViewCommand::ToggleProjection)),
            KeyCode::KeyR => return Some(View(ViewCommand::Reset)),
            _ => {}
        }

        if shift {
            let (axis, dir) = match key {
                KeyCode::KeyA => (0, -1.0),
                KeyCode::KeyD => (0, 1.0),
                KeyCode::KeyW => (1, -1.0),
                KeyCode::KeyS => (1, 1.0),
                KeyCode::KeyQ => (2, -1.0),
                KeyCode::KeyE => (2, 1.0),
                KeyCode::KeyU => (3, -1.0),
                KeyCode::KeyJ => (3, 1.0),
                _ => return None,
            };
            return Some(View(ViewCommand::Translate { axis, dir }));
        }

        let (plane, dir) = match key {
            // Shared planes, resolved per dimension's composition table.
            KeyCode::KeyW => (Self::plane_about_x(dimension), 1.0),
            KeyCode::KeyS => (Self::plane_about_x(dimension), -1.0),
            KeyCode::KeyA => (Self::plane_about_y(dimension), -1.0),
            KeyCode::KeyD => (Self::plane_about_y(dimension), 1.0),
            KeyCode::KeyQ => (Self::plane_about_z(dimension), -1.0),
            KeyCode::KeyE => (Self::plane_about_z(dimension), 1.0),
            // 4D-only planes; a 3D scene ignores the out-of-range index.
            KeyCode::KeyU => (2, 1.0),
            KeyCode::KeyJ => (2, -1.0),
            KeyCode::KeyI => (4, 1.0),
            KeyCode::KeyK => (4, -1.0),
            KeyCode::KeyO => (5, 1.0),
            KeyCode::KeyL => (5, -1.0),
            _ => return None,
        };
        Some(View(ViewCommand::Rotate { plane, dir }))
    }

    /// Angle-vector index of the YZ plane ("about X").
    fn plane_about_x(dimension: usize) -> usize {
        if dimension == 4 {
            3
        } else {
            0
        }
    }

    /// Angle-vector index of the XZ plane ("about Y").
    fn plane_about_y(_dimension: usize) -> usize {
        1
    }

    /// Angle-vector index of the XY plane ("about Z").
    fn plane_about_z(dimension: usize) -> usize {
        if dimension == 4 {
            0
        } else {
            2
        }
    }
}
