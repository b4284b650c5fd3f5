//! minifb-backed implementation of the [`Frontend`] seam.
//!
//! minifb couples presentation and event processing: `update_with_buffer`
//! both flips the frame and pumps the platform event queue. `present`
//! therefore does the update (and, with a target fps set, is where the
//! loop blocks between frames); the following `pump` is a non-blocking
//! read of the freshly polled state, converted into explicit input events.
use glam::DVec2;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use point_field::prelude::*;

pub struct WindowFrontend {
    window: Window,
    staging: Vec<u32>,
    size: SurfaceSize,
    last_cursor: Option<DVec2>,
    right_was_down: bool,
}

impl WindowFrontend {
    /// Open a non-resizable window of the given surface size.
    pub fn new(title: &str, size: SurfaceSize) -> anyhow::Result<Self> {
        let mut window = Window::new(
            title,
            size.width as usize,
            size.height as usize,
            WindowOptions::default(),
        )?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            staging: vec![0u32; size.pixel_count()],
            size,
            last_cursor: None,
            right_was_down: false,
        })
    }
}

impl Frontend for WindowFrontend {
    fn pump(&mut self, events: &mut Vec<InputEvent>) -> Result<bool> {
        if !self.window.is_open() {
            return Ok(false);
        }

        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            let position = DVec2::new(x as f64, y as f64);
            if self.last_cursor != Some(position) {
                self.last_cursor = Some(position);
                events.push(InputEvent::CursorMoved { position });
            }
        }

        // minifb reports level state for mouse buttons; edge-detect so a
        // held button produces exactly one press event.
        let right_down = self.window.get_mouse_down(MouseButton::Right);
        if right_down && !self.right_was_down {
            events.push(InputEvent::ButtonPressed {
                button: PointerButton::Right,
            });
        }
        if !right_down && self.right_was_down {
            events.push(InputEvent::ButtonReleased {
                button: PointerButton::Right,
            });
        }
        self.right_was_down = right_down;

        for (window_key, key) in [
            (Key::Escape, KeyCode::Escape),
            (Key::Backspace, KeyCode::Backspace),
        ] {
            if self.window.is_key_released(window_key) {
                events.push(InputEvent::KeyReleased { key });
            }
        }

        Ok(true)
    }

    fn present(&mut self, raster: &Raster) -> Result<()> {
        raster.copy_into(&mut self.staging);
        self.window
            .update_with_buffer(
                &self.staging,
                self.size.width as usize,
                self.size.height as usize,
            )
            .map_err(|e| Error::Present(e.to_string()))
    }
}
