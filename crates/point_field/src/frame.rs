//! The per-frame driver: snapshot, render, present, pump.
//!
//! [`FrameDriver`] owns the point store and the raster and defines the
//! ordering contract between them: events drained after a frame are only
//! visible to the *next* frame's snapshot, never mid-frame, and no frame
//! begins once the quit flag is set. The display collaborator sits behind
//! the [`Frontend`] trait.
use tracing::info;

use crate::burst;
use crate::error::{Error, Result};
use crate::event::{InputEvent, KeyCode, PointerButton};
use crate::raster::{Raster, SurfaceSize};
use crate::render;
use crate::store::PointStore;

/// Seam to the external display/session collaborator.
pub trait Frontend {
    /// Append the next batch of input events to `events`. Returns
    /// `Ok(false)` when the display connection is gone and the frame loop
    /// must terminate.
    ///
    /// The loop's suspension point lives in the frontend: a backend blocks
    /// wherever its platform dictates, either here while waiting for
    /// events or in [`Frontend::present`] when presentation paces frames.
    fn pump(&mut self, events: &mut Vec<InputEvent>) -> Result<bool>;

    /// Make the completed raster visible (damage, attach, commit, flush).
    fn present(&mut self, raster: &Raster) -> Result<()>;
}

/// Drives one frame per display tick until quit.
pub struct FrameDriver {
    surface: SurfaceSize,
    store: PointStore,
    raster: Raster,
    quit: bool,
}

impl FrameDriver {
    /// Create a driver for a fixed surface size, seeding the store with the
    /// default cursor.
    pub fn new(surface: SurfaceSize) -> Result<Self> {
        if surface.width == 0 || surface.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "surface must be non-empty, got {}x{}",
                surface.width, surface.height
            )));
        }
        Ok(Self {
            surface,
            store: PointStore::new(),
            raster: Raster::new(surface),
            quit: false,
        })
    }

    /// Apply one input event to the point store.
    ///
    /// Motion overwrites the cursor; a right-button press appends exactly
    /// one burst (holding does not repeat, releases are no-ops); releasing
    /// Escape or Backspace requests quit. Everything else is ignored.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { position } => self.store.set_cursor(position),
            InputEvent::ButtonPressed {
                button: PointerButton::Right,
            } => {
                let burst = burst::generate(self.store.cursor(), self.surface);
                self.store.append_burst(&burst);
                info!(
                    appended = burst.len(),
                    total = self.store.len(),
                    "burst appended"
                );
            }
            InputEvent::KeyReleased {
                key: KeyCode::Escape | KeyCode::Backspace,
            } => {
                info!("quit requested");
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Whether a quit event has been observed.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// The owned point store (cursor + trail).
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    /// Render one frame against the current store snapshot and return the
    /// completed raster for presentation.
    pub fn render_frame(&mut self) -> &Raster {
        let cursor = self.store.cursor();
        render::render(&self.raster, cursor, self.store.snapshot());
        &self.raster
    }

    /// Run the frame loop until quit or until the frontend reports the
    /// display connection closed.
    ///
    /// Per tick, strictly ordered: render against a snapshot taken at the
    /// top of the frame, present, pump the next event batch, apply. The
    /// frontend suspends the loop inside present or pump as its platform
    /// dictates. An in-flight frame always completes; no frame starts
    /// after quit.
    pub fn run(&mut self, frontend: &mut dyn Frontend) -> Result<()> {
        info!(
            width = self.surface.width,
            height = self.surface.height,
            "frame loop started"
        );
        let mut events = Vec::new();
        loop {
            if self.quit {
                break;
            }
            self.render_frame();
            frontend.present(&self.raster)?;
            events.clear();
            if !frontend.pump(&mut events)? {
                break;
            }
            for event in events.drain(..) {
                self.apply(event);
            }
        }
        info!(points = self.store.len(), "frame loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{GRID_BACKDROP, GRID_LINE};
    use glam::DVec2;
    use std::collections::VecDeque;

    const SURFACE: SurfaceSize = SurfaceSize {
        width: 64,
        height: 48,
    };

    /// Frontend that replays scripted event batches and counts presents.
    struct ScriptedFrontend {
        batches: VecDeque<Vec<InputEvent>>,
        presents: usize,
        presented_points: Vec<usize>,
    }

    impl ScriptedFrontend {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self {
                batches: batches.into(),
                presents: 0,
                presented_points: Vec::new(),
            }
        }
    }

    impl Frontend for ScriptedFrontend {
        fn pump(&mut self, events: &mut Vec<InputEvent>) -> Result<bool> {
            match self.batches.pop_front() {
                Some(batch) => {
                    events.extend(batch);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        fn present(&mut self, raster: &Raster) -> Result<()> {
            self.presents += 1;
            // Count lit splat channels as a cheap frame fingerprint.
            let lit = (0..raster.height())
                .flat_map(|y| (0..raster.width()).map(move |x| (x, y)))
                .filter(|&(x, y)| {
                    let px = raster.get(x, y);
                    px != GRID_BACKDROP && px != GRID_LINE
                })
                .count();
            self.presented_points.push(lit);
            Ok(())
        }
    }

    #[test]
    fn rejects_empty_surfaces() {
        assert!(FrameDriver::new(SurfaceSize::new(0, 48)).is_err());
        assert!(FrameDriver::new(SurfaceSize::new(64, 0)).is_err());
        assert!(FrameDriver::new(SURFACE).is_ok());
    }

    #[test]
    fn motion_then_click_appends_one_burst() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        let cursor = DVec2::new(10.0, 10.0);
        driver.apply(InputEvent::CursorMoved { position: cursor });
        driver.apply(InputEvent::ButtonPressed {
            button: PointerButton::Right,
        });
        assert_eq!(driver.store().len(), 1 + burst::burst_len(cursor, SURFACE));
        assert_eq!(driver.store().cursor(), cursor);
    }

    #[test]
    fn button_release_and_other_buttons_append_nothing() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        driver.apply(InputEvent::ButtonReleased {
            button: PointerButton::Right,
        });
        driver.apply(InputEvent::ButtonPressed {
            button: PointerButton::Left,
        });
        driver.apply(InputEvent::ButtonPressed {
            button: PointerButton::Middle,
        });
        assert_eq!(driver.store().len(), 1);
    }

    #[test]
    fn each_press_appends_exactly_once() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        let cursor = DVec2::new(5.0, 5.0);
        driver.apply(InputEvent::CursorMoved { position: cursor });
        let per_burst = burst::burst_len(cursor, SURFACE);
        for clicks in 1..=3 {
            driver.apply(InputEvent::ButtonPressed {
                button: PointerButton::Right,
            });
            assert_eq!(driver.store().len(), 1 + clicks * per_burst);
        }
    }

    #[test]
    fn escape_release_requests_quit() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        assert!(!driver.quit_requested());
        driver.apply(InputEvent::KeyReleased {
            key: KeyCode::Escape,
        });
        assert!(driver.quit_requested());
    }

    #[test]
    fn backspace_release_requests_quit_but_presses_do_not() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        driver.apply(InputEvent::KeyPressed {
            key: KeyCode::Escape,
        });
        driver.apply(InputEvent::KeyReleased {
            key: KeyCode::Other(16),
        });
        assert!(!driver.quit_requested());
        driver.apply(InputEvent::KeyReleased {
            key: KeyCode::Backspace,
        });
        assert!(driver.quit_requested());
    }

    #[test]
    fn run_produces_no_frames_after_quit() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        let mut frontend = ScriptedFrontend::new(vec![
            vec![InputEvent::CursorMoved {
                position: DVec2::new(8.0, 8.0),
            }],
            vec![InputEvent::KeyReleased {
                key: KeyCode::Escape,
            }],
            // Never reached: the loop checks quit before rendering.
            vec![InputEvent::ButtonPressed {
                button: PointerButton::Right,
            }],
        ]);
        driver.run(&mut frontend).unwrap();
        assert_eq!(frontend.presents, 2);
        assert_eq!(frontend.batches.len(), 1);
        assert_eq!(driver.store().len(), 1);
    }

    #[test]
    fn run_stops_when_the_connection_closes() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        let mut frontend = ScriptedFrontend::new(vec![]);
        driver.run(&mut frontend).unwrap();
        assert_eq!(frontend.presents, 1);
    }

    #[test]
    fn click_is_visible_to_the_following_frame() {
        let mut driver = FrameDriver::new(SURFACE).unwrap();
        let mut frontend = ScriptedFrontend::new(vec![
            vec![
                InputEvent::CursorMoved {
                    position: DVec2::new(20.0, 20.0),
                },
                InputEvent::ButtonPressed {
                    button: PointerButton::Right,
                },
            ],
            vec![InputEvent::KeyReleased {
                key: KeyCode::Escape,
            }],
        ]);
        driver.run(&mut frontend).unwrap();
        assert_eq!(frontend.presents, 2);
        // Frame 1 shows only the default cursor; frame 2 shows the burst.
        assert!(frontend.presented_points[1] > frontend.presented_points[0]);
    }
}
