//! Input event types delivered by the display frontend.
//!
//! Instead of wiring mutable state into protocol callbacks, the frontend
//! translates everything it receives into [`InputEvent`] values, drained
//! once per frame by [`crate::frame::FrameDriver`]. Point-store mutation
//! stays decoupled from the windowing collaborator.
use glam::DVec2;

/// One input event observed between two frames.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to a (possibly sub-pixel) surface position.
    CursorMoved {
        /// New cursor position in surface coordinates.
        position: DVec2,
    },

    /// A pointer button was pressed.
    ButtonPressed {
        /// The button that went down.
        button: PointerButton,
    },

    /// A pointer button was released.
    ButtonReleased {
        /// The button that went up.
        button: PointerButton,
    },

    /// A keyboard key was pressed.
    KeyPressed {
        /// The key that went down.
        key: KeyCode,
    },

    /// A keyboard key was released.
    KeyReleased {
        /// The key that went up.
        key: KeyCode,
    },
}

/// Pointer buttons the frontend can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    /// The secondary button; a press appends one burst.
    Right,
}

/// Keys the frame loop cares about; anything else travels as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Backspace,
    Other(u32),
}
