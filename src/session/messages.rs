//! Viewer commands produced by the input router

/// A request to the viewer state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the next image
    Next,
    /// Show the previous image
    Prev,
    /// Show the image at a 0-based index (clamped by the viewer)
    Goto(i64),
    /// Re-render the current image, re-running the processing slot
    Reprocess,
    /// Reset the jump text box to the current 1-based index
    RestoreJumpText,
    /// Move keyboard focus to the jump text box
    FocusJump,
    /// Close the display surface and end the session
    Quit,
}

/// Clickable controls below the panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    /// Submit the jump text box
    Go,
    Reprocess,
}
