//! Display surface consumed by the viewer
//!
//! The viewer only talks to the window through this trait, so its
//! transitions can be driven without any window at all.

use image::RgbImage;

/// One of the two display regions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pane {
    /// Source image with annotation outlines
    Annotated,
    /// Output of the processing slot
    Processed,
}

impl Pane {
    pub const ALL: [Pane; 2] = [Pane::Annotated, Pane::Processed];

    pub fn index(self) -> usize {
        match self {
            Pane::Annotated => 0,
            Pane::Processed => 1,
        }
    }
}

pub trait DisplaySurface {
    fn clear_pane(&mut self, pane: Pane);
    /// Hand a freshly rendered buffer to a pane, replacing whatever it showed
    fn draw_image(&mut self, pane: Pane, image: RgbImage);
    fn set_pane_title(&mut self, pane: Pane, title: &str);
    fn set_textbox_value(&mut self, value: &str);
    fn textbox_value(&self) -> String;
    fn focus_textbox(&mut self);
    fn request_redraw(&mut self);
    fn close(&mut self);
}
