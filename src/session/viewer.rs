//! Viewer state machine
//!
//! Owns the dataset, the image source, the processing slot and the current
//! [`ViewerState`]. Every accepted command re-decodes the current image,
//! renders both panes and pushes them to the display surface.

use anyhow::Context;
use image::RgbImage;

use crate::config::GeometryPolicy;
use crate::domain::{Dataset, ImageRecord};
use crate::error::ViewerError;
use crate::fl;
use crate::processing::Processor;
use crate::render::image::render_overlay;
use crate::session::messages::Command;
use crate::session::state::ViewerState;
use crate::source::ImageSource;
use crate::surface::{DisplaySurface, Pane};

pub struct Viewer {
    dataset: Dataset,
    source: Box<dyn ImageSource>,
    processor: Box<dyn Processor>,
    geometry_policy: GeometryPolicy,
    state: ViewerState,
}

/// Both pane buffers for one dataset record
struct RenderedPair {
    annotated: RgbImage,
    processed: RgbImage,
}

impl Viewer {
    pub fn new(
        dataset: Dataset,
        source: Box<dyn ImageSource>,
        processor: Box<dyn Processor>,
        geometry_policy: GeometryPolicy,
    ) -> Result<Self, ViewerError> {
        let state = ViewerState::new(dataset.len()).ok_or(ViewerError::EmptyDataset)?;
        Ok(Self {
            dataset,
            source,
            processor,
            geometry_policy,
            state,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn current_record(&self) -> &ImageRecord {
        &self.dataset.images()[self.state.current_index()]
    }

    /// Render the current image without changing the index
    pub fn show_current(&mut self, surface: &mut dyn DisplaySurface) -> anyhow::Result<()> {
        self.transition(self.state, surface)
    }

    /// Apply a routed command.
    ///
    /// Errors from the image source, the overlay renderer or the processing
    /// slot are returned unchanged in kind and leave the state untouched.
    pub fn apply(
        &mut self,
        command: Command,
        surface: &mut dyn DisplaySurface,
    ) -> anyhow::Result<()> {
        log::debug!("Command {:?} at index {}", command, self.state.current_index());
        match command {
            Command::Next => self.transition(self.state.next(), surface),
            Command::Prev => self.transition(self.state.prev(), surface),
            Command::Goto(target) => self.transition(self.state.goto(target), surface),
            Command::Reprocess => self.transition(self.state, surface),
            Command::RestoreJumpText => {
                surface.set_textbox_value(&self.state.display_index().to_string());
                Ok(())
            }
            Command::FocusJump => {
                surface.focus_textbox();
                Ok(())
            }
            Command::Quit => {
                log::info!("Quit requested");
                surface.close();
                Ok(())
            }
        }
    }

    fn transition(
        &mut self,
        next: ViewerState,
        surface: &mut dyn DisplaySurface,
    ) -> anyhow::Result<()> {
        let rendered = self.render(next)?;
        self.state = next;
        self.present(rendered, surface);
        Ok(())
    }

    fn render(&mut self, state: ViewerState) -> anyhow::Result<RenderedPair> {
        let record = &self.dataset.images()[state.current_index()];
        log::debug!(
            "Rendering {}/{}: {}",
            state.display_index(),
            state.len(),
            record.file_name
        );

        let base = self.source.load(&record.file_name)?;
        let annotated = render_overlay(&base, &record.annotations, self.geometry_policy)
            .with_context(|| format!("failed to draw annotations of {}", record.file_name))?;
        let processed = self
            .processor
            .process(&base, record)
            .with_context(|| format!("processing failed for {}", record.file_name))?;

        Ok(RenderedPair {
            annotated,
            processed,
        })
    }

    fn present(&self, rendered: RenderedPair, surface: &mut dyn DisplaySurface) {
        let record = self.current_record();

        for pane in Pane::ALL {
            surface.clear_pane(pane);
        }

        surface.draw_image(Pane::Annotated, rendered.annotated);
        surface.set_pane_title(
            Pane::Annotated,
            &fl!(
                "annotated-title",
                index = self.state.display_index(),
                total = self.state.len(),
                file = record.file_name.as_str()
            ),
        );

        surface.draw_image(Pane::Processed, rendered.processed);
        surface.set_pane_title(Pane::Processed, &fl!("processed-title"));

        surface.set_textbox_value(&self.state.display_index().to_string());
        surface.request_redraw();
    }
}
