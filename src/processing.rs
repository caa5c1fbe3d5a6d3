//! Processing slot for the right pane
//!
//! A [`Processor`] receives the decoded source image and its record and
//! returns whatever image should be shown next to the annotated one. The
//! output may have any dimensions. Errors are not handled by the viewer:
//! they propagate out of the navigation step that invoked the processor and
//! end the session.

use image::{DynamicImage, RgbImage};

use crate::config::ProcessorKind;
use crate::domain::ImageRecord;

pub trait Processor {
    fn process(&mut self, base: &RgbImage, record: &ImageRecord) -> anyhow::Result<RgbImage>;
}

impl<F> Processor for F
where
    F: FnMut(&RgbImage, &ImageRecord) -> anyhow::Result<RgbImage>,
{
    fn process(&mut self, base: &RgbImage, record: &ImageRecord) -> anyhow::Result<RgbImage> {
        self(base, record)
    }
}

/// Returns the source image unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Processor for Identity {
    fn process(&mut self, base: &RgbImage, _record: &ImageRecord) -> anyhow::Result<RgbImage> {
        Ok(base.clone())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Grayscale;

impl Processor for Grayscale {
    fn process(&mut self, base: &RgbImage, _record: &ImageRecord) -> anyhow::Result<RgbImage> {
        let luma = DynamicImage::ImageRgb8(base.clone()).into_luma8();
        Ok(DynamicImage::ImageLuma8(luma).into_rgb8())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Invert;

impl Processor for Invert {
    fn process(&mut self, base: &RgbImage, _record: &ImageRecord) -> anyhow::Result<RgbImage> {
        let mut out = base.clone();
        image::imageops::invert(&mut out);
        Ok(out)
    }
}

/// Build the built-in processor selected in the config
pub fn from_kind(kind: ProcessorKind) -> Box<dyn Processor> {
    match kind {
        ProcessorKind::Identity => Box::new(Identity),
        ProcessorKind::Grayscale => Box::new(Grayscale),
        ProcessorKind::Invert => Box::new(Invert),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn record() -> ImageRecord {
        ImageRecord::new("a.png", Vec::new())
    }

    #[test]
    fn test_identity_returns_input() {
        let base = RgbImage::from_pixel(4, 3, Rgb([1, 2, 3]));
        let out = Identity.process(&base, &record()).unwrap();
        assert_eq!(out, base);
    }

    #[test]
    fn test_grayscale_equalizes_channels() {
        let base = RgbImage::from_pixel(2, 2, Rgb([200, 10, 60]));
        let out = Grayscale.process(&base, &record()).unwrap();
        let [r, g, b] = out.get_pixel(0, 0).0;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_invert() {
        let base = RgbImage::from_pixel(2, 2, Rgb([0, 100, 255]));
        let out = Invert.process(&base, &record()).unwrap();
        assert_eq!(out.get_pixel(1, 1).0, [255, 155, 0]);
    }

    #[test]
    fn test_closure_processor_may_change_dimensions() {
        let mut halve = |base: &RgbImage, _: &ImageRecord| -> anyhow::Result<RgbImage> {
            Ok(image::imageops::thumbnail(base, base.width() / 2, base.height() / 2))
        };
        let base = RgbImage::new(8, 6);
        let out = halve.process(&base, &record()).unwrap();
        assert_eq!(out.dimensions(), (4, 3));
    }

    #[test]
    fn test_closure_processor_error_is_returned() {
        let mut failing =
            |_: &RgbImage, _: &ImageRecord| -> anyhow::Result<RgbImage> { anyhow::bail!("boom") };
        let err = failing.process(&RgbImage::new(1, 1), &record()).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
