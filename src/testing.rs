//! Windowless doubles for driving the viewer in tests

use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use image::{Rgb, RgbImage};

use crate::domain::{Annotation, Dataset, ImageRecord};
use crate::error::ViewerError;
use crate::source::ImageSource;
use crate::surface::{DisplaySurface, Pane};

pub const IMAGE_SIZE: u32 = 64;

/// In-memory image source counting every decode
#[derive(Default)]
pub struct MemorySource {
    images: HashMap<String, RgbImage>,
    pub loads: Rc<Cell<usize>>,
}

impl MemorySource {
    pub fn insert(&mut self, file_name: &str, image: RgbImage) {
        self.images.insert(file_name.to_string(), image);
    }
}

impl ImageSource for MemorySource {
    fn load(&self, file_name: &str) -> Result<RgbImage, ViewerError> {
        self.loads.set(self.loads.get() + 1);
        self.images
            .get(file_name)
            .cloned()
            .ok_or_else(|| ViewerError::ImageNotFound {
                path: PathBuf::from(file_name),
            })
    }
}

/// Surface that keeps whatever the viewer last pushed to it
#[derive(Default)]
pub struct RecordingSurface {
    pub panes: [Option<RgbImage>; 2],
    pub titles: [String; 2],
    pub textbox: String,
    pub clears: usize,
    pub redraws: usize,
    pub focused: bool,
    pub closed: bool,
}

impl RecordingSurface {
    pub fn pane(&self, pane: Pane) -> &RgbImage {
        self.panes[pane.index()]
            .as_ref()
            .expect("pane has not been drawn")
    }

    pub fn title(&self, pane: Pane) -> &str {
        &self.titles[pane.index()]
    }
}

impl DisplaySurface for RecordingSurface {
    fn clear_pane(&mut self, pane: Pane) {
        self.clears += 1;
        self.panes[pane.index()] = None;
        self.titles[pane.index()].clear();
    }

    fn draw_image(&mut self, pane: Pane, image: RgbImage) {
        self.panes[pane.index()] = Some(image);
    }

    fn set_pane_title(&mut self, pane: Pane, title: &str) {
        self.titles[pane.index()] = title.to_string();
    }

    fn set_textbox_value(&mut self, value: &str) {
        self.textbox = value.to_string();
    }

    fn textbox_value(&self) -> String {
        self.textbox.clone()
    }

    fn focus_textbox(&mut self) {
        self.focused = true;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

pub fn file_name(index: usize) -> String {
    format!("img{index}.png")
}

/// Solid background color identifying image `index`
pub fn background(index: usize) -> Rgb<u8> {
    Rgb([(index * 40 % 200) as u8 + 20, 90, 60])
}

/// `count` images without annotations, each with its own background color
pub fn plain_dataset(count: usize) -> (Dataset, MemorySource) {
    let records = (0..count)
        .map(|i| ImageRecord::new(file_name(i), Vec::new()))
        .collect();
    (Dataset::new(records), source_for(count))
}

pub fn source_for(count: usize) -> MemorySource {
    let mut source = MemorySource::default();
    for i in 0..count {
        source.insert(
            &file_name(i),
            RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, background(i)),
        );
    }
    source
}

pub fn triangle(class: &str, a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Annotation {
    Annotation::new(
        class,
        [a.0, a.1, b.0, b.1, c.0, c.1]
            .into_iter()
            .map(f64::from)
            .collect(),
    )
}

/// Assert a pixel matches `expected` up to anti-aliasing rounding
pub fn assert_color(img: &RgbImage, x: u32, y: u32, expected: [u8; 3]) {
    let px = img.get_pixel(x, y).0;
    let close = px.iter().zip(expected).all(|(a, b)| a.abs_diff(b) <= 8);
    assert!(close, "pixel ({x}, {y}) is {px:?}, expected {expected:?}");
}
