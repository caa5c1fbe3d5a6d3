//! Overlay rendering using tiny-skia
//!
//! Outlines are drawn onto a copy of the source image; the source buffer is
//! left untouched so it can be handed to the processing slot afterwards.

use image::RgbImage;
use tiny_skia::{IntSize, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::{class_rgb, outline, pixel_center};
use crate::config::GeometryPolicy;
use crate::domain::{Annotation, Polygon};
use crate::error::ViewerError;

/// Copy an RgbImage into an opaque Pixmap, apply drawing function, and copy back
fn with_pixmap(img: &mut RgbImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = (img.width(), img.height());
    let Some(size) = IntSize::from_wh(w, h) else {
        return;
    };

    let rgba: Vec<u8> = img
        .as_raw()
        .chunks_exact(3)
        .flat_map(|px| [px[0], px[1], px[2], 255])
        .collect();
    let Some(mut pixmap) = Pixmap::from_vec(rgba, size) else {
        return;
    };

    f(&mut pixmap);

    // Opaque destination stays opaque under source-over, so no demultiply
    for (dst, src) in img.chunks_exact_mut(3).zip(pixmap.data().chunks_exact(4)) {
        dst.copy_from_slice(&src[..3]);
    }
}

/// Build a closed outline path through the polygon's vertices
fn build_polygon_path(polygon: &Polygon) -> Option<tiny_skia::Path> {
    let (first, rest) = polygon.points().split_first()?;

    let mut pb = PathBuilder::new();
    let (x, y) = pixel_center(*first);
    pb.move_to(x, y);
    for point in rest {
        let (x, y) = pixel_center(*point);
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

/// Render annotation outlines over a copy of `base`.
///
/// Annotations are drawn in order, so later outlines cover earlier ones.
/// Degenerate polygons (fewer than three points) are skipped silently.
/// Malformed segmentations fail the render under [`GeometryPolicy::Abort`]
/// and are skipped with a warning under [`GeometryPolicy::Skip`].
pub fn render_overlay(
    base: &RgbImage,
    annotations: &[Annotation],
    policy: GeometryPolicy,
) -> Result<RgbImage, ViewerError> {
    let mut outlines = Vec::with_capacity(annotations.len());
    for (i, annotation) in annotations.iter().enumerate() {
        let polygon = match annotation.polygon() {
            Ok(polygon) => polygon,
            Err(err) if policy == GeometryPolicy::Skip => {
                log::warn!("Skipping annotation {} ({}): {}", i, annotation.class_label, err);
                continue;
            }
            Err(err) => return Err(err),
        };
        if polygon.is_degenerate() {
            log::trace!("Skipping degenerate annotation {} ({} points)", i, polygon.len());
            continue;
        }
        outlines.push((polygon, class_rgb(annotation.class_color())));
    }

    let mut out = base.clone();
    if outlines.is_empty() {
        return Ok(out);
    }

    with_pixmap(&mut out, |pixmap| {
        let stroke = outline_stroke();
        for (polygon, [r, g, b]) in &outlines {
            let Some(path) = build_polygon_path(polygon) else {
                continue;
            };
            let mut paint = Paint::default();
            paint.set_color_rgba8(*r, *g, *b, 255);
            paint.anti_alias = true;
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    });

    Ok(out)
}

/// Outlines are always closed, so only the join style matters
fn outline_stroke() -> Stroke {
    Stroke {
        width: outline::THICKNESS,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}
