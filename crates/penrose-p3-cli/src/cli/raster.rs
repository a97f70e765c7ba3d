//! PNG rasterization and autocropping via resvg.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use resvg::usvg;
use tiny_skia::Pixmap;

/// Error type for rasterization.
#[derive(Debug)]
pub enum RenderError {
    Parse(String),
    Pixmap(u32, u32),
    Buffer,
    Save(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Parse(msg) => write!(f, "SVG parse error: {}", msg),
            RenderError::Pixmap(w, h) => write!(f, "could not create {}x{} pixmap", w, h),
            RenderError::Buffer => write!(f, "pixmap size does not match image buffer"),
            RenderError::Save(msg) => write!(f, "could not write PNG: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Render `svg` so that its longest side is `size` pixels.
///
/// The background stays transparent so that [`autocrop`] can find the
/// figure afterwards.
pub fn rasterize(svg: &str, size: u32) -> Result<RgbaImage, RenderError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Parse(e.to_string()))?;

    let tree_size = tree.size();
    let scale = size as f32 / tree_size.width().max(tree_size.height());
    let width = ((tree_size.width() * scale).round() as u32).max(1);
    let height = ((tree_size.height() * scale).round() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Pixmap(width, height))?;
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(width, height, data).ok_or(RenderError::Buffer)
}

/// Bounding box (x, y, width, height) of the non-transparent pixels.
pub fn opaque_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Trim fully transparent margins. A blank image is returned unchanged.
pub fn autocrop(image: &RgbaImage) -> RgbaImage {
    match opaque_bounds(image) {
        Some((x, y, w, h)) => image::imageops::crop_imm(image, x, y, w, h).to_image(),
        None => image.clone(),
    }
}

pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), RenderError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| RenderError::Save(e.to_string()))
}
