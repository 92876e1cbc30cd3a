// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized from the embedded branding SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/folio.svg");

/// Edge length of the rasterized icon.
pub const ICON_SIZE: u32 = 128;

/// RGBA pixels of the window icon, or `None` if the SVG cannot be rendered.
#[must_use]
pub fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default())
        .inspect_err(|err| tracing::warn!(error = %err, "window icon SVG is invalid"))
        .ok()?;

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / orig_size.width(),
        size as f32 / orig_size.height(),
    );
    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.data().to_vec())
}

pub fn load_window_icon() -> Option<Icon> {
    let pixels = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixels, ICON_SIZE, ICON_SIZE).ok()
}
