// SPDX-License-Identifier: MPL-2.0
//! Portfolio media: image decoding and the asset store.

pub mod assets;
pub mod image;

pub use assets::{AssetContent, AssetState, AssetStore};
pub use image::{load_image, ImageData};
