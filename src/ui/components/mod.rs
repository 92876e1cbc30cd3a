// SPDX-License-Identifier: MPL-2.0
//! Reusable pieces shared by the panels.
//!
//! - [`asset_image`] - Catalog image with a text placeholder fallback
//! - [`back_button`] - "Back to Home" button shown on every content panel

pub mod asset_image;
pub mod back_button;
