// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with no GUI dependencies.
//!
//! # Modules
//!
//! - [`section`]: [`Section`](section::Section), [`HoverTarget`](section::HoverTarget),
//!   [`Panel`](section::Panel) and [`BackdropClass`](section::BackdropClass)
//! - [`catalog`]: static portfolio content (movies, drawings, albums, resume)

pub mod catalog;
pub mod section;

pub use section::{BackdropClass, HoverTarget, Panel, Section};
