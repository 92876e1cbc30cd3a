// SPDX-License-Identifier: MPL-2.0
//! User interface: panels, backdrop, overlays and shared styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: panels read
//! a [`panels::ViewContext`] and emit [`panels::Message`]s.
//!
//! - [`panels`] - The five section panels
//! - [`backdrop`] - Root style and per-section backgrounds
//! - [`widgets`] - Bubble burst canvas
//! - [`components`] - Image slot with placeholder, back button
//! - [`notifications`] - Toasts
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode

pub mod backdrop;
pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod panels;
pub mod styles;
pub mod theming;
pub mod widgets;
