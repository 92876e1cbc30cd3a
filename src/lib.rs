// SPDX-License-Identifier: MPL-2.0
//! `folio` is a personal portfolio viewer built with the Iced GUI framework.
//!
//! A home view swaps the profile photo as the pointer moves over four
//! navigation icons; each icon opens a static panel (movies, drawings,
//! resume, music). Section changes play a bubble burst and commit after a
//! short delay, driven by the [`controller::ViewController`].

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod media;
pub mod timing;
pub mod transition;
pub mod ui;
