// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the panels.

pub mod button;
pub mod container;
