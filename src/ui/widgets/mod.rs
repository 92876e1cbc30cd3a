// SPDX-License-Identifier: MPL-2.0
pub mod bubble_burst;

pub use bubble_burst::BubbleBurst;
