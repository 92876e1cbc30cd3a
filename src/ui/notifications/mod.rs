// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts report the outcome of background work the user asked for (saving
//! the resume) and configuration problems found at startup. They never block
//! interaction and never touch view state.
//!
//! - [`Notification`] carries a severity and an i18n key resolved at render time
//! - [`Manager`] queues notifications and expires them on tick
//! - [`Toast`] renders the visible stack in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
