// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_TICK;
use iced::{event, time, window, Subscription};

/// Routes window close requests so the backdrop can be cleared first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Whether anything on screen still changes with time.
pub fn needs_tick(has_pending_work: bool, has_notifications: bool) -> bool {
    has_pending_work || has_notifications
}

/// Periodic tick, only while `active`.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
