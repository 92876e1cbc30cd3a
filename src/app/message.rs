// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::Section;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::notifications;
use crate::ui::panels;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(panels::Message),
    Notification(notifications::NotificationMessage),
    /// Animation tick; fires due timers and expires toasts.
    Tick(Instant),
    AssetLoaded {
        path: String,
        result: Result<ImageData, Error>,
    },
    ResumeSaveDialogResult(Option<PathBuf>),
    ResumeSaved(Result<PathBuf, Error>),
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Section shown at startup, committed without a transition.
    pub start_section: Option<Section>,
}
