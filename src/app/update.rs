// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler receives only the state it touches so it can be tested
//! without building the whole application.

use super::Message;
use crate::controller::ViewController;
use crate::domain::catalog::RESUME;
use crate::domain::{Panel, Section};
use crate::error::{Error, Result};
use crate::media::{load_image, AssetStore, ImageData};
use crate::timing::Clock;
use crate::ui::notifications::{self, Notification};
use crate::ui::panels;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Context for panel interactions.
pub struct PanelContext<'a, C: Clock> {
    pub controller: &'a mut ViewController<C>,
    pub assets: &'a mut AssetStore,
}

pub fn handle_panel_message<C: Clock>(
    ctx: PanelContext<'_, C>,
    message: panels::Message,
) -> Task<Message> {
    match message {
        panels::Message::Hover(target) => {
            ctx.controller.hover_icon(target);
            Task::none()
        }
        panels::Message::Unhover => {
            ctx.controller.unhover_icon();
            Task::none()
        }
        panels::Message::Navigate(section) => {
            ctx.controller.navigate_to(section);
            preload_panel(ctx.assets, section.panel())
        }
        panels::Message::GoHome => {
            ctx.controller.go_home();
            preload_panel(ctx.assets, Section::Home.panel())
        }
        panels::Message::DownloadResume => Task::perform(
            pick_resume_destination(),
            Message::ResumeSaveDialogResult,
        ),
    }
}

/// Starts background loads for every image of `panel` not yet cached.
pub fn preload_panel(assets: &mut AssetStore, panel: Panel) -> Task<Message> {
    let missing = assets.request(panels::asset_paths(panel));
    if missing.is_empty() {
        return Task::none();
    }
    Task::batch(missing.into_iter().map(|(relative, path)| {
        Task::perform(load_in_background(path), move |result| {
            Message::AssetLoaded {
                path: relative,
                result,
            }
        })
    }))
}

async fn load_in_background(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(path))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

pub fn handle_asset_loaded(
    assets: &mut AssetStore,
    path: String,
    result: Result<ImageData>,
) -> Task<Message> {
    assets.complete(path, result);
    Task::none()
}

/// Fires due controller timers and expires toasts.
pub fn handle_tick<C: Clock>(
    controller: &mut ViewController<C>,
    notifications: &mut notifications::Manager,
    now: Instant,
) -> Task<Message> {
    let report = controller.tick();
    if report.disposed > 0 {
        tracing::trace!(disposed = report.disposed, "transition overlays removed");
    }
    notifications.tick(now);
    Task::none()
}

async fn pick_resume_destination() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_file_name(RESUME.file_name)
        .add_filter("PDF", &["pdf"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Copies the resume from the asset store to `destination`.
pub async fn copy_resume(source: PathBuf, destination: PathBuf) -> Result<PathBuf> {
    tokio::fs::copy(&source, &destination).await?;
    Ok(destination)
}

pub fn handle_resume_destination(
    assets: &AssetStore,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        tracing::debug!("resume save dialog cancelled");
        return Task::none();
    };
    let source = assets.resolve(RESUME.path);
    Task::perform(copy_resume(source, destination), Message::ResumeSaved)
}

pub fn handle_resume_saved(
    notifications: &mut notifications::Manager,
    result: Result<PathBuf>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "resume saved");
            notifications.push(
                Notification::success("notification-resume-saved")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "resume could not be saved");
            notifications.push(Notification::error("notification-resume-save-error"));
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HoverTarget;
    use crate::timing::ManualClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::tempdir;

    fn controller() -> (ViewController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (
            ViewController::with_rng(clock.clone(), StdRng::seed_from_u64(1)),
            clock,
        )
    }

    #[test]
    fn hover_messages_drive_controller() {
        let (mut controller, _) = controller();
        let mut assets = AssetStore::new("/portfolio");
        let _ = handle_panel_message(
            PanelContext {
                controller: &mut controller,
                assets: &mut assets,
            },
            panels::Message::Hover(HoverTarget::Drawings),
        );
        assert_eq!(controller.hovered_icon(), HoverTarget::Drawings);

        let _ = handle_panel_message(
            PanelContext {
                controller: &mut controller,
                assets: &mut assets,
            },
            panels::Message::Unhover,
        );
        assert_eq!(controller.hovered_icon(), HoverTarget::Default);
    }

    #[test]
    fn navigate_marks_panel_assets_pending() {
        let (mut controller, _) = controller();
        let mut assets = AssetStore::new("/portfolio");
        let _ = handle_panel_message(
            PanelContext {
                controller: &mut controller,
                assets: &mut assets,
            },
            panels::Message::Navigate(Section::Movies),
        );
        assert!(controller.has_pending_work());
        assert_eq!(assets.len(), panels::asset_paths(Panel::Movies).len());
    }

    #[test]
    fn tick_commits_after_delay() {
        let (mut controller, clock) = controller();
        let mut manager = notifications::Manager::new();
        controller.navigate_to(Section::Music);
        clock.advance(crate::config::SECTION_COMMIT_DELAY);
        let _ = handle_tick(&mut controller, &mut manager, clock.now());
        assert_eq!(controller.current_section(), Section::Music);
    }

    #[test]
    fn resume_saved_pushes_matching_toast() {
        let mut manager = notifications::Manager::new();
        let _ = handle_resume_saved(&mut manager, Ok(PathBuf::from("/tmp/resume.pdf")));
        let _ = handle_resume_saved(&mut manager, Err(Error::Io("denied".into())));
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert!(keys.contains(&"notification-resume-saved"));
        assert!(keys.contains(&"notification-resume-save-error"));
    }

    #[tokio::test]
    async fn copy_resume_writes_destination() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join(RESUME.path);
        fs::write(&source, b"%PDF-1.4").unwrap();
        let destination = temp_dir.path().join("out.pdf");

        let saved = copy_resume(source, destination.clone()).await.unwrap();
        assert_eq!(saved, destination);
        assert_eq!(fs::read(&destination).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn copy_missing_resume_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = copy_resume(
            temp_dir.path().join("missing.pdf"),
            temp_dir.path().join("out.pdf"),
        )
        .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
