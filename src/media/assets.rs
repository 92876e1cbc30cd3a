// SPDX-License-Identifier: MPL-2.0
//! Asset store for portfolio images.
//!
//! Catalog paths are resolved against the asset root and decoded off the
//! update loop. A failed load is recorded as [`AssetState::Failed`]; callers
//! render a text placeholder instead and never see the error.

use super::image::{load_image, ImageData};
use crate::config::ASSET_CACHE_CAPACITY;
use crate::error::Result;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Load state of one asset.
#[derive(Debug, Clone)]
pub enum AssetState {
    /// A load has been requested and has not completed.
    Pending,
    Loaded(ImageData),
    /// The asset is missing or could not be decoded.
    Failed,
}

/// What to draw for an asset slot.
#[derive(Debug, Clone)]
pub enum AssetContent {
    Image(iced::widget::image::Handle),
    Placeholder(String),
    Loading,
}

impl AssetContent {
    /// Chooses between the decoded image and the placeholder text.
    ///
    /// Unknown assets render as [`AssetContent::Loading`].
    pub fn resolve(state: Option<&AssetState>, placeholder: impl Into<String>) -> Self {
        match state {
            Some(AssetState::Loaded(data)) => AssetContent::Image(data.handle.clone()),
            Some(AssetState::Failed) => AssetContent::Placeholder(placeholder.into()),
            Some(AssetState::Pending) | None => AssetContent::Loading,
        }
    }

    /// Placeholder text, if this slot shows one.
    #[must_use]
    pub fn placeholder_text(&self) -> Option<&str> {
        match self {
            AssetContent::Placeholder(text) => Some(text),
            _ => None,
        }
    }
}

/// Decoded images keyed by catalog-relative path.
#[derive(Debug)]
pub struct AssetStore {
    root: PathBuf,
    cache: LruCache<String, AssetState>,
}

impl AssetStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_capacity(root, ASSET_CACHE_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(root: impl Into<PathBuf>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            root: root.into(),
            cache: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (or root-relative) location of a catalog path.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Current state of an asset, without touching recency.
    #[must_use]
    pub fn state(&self, relative: &str) -> Option<&AssetState> {
        self.cache.peek(relative)
    }

    /// Marks every path that is not cached as pending and returns the paths
    /// that need loading, each paired with its location on disk.
    pub fn request<'a, I>(&mut self, paths: I) -> Vec<(String, PathBuf)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing = Vec::new();
        for relative in paths {
            if self.cache.get(relative).is_some() {
                continue;
            }
            self.cache.put(relative.to_string(), AssetState::Pending);
            missing.push((relative.to_string(), self.resolve(relative)));
        }
        missing
    }

    /// Records the outcome of a load. Failures are logged and stored as
    /// [`AssetState::Failed`].
    pub fn complete(&mut self, relative: String, result: Result<ImageData>) {
        let state = match result {
            Ok(data) => {
                tracing::debug!(asset = %relative, width = data.width, height = data.height, "asset loaded");
                AssetState::Loaded(data)
            }
            Err(err) => {
                tracing::warn!(asset = %relative, error = %err, "asset unavailable, showing placeholder");
                AssetState::Failed
            }
        };
        self.cache.put(relative, state);
    }

    /// Returns the cached state, decoding the asset synchronously when it
    /// is unknown or still pending.
    pub fn get(&mut self, relative: &str) -> &AssetState {
        let cached = matches!(
            self.cache.get(relative),
            Some(AssetState::Loaded(_) | AssetState::Failed)
        );
        if !cached {
            let result = load_image(self.resolve(relative));
            self.complete(relative.to_string(), result);
        }
        self.cache.peek(relative).unwrap_or(&AssetState::Failed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
