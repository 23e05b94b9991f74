//! The process-wide content snapshot.
//!
//! Requests clone an `Arc` of the current model when they start and read it
//! to completion. Reload builds a complete new model first and only then
//! swaps the pointer, so a failed load leaves the previous model in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use log::{info, warn};
use supermind_foundation::{Error, ErrorContext, Result};

use crate::model::ContentModel;
use crate::raw::RawContent;
use crate::validate::ValidationReport;

/// Something content can be loaded from.
pub trait ContentSource {
    /// Human-readable description, e.g. a file path.
    fn describe(&self) -> String;

    /// Loads and builds a complete content model.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or any table fails to build.
    fn load(&self) -> Result<ContentModel>;
}

/// A JSON content document on disk.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ContentSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ContentModel> {
        let context = || ErrorContext::new().with_source(self.describe());
        let json = fs::read_to_string(&self.path).map_err(|e| {
            Error::io(format!("failed to read '{}': {e}", self.path.display()))
                .with_context(context())
        })?;
        RawContent::from_json_str(&json)
            .and_then(RawContent::into_model)
            .map_err(|e| e.with_context(context()))
    }
}

/// A JSON document held in memory.
#[derive(Clone, Debug)]
pub struct StaticSource {
    name: String,
    json: String,
}

impl StaticSource {
    /// Creates a source from an in-memory document.
    #[must_use]
    pub fn new(name: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json: json.into(),
        }
    }
}

impl ContentSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<ContentModel> {
        RawContent::from_json_str(&self.json).and_then(RawContent::into_model)
    }
}

/// What a successful reload reports back.
#[derive(Clone, Debug)]
pub struct ReloadReport {
    /// Generation now active.
    pub generation: u64,
    /// Summary of the loaded content.
    pub status: String,
    /// Consistency problems in the new content.
    pub validation: ValidationReport,
}

/// Holds the active content model and swaps it atomically on reload.
#[derive(Debug)]
pub struct ContentHandle {
    current: RwLock<Arc<ContentModel>>,
    generation: AtomicU64,
}

impl ContentHandle {
    /// Creates a handle serving `model` as generation 1.
    #[must_use]
    pub fn new(model: ContentModel) -> Self {
        Self {
            current: RwLock::new(Arc::new(model)),
            generation: AtomicU64::new(1),
        }
    }

    /// Loads the initial model from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    pub fn load(source: &dyn ContentSource) -> Result<Self> {
        let model = source.load()?;
        info!("CONTENT_LOAD\t{}\t{}", source.describe(), model.status());
        Ok(Self::new(model))
    }

    /// The model requests should read. Cheap: clones an `Arc`.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ContentModel> {
        // The guarded value is a single Arc, which cannot be left half-written.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Number of models served so far, starting at 1.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Replaces the active model with a freshly loaded one.
    ///
    /// # Errors
    ///
    /// Returns the load error; the previous model stays active.
    pub fn reload(&self, source: &dyn ContentSource) -> Result<ReloadReport> {
        let model = match source.load() {
            Ok(model) => model,
            Err(e) => {
                warn!("CONTENT_RELOAD\tfailed\t{}\t{e}", source.describe());
                return Err(e);
            }
        };
        Ok(self.install(model))
    }

    /// Swaps in an already-built model.
    pub fn install(&self, model: ContentModel) -> ReloadReport {
        let status = model.status();
        let validation = model.validate();
        {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *guard = Arc::new(model);
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!("CONTENT_RELOAD\tgeneration {generation}\t{status}");
        if !validation.is_clean() {
            warn!("CONTENT_RELOAD\t{} problems\n{validation}", validation.problem_count());
        }
        ReloadReport {
            generation,
            status,
            validation,
        }
    }
}
