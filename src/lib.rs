//! folio-rs: the content layer for a personal portfolio and blog site
//!
//! This crate validates typed content collections (blog posts and work
//! history) against per-collection schemas and exposes the site
//! constants that drive page rendering.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site constants
    pub constants: config::SiteConstants,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let constants = config::SiteConstants::new()?;
        let content_dir = base_dir.join(config::CONTENT_DIR);

        Ok(Self {
            constants,
            base_dir,
            content_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Validate every content collection
    pub fn check(&self) -> Result<()> {
        commands::check::run(self)
    }

    /// Create a new entry in a collection
    pub fn new_entry(&self, collection: &str, title: &str) -> Result<()> {
        commands::new::create_entry(self, collection, title)
    }
}
