//! Validate all content collections

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Folio;

/// Load and validate every collection; any invalid file fails the run
/// with a diagnostic naming the file and field.
pub fn run(folio: &Folio) -> Result<()> {
    let loader = ContentLoader::new(folio);

    let posts = loader.load_blog()?;
    let works = loader.load_work()?;

    tracing::info!(
        "content check passed: {} blog, {} work",
        posts.len(),
        works.len()
    );
    println!(
        "OK: {} blog entries, {} work entries",
        posts.len(),
        works.len()
    );

    Ok(())
}
