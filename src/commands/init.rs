//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::helpers::date;
use crate::Folio;

/// Initialize content directories and starter entries in the given
/// directory. Existing files are left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content/blog"))?;
    fs::create_dir_all(target_dir.join("content/work"))?;

    let today = chrono::Local::now().date_naive();

    let post_path = target_dir.join("content/blog/hello-world.md");
    if !post_path.exists() {
        let post = format!(
            "---\n\
             title: Hello World\n\
             description: The first post on this site\n\
             date: {}\n\
             ---\n\
             \n\
             Welcome to the blog.\n",
            date::format(&today)
        );
        fs::write(&post_path, post)?;
        tracing::debug!("wrote {:?}", post_path);
    }

    let work_path = target_dir.join("content/work/example-co.md");
    if !work_path.exists() {
        let entry = format!(
            "---\n\
             company: Example Co\n\
             role: Software Engineer\n\
             dateStart: {}\n\
             dateEnd: Present\n\
             ---\n\
             \n\
             - Describe what you did here\n",
            date::format(&today)
        );
        fs::write(&work_path, entry)?;
        tracing::debug!("wrote {:?}", work_path);
    }

    Ok(())
}

/// Run the init command against the app's base directory
pub fn run(folio: &Folio) -> Result<()> {
    init_site(&folio.base_dir)
}
