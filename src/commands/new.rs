//! Create a new collection entry

use anyhow::Result;
use std::fs;

use crate::content::FrontMatter;
use crate::helpers::date;
use crate::Folio;

/// Scaffold a new entry file in the given collection.
///
/// Blog entries get today's date; work entries start today and run to
/// `Present`. The file name is the slugified title.
pub fn create_entry(folio: &Folio, collection: &str, title: &str) -> Result<()> {
    let today = chrono::Local::now().date_naive();

    let mut fm = FrontMatter::default();
    let body = match collection {
        "blog" => {
            fm.insert("title", title);
            fm.insert("description", "A short description of the post");
            fm.insert("date", date::format(&today));
            "Write the post here.\n"
        }
        "work" => {
            fm.insert("company", title);
            fm.insert("role", "Role title");
            fm.insert("dateStart", date::format(&today));
            fm.insert("dateEnd", "Present");
            "- What you achieved there\n"
        }
        other => {
            anyhow::bail!("Unknown collection: {}. Available: blog, work", other);
        }
    };

    let target_dir = folio.content_dir.join(collection);
    fs::create_dir_all(&target_dir)?;

    let slug = slug::slugify(title);
    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("{}\n{}", fm.to_header(), body))?;
    println!("Created: {:?}", file_path);

    Ok(())
}
