//! Content loader - discovers and validates collection entries

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{BlogEntry, FrontMatter, WorkEntry};
use crate::helpers::list;
use crate::Folio;

/// Discovers content files and turns them into validated entries.
///
/// An invalid file aborts the load with a diagnostic naming the file and
/// field; entries are never skipped or partially loaded, so a bad file
/// fails the build instead of silently dropping content.
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load all blog entries, newest first
    pub fn load_blog(&self) -> Result<Vec<BlogEntry>> {
        let mut entries = Vec::new();

        for path in self.collection_files("blog") {
            let source = self.source_id(&path);
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", source))?;
            let (raw, body) = FrontMatter::parse(&content)
                .with_context(|| format!("{}: bad front-matter header", source))?;
            entries.push(BlogEntry::from_frontmatter(&source, &raw, body)?);
        }

        // Stable sort: posts sharing a date keep file declaration order
        list::sort_newest_first(&mut entries);

        tracing::debug!("loaded {} blog entries", entries.len());
        Ok(entries)
    }

    /// Load all work entries, most recent engagement first
    pub fn load_work(&self) -> Result<Vec<WorkEntry>> {
        let mut entries = Vec::new();

        for path in self.collection_files("work") {
            let source = self.source_id(&path);
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", source))?;
            let (raw, body) = FrontMatter::parse(&content)
                .with_context(|| format!("{}: bad front-matter header", source))?;
            entries.push(WorkEntry::from_frontmatter(&source, &raw, body)?);
        }

        list::sort_newest_first(&mut entries);

        tracing::debug!("loaded {} work entries", entries.len());
        Ok(entries)
    }

    /// Markdown files of one collection, file-name sorted so that
    /// declaration order is deterministic across runs
    fn collection_files(&self, collection: &str) -> Vec<PathBuf> {
        let dir = self.folio.content_dir.join(collection);
        if !dir.exists() {
            return Vec::new();
        }

        WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_markdown_file(e.path()))
            .map(|e| e.into_path())
            .collect()
    }

    /// Path relative to the content dir, used in diagnostics
    fn source_id(&self, path: &Path) -> String {
        path.strip_prefix(&self.folio.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::date;

    fn post(title: &str, date: &str) -> String {
        format!("---\ntitle: {title}\ndescription: A post\ndate: {date}\n---\n\nBody.\n")
    }

    fn engagement(company: &str, start: &str, end: &str) -> String {
        format!(
            "---\ncompany: {company}\nrole: Engineer\ndateStart: {start}\ndateEnd: {end}\n---\n\n- Did things\n"
        )
    }

    fn site(blog: &[(&str, String)], work: &[(&str, String)]) -> (tempfile::TempDir, Folio) {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        fs::create_dir_all(folio.content_dir.join("blog")).unwrap();
        fs::create_dir_all(folio.content_dir.join("work")).unwrap();
        for (name, contents) in blog {
            fs::write(folio.content_dir.join("blog").join(name), contents).unwrap();
        }
        for (name, contents) in work {
            fs::write(folio.content_dir.join("work").join(name), contents).unwrap();
        }
        (dir, folio)
    }

    #[test]
    fn test_blog_entries_sorted_newest_first() {
        let (_tmp, folio) = site(
            &[
                ("a.md", post("Second", "10/10/2024")),
                ("b.md", post("First", "10/11/2024")),
                ("c.md", post("Third", "10/09/2024")),
            ],
            &[],
        );

        let posts = ContentLoader::new(&folio).load_blog().unwrap();
        let dates: Vec<String> = posts.iter().map(|p| date::format(&p.date)).collect();
        assert_eq!(dates, ["10/11/2024", "10/10/2024", "10/09/2024"]);

        // homepage selection takes all three when the count allows it
        let n = folio.constants.site.num_posts_on_homepage;
        assert_eq!(list::recent(&posts, n).len(), 3.min(n));
    }

    #[test]
    fn test_equal_dates_keep_file_order() {
        let (_tmp, folio) = site(
            &[
                ("aa.md", post("Earlier file", "05/01/2024")),
                ("bb.md", post("Later file", "05/01/2024")),
            ],
            &[],
        );

        let posts = ContentLoader::new(&folio).load_blog().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Earlier file", "Later file"]);
    }

    #[test]
    fn test_invalid_file_aborts_the_load() {
        let bad = "---\ntitle: No description\ndate: 10/10/2024\n---\nBody\n";
        let (_tmp, folio) = site(
            &[
                ("good.md", post("Fine", "10/11/2024")),
                ("bad.md", bad.to_string()),
            ],
            &[],
        );

        let err = ContentLoader::new(&folio).load_blog().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bad.md"), "got: {message}");
        assert!(message.contains("description"), "got: {message}");
    }

    #[test]
    fn test_work_entries_sorted_by_start_date() {
        let (_tmp, folio) = site(
            &[],
            &[
                ("acme.md", engagement("Acme", "06/01/2021", "03/31/2023")),
                ("globex.md", engagement("Globex", "04/01/2023", "Present")),
            ],
        );

        let works = ContentLoader::new(&folio).load_work().unwrap();
        let companies: Vec<_> = works.iter().map(|w| w.company.as_str()).collect();
        assert_eq!(companies, ["Globex", "Acme"]);
        assert_eq!(works[0].date_end, crate::content::DateOrPresent::Present);
    }

    #[test]
    fn test_missing_collection_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let posts = ContentLoader::new(&folio).load_blog().unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_non_markdown_files_are_ignored() {
        let (_tmp, folio) = site(&[("post.md", post("Only one", "01/01/2024"))], &[]);
        fs::write(folio.content_dir.join("blog/notes.txt"), "not content").unwrap();

        let posts = ContentLoader::new(&folio).load_blog().unwrap();
        assert_eq!(posts.len(), 1);
    }
}
