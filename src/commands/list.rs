//! List site content

use anyhow::Result;
use clap::ValueEnum;

use crate::content::loader::ContentLoader;
use crate::content::DateOrPresent;
use crate::helpers::date;
use crate::Folio;

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, format: OutputFormat) -> Result<()> {
    let loader = ContentLoader::new(folio);

    match content_type {
        "blog" | "posts" => {
            let posts = loader.load_blog()?;
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("Blog ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    date::format(&post.date),
                    post.title,
                    post.source
                );
            }
        }
        "work" | "works" => {
            let works = loader.load_work()?;
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&works)?);
                return Ok(());
            }
            println!("Work ({}):", works.len());
            for work in works {
                println!(
                    "  {} - {}  {}, {} [{}]",
                    date::month_year(&work.date_start),
                    span_end(&work.date_end),
                    work.role,
                    work.company,
                    work.source
                );
            }
        }
        "socials" => {
            let socials = &folio.constants.socials;
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(socials)?);
                return Ok(());
            }
            println!("Socials ({}):", socials.len());
            for link in socials {
                println!("  {} -> {}", link.kind.label(), link.href);
            }
        }
        "pages" => {
            let constants = &folio.constants;
            let pages = [
                ("home", &constants.home),
                ("blog", &constants.blog),
                ("work", &constants.work),
                ("projects", &constants.projects),
            ];
            if format == OutputFormat::Json {
                let value = serde_json::json!({
                    "home": &constants.home,
                    "blog": &constants.blog,
                    "work": &constants.work,
                    "projects": &constants.projects,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }
            println!("Pages ({}):", pages.len());
            for (name, page) in pages {
                println!("  {:<9} {} - {}", name, page.title, page.description);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: blog, work, socials, pages",
                content_type
            );
        }
    }

    Ok(())
}

/// Month-year for a closed span, the sentinel otherwise
fn span_end(end: &DateOrPresent) -> String {
    match end {
        DateOrPresent::Date(d) => date::month_year(d),
        DateOrPresent::Present => "Present".to_string(),
    }
}
