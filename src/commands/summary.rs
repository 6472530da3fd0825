//! Homepage summary - what the landing page surfaces

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::DateOrPresent;
use crate::helpers::{date, list};
use crate::Folio;

/// Print the homepage selection in render order: intro paragraphs, the
/// newest posts and work entries up to the configured counts, and the
/// social links.
pub fn run(folio: &Folio) -> Result<()> {
    let loader = ContentLoader::new(folio);
    let posts = loader.load_blog()?;
    let works = loader.load_work()?;

    let constants = &folio.constants;

    println!("{} <{}>", constants.site.name, constants.site.email);
    println!();
    for paragraph in &constants.intro {
        println!("{}", paragraph);
        println!();
    }

    println!("Latest posts:");
    for post in list::recent(&posts, constants.site.num_posts_on_homepage) {
        println!("  {} - {}", date::format(&post.date), post.title);
    }
    println!();

    println!("Recent work:");
    for work in list::recent(&works, constants.site.num_works_on_homepage) {
        let end = match work.date_end {
            DateOrPresent::Date(d) => date::month_year(&d),
            DateOrPresent::Present => "Present".to_string(),
        };
        println!(
            "  {} - {}  {}, {}",
            date::month_year(&work.date_start),
            end,
            work.role,
            work.company
        );
    }
    println!();

    println!("Elsewhere:");
    for link in &constants.socials {
        println!("  {}: {}", link.kind.label(), link.href);
    }

    Ok(())
}
