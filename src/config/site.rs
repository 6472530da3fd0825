//! Site constants
//!
//! The whole constant set is authored in this file and compiled into the
//! binary; there is no runtime configuration file. `SiteConstants::new`
//! resolves and validates everything once, and the resulting value is
//! passed by reference into whatever consumes it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Directory holding the content collections, relative to the base dir
pub const CONTENT_DIR: &str = "content";

/// Errors raised while constructing or validating site constants
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown social link name `{0}`")]
    UnknownSocial(String),

    #[error("social link `{name}` has invalid href `{href}`")]
    InvalidHref { name: String, href: String },

    #[error("site email `{0}` is not a valid address")]
    InvalidEmail(String),
}

/// Site identity and homepage item counts
#[derive(Debug, Clone, Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub email: String,
    pub num_posts_on_homepage: usize,
    pub num_works_on_homepage: usize,
    pub num_projects_on_homepage: usize,
}

/// Title/description pair for one logical page
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Recognized social platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialKind {
    TwitterX,
    Github,
    Linkedin,
}

impl SocialKind {
    /// The kebab-case name used in the constants table
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialKind::TwitterX => "twitter-x",
            SocialKind::Github => "github",
            SocialKind::Linkedin => "linkedin",
        }
    }

    /// Human-readable label for listings
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::TwitterX => "Twitter",
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
        }
    }
}

impl FromStr for SocialKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter-x" => Ok(SocialKind::TwitterX),
            "github" => Ok(SocialKind::Github),
            "linkedin" => Ok(SocialKind::Linkedin),
            other => Err(ConfigError::UnknownSocial(other.to_string())),
        }
    }
}

impl fmt::Display for SocialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the ordered social link list
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

/// The full, immutable constant set driving page rendering
#[derive(Debug, Clone, Serialize)]
pub struct SiteConstants {
    pub site: SiteInfo,
    pub home: PageMetadata,
    pub blog: PageMetadata,
    pub work: PageMetadata,
    pub projects: PageMetadata,
    /// Rendered in declaration order
    pub socials: Vec<SocialLink>,
    /// Introductory paragraphs, in order
    pub intro: Vec<String>,
}

// Authoring surface: edit the values below and rebuild.

const SITE_NAME: &str = "Nathan Reyes";
const SITE_EMAIL: &str = "hello@nathanreyes.dev";
const NUM_POSTS_ON_HOMEPAGE: usize = 3;
const NUM_WORKS_ON_HOMEPAGE: usize = 2;
const NUM_PROJECTS_ON_HOMEPAGE: usize = 3;

const SOCIAL_ROWS: &[(&str, &str)] = &[
    ("twitter-x", "https://twitter.com/nathanreyes"),
    ("github", "https://github.com/nathanreyes"),
    ("linkedin", "https://www.linkedin.com/in/nathanreyes"),
];

const INTRO_PARAGRAPHS: &[&str] = &[
    "I am a software engineer who enjoys building small, sharp tools and \
     writing about what I learn along the way.",
    "During the day I work on backend systems; evenings are for open \
     source, long walks, and the occasional blog post.",
];

impl SiteConstants {
    /// Build and validate the constant set. Called once at startup.
    pub fn new() -> Result<Self, ConfigError> {
        let socials = SOCIAL_ROWS
            .iter()
            .map(|(name, href)| {
                let kind = name.parse::<SocialKind>()?;
                Ok(SocialLink {
                    kind,
                    href: (*href).to_string(),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let constants = Self {
            site: SiteInfo {
                name: SITE_NAME.to_string(),
                email: SITE_EMAIL.to_string(),
                num_posts_on_homepage: NUM_POSTS_ON_HOMEPAGE,
                num_works_on_homepage: NUM_WORKS_ON_HOMEPAGE,
                num_projects_on_homepage: NUM_PROJECTS_ON_HOMEPAGE,
            },
            home: PageMetadata {
                title: "Home".to_string(),
                description: "A personal portfolio and blog.".to_string(),
            },
            blog: PageMetadata {
                title: "Blog".to_string(),
                description: "Writing on software, tools, and whatever else sticks.".to_string(),
            },
            work: PageMetadata {
                title: "Work".to_string(),
                description: "Where I have worked and what I did there.".to_string(),
            },
            projects: PageMetadata {
                title: "Projects".to_string(),
                description: "A collection of my projects, with links to repositories and demos."
                    .to_string(),
            },
            socials,
            intro: INTRO_PARAGRAPHS.iter().map(|p| p.to_string()).collect(),
        };

        constants.validate()?;
        Ok(constants)
    }

    /// Check the invariants the type system does not cover
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.site.email.contains('@') {
            return Err(ConfigError::InvalidEmail(self.site.email.clone()));
        }

        for link in &self.socials {
            let href = link.href.as_str();
            let ok = href.starts_with("https://")
                || href.starts_with("http://")
                || href.starts_with("mailto:");
            if !ok {
                return Err(ConfigError::InvalidHref {
                    name: link.kind.to_string(),
                    href: link.href.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_construct() {
        let constants = SiteConstants::new().unwrap();
        assert_eq!(constants.site.name, SITE_NAME);
        assert!(constants.site.email.contains('@'));
        assert_eq!(constants.site.num_posts_on_homepage, 3);
        assert_eq!(constants.intro.len(), 2);
    }

    #[test]
    fn test_socials_keep_declaration_order() {
        let constants = SiteConstants::new().unwrap();
        let kinds: Vec<_> = constants.socials.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SocialKind::TwitterX,
                SocialKind::Github,
                SocialKind::Linkedin
            ]
        );
    }

    #[test]
    fn test_unknown_social_name() {
        let err = "mastodon".parse::<SocialKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown social link name `mastodon`");
    }

    #[test]
    fn test_invalid_href_rejected() {
        let mut constants = SiteConstants::new().unwrap();
        constants.socials.push(SocialLink {
            kind: SocialKind::Github,
            href: "example.com/no-scheme".to_string(),
        });
        let err = constants.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHref { .. }));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut constants = SiteConstants::new().unwrap();
        constants.site.email = "not-an-address".to_string();
        let err = constants.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEmail(_)));
    }
}
