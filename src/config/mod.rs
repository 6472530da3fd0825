//! Configuration module

mod site;

pub use site::ConfigError;
pub use site::PageMetadata;
pub use site::SiteConstants;
pub use site::SiteInfo;
pub use site::SocialKind;
pub use site::SocialLink;
pub use site::CONTENT_DIR;
