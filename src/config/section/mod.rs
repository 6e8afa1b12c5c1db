//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pagerule.toml`:
//!
//! | Module | TOML Section | Purpose                                   |
//! |--------|--------------|-------------------------------------------|
//! | `site` | `[site]`     | Index file, source directories            |
//! | `page` | `[[page]]`   | Page rules (pattern + options)            |

mod page;
mod site;

pub use page::PageEntry;
pub use site::SiteSectionConfig;
