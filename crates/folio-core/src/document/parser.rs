use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use super::models::Page;
use crate::{Error, Result};

/// Load and validate a page document from a TOML file
pub fn load_page(path: &Path) -> Result<Page> {
    let content = std::fs::read_to_string(path)?;
    let page = parse_page(&content)?;
    tracing::info!(
        "Loaded page '{}' with {} sections",
        page.title,
        page.sections.len()
    );
    Ok(page)
}

/// Parse a page document from TOML text
pub fn parse_page(content: &str) -> Result<Page> {
    let page: Page = toml::from_str(content).map_err(|e| Error::Document(e.to_string()))?;
    validate(&page)?;
    Ok(page)
}

fn validate(page: &Page) -> Result<()> {
    if page.sections.is_empty() {
        return Err(Error::Document("page has no sections".into()));
    }

    let mut seen = HashSet::new();
    for section in &page.sections {
        if section.id.trim().is_empty() {
            return Err(Error::Document(format!(
                "section '{}' has an empty id",
                section.title
            )));
        }
        if !seen.insert(section.id.as_str()) {
            return Err(Error::Document(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
    }

    Ok(())
}

/// Extract the fill percentage from an inline style string, e.g.
/// `width: 78%` or `width:78.5%; opacity: 1`. Absent or malformed widths
/// parse as 0.
pub fn fill_target(style: Option<&str>) -> f64 {
    let re = Regex::new(r"(?i)width:\s*([\d.]+)%").expect("static regex");
    style
        .and_then(|s| re.captures(s))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
