use std::path::Path;

use anyhow::Result;

use folio_core::document::parser::{fill_target, load_page};

pub fn run(path: &Path) -> Result<()> {
    let page = load_page(path)?;

    println!("{} ({} sections)", page.title, page.sections.len());
    if let Some(ref tagline) = page.tagline {
        println!("  {}", tagline);
    }

    for section in &page.sections {
        let mut parts = Vec::new();
        if !section.paragraphs.is_empty() {
            parts.push(format!("{} paragraphs", section.paragraphs.len()));
        }
        if !section.cards.is_empty() {
            parts.push(format!("{} cards", section.cards.len()));
        }
        for stat in &section.stats {
            parts.push(format!("{} → {}", stat.label, stat.target_value()));
        }
        for skill in &section.skills {
            parts.push(format!(
                "{} {}%",
                skill.name,
                fill_target(skill.style.as_deref())
            ));
        }
        if section.contact_form {
            parts.push("contact form".to_string());
        }

        println!("  #{:<12} {}", section.id, parts.join(", "));
    }

    Ok(())
}
