use serde::{Deserialize, Serialize};

/// A complete portfolio page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page title, shown in the header
    pub title: String,
    /// Short line under the title
    #[serde(default)]
    pub tagline: Option<String>,
    /// Sections in document order
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
}

/// A top-level page region with a stable identifier; the unit of reveal
/// animation and navigation tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier, matched by nav links
    pub id: String,
    /// Heading text
    pub title: String,
    /// Label used in the nav bar (falls back to the heading)
    #[serde(default)]
    pub nav_label: Option<String>,
    /// Body paragraphs
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Cards revealed with a stagger when the section becomes visible
    #[serde(default, rename = "card")]
    pub cards: Vec<Card>,
    /// Stat counters
    #[serde(default, rename = "stat")]
    pub stats: Vec<Stat>,
    /// Skill rows with animated fill bars
    #[serde(default, rename = "skill")]
    pub skills: Vec<Skill>,
    /// Section hosts the contact form
    #[serde(default)]
    pub contact_form: bool,
}

impl Section {
    /// Nav bar label for this section
    pub fn nav_label(&self) -> &str {
        self.nav_label.as_deref().unwrap_or(&self.title)
    }

    /// Number of child elements that take part in the reveal stagger
    pub fn animated_children(&self) -> usize {
        self.cards.len() + self.stats.len() + self.skills.len()
    }
}

/// A card inside a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// A stat counter; the target is carried as a raw attribute string,
/// exactly as authored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Raw target attribute; missing or non-numeric parses as 0
    #[serde(default)]
    pub target: Option<String>,
}

impl Stat {
    /// Parsed target count, defaulting to 0 on missing/invalid input
    pub fn target_value(&self) -> u64 {
        self.target
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// A skill row; the fill target lives in an inline style string and the
/// percent label in rendered text, both parsed once at load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Inline style of the fill element, e.g. `width: 78%`
    #[serde(default)]
    pub style: Option<String>,
    /// Rendered percent label, e.g. `78%`
    #[serde(default)]
    pub value: Option<String>,
}

impl Skill {
    /// Percent label target: digits stripped out of the rendered text,
    /// defaulting to 0
    pub fn label_target(&self) -> u64 {
        let digits: String = self
            .value
            .as_deref()
            .unwrap_or("")
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }
}
