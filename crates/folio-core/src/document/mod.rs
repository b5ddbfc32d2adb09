//! Page document model
//!
//! A folio page is a TOML document: an ordered list of sections, each with a
//! stable identifier, optional cards, stat counters, and skill rows. The
//! motion engine reads animation targets from here; layout and geometry stay
//! with the frontend.

pub mod models;
pub mod parser;

pub use models::{Card, Page, Section, Skill, Stat};
pub use parser::load_page;
