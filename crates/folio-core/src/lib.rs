pub mod config;
pub mod contact;
pub mod document;
pub mod error;
pub mod motion;

pub use config::{AppConfig, MotionConfig, UiConfig};
pub use contact::{ContactClient, ContactMessage, SubmitNotice, SubmitOutcome};
pub use document::Page;
pub use error::{Error, Result};
pub use motion::MotionEngine;
