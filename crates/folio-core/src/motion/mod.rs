//! Scroll-driven animation engine
//!
//! Everything that moves on a folio page is a small state machine in this
//! module, advanced by the host with an elapsed-time snapshot and the current
//! viewport geometry. Nothing here touches a terminal or a clock; hosts
//! inject both, which keeps every behavior testable in isolation.
//!
//! # Layers
//!
//! Atoms:
//! - `easing` - Pure easing curves
//! - `timing` - Progress and interpolation helpers over injected durations
//! - `visibility` - Intersection math and crossing detection
//!
//! Behaviors:
//! - `reveal` - One-shot section reveal with staggered children
//! - `counter` - Stepped and eased numeric counters
//! - `bar` - Skill-bar fill animation
//! - `nav` - Active-section tracking and jump targets
//! - `header` - Scroll-direction header hide/show
//!
//! Orchestration:
//! - `engine` - Builds one behavior set per section and drives them per tick

pub mod bar;
pub mod counter;
pub mod easing;
pub mod engine;
pub mod header;
pub mod nav;
pub mod reveal;
pub mod timing;
pub mod visibility;

pub use bar::Bar;
pub use counter::{Counter, CounterPolicy};
pub use engine::MotionEngine;
pub use header::HeaderController;
pub use nav::NavTracker;
pub use reveal::SectionReveal;
pub use visibility::{Extent, ObserverSupport, Viewport, VisibilityDetector};
