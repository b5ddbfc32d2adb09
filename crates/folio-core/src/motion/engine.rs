//! Per-page wiring of the animation behaviors.
//!
//! `MotionEngine` is built once from a loaded page, the way the original
//! page wired everything on a single load event. Each section gets its own
//! reveal detector and, when it carries stats or skills, a one-shot trigger
//! detector. After that the host only feeds ticks: an elapsed-time snapshot,
//! the viewport, and the current section extents (layout belongs to the
//! host, so extents arrive from outside).
//!
//! Detectors are independent; no firing order is guaranteed across them.
//! Each behavior mutates only its own state, so a tick is a plain sequential
//! pass with no coordination beyond the header's frame guard.

use std::time::Duration;

use crate::config::MotionConfig;
use crate::document::{parser, Page};

use super::bar::Bar;
use super::counter::Counter;
use super::header::HeaderController;
use super::nav::NavTracker;
use super::reveal::SectionReveal;
use super::visibility::{Extent, ObserverSupport, Viewport, VisibilityDetector};

/// Animation state for one section
struct SectionMotion {
    /// Recurring detector driving the reveal (idempotent past the first hit)
    reveal_detector: VisibilityDetector,
    reveal: SectionReveal,
    /// One-shot detector arming counters and bars, present only for
    /// sections that have any
    trigger_detector: Option<VisibilityDetector>,
    /// Stat counters, in document order
    counters: Vec<Counter>,
    /// Skill rows: fill bar plus its paired percent label
    bars: Vec<(Bar, Counter)>,
}

/// Drives every scroll-linked behavior for a loaded page
pub struct MotionEngine {
    config: MotionConfig,
    support: ObserverSupport,
    sections: Vec<SectionMotion>,
    nav: NavTracker,
    header: HeaderController,
    /// Snapshot of the last tick, used by the render-side accessors
    now: Duration,
}

impl MotionEngine {
    pub fn new(page: &Page, config: MotionConfig, support: ObserverSupport) -> Self {
        let stagger_base = Duration::from_millis(config.stagger_base_ms);
        let stagger_step = Duration::from_millis(config.stagger_step_ms);
        let counter_budget = Duration::from_millis(config.counter_duration_ms);
        let counter_floor = Duration::from_millis(config.counter_min_step_ms);
        let percent_window = Duration::from_millis(config.percent_duration_ms);
        let bar_fill = Duration::from_millis(config.bar_fill_ms);

        let sections = page
            .sections
            .iter()
            .map(|section| {
                let counters: Vec<Counter> = section
                    .stats
                    .iter()
                    .map(|stat| Counter::stat(stat.target_value(), counter_budget, counter_floor))
                    .collect();

                let bars: Vec<(Bar, Counter)> = section
                    .skills
                    .iter()
                    .map(|skill| {
                        let fill = parser::fill_target(skill.style.as_deref());
                        (
                            Bar::new(fill, bar_fill, config.reduced_motion),
                            Counter::percent(skill.label_target(), percent_window),
                        )
                    })
                    .collect();

                let trigger_detector = (!counters.is_empty() || !bars.is_empty()).then(|| {
                    VisibilityDetector::once(config.trigger_threshold, 0.0, support)
                });

                SectionMotion {
                    reveal_detector: VisibilityDetector::recurring(
                        config.reveal_threshold,
                        config.reveal_margin,
                        support,
                    ),
                    reveal: SectionReveal::new(
                        section.animated_children(),
                        stagger_base,
                        stagger_step,
                    ),
                    trigger_detector,
                    counters,
                    bars,
                }
            })
            .collect();

        if support == ObserverSupport::Unsupported {
            tracing::warn!("visibility observation unsupported, animations fail open");
        }

        Self {
            support,
            sections,
            nav: NavTracker::new(config.nav_probe_offset, config.nav_anchor_offset),
            header: HeaderController::new(config.header_floor),
            now: Duration::ZERO,
            config,
        }
    }

    /// Notify the engine that the scroll offset changed since the last
    /// frame; arms the header's frame-cadence guard
    pub fn on_scroll(&mut self) {
        self.header.on_scroll();
    }

    /// Advance every behavior. `extents` holds the current geometry of each
    /// section, parallel to the page's section list.
    pub fn tick(&mut self, now: Duration, viewport: Viewport, extents: &[Extent]) {
        debug_assert_eq!(extents.len(), self.sections.len());
        self.now = now;

        self.header.on_frame(viewport.offset);
        self.nav.update(viewport.offset, extents);

        for (motion, extent) in self.sections.iter_mut().zip(extents) {
            if motion.reveal_detector.observe(*extent, viewport) && motion.reveal.reveal(now) {
                tracing::debug!("section revealed at {:?}", now);
            }

            let triggered = motion
                .trigger_detector
                .as_mut()
                .is_some_and(|det| det.observe(*extent, viewport));
            if triggered {
                for counter in &mut motion.counters {
                    counter.trigger(now, self.config.reduced_motion);
                }
                for (bar, label) in &mut motion.bars {
                    if self.support == ObserverSupport::Unsupported {
                        bar.snap();
                    } else {
                        bar.trigger(now);
                    }
                    label.trigger(now, self.config.reduced_motion);
                }
            }
        }
    }

    /// Section-level revealed flag
    pub fn section_revealed(&self, section: usize) -> bool {
        self.sections[section].reveal.is_revealed()
    }

    /// Staggered child reveal, as of the last tick
    pub fn child_revealed(&self, section: usize, child: usize) -> bool {
        self.sections[section].reveal.child_revealed(child, self.now)
    }

    /// Display text of a stat counter, as of the last tick
    pub fn stat_text(&self, section: usize, stat: usize) -> String {
        self.sections[section].counters[stat].render(self.now)
    }

    /// Rendered width percentage of a skill bar, as of the last tick
    pub fn bar_width(&self, section: usize, skill: usize) -> f64 {
        self.sections[section].bars[skill].0.width(self.now)
    }

    /// Display text of a skill percent label, as of the last tick
    pub fn skill_text(&self, section: usize, skill: usize) -> String {
        self.sections[section].bars[skill].1.render(self.now)
    }

    /// Index of the active nav link, recomputed every tick
    pub fn active_section(&self) -> Option<usize> {
        self.nav.active()
    }

    pub fn header_hidden(&self) -> bool {
        self.header.is_hidden()
    }

    /// Scroll offset a nav click on `section` should animate to
    pub fn jump_target(&self, section: Extent) -> f64 {
        self.nav.jump_target(section)
    }

    /// Whether any animation is still in flight as of the last tick. Hosts
    /// can drop to a lazy frame rate once the page settles.
    pub fn is_settled(&self) -> bool {
        self.sections.iter().all(|motion| {
            !motion.reveal.is_animating(self.now)
                && !motion.counters.iter().any(|c| c.is_animating(self.now))
                && !motion
                    .bars
                    .iter()
                    .any(|(bar, label)| bar.is_animating(self.now) || label.is_animating(self.now))
        })
    }
}
