use std::sync::Arc;
use std::time::Instant;

use folio_core::contact::{ContactMessage, SubmitNotice};
use folio_core::document::Page;
use folio_core::motion::{Extent, MotionEngine, ObserverSupport, Viewport};
use folio_core::{AppConfig, MotionConfig};

use crate::scroll::PageScroller;
use crate::widgets::page::section_height;

/// Approximate pixel height of one terminal row against the page design the
/// motion distances were tuned for. Thresholds and durations are unit-free
/// and pass through untouched.
const ROW_PX: f64 = 12.0;

/// Scale the pixel-tuned distances in the motion config down to rows
fn row_scaled(config: &MotionConfig) -> MotionConfig {
    MotionConfig {
        reveal_margin: config.reveal_margin / ROW_PX,
        header_floor: config.header_floor / ROW_PX,
        nav_probe_offset: config.nav_probe_offset / ROW_PX,
        nav_anchor_offset: config.nav_anchor_offset / ROW_PX,
        ..config.clone()
    }
}

/// Field focus inside the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Name,
    Email,
    Message,
}

impl ComposeField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }
}

/// In-progress contact form
#[derive(Debug, Clone, Default)]
pub struct ComposeDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub field: ComposeField,
}

impl ComposeDraft {
    pub fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            ComposeField::Name => &mut self.name,
            ComposeField::Email => &mut self.email,
            ComposeField::Message => &mut self.message,
        }
    }

    pub fn into_message(self) -> ContactMessage {
        ContactMessage {
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}

/// Application mode
#[derive(Debug, Clone)]
pub enum Mode {
    Normal,
    /// Contact form open
    Compose(ComposeDraft),
    /// Blocking submission notice
    Notice(SubmitNotice),
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub page: Page,
    pub engine: MotionEngine,
    pub scroller: PageScroller,
    pub mode: Mode,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// A submission is in flight
    pub is_sending: bool,
    /// Epoch for the motion engine's time snapshots
    started: Instant,
    /// Section geometry from the last layout pass, in page rows
    section_extents: Vec<Extent>,
    content_height: f64,
    /// Rows available to the page below the header, from the last draw
    page_rows: u16,
    /// Last width the layout was computed for
    layout_width: u16,
    last_offset: f64,
}

impl App {
    pub fn new(page: Page, config: Arc<AppConfig>) -> Self {
        let engine = MotionEngine::new(&page, row_scaled(&config.motion), ObserverSupport::Supported);
        let scroller = PageScroller::new(config.ui.smooth_scroll, config.ui.scroll_duration_ms);
        Self {
            config,
            page,
            engine,
            scroller,
            mode: Mode::Normal,
            status_message: None,
            should_quit: false,
            is_sending: false,
            started: Instant::now(),
            section_extents: Vec::new(),
            content_height: 0.0,
            page_rows: 0,
            layout_width: 0,
            last_offset: 0.0,
        }
    }

    /// Recompute section geometry for the given page area. Runs on the first
    /// draw and after every resize; heights depend only on content and width.
    pub fn recompute_layout(&mut self, width: u16, page_rows: u16) {
        self.page_rows = page_rows;
        if width == self.layout_width && !self.section_extents.is_empty() {
            self.scroller
                .set_max((self.content_height - page_rows as f64).max(0.0));
            return;
        }
        self.layout_width = width;

        let mut top = 0.0;
        self.section_extents = self
            .page
            .sections
            .iter()
            .map(|section| {
                let height = section_height(section, width) as f64;
                let extent = Extent::new(top, height);
                top += height;
                extent
            })
            .collect();
        // Footer line trails the last section
        self.content_height = top + 2.0;
        self.scroller
            .set_max((self.content_height - page_rows as f64).max(0.0));
    }

    /// Advance scrolling and the motion engine by one frame
    pub fn on_tick(&mut self) {
        // Geometry arrives with the first draw; nothing to animate before it
        if self.section_extents.len() != self.page.sections.len() {
            return;
        }
        let offset = self.scroller.update();
        if (offset - self.last_offset).abs() > f64::EPSILON {
            self.engine.on_scroll();
        }
        self.last_offset = offset;

        let viewport = Viewport::new(offset, self.page_rows as f64);
        let extents = self.section_extents.clone();
        self.engine
            .tick(self.started.elapsed(), viewport, &extents);
    }

    pub fn scroll_down(&mut self) {
        self.scroller.scroll_by(self.config.ui.scroll_lines as f64);
    }

    pub fn scroll_up(&mut self) {
        self.scroller.scroll_by(-(self.config.ui.scroll_lines as f64));
    }

    pub fn half_page_down(&mut self) {
        self.scroller.scroll_by((self.page_rows / 2).max(1) as f64);
    }

    pub fn half_page_up(&mut self) {
        self.scroller.scroll_by(-((self.page_rows / 2).max(1) as f64));
    }

    pub fn jump_to_top(&mut self) {
        self.scroller.scroll_to(0.0);
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroller.scroll_to(self.content_height);
    }

    /// Nav link click: glide to the section with the anchor offset applied
    /// and reflect the fragment in the status line
    pub fn nav_jump(&mut self, index: usize) {
        let Some(extent) = self.section_extents.get(index).copied() else {
            return;
        };
        let target = self.engine.jump_target(extent);
        tracing::debug!("nav jump to #{} (offset {})", self.page.sections[index].id, target);
        self.scroller.scroll_to(target);
        self.set_status(format!("#{}", self.page.sections[index].id));
    }

    /// Whether the page carries a contact section
    pub fn has_contact_form(&self) -> bool {
        self.page.sections.iter().any(|s| s.contact_form)
    }

    pub fn open_compose(&mut self) {
        if !self.has_contact_form() {
            self.set_status("This page has no contact form");
            return;
        }
        if self.is_sending {
            self.set_status("A message is already being sent...");
            return;
        }
        self.mode = Mode::Compose(ComposeDraft::default());
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn section_extents(&self) -> &[Extent] {
        &self.section_extents
    }

    pub fn scroll_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::document::parser::parse_page;

    fn sample_app() -> App {
        let page = parse_page(
            r#"
            title = "Demo"

            [[section]]
            id = "about"
            title = "About"
            paragraphs = ["Hello there.", "Nice to meet you."]

            [[section]]
            id = "contact"
            title = "Contact"
            contact_form = true
            "#,
        )
        .unwrap();
        App::new(page, Arc::new(AppConfig::default()))
    }

    #[test]
    fn test_layout_assigns_stacked_extents() {
        let mut app = sample_app();
        app.recompute_layout(80, 24);
        let extents = app.section_extents().to_vec();
        assert_eq!(extents.len(), 2);
        assert_eq!(extents[0].top, 0.0);
        assert_eq!(extents[1].top, extents[0].height);
        assert!(app.content_height() > extents[1].top);
    }

    #[test]
    fn test_nav_jump_sets_fragment_status() {
        let mut app = sample_app();
        app.recompute_layout(80, 24);
        app.nav_jump(1);
        assert_eq!(app.status_message.as_deref(), Some("#contact"));
    }

    #[test]
    fn test_compose_requires_contact_section() {
        let mut app = sample_app();
        app.open_compose();
        assert!(matches!(app.mode, Mode::Compose(_)));
    }

    #[test]
    fn test_tick_drives_engine() {
        let mut app = sample_app();
        app.recompute_layout(80, 24);
        app.on_tick();
        // First section is in view at offset 0 and tall enough to reveal
        assert!(app.engine.section_revealed(0));
    }
}
