//! Editing session: owned configuration plus its always-current rendering
//!
//! A `Session` holds the single `Configuration` being edited. Every accepted
//! change regenerates the whole document synchronously and then notifies
//! subscribers, so the cached markup always matches the configuration. Rejected
//! input leaves both untouched and notifies nobody.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::animation::{AnimationTiming, FillMode};
use crate::config::Configuration;
use crate::error::{ConfigError, FontError};
use crate::font::CustomFont;
use crate::preset::AnimationPreset;
use crate::renderer::{render_svg, SvgConfig};

/// How long the "copied" indicator stays visible
pub const COPY_INDICATOR_WINDOW: Duration = Duration::from_secs(2);

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(&Configuration, &str)>;

pub struct Session {
    config: Configuration,
    svg_config: SvgConfig,
    rendered: String,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: usize,
    font_error: Option<FontError>,
    copied_at: Option<Instant>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl Session {
    pub fn new(config: Configuration) -> Self {
        Self::with_svg_config(config, SvgConfig::default())
    }

    pub fn with_svg_config(config: Configuration, svg_config: SvgConfig) -> Self {
        let rendered = render_svg(&config, &svg_config);
        Self {
            config,
            svg_config,
            rendered,
            observers: Vec::new(),
            next_subscription: 0,
            font_error: None,
            copied_at: None,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Markup from the last render; identical to what copy and download export
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Register a callback run after every re-render
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&Configuration, &str) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a subscription; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn commit(&mut self) {
        self.rendered = render_svg(&self.config, &self.svg_config);
        debug!(
            preset = %self.config.preset(),
            bytes = self.rendered.len(),
            "re-rendered"
        );
        for (_, observer) in &mut self.observers {
            observer(&self.config, &self.rendered);
        }
    }

    fn apply(
        &mut self,
        update: impl FnOnce(&mut Configuration) -> Result<(), ConfigError>,
    ) -> Result<(), ConfigError> {
        update(&mut self.config)?;
        self.commit();
        Ok(())
    }

    /// Apply several changes as one edit.
    ///
    /// `edit` runs against a scratch copy of the configuration. If it fails the
    /// session is unchanged; otherwise the copy replaces the configuration and
    /// the document is rendered once.
    pub fn update<E>(
        &mut self,
        edit: impl FnOnce(&mut Configuration) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut scratch = self.config.clone();
        edit(&mut scratch)?;
        if scratch != self.config {
            self.config = scratch;
            self.commit();
        }
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ConfigError> {
        self.apply(|c| c.set_text(text))
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> Result<(), ConfigError> {
        self.apply(|c| c.set_font_family(family))
    }

    pub fn set_stroke_width(&mut self, px: u32) -> Result<(), ConfigError> {
        self.apply(|c| c.set_stroke_width(px))
    }

    pub fn set_font_size(&mut self, px: u32) -> Result<(), ConfigError> {
        self.apply(|c| c.set_font_size(px))
    }

    pub fn set_stroke_color(&mut self, color: impl Into<String>) -> Result<(), ConfigError> {
        self.apply(|c| c.set_stroke_color(color))
    }

    pub fn set_duration(&mut self, seconds: u32) -> Result<(), ConfigError> {
        self.apply(|c| c.set_duration(seconds))
    }

    pub fn set_timing(&mut self, timing: AnimationTiming) {
        self.config.set_timing(timing);
        self.commit();
    }

    pub fn set_fill_mode(&mut self, fill_mode: FillMode) {
        self.config.set_fill_mode(fill_mode);
        self.commit();
    }

    pub fn set_preset(&mut self, preset: AnimationPreset) {
        self.config.set_preset(preset);
        self.commit();
    }

    /// Apply the outcome of a font file read.
    ///
    /// The font fields change only once the read has finished. Completions are
    /// applied in the order they arrive, so when two uploads overlap the one
    /// that finishes last wins. A failed read keeps the current font and is
    /// reported through [`Session::font_error`].
    pub fn complete_font_upload(&mut self, result: Result<CustomFont, FontError>) {
        match result {
            Ok(font) => {
                info!(family = %font.name, "custom font loaded");
                self.font_error = None;
                self.config.set_custom_font(font);
                self.commit();
            }
            Err(err) => {
                warn!(error = %err, "font upload rejected");
                self.font_error = Some(err);
            }
        }
    }

    /// Read a font file and apply it
    pub fn upload_font(&mut self, path: &Path) {
        self.complete_font_upload(CustomFont::load(path));
    }

    /// Revert to the built-in font selection
    pub fn clear_custom_font(&mut self) {
        self.font_error = None;
        if self.config.clear_custom_font() {
            self.commit();
        }
    }

    /// Error from the most recent failed font upload, if not yet superseded
    pub fn font_error(&self) -> Option<&FontError> {
        self.font_error.as_ref()
    }

    /// Copy and download are only offered while there is text
    pub fn exports_enabled(&self) -> bool {
        !self.config.text().is_empty()
    }

    pub(crate) fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the "copied" indicator is showing at `now`
    pub fn copy_indicator_visible(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_INDICATOR_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_session() -> (Session, Rc<RefCell<Vec<String>>>) {
        let mut session = Session::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |_, svg| sink.borrow_mut().push(svg.to_string()));
        (session, seen)
    }

    #[test]
    fn test_initial_render_matches_defaults() {
        let session = Session::default();
        assert_eq!(
            session.rendered(),
            render_svg(&Configuration::default(), &SvgConfig::default())
        );
    }

    #[test]
    fn test_each_change_notifies_once() {
        let (mut session, seen) = recording_session();
        session.set_text("H").unwrap();
        session.set_text("Hi").unwrap();
        session.set_stroke_width(3).unwrap();
        session.set_preset(AnimationPreset::Wave);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen.last().map(String::as_str), Some(session.rendered()));
    }

    #[test]
    fn test_rejected_change_does_not_notify() {
        let (mut session, seen) = recording_session();
        let before = session.rendered().to_string();
        assert!(session.set_font_size(9).is_err());
        assert!(session.set_text("x".repeat(26)).is_err());
        assert!(seen.borrow().is_empty());
        assert_eq!(session.rendered(), before);
    }

    #[test]
    fn test_update_commits_once() {
        let (mut session, seen) = recording_session();
        session
            .update(|c| {
                c.set_text("Batch")?;
                c.set_font_size(72)?;
                c.set_preset(AnimationPreset::Ripple);
                Ok::<(), ConfigError>(())
            })
            .unwrap();
        assert_eq!(seen.borrow().len(), 1);
        assert!(session.rendered().contains("animation: ripple 5s linear forwards;"));
        assert!(session.rendered().contains(">Batch</text>"));
    }

    #[test]
    fn test_failed_update_leaves_session_untouched() {
        let (mut session, seen) = recording_session();
        let result = session.update(|c| {
            c.set_text("Partial")?;
            c.set_duration(30)
        });
        assert!(result.is_err());
        assert!(seen.borrow().is_empty());
        assert_eq!(session.config(), &Configuration::default());
    }

    #[test]
    fn test_unsubscribe() {
        let mut session = Session::default();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = session.subscribe(move |_, _| *counter.borrow_mut() += 1);

        session.set_duration(2).unwrap();
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.set_duration(3).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_font_upload_last_completion_wins() {
        let mut session = Session::default();
        session.complete_font_upload(CustomFont::from_bytes("First.ttf", b"1"));
        session.complete_font_upload(CustomFont::from_bytes("Second.woff", b"2"));
        assert_eq!(session.config().active_font_family(), "Second");
        assert!(session.rendered().contains("font-family: 'Second';"));
    }

    #[test]
    fn test_failed_upload_keeps_font_and_records_error() {
        let mut session = Session::default();
        session.complete_font_upload(CustomFont::from_bytes("Good.ttf", b"1"));
        let before = session.rendered().to_string();

        session.complete_font_upload(CustomFont::from_bytes("bad.txt", b"1"));
        assert!(matches!(
            session.font_error(),
            Some(FontError::UnsupportedExtension { .. })
        ));
        assert_eq!(session.config().active_font_family(), "Good");
        assert_eq!(session.rendered(), before);

        session.complete_font_upload(CustomFont::from_bytes("Better.otf", b"1"));
        assert!(session.font_error().is_none());
    }

    #[test]
    fn test_clear_custom_font() {
        let (mut session, seen) = recording_session();
        session.clear_custom_font();
        assert!(seen.borrow().is_empty());

        session.complete_font_upload(CustomFont::from_bytes("Mine.ttf", b"1"));
        session.clear_custom_font();
        assert_eq!(session.config().active_font_family(), "Courier New");
        assert!(!session.rendered().contains("@font-face"));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_exports_follow_text() {
        let mut session = Session::default();
        assert!(!session.exports_enabled());
        session.set_text("a").unwrap();
        assert!(session.exports_enabled());
        session.set_text("").unwrap();
        assert!(!session.exports_enabled());
    }

    #[test]
    fn test_copy_indicator_window() {
        let mut session = Session::default();
        let start = Instant::now();
        assert!(!session.copy_indicator_visible(start));

        session.mark_copied(start);
        assert!(session.copy_indicator_visible(start));
        assert!(session.copy_indicator_visible(start + Duration::from_millis(1999)));
        assert!(!session.copy_indicator_visible(start + COPY_INDICATOR_WINDOW));
    }
}
