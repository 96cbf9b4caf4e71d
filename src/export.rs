//! Copy and download actions for the rendered markup
//!
//! Both actions export `Session::rendered()` byte for byte and refuse to run
//! while the text is empty.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::error::ExportError;
use crate::session::Session;

/// File name used for downloads
pub const DOWNLOAD_FILE_NAME: &str = "animated-text.html";

/// Declared media type of the download (the body itself is SVG markup)
pub const DOWNLOAD_CONTENT_TYPE: &str = "text/html";

/// Destination for the copy action
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ExportError>;
}

/// How the system clipboard keeps serving copied text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMode {
    /// Set the text and return. The owning process must stay alive for
    /// platforms where it serves the selection.
    #[default]
    Detached,
    /// Block until another program replaces the clipboard contents
    HoldUntilReplaced,
}

impl CopyMode {
    /// Mode for a process that exits right after copying.
    ///
    /// X11 and Wayland selections are served by the process that set them, so
    /// on Linux the text would vanish with the process unless it is held.
    pub fn for_short_lived_process() -> Self {
        if cfg!(target_os = "linux") {
            CopyMode::HoldUntilReplaced
        } else {
            CopyMode::Detached
        }
    }
}

/// The operating system clipboard
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    mode: CopyMode,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ExportError> {
        Self::with_mode(CopyMode::Detached)
    }

    pub fn with_mode(mode: CopyMode) -> Result<Self, ExportError> {
        let inner = arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
        Ok(Self { inner, mode })
    }

    pub fn mode(&self) -> CopyMode {
        self.mode
    }

    #[cfg(target_os = "linux")]
    fn hold_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        self.inner.set().wait().text(text)
    }

    #[cfg(not(target_os = "linux"))]
    fn hold_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        self.inner.set_text(text)
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ExportError> {
        let result = match self.mode {
            CopyMode::Detached => self.inner.set_text(text),
            CopyMode::HoldUntilReplaced => self.hold_text(text),
        };
        result.map_err(|e| ExportError::Clipboard(e.to_string()))
    }
}

/// A file ready to be handed to whatever saves it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

/// Copy the current markup to `clipboard`.
///
/// On success the session's copy indicator is shown. A clipboard failure is
/// logged and returned; the session is left as it was.
pub fn copy(
    session: &mut Session,
    clipboard: &mut dyn Clipboard,
    now: Instant,
) -> Result<(), ExportError> {
    if !session.exports_enabled() {
        return Err(ExportError::EmptyText);
    }
    if let Err(err) = clipboard.set_text(session.rendered()) {
        warn!(error = %err, "failed to copy markup");
        return Err(err);
    }
    info!(bytes = session.rendered().len(), "markup copied to clipboard");
    session.mark_copied(now);
    Ok(())
}

/// Package the current markup as a download
pub fn prepare_download(session: &Session) -> Result<Download, ExportError> {
    if !session.exports_enabled() {
        return Err(ExportError::EmptyText);
    }
    Ok(Download {
        file_name: DOWNLOAD_FILE_NAME,
        content_type: DOWNLOAD_CONTENT_TYPE,
        body: session.rendered().to_string(),
    })
}

/// Save the download into `dir`, returning the written path
pub fn download(session: &Session, dir: &Path) -> Result<PathBuf, ExportError> {
    let file = prepare_download(session)?;
    let path = dir.join(file.file_name);
    std::fs::write(&path, file.body.as_bytes()).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "markup downloaded");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ExportError> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ExportError> {
            Err(ExportError::Clipboard("permission denied".to_string()))
        }
    }

    #[test]
    fn test_copy_exports_rendered_markup() {
        let mut session = Session::default();
        session.set_text("Hi").unwrap();
        let mut clipboard = MemoryClipboard::default();
        let now = Instant::now();

        copy(&mut session, &mut clipboard, now).unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some(session.rendered()));
        assert!(session.copy_indicator_visible(now));
    }

    #[test]
    fn test_copy_gated_on_empty_text() {
        let mut session = Session::default();
        let mut clipboard = MemoryClipboard::default();
        let result = copy(&mut session, &mut clipboard, Instant::now());
        assert!(matches!(result, Err(ExportError::EmptyText)));
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_copy_failure_leaves_state() {
        let mut session = Session::default();
        session.set_text("Hi").unwrap();
        let now = Instant::now();
        let result = copy(&mut session, &mut DeniedClipboard, now);
        assert!(matches!(result, Err(ExportError::Clipboard(_))));
        assert!(!session.copy_indicator_visible(now));
    }

    #[test]
    fn test_short_lived_copy_holds_on_linux() {
        let mode = CopyMode::for_short_lived_process();
        if cfg!(target_os = "linux") {
            assert_eq!(mode, CopyMode::HoldUntilReplaced);
        } else {
            assert_eq!(mode, CopyMode::Detached);
        }
        assert_eq!(CopyMode::default(), CopyMode::Detached);
    }

    #[test]
    fn test_prepare_download() {
        let mut session = Session::default();
        assert!(matches!(prepare_download(&session), Err(ExportError::EmptyText)));

        session.set_text("Hi").unwrap();
        let file = prepare_download(&session).unwrap();
        assert_eq!(file.file_name, "animated-text.html");
        assert_eq!(file.content_type, "text/html");
        assert_eq!(file.body, session.rendered());
    }
}
