//! Built-in font names and uploaded custom fonts
//!
//! An uploaded font is embedded in the output as a base64 `data:` URL, and its
//! family name is the file name with the extension stripped.

use std::path::Path;

use base64::Engine as _;

use crate::error::FontError;

/// Font families offered by the font selector
pub const BUILTIN_FONTS: &[&str] = &[
    "Courier New",
    "Arial",
    "Times New Roman",
    "Georgia",
    "Verdana",
    "Comic Sans MS",
];

/// Family used when nothing else is selected
pub const DEFAULT_FONT: &str = "Courier New";

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    OpenType,
    TrueType,
    Woff,
    Woff2,
}

impl FontFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "otf" => Some(FontFormat::OpenType),
            "ttf" => Some(FontFormat::TrueType),
            "woff" => Some(FontFormat::Woff),
            "woff2" => Some(FontFormat::Woff2),
            _ => None,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            FontFormat::OpenType => "font/otf",
            FontFormat::TrueType => "font/ttf",
            FontFormat::Woff => "font/woff",
            FontFormat::Woff2 => "font/woff2",
        }
    }
}

/// A font read from an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFont {
    /// Family name derived from the file name
    pub name: String,
    /// Embeddable `data:` URL holding the file bytes
    pub data_url: String,
}

impl CustomFont {
    /// Read a font file from disk
    pub fn load(path: &Path) -> Result<Self, FontError> {
        // Validate the name before touching the file
        let (name, format) = Self::name_and_format(path)?;
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::encode(path, name, format, &bytes)
    }

    /// Build a font from an already-read file; `file_name` supplies name and format
    pub fn from_bytes(file_name: &str, bytes: &[u8]) -> Result<Self, FontError> {
        let path = Path::new(file_name);
        let (name, format) = Self::name_and_format(path)?;
        Self::encode(path, name, format, bytes)
    }

    fn name_and_format(path: &Path) -> Result<(String, FontFormat), FontError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FontFormat::from_extension)
            .ok_or_else(|| FontError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::trim)
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| FontError::MissingName {
                path: path.to_path_buf(),
            })?;
        Ok((name.to_string(), format))
    }

    fn encode(
        path: &Path,
        name: String,
        format: FontFormat,
        bytes: &[u8],
    ) -> Result<Self, FontError> {
        if bytes.is_empty() {
            return Err(FontError::Empty {
                path: path.to_path_buf(),
            });
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(Self {
            name,
            data_url: format!("data:{};base64,{}", format.media_type(), encoded),
        })
    }

    /// The `@font-face` rule as CSS lines, without indentation
    pub fn font_face_lines(&self) -> Vec<String> {
        vec![
            "@font-face {".to_string(),
            format!("  font-family: '{}';", self.name),
            format!("  src: url('{}');", self.data_url),
            "}".to_string(),
        ]
    }
}
