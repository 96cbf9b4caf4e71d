//! Configuration for SVG rendering

/// Output options for the generated markup.
///
/// These shape the formatting only; the drawn result is the same for every
/// combination except `escape_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgConfig {
    /// Whether to prepend an XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Whether to XML-escape the text node. Off by default: the text is
    /// emitted literally, so markup in the text is live in the output.
    pub escape_text: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            escape_text: false,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether to escape the text content
    pub fn with_escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }
}
