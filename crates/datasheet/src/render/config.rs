//! Renderer configuration.

use pulldown_cmark::Options;

/// Configuration for datasheet rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Enable GitHub-style tables in field values.
    pub tables: bool,
    /// Enable `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Enable `- [ ]` task list items.
    pub tasklists: bool,
    /// Convert straight quotes and dashes to typographic ones.
    pub smart_punctuation: bool,
    /// Wrap a field whose entire value is a URL so it renders as a link.
    pub autolink_urls: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: false,
            smart_punctuation: false,
            autolink_urls: true,
        }
    }
}

impl RenderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain CommonMark: no extensions, no autolinking.
    pub fn commonmark() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            tasklists: false,
            smart_punctuation: false,
            autolink_urls: false,
        }
    }

    pub fn with_tasklists(mut self, enabled: bool) -> Self {
        self.tasklists = enabled;
        self
    }

    pub fn with_smart_punctuation(mut self, enabled: bool) -> Self {
        self.smart_punctuation = enabled;
        self
    }

    pub fn with_autolink_urls(mut self, enabled: bool) -> Self {
        self.autolink_urls = enabled;
        self
    }

    /// Parser options for the markup pass.
    pub(crate) fn markup_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if self.smart_punctuation {
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderConfig::default().markup_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(!options.contains(Options::ENABLE_TASKLISTS));
    }

    #[test]
    fn test_commonmark_has_no_extensions() {
        let config = RenderConfig::commonmark();
        assert!(config.markup_options().is_empty());
        assert!(!config.autolink_urls);
    }
}
