//! The sanitizer entry point.

use log::debug;

use crate::config::SanitizerConfig;

/// Strips disallowed markup from untrusted strings.
///
/// Holds nothing but its immutable [`SanitizerConfig`], so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct HtmlSanitizer {
    config: SanitizerConfig,
}

impl HtmlSanitizer {
    /// Create a sanitizer with the given policy.
    #[must_use]
    pub const fn new(config: SanitizerConfig) -> Self {
        Self { config }
    }

    /// The policy this sanitizer applies.
    #[must_use]
    pub const fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Sanitize `source`, re-scanning until a pass changes nothing.
    ///
    /// Removing one tag can splice together text that forms another
    /// (`<<script>script>`), so a single pass is not enough. The result is a
    /// fixed point of [`clean_tags`](Self::clean_tags):
    /// `sanitize(sanitize(x)) == sanitize(x)`.
    #[must_use]
    pub fn sanitize(&self, source: &str) -> String {
        let mut current = source.to_string();
        let mut passes = 1_usize;

        loop {
            let next = self.clean_tags(&current);
            if next == current {
                break;
            }
            current = next;
            passes += 1;
        }

        debug!("sanitized {} bytes in {passes} pass(es)", source.len());
        current
    }
}
