//! Configuration types for DOCX-to-WrittenContent conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across call sites and to diff two runs to
//! understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! The builder lets callers set only what they care about and rely on
//! well-documented defaults for the rest, and gives `build()` a place to
//! validate (e.g. a custom preamble regex that does not compile).

use crate::error::Docx2WcError;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Test applied to a paragraph's text to find the preamble end marker.
pub type PreamblePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Configuration for a DOCX-to-WrittenContent conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use docx2wc::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .strip_preamble(true)
///     .preamble_pattern(r"^\d{4}-\d{2}-\d{2}$")
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Remove title/byline paragraphs preceding the content-start marker.
    /// Default: true.
    ///
    /// The stripper fails open: when no paragraph matches the marker, the
    /// full document is kept.
    pub strip_preamble: bool,

    /// Custom marker predicate. Takes precedence over `preamble_pattern`.
    ///
    /// The date heuristic is specific to one publishing pipeline; callers
    /// with different document conventions inject their own test here.
    pub preamble_predicate: Option<PreamblePredicate>,

    /// Custom marker regex, compiled and validated by the builder. Used when
    /// no predicate is set; when both are absent the built-in
    /// `\d{1,2}-\d{1,2}-\d{2,4}` date pattern applies.
    pub preamble_pattern: Option<Regex>,

    /// Merge blank-line-separated paragraph sections. Default: true.
    ///
    /// Grouping self-gates on the separator pattern, so leaving this on is
    /// safe for documents that never use blank-line separation; disable it
    /// only to force one rendered paragraph per source paragraph.
    pub group_paragraphs: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            strip_preamble: true,
            preamble_predicate: None,
            preamble_pattern: None,
            group_paragraphs: true,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("strip_preamble", &self.strip_preamble)
            .field(
                "preamble_predicate",
                &self.preamble_predicate.as_ref().map(|_| "<fn>"),
            )
            .field("preamble_pattern", &self.preamble_pattern)
            .field("group_paragraphs", &self.group_paragraphs)
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder with defaults applied.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn strip_preamble(mut self, v: bool) -> Self {
        self.config.strip_preamble = v;
        self
    }

    /// Inject a custom preamble marker predicate.
    pub fn preamble_predicate(mut self, pred: PreamblePredicate) -> Self {
        self.config.preamble_predicate = Some(pred);
        self
    }

    /// Set a custom preamble marker regex. Fails immediately on an invalid
    /// pattern so the error points at the call site, not at `build()`.
    pub fn preamble_pattern(mut self, pattern: &str) -> Result<Self, Docx2WcError> {
        let re = Regex::new(pattern).map_err(|e| {
            Docx2WcError::InvalidConfig(format!("invalid preamble pattern '{pattern}': {e}"))
        })?;
        self.config.preamble_pattern = Some(re);
        Ok(self)
    }

    pub fn group_paragraphs(mut self, v: bool) -> Self {
        self.config.group_paragraphs = v;
        self
    }

    /// Build the configuration, validating cross-field constraints.
    pub fn build(self) -> Result<ConversionConfig, Docx2WcError> {
        let c = &self.config;
        if !c.strip_preamble && (c.preamble_predicate.is_some() || c.preamble_pattern.is_some()) {
            return Err(Docx2WcError::InvalidConfig(
                "a preamble marker was configured but strip_preamble is false".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strips_and_groups() {
        let d = ConversionConfig::default();
        assert!(d.strip_preamble);
        assert!(d.group_paragraphs);
        assert!(d.preamble_predicate.is_none());
        assert!(d.preamble_pattern.is_none());
    }

    #[test]
    fn invalid_pattern_rejected() {
        let err = ConversionConfig::builder()
            .preamble_pattern("([unclosed")
            .unwrap_err();
        assert!(matches!(err, Docx2WcError::InvalidConfig(_)));
    }

    #[test]
    fn marker_without_stripping_rejected() {
        let err = ConversionConfig::builder()
            .preamble_pattern(r"^\d+$")
            .unwrap()
            .strip_preamble(false)
            .build()
            .unwrap_err();
        assert!(matches!(err, Docx2WcError::InvalidConfig(_)));
    }

    #[test]
    fn predicate_is_injectable() {
        let config = ConversionConfig::builder()
            .preamble_predicate(Arc::new(|t: &str| t.starts_with("DATE:")))
            .build()
            .unwrap();
        let pred = config.preamble_predicate.expect("predicate set");
        assert!(pred("DATE: today"));
        assert!(!pred("no marker"));
    }

    #[test]
    fn debug_does_not_require_predicate_debug() {
        let config = ConversionConfig::builder()
            .preamble_predicate(Arc::new(|_: &str| true))
            .build()
            .unwrap();
        let s = format!("{config:?}");
        assert!(s.contains("<fn>"));
    }
}
