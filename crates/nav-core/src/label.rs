//! Bilingual display labels.
//!
//! Every human-visible name in the facility graph carries two language
//! variants.  The pair travels through routing and instruction generation as
//! one opaque value; only the presentation boundary picks a variant via
//! [`Lang`].  Keyword classification (corridor/ward/room heuristics) always
//! inspects the primary variant so routing behavior is independent of the
//! user's display language.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which language variant of a [`Label`] to render.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Lang {
    /// The facility's primary signage language.
    #[default]
    Primary,
    /// The secondary (local) language variant.
    Secondary,
}

/// An opaque bilingual string pair.
///
/// `secondary` falls back to `primary` when the data source provides only one
/// variant, so `text(Lang::Secondary)` never returns an empty string for a
/// labelled node.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Label {
    pub primary: String,
    pub secondary: String,
}

impl Label {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        let primary = primary.into();
        let mut secondary = secondary.into();
        if secondary.is_empty() {
            secondary = primary.clone();
        }
        Self { primary, secondary }
    }

    /// A label with identical variants (junctions, technical nodes).
    pub fn monolingual(text: impl Into<String>) -> Self {
        let text = text.into();
        Self { secondary: text.clone(), primary: text }
    }

    /// Select one variant for display.
    #[inline]
    pub fn text(&self, lang: Lang) -> &str {
        match lang {
            Lang::Primary => &self.primary,
            Lang::Secondary => &self.secondary,
        }
    }

    /// Both variants joined for spoken announcements, primary first.
    /// Identical variants collapse to a single utterance.
    pub fn spoken(&self) -> String {
        if self.primary == self.secondary {
            self.primary.clone()
        } else {
            format!("{} {}", self.primary, self.secondary)
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary)
    }
}
