//! Sentiment labels and their display categories.
//!
//! The backend owns the label vocabulary. The client keeps labels verbatim and
//! only derives a [`SentimentCategory`] for coloring, so unknown labels still
//! render, just without a category color.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque sentiment label as returned by the classification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentLabel(String);

impl SentimentLabel {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display category of this label.
    #[must_use]
    pub fn category(&self) -> SentimentCategory {
        SentimentCategory::from_label(&self.0)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display category derived from a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
    Irrelevant,
    /// The label matched none of the known words.
    Unclassified,
}

impl SentimentCategory {
    /// Match order matters: a label like "not negative, positive" is `Positive`.
    const VOCABULARY: [(&'static str, Self); 4] = [
        ("positive", Self::Positive),
        ("negative", Self::Negative),
        ("neutral", Self::Neutral),
        ("irrelevant", Self::Irrelevant),
    ];

    /// Categorizes a label by case-insensitive substring match.
    ///
    /// # Example
    ///
    /// ```
    /// use zentiment::domain::SentimentCategory;
    ///
    /// assert_eq!(SentimentCategory::from_label("Very POSITIVE"), SentimentCategory::Positive);
    /// assert_eq!(SentimentCategory::from_label("mixed"), SentimentCategory::Unclassified);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        Self::VOCABULARY
            .iter()
            .find(|(word, _)| lowered.contains(word))
            .map_or(Self::Unclassified, |(_, category)| *category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_words_case_insensitively() {
        assert_eq!(SentimentCategory::from_label("Positive"), SentimentCategory::Positive);
        assert_eq!(SentimentCategory::from_label("NEGATIVE"), SentimentCategory::Negative);
        assert_eq!(SentimentCategory::from_label("neutral"), SentimentCategory::Neutral);
        assert_eq!(SentimentCategory::from_label("Irrelevant"), SentimentCategory::Irrelevant);
    }

    #[test]
    fn first_vocabulary_word_wins() {
        assert_eq!(
            SentimentCategory::from_label("negative-to-positive"),
            SentimentCategory::Positive
        );
    }

    #[test]
    fn unknown_labels_are_unclassified_not_rejected() {
        let label = SentimentLabel::new("sarcastic");
        assert_eq!(label.category(), SentimentCategory::Unclassified);
        assert_eq!(label.as_str(), "sarcastic");
        assert_eq!(SentimentCategory::from_label(""), SentimentCategory::Unclassified);
    }
}
