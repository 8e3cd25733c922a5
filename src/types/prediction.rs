use serde::{Deserialize, Serialize};

/// One section of a prediction's description, in left-to-right order.
/// A section is generally terminated by a comma in the description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionTerm {
    pub value: String,
    /// Start position of this term within the description.
    pub offset: usize,
}

/// A span of the description matching the caller's input, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionSubstring {
    pub offset: usize,
    pub length: usize,
}

/// Pre-split description text: the main text (usually the place name) and
/// the secondary text (usually the locality), each with its matched spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredFormatting {
    pub main_text: String,
    #[serde(default)]
    pub main_text_matched_substrings: Vec<PredictionSubstring>,
    pub secondary_text: Option<String>,
    #[serde(default)]
    pub secondary_text_matched_substrings: Vec<PredictionSubstring>,
}
