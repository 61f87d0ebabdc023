use serde::{Deserialize, Serialize};

/// Where a title or description candidate was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSource {
    Html,
    Opengraph,
    Twitter,
    Manifest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCandidate {
    pub value: String,
    pub source: CandidateSource,
    /// Attribute or field the value was read from, e.g. `og:title` or `short_name`
    pub property: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionCandidate {
    pub value: String,
    pub source: CandidateSource,
    pub property: String,
}

impl TitleCandidate {
    /// Returns `None` when `value` is blank once trimmed.
    pub fn new(value: &str, source: CandidateSource, property: &str) -> Option<Self> {
        non_empty(value).map(|value| Self {
            value,
            source,
            property: property.to_string(),
        })
    }
}

impl DescriptionCandidate {
    /// Returns `None` when `value` is blank once trimmed.
    pub fn new(value: &str, source: CandidateSource, property: &str) -> Option<Self> {
        non_empty(value).map(|value| Self {
            value,
            source,
            property: property.to_string(),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_is_trimmed() {
        let title = TitleCandidate::new("  Example  \n", CandidateSource::Html, "title").unwrap();
        assert_eq!(title.value, "Example");
        assert_eq!(title.property, "title");
    }

    #[test]
    fn test_blank_candidate_rejected() {
        assert!(TitleCandidate::new("   ", CandidateSource::Opengraph, "og:title").is_none());
        assert!(DescriptionCandidate::new("", CandidateSource::Manifest, "description").is_none());
    }

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&CandidateSource::Opengraph).unwrap();
        assert_eq!(json, "\"opengraph\"");
    }
}
