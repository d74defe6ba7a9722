//! Hierarchical document paths

use std::fmt;

/// Alternating collection/document path under the database root,
/// e.g. `project/P-1/measurements/P-1-measurement-3`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocPath {
    segments: Vec<String>,
}

impl DocPath {
    /// Start a path at a top-level collection.
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Append a document id.
    pub fn doc(mut self, id: impl Into<String>) -> Self {
        self.segments.push(id.into());
        self
    }

    /// Append a sub-collection.
    pub fn sub(mut self, name: impl Into<String>) -> Self {
        self.segments.push(name.into());
        self
    }

    /// Whether the path addresses a document (as opposed to a collection).
    pub fn is_document(&self) -> bool {
        self.segments.len() % 2 == 0
    }

    /// Percent-encoded form for use in a request URL.
    pub fn encoded(&self) -> String {
        self.segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builds_in_order() {
        let path = DocPath::collection("project")
            .doc("P-1")
            .sub("measurements")
            .doc("P-1-measurement-3");
        assert_eq!(path.to_string(), "project/P-1/measurements/P-1-measurement-3");
        assert!(path.is_document());
        assert!(!DocPath::collection("users").is_document());
    }

    #[test]
    fn test_encoded_escapes_url_unsafe_ids() {
        let path = DocPath::collection("project").doc("Lot 7/B");
        assert_eq!(path.encoded(), "project/Lot%207%2FB");
    }
}
