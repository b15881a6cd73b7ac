//! Document properties rendered into the HTML head.
use serde::{Deserialize, Serialize};

/// Descriptive document properties.
///
/// Each populated property becomes one `<meta>` tag; the title also becomes
/// the page `<title>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocInfo {
    /// Document title
    pub title: Option<String>,
    /// Document author/creator
    pub creator: Option<String>,
    /// Document description/comments
    pub description: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Keywords associated with the document
    pub keywords: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Company/organization
    pub company: Option<String>,
    /// Manager name
    pub manager: Option<String>,
}

impl DocInfo {
    /// Check if at least one property is populated.
    pub fn has_data(&self) -> bool {
        self.properties().next().is_some()
    }

    /// Populated properties as `(meta name, value)` pairs, in head order.
    ///
    /// Blank values are skipped. The creator is reported under the HTML
    /// `author` meta name.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("author", &self.creator),
            ("title", &self.title),
            ("description", &self.description),
            ("subject", &self.subject),
            ("keywords", &self.keywords),
            ("category", &self.category),
            ("company", &self.company),
            ("manager", &self.manager),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (name, v))
        })
    }
}
