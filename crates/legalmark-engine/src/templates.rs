use serde::{Deserialize, Serialize};

/// Localized content for rendering a [`crate::Block::Contact`].
///
/// Supplied per locale by the caller's localization data, never extracted
/// from the document. A contact line in the source only signals *where* the
/// card goes; *what* it says comes from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTemplate {
    /// Card heading, e.g. "Contact".
    pub title: String,
    /// Explanatory sentence shown above the call to action.
    pub body: String,
    /// Label on the call-to-action link, e.g. "Contact form".
    pub cta_label: String,
    /// Target of the call-to-action link.
    pub url: String,
}

impl ContactTemplate {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        cta_label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            cta_label: cta_label.into(),
            url: url.into(),
        }
    }
}
