//! Template items listed inside a category.

use crate::tree::XmlElement;

/// The kinds of node a category may list. Anything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Block,
    Shadow,
    Label,
    Button,
    Sep,
    Text,
}

impl ContentKind {
    /// Match a tag name, ignoring case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ContentKind::all()
            .iter()
            .copied()
            .find(|kind| tag.eq_ignore_ascii_case(kind.tag()))
    }

    /// Get the canonical tag name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ContentKind::Block => "block",
            ContentKind::Shadow => "shadow",
            ContentKind::Label => "label",
            ContentKind::Button => "button",
            ContentKind::Sep => "sep",
            ContentKind::Text => "text",
        }
    }

    pub fn all() -> &'static [ContentKind] {
        &[
            ContentKind::Block,
            ContentKind::Shadow,
            ContentKind::Label,
            ContentKind::Button,
            ContentKind::Sep,
            ContentKind::Text,
        ]
    }
}

/// One template item: its kind plus the source element, kept opaque for the
/// flyout to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub element: XmlElement,
}

impl ContentItem {
    /// Wrap an element if its tag is a recognized content kind.
    pub fn from_element(element: &XmlElement) -> Option<Self> {
        ContentKind::from_tag(&element.tag).map(|kind| Self {
            kind,
            element: element.clone(),
        })
    }

    /// The synthetic label placed at the top of every category in the flyout.
    pub fn category_label(id: &str, name: &str, show_status_button: bool) -> Self {
        let element = XmlElement::new(ContentKind::Label.tag())
            .with_attribute("text", name)
            .with_attribute("id", id)
            .with_attribute("category-label", "true")
            .with_attribute("showStatusButton", show_status_button.to_string())
            .with_attribute("web-class", "categoryLabel");
        Self {
            kind: ContentKind::Label,
            element,
        }
    }

    /// Whether this is a synthetic category label.
    pub fn is_category_label(&self) -> bool {
        self.kind == ContentKind::Label && self.element.attribute("category-label") == Some("true")
    }

    /// Look up an attribute on the source element.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attribute(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_from_tag() {
        assert_eq!(ContentKind::from_tag("block"), Some(ContentKind::Block));
        assert_eq!(ContentKind::from_tag("SEP"), Some(ContentKind::Sep));
        assert_eq!(ContentKind::from_tag("category"), None);
        assert_eq!(ContentKind::from_tag("value"), None);
    }

    #[test]
    fn test_category_label() {
        let label = ContentItem::category_label("c1", "Motion", true);
        assert!(label.is_category_label());
        assert_eq!(label.attribute("text"), Some("Motion"));
        assert_eq!(label.attribute("id"), Some("c1"));
        assert_eq!(label.attribute("showStatusButton"), Some("true"));

        let plain = ContentItem::from_element(&XmlElement::new("label").with_attribute("text", "hi"))
            .unwrap();
        assert!(!plain.is_category_label());
    }
}
