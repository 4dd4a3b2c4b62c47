//! Category tree input.
//!
//! The toolbox is described by an XML document whose root's direct
//! `<category>` children become palette categories:
//!
//! ```xml
//! <xml>
//!   <category name="Motion" id="motion" colour="#4C97FF" secondaryColour="#3373CC">
//!     <block type="motion_movesteps"/>
//!     <sep gap="36"/>
//!   </category>
//!   <category name="Variables" id="data" colour="#FF8C1A" secondaryColour="#DB6E00" custom="VARIABLE"/>
//! </xml>
//! ```
//!
//! Parsing keeps the document generic; deciding which tags matter is left to
//! the category menu and the categories themselves.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ToolboxError;

/// One element of a parsed XML document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub tag: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    /// Concatenated non-whitespace text content, if any
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder: append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder: append a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute value by exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Case-insensitive tag comparison.
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

/// A parsed toolbox definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolboxTree {
    root: XmlElement,
}

impl ToolboxTree {
    /// Wrap an already-built root element.
    pub fn from_root(root: XmlElement) -> Self {
        Self { root }
    }

    /// Parse toolbox XML.
    pub fn parse(xml: &str) -> Result<Self, ToolboxError> {
        parse_document(xml).map(Self::from_root)
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Direct children tagged `category`, in document order.
    pub fn category_nodes(&self) -> impl Iterator<Item = &XmlElement> {
        self.root.children.iter().filter(|child| child.is("category"))
    }
}

fn parse_document(xml: &str) -> Result<XmlElement, ToolboxError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => stack.push(element_from_start(e)?),
            Event::Empty(ref e) => {
                let element = element_from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ToolboxError::malformed("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                push_text(&mut stack, &text);
            }
            Event::CData(ref e) => {
                let text = String::from_utf8_lossy(e);
                push_text(&mut stack, &text);
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ToolboxError::malformed(format!(
            "unclosed element <{}>",
            open.tag
        )));
    }
    root.ok_or_else(|| ToolboxError::malformed("document has no root element"))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, ToolboxError> {
    let mut element = XmlElement::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), ToolboxError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(ToolboxError::malformed("document has more than one root element"))
    }
}

fn push_text(stack: &mut [XmlElement], text: &str) {
    if text.trim().is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        current.text.get_or_insert_with(String::new).push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOLBOX: &str = r##"<?xml version="1.0"?>
<xml id="toolbox">
  <!-- palette -->
  <category name="Motion" id="motion" colour="#4C97FF" secondaryColour="#3373CC">
    <block type="motion_movesteps">
      <value name="STEPS"><shadow type="math_number"><field name="NUM">10</field></shadow></value>
    </block>
    <sep gap="36"/>
  </category>
  <CATEGORY name="Variables" id="data" custom="VARIABLE"/>
  <button text="stray"/>
</xml>"##;

    #[test]
    fn test_parse_category_children() {
        let tree = ToolboxTree::parse(TOOLBOX).expect("toolbox parses");
        assert_eq!(tree.root().tag, "xml");
        assert_eq!(tree.root().attribute("id"), Some("toolbox"));

        let categories: Vec<_> = tree.category_nodes().collect();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].attribute("name"), Some("Motion"));
        assert_eq!(categories[1].attribute("custom"), Some("VARIABLE"));
    }

    #[test]
    fn test_parse_nested_content_and_text() {
        let tree = ToolboxTree::parse(TOOLBOX).unwrap();
        let motion = tree.category_nodes().next().unwrap();
        assert_eq!(motion.children.len(), 2);

        let block = &motion.children[0];
        assert!(block.is("block"));
        let field = &block.children[0].children[0].children[0];
        assert_eq!(field.attribute("name"), Some("NUM"));
        assert_eq!(field.text.as_deref(), Some("10"));
    }

    #[test]
    fn test_parse_unescapes_attributes() {
        let tree = ToolboxTree::parse(r#"<xml><category name="Pen &amp; Ink"/></xml>"#).unwrap();
        let category = tree.category_nodes().next().unwrap();
        assert_eq!(category.attribute("name"), Some("Pen & Ink"));
    }

    #[test]
    fn test_parse_rejects_unbalanced_documents() {
        assert!(matches!(
            ToolboxTree::parse("<xml><category>"),
            Err(ToolboxError::MalformedTree { .. })
        ));
        assert!(ToolboxTree::parse("<xml></category>").is_err());
        assert!(matches!(
            ToolboxTree::parse("<!-- nothing -->"),
            Err(ToolboxError::MalformedTree { .. })
        ));
        assert!(matches!(
            ToolboxTree::parse("<xml/><xml/>"),
            Err(ToolboxError::MalformedTree { .. })
        ));
    }

    #[test]
    fn test_builder_matches_parse() {
        let built = ToolboxTree::from_root(
            XmlElement::new("xml").with_child(
                XmlElement::new("category")
                    .with_attribute("name", "Looks")
                    .with_attribute("id", "looks"),
            ),
        );
        let parsed = ToolboxTree::parse(r#"<xml><category name="Looks" id="looks"></category></xml>"#)
            .unwrap();
        assert_eq!(built, parsed);
    }
}
