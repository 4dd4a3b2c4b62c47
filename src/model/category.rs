//! Category data model for palette categories.

use blockpal_ui::{hue_to_rgb, Color};

use super::content::ContentItem;
use crate::tree::XmlElement;

/// What a category lists: literal items, or a token naming a custom provider
/// (such as `VARIABLE` or `PROCEDURE`) that generates them on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contents<'a> {
    Items(&'a [ContentItem]),
    Custom(&'a str),
}

/// How the category's menu bubble is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryBubble {
    /// Background image from the category's icon URI
    Icon(String),
    /// Coloured disc
    Colour { fill: Color, border: Color },
}

/// One selectable entry in the category menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: String,
    name: String,
    colour: Color,
    secondary_colour: Color,
    has_colours: bool,
    custom: Option<String>,
    icon_uri: Option<String>,
    show_status_button: bool,
    contents: Vec<ContentItem>,
    selected: bool,
}

impl Category {
    /// Build a category from a `<category>` node.
    ///
    /// Non-custom categories keep the node's recognized content children in
    /// source order; other children are dropped.
    pub fn from_node(node: &XmlElement) -> Self {
        let id = node.attribute("id").unwrap_or_default().to_string();
        let name = node.attribute("name").unwrap_or_default().to_string();
        if id.is_empty() {
            log::warn!("Category '{}' has no id; id lookups will not find it", name);
        }

        let (colour, secondary_colour, has_colours) = resolve_colours(node);
        let custom = node
            .attribute("custom")
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        let contents = if custom.is_some() {
            Vec::new()
        } else {
            node.children
                .iter()
                .filter_map(ContentItem::from_element)
                .collect()
        };

        Self {
            id,
            name,
            colour,
            secondary_colour,
            has_colours,
            custom,
            icon_uri: node.attribute("iconURI").map(str::to_string),
            show_status_button: node
                .attribute("showStatusButton")
                .is_some_and(|v| v.eq_ignore_ascii_case("true")),
            contents,
            selected: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colour(&self) -> Color {
        self.colour
    }

    pub fn secondary_colour(&self) -> Color {
        self.secondary_colour
    }

    /// Whether the source node carried a colour attribute.
    pub fn has_colours(&self) -> bool {
        self.has_colours
    }

    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    pub fn icon_uri(&self) -> Option<&str> {
        self.icon_uri.as_deref()
    }

    pub fn show_status_button(&self) -> bool {
        self.show_status_button
    }

    /// Get the contents of this category; callers branch on the variant.
    pub fn contents(&self) -> Contents<'_> {
        match &self.custom {
            Some(token) => Contents::Custom(token),
            None => Contents::Items(&self.contents),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the highlighted state. Does not touch the flyout.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Style classes for this category's menu item in its current state.
    pub fn menu_item_classes(&self) -> Vec<String> {
        let mut classes = vec![
            "categoryMenuItem".to_string(),
            format!("categoryId-{}", self.id),
        ];
        if self.selected {
            classes.push("categorySelected".to_string());
        }
        classes
    }

    pub fn bubble(&self) -> CategoryBubble {
        match &self.icon_uri {
            Some(uri) if !uri.is_empty() => CategoryBubble::Icon(uri.clone()),
            _ => CategoryBubble::Colour {
                fill: self.colour,
                border: self.secondary_colour,
            },
        }
    }
}

/// Resolve `colour` / `secondaryColour`. Both fall back to black when no
/// `colour` attribute exists; a missing secondary follows the primary.
fn resolve_colours(node: &XmlElement) -> (Color, Color, bool) {
    let Some(raw) = node.attribute("colour") else {
        return (Color::BLACK, Color::BLACK, false);
    };
    let colour = resolve_colour(raw);
    let secondary = node
        .attribute("secondaryColour")
        .map(resolve_colour)
        .unwrap_or(colour);
    (colour, secondary, true)
}

/// A strict `#rrggbb` is taken as is; anything else is read as a hue.
fn resolve_colour(raw: &str) -> Color {
    if let Some(colour) = Color::from_hex(raw) {
        return colour;
    }
    let hue = raw.trim().parse::<f32>().unwrap_or_else(|_| {
        log::warn!("Colour '{}' is neither #rrggbb nor a hue; using hue 0", raw);
        0.0
    });
    hue_to_rgb(hue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentKind;
    use crate::tree::ToolboxTree;

    fn first_category(xml: &str) -> Category {
        let tree = ToolboxTree::parse(xml).unwrap();
        Category::from_node(tree.category_nodes().next().unwrap())
    }

    #[test]
    fn test_category_attributes() {
        let category = first_category(
            r##"<xml><category id="c1" name="Motion" colour="#4c97ff" secondaryColour="#3373cc"
                 iconURI="media/motion.svg" showStatusButton="true"/></xml>"##,
        );
        assert_eq!(category.id(), "c1");
        assert_eq!(category.name(), "Motion");
        assert_eq!(category.colour().to_hex(), "#4c97ff");
        assert_eq!(category.secondary_colour().to_hex(), "#3373cc");
        assert!(category.has_colours());
        assert!(category.show_status_button());
        assert_eq!(category.bubble(), CategoryBubble::Icon("media/motion.svg".to_string()));
        assert!(!category.is_selected());
    }

    #[test]
    fn test_colour_fallback_to_black() {
        let category = first_category(r#"<xml><category id="c1" name="Motion"/></xml>"#);
        assert_eq!(category.colour().to_hex(), "#000000");
        assert_eq!(category.secondary_colour().to_hex(), "#000000");
        assert!(!category.has_colours());
    }

    #[test]
    fn test_hue_colours() {
        let category =
            first_category(r#"<xml><category id="c" name="C" colour="120" secondaryColour="0"/></xml>"#);
        assert_eq!(category.colour().to_hex(), "#5ba55b");
        assert_eq!(category.secondary_colour().to_hex(), "#a55b5b");
        assert_eq!(
            category.bubble(),
            CategoryBubble::Colour {
                fill: category.colour(),
                border: category.secondary_colour()
            }
        );
    }

    #[test]
    fn test_malformed_colours_do_not_panic() {
        let category = first_category(
            r##"<xml><category id="c" name="C" colour="#12" secondaryColour="teal"/></xml>"##,
        );
        assert_eq!(category.colour(), hue_to_rgb(0.0));
        assert_eq!(category.secondary_colour(), hue_to_rgb(0.0));
    }

    #[test]
    fn test_missing_secondary_follows_primary() {
        let category = first_category(r##"<xml><category id="c" name="C" colour="#ff0000"/></xml>"##);
        assert_eq!(category.secondary_colour(), Color::RED);
    }

    #[test]
    fn test_contents_filtered_in_order() {
        let category = first_category(
            r#"<xml><category id="c" name="C">
                 <block type="a"/><mutation/><label text="l"/><shadow type="s"/>
                 <category name="nested"/><button text="b"/><sep/><text>t</text>
               </category></xml>"#,
        );
        let Contents::Items(items) = category.contents() else {
            panic!("expected literal contents");
        };
        let kinds: Vec<_> = items.iter().map(|item| item.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ContentKind::Block,
                ContentKind::Label,
                ContentKind::Shadow,
                ContentKind::Button,
                ContentKind::Sep,
                ContentKind::Text,
            ]
        );
    }

    #[test]
    fn test_custom_category_ignores_children() {
        let category = first_category(
            r#"<xml><category id="v" name="Variables" custom="VARIABLE"><block type="x"/></category></xml>"#,
        );
        assert!(category.is_custom());
        assert_eq!(category.contents(), Contents::Custom("VARIABLE"));
    }

    #[test]
    fn test_selection_classes() {
        let mut category = first_category(r#"<xml><category id="c1" name="Motion"/></xml>"#);
        assert_eq!(category.menu_item_classes(), vec!["categoryMenuItem", "categoryId-c1"]);
        category.set_selected(true);
        assert!(category.is_selected());
        assert_eq!(
            category.menu_item_classes(),
            vec!["categoryMenuItem", "categoryId-c1", "categorySelected"]
        );
    }
}
