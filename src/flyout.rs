//! The flyout: the scrollable panel that lists every category's templates.
//!
//! The toolbox drives a flyout only through the [`Flyout`] trait. The
//! per-category scroll table is owned by the flyout and exposed read-only.
//! [`StackFlyout`] is an in-memory implementation that lays items out along a
//! single axis; it backs the headless driver and the tests.

use std::collections::HashMap;
use std::fmt;

use blockpal_ui::{Rectangle, Size};

use crate::config::{ToolboxPosition, WorkspaceOptions};
use crate::constants::{CATEGORY_MENU_WIDTH, FLYOUT_WIDTH, HORIZONTAL_FLYOUT_HEIGHT};
use crate::model::{ContentItem, ContentKind};

/// One entry handed to [`Flyout::show`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlyoutEntry {
    /// A concrete template item (or synthetic category label)
    Item(ContentItem),
    /// Token of a custom category, expanded by the flyout
    Provider(String),
}

/// Where a category starts in the flyout and how much room it takes.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScrollPosition {
    pub category_id: String,
    pub category_name: String,
    pub position: f32,
    pub length: f32,
}

/// Commands the toolbox issues to its flyout.
pub trait Flyout {
    /// Render `entries`, replacing previous contents, and make the flyout visible.
    fn show(&mut self, entries: &[FlyoutEntry]);

    fn hide(&mut self);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Scroll so that `offset` is at the leading edge.
    fn scroll_to(&mut self, offset: f32);

    /// Jump to `offset` without animation.
    fn set_scroll_pos(&mut self, offset: f32) {
        self.scroll_to(offset);
    }

    fn scroll_pos(&self) -> f32;

    /// Screen rectangle the flyout occupies.
    fn client_rect(&self) -> Rectangle;

    /// Per-category scroll table for the current contents.
    fn category_scroll_positions(&self) -> &[CategoryScrollPosition];

    /// Whether the flyout closes itself after a block is taken from it.
    fn auto_close(&self) -> bool;

    /// Lay the flyout out next to the toolbox.
    fn position(&mut self, toolbox_bounds: Rectangle, viewport: Size);
}

/// Options a flyout is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyoutOptions {
    /// Edge of the toolbox the flyout opens from, already RTL-mirrored
    pub toolbox_position: ToolboxPosition,
    pub auto_close: bool,
}

impl From<&WorkspaceOptions> for FlyoutOptions {
    fn from(options: &WorkspaceOptions) -> Self {
        Self {
            toolbox_position: options.effective_position(),
            auto_close: options.flyout_auto_close,
        }
    }
}

/// Nominal item sizes along the flyout's scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyoutMetrics {
    pub label: f32,
    pub block: f32,
    pub button: f32,
    pub text: f32,
    /// Space after each item
    pub gap: f32,
}

impl Default for FlyoutMetrics {
    fn default() -> Self {
        Self {
            label: 40.0,
            block: 48.0,
            button: 40.0,
            text: 24.0,
            gap: 8.0,
        }
    }
}

impl FlyoutMetrics {
    /// Extent of an item along the scroll axis. Separators only add space.
    fn extent(&self, kind: ContentKind) -> f32 {
        match kind {
            ContentKind::Label => self.label,
            ContentKind::Block | ContentKind::Shadow => self.block,
            ContentKind::Button => self.button,
            ContentKind::Text => self.text,
            ContentKind::Sep => 0.0,
        }
    }
}

/// Generates the contents of a custom category.
pub type ProviderFn = Box<dyn Fn() -> Vec<ContentItem>>;

/// Custom category providers keyed by token.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, ProviderFn>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the provider for `token`.
    pub fn register(
        &mut self,
        token: impl Into<String>,
        provider: impl Fn() -> Vec<ContentItem> + 'static,
    ) {
        self.providers.insert(token.into(), Box::new(provider));
    }

    /// Expand `token`; unknown tokens yield nothing.
    pub fn expand(&self, token: &str) -> Vec<ContentItem> {
        match self.providers.get(token) {
            Some(provider) => provider(),
            None => {
                log::warn!("No provider registered for custom category '{}'", token);
                Vec::new()
            }
        }
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<_> = self.providers.keys().collect();
        tokens.sort();
        f.debug_struct("ProviderRegistry")
            .field("tokens", &tokens)
            .finish()
    }
}

/// An item after layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub item: ContentItem,
    /// Leading edge along the scroll axis
    pub offset: f32,
    pub extent: f32,
}

/// Single-axis flyout that computes positions from [`FlyoutMetrics`].
#[derive(Debug)]
pub struct StackFlyout {
    options: FlyoutOptions,
    metrics: FlyoutMetrics,
    providers: ProviderRegistry,
    items: Vec<PlacedItem>,
    scroll_positions: Vec<CategoryScrollPosition>,
    content_length: f32,
    scroll_pos: f32,
    visible: bool,
    rect: Rectangle,
}

impl StackFlyout {
    pub fn new(options: FlyoutOptions) -> Self {
        Self {
            options,
            metrics: FlyoutMetrics::default(),
            providers: ProviderRegistry::new(),
            items: Vec::new(),
            scroll_positions: Vec::new(),
            content_length: 0.0,
            scroll_pos: 0.0,
            visible: false,
            rect: Rectangle::default(),
        }
    }

    /// Builder: set item metrics.
    pub fn with_metrics(mut self, metrics: FlyoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Builder: set the custom category providers.
    pub fn with_providers(mut self, providers: ProviderRegistry) -> Self {
        self.providers = providers;
        self
    }

    pub fn providers_mut(&mut self) -> &mut ProviderRegistry {
        &mut self.providers
    }

    pub fn options(&self) -> &FlyoutOptions {
        &self.options
    }

    /// Items of the last `show`, in render order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Total length of the rendered contents along the scroll axis.
    pub fn content_length(&self) -> f32 {
        self.content_length
    }

    fn viewport_length(&self) -> f32 {
        if self.options.toolbox_position.is_horizontal() {
            self.rect.width
        } else {
            self.rect.height
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.content_length - self.viewport_length()).max(0.0)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_pos = self.scroll_pos.clamp(0.0, self.max_scroll());
    }

    fn layout(&mut self, entries: &[FlyoutEntry]) {
        self.items.clear();
        self.scroll_positions.clear();

        let mut cursor = 0.0;
        for entry in entries {
            let expanded;
            let items: &[ContentItem] = match entry {
                FlyoutEntry::Item(item) => std::slice::from_ref(item),
                FlyoutEntry::Provider(token) => {
                    expanded = self.providers.expand(token);
                    &expanded
                }
            };

            for item in items {
                if item.kind == ContentKind::Sep {
                    cursor += item
                        .attribute("gap")
                        .and_then(|gap| gap.parse::<f32>().ok())
                        .unwrap_or(self.metrics.gap);
                    continue;
                }
                if item.is_category_label() {
                    self.scroll_positions.push(CategoryScrollPosition {
                        category_id: item.attribute("id").unwrap_or_default().to_string(),
                        category_name: item.attribute("text").unwrap_or_default().to_string(),
                        position: cursor,
                        length: 0.0,
                    });
                }
                let extent = self.metrics.extent(item.kind);
                self.items.push(PlacedItem {
                    item: item.clone(),
                    offset: cursor,
                    extent,
                });
                cursor += extent + self.metrics.gap;
            }
        }
        self.content_length = cursor;

        let ends: Vec<f32> = self
            .scroll_positions
            .iter()
            .skip(1)
            .map(|next| next.position)
            .chain(std::iter::once(cursor))
            .collect();
        for (pos, end) in self.scroll_positions.iter_mut().zip(ends) {
            pos.length = end - pos.position;
        }
    }
}

impl Flyout for StackFlyout {
    fn show(&mut self, entries: &[FlyoutEntry]) {
        self.layout(entries);
        self.visible = true;
        self.clamp_scroll();
        log::debug!(
            "Flyout showing {} items in {} categories",
            self.items.len(),
            self.scroll_positions.len()
        );
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn scroll_to(&mut self, offset: f32) {
        self.scroll_pos = offset;
        self.clamp_scroll();
    }

    fn scroll_pos(&self) -> f32 {
        self.scroll_pos
    }

    fn client_rect(&self) -> Rectangle {
        self.rect
    }

    fn category_scroll_positions(&self) -> &[CategoryScrollPosition] {
        &self.scroll_positions
    }

    fn auto_close(&self) -> bool {
        self.options.auto_close
    }

    fn position(&mut self, toolbox_bounds: Rectangle, viewport: Size) {
        let tb = toolbox_bounds;
        self.rect = match self.options.toolbox_position {
            ToolboxPosition::Left => {
                Rectangle::new(tb.x + CATEGORY_MENU_WIDTH, tb.y, FLYOUT_WIDTH, tb.height)
            }
            ToolboxPosition::Right => Rectangle::new(tb.x, tb.y, FLYOUT_WIDTH, tb.height),
            ToolboxPosition::Top => {
                Rectangle::new(0.0, tb.bottom(), viewport.width, HORIZONTAL_FLYOUT_HEIGHT)
            }
            ToolboxPosition::Bottom => Rectangle::new(
                0.0,
                tb.y - HORIZONTAL_FLYOUT_HEIGHT,
                viewport.width,
                HORIZONTAL_FLYOUT_HEIGHT,
            ),
        };
        self.clamp_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::XmlElement;

    fn options() -> FlyoutOptions {
        FlyoutOptions {
            toolbox_position: ToolboxPosition::Left,
            auto_close: false,
        }
    }

    fn block(kind: &str) -> FlyoutEntry {
        let element = XmlElement::new("block").with_attribute("type", kind);
        FlyoutEntry::Item(ContentItem::from_element(&element).unwrap())
    }

    fn label(id: &str, name: &str) -> FlyoutEntry {
        FlyoutEntry::Item(ContentItem::category_label(id, name, false))
    }

    #[test]
    fn test_show_records_category_positions() {
        let mut flyout = StackFlyout::new(options());
        flyout.show(&[
            label("c1", "Motion"),
            block("move"),
            block("turn"),
            label("c2", "Looks"),
            block("say"),
        ]);

        assert!(flyout.is_visible());
        let positions = flyout.category_scroll_positions();
        assert_eq!(positions.len(), 2);
        // label 40 + gap 8, two blocks of 48 + 8
        assert_eq!(positions[0].position, 0.0);
        assert_eq!(positions[0].length, 160.0);
        assert_eq!(positions[1].category_id, "c2");
        assert_eq!(positions[1].category_name, "Looks");
        assert_eq!(positions[1].position, 160.0);
        assert_eq!(positions[1].length, 104.0);
        assert_eq!(flyout.content_length(), 264.0);
    }

    #[test]
    fn test_separator_gap_attribute() {
        let sep = XmlElement::new("sep").with_attribute("gap", "36");
        let mut flyout = StackFlyout::new(options());
        flyout.show(&[
            label("c1", "Motion"),
            FlyoutEntry::Item(ContentItem::from_element(&sep).unwrap()),
            block("move"),
        ]);
        assert_eq!(flyout.items().len(), 2);
        assert_eq!(flyout.items()[1].offset, 48.0 + 36.0);
    }

    #[test]
    fn test_provider_expansion() {
        let mut providers = ProviderRegistry::new();
        providers.register("VARIABLE", || {
            let element = XmlElement::new("block").with_attribute("type", "data_setvariableto");
            vec![ContentItem::from_element(&element).unwrap()]
        });
        let mut flyout = StackFlyout::new(options()).with_providers(providers);
        flyout.show(&[
            label("data", "Variables"),
            FlyoutEntry::Provider("VARIABLE".to_string()),
            FlyoutEntry::Provider("UNKNOWN".to_string()),
        ]);
        assert_eq!(flyout.items().len(), 2);
        assert_eq!(flyout.items()[1].item.attribute("type"), Some("data_setvariableto"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut flyout = StackFlyout::new(options());
        flyout.position(Rectangle::new(0.0, 0.0, 310.0, 100.0), Size::new(800.0, 100.0));
        flyout.show(&[label("c1", "Motion"), block("a"), block("b"), block("c")]);
        // content 40+8 + 3*(48+8) = 216, viewport 100
        flyout.scroll_to(500.0);
        assert_eq!(flyout.scroll_pos(), 116.0);
        flyout.set_scroll_pos(-20.0);
        assert_eq!(flyout.scroll_pos(), 0.0);
    }

    #[test]
    fn test_position_beside_category_menu() {
        let mut flyout = StackFlyout::new(options());
        flyout.position(Rectangle::new(0.0, 0.0, 310.0, 600.0), Size::new(1000.0, 600.0));
        assert_eq!(flyout.client_rect(), Rectangle::new(60.0, 0.0, 250.0, 600.0));

        let mut right = StackFlyout::new(FlyoutOptions {
            toolbox_position: ToolboxPosition::Right,
            ..options()
        });
        right.position(Rectangle::new(690.0, 0.0, 310.0, 600.0), Size::new(1000.0, 600.0));
        assert_eq!(right.client_rect(), Rectangle::new(690.0, 0.0, 250.0, 600.0));
    }

    #[test]
    fn test_options_follow_mirrored_edge() {
        let workspace = WorkspaceOptions {
            rtl: true,
            flyout_auto_close: true,
            ..Default::default()
        };
        let options = FlyoutOptions::from(&workspace);
        assert_eq!(options.toolbox_position, ToolboxPosition::Right);
        assert!(options.auto_close);
    }

    #[test]
    fn test_horizontal_flyout_scrolls_along_width() {
        let mut flyout = StackFlyout::new(FlyoutOptions {
            toolbox_position: ToolboxPosition::Top,
            ..options()
        });
        flyout.position(Rectangle::new(0.0, 0.0, 150.0, 60.0), Size::new(150.0, 600.0));
        assert_eq!(flyout.client_rect(), Rectangle::new(0.0, 60.0, 150.0, 120.0));
        flyout.show(&[label("c1", "Motion"), block("a"), block("b"), block("c")]);
        // content 216, viewport width 150
        flyout.scroll_to(500.0);
        assert_eq!(flyout.scroll_pos(), 66.0);
    }

    #[test]
    fn test_hide_and_set_visible() {
        let mut flyout = StackFlyout::new(options());
        assert!(!flyout.is_visible());
        flyout.show(&[]);
        assert!(flyout.is_visible());
        flyout.hide();
        assert!(!flyout.is_visible());
        flyout.set_visible(true);
        assert!(flyout.is_visible());
        assert!(!flyout.auto_close());
    }
}
