//! The toolbox: category menu, flyout visibility, and the delete area.
//!
//! Three pieces of state move together here: which category is selected,
//! whether the flyout is hidden, and what screen rectangle counts as the
//! delete area. Every public transition updates all three before it returns.
//!
//! The flyout always holds the contents of every category, each preceded by
//! a synthetic label. Selecting a category scrolls to its label; hiding the
//! flyout never re-renders it.

mod trigger;


pub use trigger::{ToggleTrigger, TrashIndicator, TriggerState};

use blockpal_ui::{Point, Rectangle, Size};

use crate::category_menu::CategoryMenu;
use crate::config::{ToolboxPosition, WorkspaceOptions};
use crate::constants::{DELETE_AREA_EXTENT, TOOLBOX_WIDTH};
use crate::error::ToolboxError;
use crate::flyout::{CategoryScrollPosition, Flyout, FlyoutEntry};
use crate::model::{Category, ContentItem, Contents};
use crate::tree::ToolboxTree;

/// Coordinates category selection, flyout visibility and the delete area.
#[derive(Debug)]
pub struct Toolbox<F: Flyout> {
    options: WorkspaceOptions,
    /// Screen edge after right-to-left mirroring
    position: ToolboxPosition,
    flyout: F,
    menu: CategoryMenu,
    /// Index into `menu`; `None` until the first populate with categories
    selected: Option<usize>,
    is_flyout_hidden: bool,
    trigger: ToggleTrigger,
    trash: TrashIndicator,
    viewport: Size,
    initialized: bool,
    /// Screen bounds of the toolbox; `None` until the first layout pass
    bounds: Option<Rectangle>,
}

impl<F: Flyout> Toolbox<F> {
    pub fn new(options: WorkspaceOptions, flyout: F) -> Self {
        let position = options.effective_position();
        Self {
            position,
            menu: CategoryMenu::new(position.is_horizontal()),
            trigger: ToggleTrigger::new(&options),
            trash: TrashIndicator::default(),
            viewport: options.viewport,
            options,
            flyout,
            selected: None,
            is_flyout_hidden: false,
            initialized: false,
            bounds: None,
        }
    }

    /// Populate from `tree`, render the flyout and select the first category.
    pub fn init(&mut self, tree: &ToolboxTree) -> Result<(), ToolboxError> {
        if self.initialized {
            return Err(ToolboxError::AlreadyInitialized);
        }
        self.populate(tree);
        self.initialized = true;
        log::debug!("Toolbox initialized with {} categories", self.menu.len());
        Ok(())
    }

    /// Rebuild from a new tree (for example after a role switch).
    ///
    /// Selection resets to the first category. A hidden flyout stays hidden.
    pub fn repopulate(&mut self, tree: &ToolboxTree) {
        self.populate(tree);
        log::debug!(
            "Toolbox repopulated with {} categories (flyout hidden: {})",
            self.menu.len(),
            self.is_flyout_hidden
        );
    }

    fn populate(&mut self, tree: &ToolboxTree) {
        self.menu.populate(tree);
        self.selected = None;
        self.show_all();
        if !self.menu.is_empty() {
            self.mark_selected(0);
        }
        if self.is_flyout_hidden {
            self.flyout.hide();
        }
        self.layout();
    }

    /// Re-render the flyout from the current categories, keeping selection
    /// and visibility. Used when a custom category's contents change.
    pub fn refresh(&mut self) {
        self.show_all();
        if self.is_flyout_hidden {
            self.flyout.hide();
        }
    }

    /// Hand every category's contents to the flyout, each behind its label.
    fn show_all(&mut self) {
        let mut entries = Vec::new();
        for category in self.menu.categories() {
            entries.push(FlyoutEntry::Item(ContentItem::category_label(
                category.id(),
                category.name(),
                category.show_status_button(),
            )));
            match category.contents() {
                Contents::Items(items) => {
                    entries.extend(items.iter().cloned().map(FlyoutEntry::Item));
                }
                Contents::Custom(token) => entries.push(FlyoutEntry::Provider(token.to_string())),
            }
        }
        self.flyout.show(&entries);
    }

    fn mark_selected(&mut self, index: usize) {
        if let Some(previous) = self.selected {
            if let Some(category) = self.menu.get_mut(previous) {
                category.set_selected(false);
            }
        }
        if let Some(category) = self.menu.get_mut(index) {
            category.set_selected(true);
            self.selected = Some(index);
        }
    }

    /// Select the category at `index`, revealing the flyout if it was hidden.
    ///
    /// # Panics
    /// Panics if `index` is not a category of the menu.
    pub fn select_category(&mut self, index: usize, should_scroll: bool) {
        assert!(
            index < self.menu.len(),
            "category index {} out of range ({} categories)",
            index,
            self.menu.len()
        );
        self.mark_selected(index);

        if self.is_flyout_hidden {
            self.reveal();
        }
        if should_scroll {
            self.scroll_to_index(index);
        }
        log::debug!("Selected category {}", index);
    }

    /// Select and scroll to the category with `id`.
    pub fn set_selected_category_by_id(&mut self, id: &str) -> Result<(), ToolboxError> {
        let index = self
            .menu
            .index_of_id(id)
            .ok_or_else(|| ToolboxError::unknown(id))?;
        self.select_category(index, true);
        Ok(())
    }

    /// Select and scroll to the category named `name`.
    pub fn set_selected_category_by_name(&mut self, name: &str) -> Result<(), ToolboxError> {
        let index = self
            .menu
            .index_of_name(name)
            .ok_or_else(|| ToolboxError::unknown(name))?;
        self.select_category(index, true);
        Ok(())
    }

    /// Show the flyout if hidden, hide it if shown, then lay out again.
    pub fn toggle_flyout_visibility(&mut self) {
        if self.is_flyout_hidden {
            self.reveal();
            if let Some(index) = self.selected {
                self.scroll_to_index(index);
            }
        } else {
            self.flyout.hide();
            self.trigger.unfold();
            self.is_flyout_hidden = true;
            self.layout();
        }
        log::debug!("Flyout hidden: {}", self.is_flyout_hidden);
    }

    /// Re-render and show a hidden flyout, then lay out for the shown state.
    fn reveal(&mut self) {
        self.show_all();
        self.trigger.fold();
        self.is_flyout_hidden = false;
        self.layout();
    }

    pub fn is_flyout_hidden(&self) -> bool {
        self.is_flyout_hidden
    }

    /// Window resize.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.layout();
    }

    /// Recompute the toolbox bounds and move the flyout next to them.
    fn layout(&mut self) {
        let bounds = self.compute_bounds();
        self.bounds = Some(bounds);
        self.flyout.position(bounds, self.viewport);
    }

    fn compute_bounds(&self) -> Rectangle {
        let vp = self.viewport;
        if self.position.is_horizontal() {
            let height = self.menu.height();
            let y = match self.position {
                ToolboxPosition::Top => 0.0,
                _ => vp.height - height,
            };
            Rectangle::new(0.0, y, vp.width, height)
        } else {
            let x = match self.position {
                ToolboxPosition::Right => vp.width - TOOLBOX_WIDTH,
                _ => 0.0,
            };
            Rectangle::new(x, 0.0, TOOLBOX_WIDTH, vp.height)
        }
    }

    /// Screen bounds of the toolbox, once laid out.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.map_or(0.0, |b| b.width)
    }

    /// Height of the category menu, not including the flyout.
    pub fn height(&self) -> f32 {
        self.menu.height()
    }

    /// The rectangle in which a dropped block is deleted.
    ///
    /// A visible, non-closing flyout is itself the delete area. Otherwise the
    /// area runs from the toolbox's inner edge out past the screen edge and
    /// spans the whole perpendicular axis. `None` before `init`.
    pub fn get_deletion_rect(&self) -> Option<Rectangle> {
        if !self.initialized {
            return None;
        }
        let tb = self.bounds?;
        if !self.flyout.auto_close() && !self.is_flyout_hidden {
            return Some(self.flyout.client_rect());
        }

        let big = DELETE_AREA_EXTENT;
        let rect = match self.position {
            ToolboxPosition::Left => Rectangle::new(-big, -big, big + tb.x + tb.width, 2.0 * big),
            ToolboxPosition::Right => Rectangle::new(tb.x, -big, big + tb.width, 2.0 * big),
            ToolboxPosition::Top => Rectangle::new(-big, -big, 2.0 * big, big + tb.y + tb.height),
            ToolboxPosition::Bottom => Rectangle::new(-big, tb.y, 2.0 * big, big + tb.height),
        };
        Some(rect)
    }

    /// Whether a block dropped at `point` would be deleted.
    pub fn is_delete_area(&self, point: Point) -> bool {
        self.get_deletion_rect()
            .is_some_and(|rect| rect.contains(point))
    }

    /// A block drag started.
    pub fn drag_start(&mut self) {
        self.trash.show();
    }

    /// The dragged block moved to `point`. Returns whether it is over the
    /// delete area, opening or closing the trash indicator to match.
    pub fn drag_move(&mut self, point: Point) -> bool {
        let inside = self.is_delete_area(point);
        if inside {
            self.trash.open();
        } else {
            self.trash.close();
        }
        inside
    }

    /// The drag ended.
    pub fn drag_end(&mut self) {
        self.trash.close();
        self.trash.hide();
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected.and_then(|index| self.menu.get(index))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn get_selected_category_id(&self) -> Option<&str> {
        self.selected_category().map(Category::id)
    }

    pub fn get_selected_category_name(&self) -> Option<&str> {
        self.selected_category().map(Category::name)
    }

    pub fn get_category_by_index(&self, index: usize) -> Option<&Category> {
        self.menu.get(index)
    }

    fn scroll_entry_by_id(&self, id: &str) -> Option<&CategoryScrollPosition> {
        self.flyout
            .category_scroll_positions()
            .iter()
            .find(|pos| pos.category_id == id)
    }

    fn scroll_entry_by_name(&self, name: &str) -> Option<&CategoryScrollPosition> {
        self.flyout
            .category_scroll_positions()
            .iter()
            .find(|pos| pos.category_name == name)
    }

    pub fn get_category_position_by_id(&self, id: &str) -> Option<f32> {
        self.scroll_entry_by_id(id).map(|pos| pos.position)
    }

    pub fn get_category_position_by_name(&self, name: &str) -> Option<f32> {
        self.scroll_entry_by_name(name).map(|pos| pos.position)
    }

    pub fn get_category_length_by_id(&self, id: &str) -> Option<f32> {
        self.scroll_entry_by_id(id).map(|pos| pos.length)
    }

    pub fn get_category_length_by_name(&self, name: &str) -> Option<f32> {
        self.scroll_entry_by_name(name).map(|pos| pos.length)
    }

    /// How far the flyout is scrolled past the top of the selected category.
    pub fn get_category_scroll_offset(&self) -> Option<f32> {
        let id = self.get_selected_category_id()?;
        let position = self.get_category_position_by_id(id)?;
        Some(self.flyout.scroll_pos() - position)
    }

    pub fn set_flyout_scroll_pos(&mut self, offset: f32) {
        self.flyout.set_scroll_pos(offset);
    }

    /// Show the flyout and scroll to category `id`. A hidden flyout is
    /// revealed. Returns whether the category has a scroll entry.
    pub fn scroll_to_category_by_id(&mut self, id: &str) -> bool {
        if self.scroll_entry_by_id(id).is_none() {
            return false;
        }
        self.show_for_scroll();
        // Revealing re-renders, so look the position up again
        match self.get_category_position_by_id(id) {
            Some(position) => {
                self.flyout.scroll_to(position);
                true
            }
            None => false,
        }
    }

    /// Show the flyout and scroll to the category named `name`.
    pub fn scroll_to_category_by_name(&mut self, name: &str) -> bool {
        if self.scroll_entry_by_name(name).is_none() {
            return false;
        }
        self.show_for_scroll();
        match self.get_category_position_by_name(name) {
            Some(position) => {
                self.flyout.scroll_to(position);
                true
            }
            None => false,
        }
    }

    fn show_for_scroll(&mut self) {
        if self.is_flyout_hidden {
            self.reveal();
        } else {
            self.flyout.set_visible(true);
        }
    }

    fn scroll_to_index(&mut self, index: usize) {
        let Some(id) = self.menu.get(index).map(|c| c.id().to_string()) else {
            return;
        };
        if !self.scroll_to_category_by_id(&id) {
            log::warn!("Category '{}' has no scroll position in the flyout", id);
        }
    }

    pub fn category_menu(&self) -> &CategoryMenu {
        &self.menu
    }

    pub fn flyout(&self) -> &F {
        &self.flyout
    }

    /// Mutable flyout access for host-side setup such as provider registration.
    pub fn flyout_mut(&mut self) -> &mut F {
        &mut self.flyout
    }

    pub fn trigger(&self) -> &ToggleTrigger {
        &self.trigger
    }

    pub fn trash(&self) -> &TrashIndicator {
        &self.trash
    }

    pub fn options(&self) -> &WorkspaceOptions {
        &self.options
    }

    /// Edge the toolbox sits on, after right-to-left mirroring.
    pub fn toolbox_position(&self) -> ToolboxPosition {
        self.position
    }

    pub fn is_horizontal(&self) -> bool {
        self.position.is_horizontal()
    }
}
