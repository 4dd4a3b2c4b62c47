//! Ordered category list backing the palette's category menu.

use crate::constants::{CATEGORY_ROW_HEIGHT, HORIZONTAL_MENU_HEIGHT};
use crate::model::Category;
use crate::tree::ToolboxTree;

/// The categories of the current tree, in tree order. Index 0 is the default
/// selection after every populate.
#[derive(Debug, Clone, Default)]
pub struct CategoryMenu {
    categories: Vec<Category>,
    horizontal: bool,
}

impl CategoryMenu {
    pub fn new(horizontal: bool) -> Self {
        Self {
            categories: Vec::new(),
            horizontal,
        }
    }

    /// Replace every category with one per `<category>` child of `tree`.
    pub fn populate(&mut self, tree: &ToolboxTree) {
        self.dispose();
        self.categories = tree.category_nodes().map(Category::from_node).collect();
        log::debug!("Category menu populated with {} categories", self.categories.len());
    }

    /// Drop every category. Safe to call when empty.
    pub fn dispose(&mut self) {
        self.categories.clear();
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Category> {
        self.categories.get_mut(index)
    }

    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id() == id)
    }

    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    /// Indices of categories currently marked selected.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    /// Rendered height: one row per category, or a single strip when horizontal.
    pub fn height(&self) -> f32 {
        if self.horizontal {
            HORIZONTAL_MENU_HEIGHT
        } else {
            self.categories.len() as f32 * CATEGORY_ROW_HEIGHT
        }
    }
}
