//! Global constants for the block palette

/// Width of the whole toolbox in vertical layout (category menu + flyout).
pub const TOOLBOX_WIDTH: f32 = 310.0;

/// Width of the category menu column in vertical layout.
pub const CATEGORY_MENU_WIDTH: f32 = 60.0;

/// Width of the flyout in vertical layout.
pub const FLYOUT_WIDTH: f32 = TOOLBOX_WIDTH - CATEGORY_MENU_WIDTH;

/// Height of one category row in the vertical category menu.
pub const CATEGORY_ROW_HEIGHT: f32 = 60.0;

/// Height of the category strip in horizontal layout.
pub const HORIZONTAL_MENU_HEIGHT: f32 = 60.0;

/// Height of the flyout in horizontal layout.
pub const HORIZONTAL_FLYOUT_HEIGHT: f32 = 120.0;

/// Offscreen padding for the deletion region. Larger than any real screen.
/// The `f32` step at this magnitude is 1.0, so the toolbox edge of the region
/// is exact only for whole-pixel toolbox bounds.
pub const DELETE_AREA_EXTENT: f32 = 10_000_000.0;

/// Toggle trigger offset (CSS `right`) while the flyout is shown.
pub const TRIGGER_OFFSET_SHOWN: f32 = -337.0;

/// Toggle trigger offset (CSS `right`) while the flyout is hidden.
pub const TRIGGER_OFFSET_HIDDEN: f32 = -86.0;

/// Media file names, relative to the configured media path.
pub mod media {
    pub const HIDE_ICON: &str = "hide.svg";
    pub const SHOW_ICON: &str = "show.svg";
    pub const INVISIBLE_ICON: &str = "invisible.svg";
    pub const PREVENT_DELETION_ICON: &str = "prevent-deletion.svg";
}
