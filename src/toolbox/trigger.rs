//! Affordances owned by the toolbox: the flyout toggle trigger and the
//! trash indicator shown while a block is dragged.

use crate::config::WorkspaceOptions;
use crate::constants::{media, TRIGGER_OFFSET_HIDDEN, TRIGGER_OFFSET_SHOWN};

/// Which action the toggle trigger currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Flyout is shown; clicking hides it
    Hide,
    /// Flyout is hidden; clicking reveals it
    Show,
}

/// The button that shows and hides the flyout.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleTrigger {
    state: TriggerState,
    hide_icon: String,
    show_icon: String,
}

impl ToggleTrigger {
    pub fn new(options: &WorkspaceOptions) -> Self {
        Self {
            state: TriggerState::Hide,
            hide_icon: options.media(media::HIDE_ICON),
            show_icon: options.media(media::SHOW_ICON),
        }
    }

    /// Switch to the "hide" representation (flyout visible).
    pub fn fold(&mut self) {
        self.state = TriggerState::Hide;
    }

    /// Switch to the "show" representation (flyout hidden).
    pub fn unfold(&mut self) {
        self.state = TriggerState::Show;
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn icon_url(&self) -> &str {
        match self.state {
            TriggerState::Hide => &self.hide_icon,
            TriggerState::Show => &self.show_icon,
        }
    }

    /// CSS `right` offset of the trigger icon, in pixels.
    pub fn right_offset(&self) -> f32 {
        match self.state {
            TriggerState::Hide => TRIGGER_OFFSET_SHOWN,
            TriggerState::Show => TRIGGER_OFFSET_HIDDEN,
        }
    }
}

/// Trash icon over the delete area. Open while the dragged block is inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrashIndicator {
    visible: bool,
    open: bool,
}

impl TrashIndicator {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_representations() {
        let options = WorkspaceOptions {
            media_path: "/media/".to_string(),
            ..Default::default()
        };
        let mut trigger = ToggleTrigger::new(&options);
        assert_eq!(trigger.state(), TriggerState::Hide);
        assert_eq!(trigger.icon_url(), "/media/hide.svg");
        assert_eq!(trigger.right_offset(), -337.0);

        trigger.unfold();
        assert_eq!(trigger.state(), TriggerState::Show);
        assert_eq!(trigger.icon_url(), "/media/show.svg");
        assert_eq!(trigger.right_offset(), -86.0);

        trigger.fold();
        assert_eq!(trigger.icon_url(), "/media/hide.svg");
    }

    #[test]
    fn test_trash_indicator() {
        let mut trash = TrashIndicator::default();
        assert!(!trash.is_visible());
        trash.show();
        trash.open();
        assert!(trash.is_visible() && trash.is_open());
        trash.close();
        trash.hide();
        assert!(!trash.is_visible() && !trash.is_open());
    }
}
