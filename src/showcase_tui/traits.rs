//! Core traits shared by the showcase TUI screens

/// Actions a screen hands back to the app after handling a key
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Start a new fetch cycle
    Refetch,
    /// Set status message
    SetStatus(String),
    /// No action taken
    None,
}

/// Trait for screens with navigable items
pub trait Navigable {
    /// Move selection up
    fn navigate_up(&mut self);

    /// Move selection down
    fn navigate_down(&mut self);

    /// Get currently selected index
    fn get_selected_index(&self) -> Option<usize>;

    /// Set selected index
    fn set_selected_index(&mut self, index: Option<usize>);

    /// Get total number of items
    fn get_item_count(&self) -> usize;

    /// Navigate to first item
    fn navigate_to_first(&mut self) {
        if self.get_item_count() > 0 {
            self.set_selected_index(Some(0));
        }
    }

    /// Navigate to last item
    fn navigate_to_last(&mut self) {
        let count = self.get_item_count();
        if count > 0 {
            self.set_selected_index(Some(count - 1));
        }
    }
}
