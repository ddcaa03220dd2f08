use crate::ops::store::{StoreError, TaskStore};
use crate::util::unicode;

/// Input and selection state of the category manager
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryManager {
    /// New category name being typed
    pub input: String,
    /// Cursor over the existing categories
    pub selected: usize,
}

impl CategoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the typed name (trimmed). Blank input or an exact existing name is
    /// refused and the input kept; on success the input is cleared.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<bool, StoreError> {
        let name = self.input.trim();
        if name.is_empty() || store.categories().iter().any(|c| c == name) {
            log::debug!("category input rejected: {:?}", self.input);
            return Ok(false);
        }
        let added = store.add_category(name)?;
        if added {
            self.input.clear();
        }
        Ok(added)
    }

    /// Delete a category right away. Its tasks move to the fallback category.
    pub fn delete(&mut self, store: &mut TaskStore, name: &str) -> Result<Option<usize>, StoreError> {
        let result = store.delete_category(name)?;
        self.clamp(store.categories().len());
        Ok(result)
    }

    /// Delete the category under the cursor, if any
    pub fn delete_selected(&mut self, store: &mut TaskStore) -> Result<Option<usize>, StoreError> {
        let Some(name) = store.categories().get(self.selected).cloned() else {
            return Ok(None);
        };
        self.delete(store, &name)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keep the cursor inside a list of `len` categories
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        unicode::pop_grapheme(&mut self.input);
    }
}
