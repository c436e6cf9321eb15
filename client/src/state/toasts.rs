//! Queue of visible toast notifications.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod tests;

use records::Toast;

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_DISMISS_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    items: Vec<ToastEntry>,
}

impl ToastState {
    /// Queue a toast and return the id used to dismiss it.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(ToastEntry { id, toast });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|entry| entry.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[ToastEntry] {
        &self.items
    }
}
