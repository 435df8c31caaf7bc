//! Transient notification list.
//!
//! The queue only stores what is on screen; scheduling removal is left to
//! the caller (see `components::toast::Toaster`).

use crate::config::TOAST_DURATION_MS;
use crate::types::ToastKind;

/// Anything that can show a transient message to the user.
pub trait Notify {
    /// Show `message` for a custom duration.
    fn notify_with(&self, message: &str, kind: ToastKind, duration_ms: u32);

    /// Show `message` for the default duration.
    fn notify(&self, message: &str, kind: ToastKind) {
        self.notify_with(message, kind, TOAST_DURATION_MS);
    }
}

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id. Duplicates are kept.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: message.into(),
            kind,
            duration_ms,
        });
        self.next_id
    }

    /// Remove a toast; returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut queue = ToastQueue::new();
        let a = queue.push("Saved", ToastKind::Success, 5000);
        let b = queue.push("Saved", ToastKind::Success, 5000);
        let c = queue.push("Oops", ToastKind::Error, 1000);

        assert!(a < b && b < c);
        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["Saved", "Saved", "Oops"]);
        assert_eq!(queue.toasts()[2].kind, ToastKind::Error);
        assert_eq!(queue.toasts()[2].duration_ms, 1000);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::new();
        let a = queue.push("first", ToastKind::Success, 5000);
        let b = queue.push("second", ToastKind::Error, 5000);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);

        assert!(queue.dismiss(b));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut queue = ToastQueue::new();
        let a = queue.push("one", ToastKind::Success, 10);
        queue.dismiss(a);
        let b = queue.push("two", ToastKind::Success, 10);
        assert_ne!(a, b);
    }
}
