//! One-shot notifications carried to the next request of the same session.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// Messages drained for the current request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashMessages {
    pub success: Vec<String>,
    pub error: Vec<String>,
}

impl FlashMessages {
    pub fn is_empty(&self) -> bool {
        self.success.is_empty() && self.error.is_empty()
    }

    fn push(&mut self, kind: FlashKind, message: String) {
        match kind {
            FlashKind::Success => self.success.push(message),
            FlashKind::Error => self.error.push(message),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlashStore {
    pending: Arc<DashMap<Uuid, FlashMessages>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, session: Uuid, kind: FlashKind, message: impl Into<String>) {
        self.pending
            .entry(session)
            .or_default()
            .push(kind, message.into());
    }

    pub fn success(&self, session: Uuid, message: impl Into<String>) {
        self.push(session, FlashKind::Success, message);
    }

    pub fn error(&self, session: Uuid, message: impl Into<String>) {
        self.push(session, FlashKind::Error, message);
    }

    /// Removes and returns everything queued for the session.
    pub fn take(&self, session: Uuid) -> FlashMessages {
        self.pending
            .remove(&session)
            .map(|(_, messages)| messages)
            .unwrap_or_default()
    }

    pub fn pending_sessions(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_read_once() {
        let store = FlashStore::new();
        let session = Uuid::new_v4();

        store.success(session, "Produto salvo com sucesso!");
        store.error(session, "Produto não encontrado");

        let first = store.take(session);
        assert_eq!(first.success, vec!["Produto salvo com sucesso!"]);
        assert_eq!(first.error, vec!["Produto não encontrado"]);

        assert!(store.take(session).is_empty());
        assert_eq!(store.pending_sessions(), 0);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = FlashStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.success(alice, "ok");

        assert!(store.take(bob).is_empty());
        assert_eq!(store.take(alice).success, vec!["ok"]);
    }
}
