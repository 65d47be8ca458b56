//! In-memory chat state store, lives as long as the process

use std::collections::HashMap;
use teloxide::types::ChatId;
use tokio::sync::Mutex;

use crate::dialogue::ChatState;

/// What to do with a chat's record after it was modified
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persist {
    Keep,
    Remove,
}

/// Maps chat identifiers to their conversation record
#[derive(Debug, Default)]
pub struct StateStore {
    states: Mutex<HashMap<ChatId, ChatState>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the chat's record, if one exists
    pub async fn get(&self, chat_id: ChatId) -> Option<ChatState> {
        self.states.lock().await.get(&chat_id).cloned()
    }

    /// Replace the chat's record wholesale
    pub async fn put(&self, chat_id: ChatId, state: ChatState) {
        self.states.lock().await.insert(chat_id, state);
    }

    /// Run `f` against the chat's record, creating an empty one first if needed.
    ///
    /// The whole read-modify-write happens under one lock, so two updates for
    /// the same chat cannot interleave inside a transition.
    pub async fn modify<R>(
        &self,
        chat_id: ChatId,
        f: impl FnOnce(&mut ChatState) -> (R, Persist),
    ) -> R {
        let mut states = self.states.lock().await;
        let state = states.entry(chat_id).or_default();
        let (result, persist) = f(state);
        if persist == Persist::Remove {
            states.remove(&chat_id);
        }
        result
    }

    pub async fn len(&self) -> usize {
        self.states.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.states.lock().await.is_empty()
    }
}
