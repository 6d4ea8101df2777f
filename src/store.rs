use crate::session::GameSession;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Identifies one chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// At most one live session per conversation.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<ConversationId, GameSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ConversationId) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &ConversationId) -> Option<&mut GameSession> {
        self.sessions.get_mut(id)
    }

    /// Creates or replaces the conversation's session, returning the previous one.
    pub fn insert(&mut self, id: ConversationId, session: GameSession) -> Option<GameSession> {
        self.sessions.insert(id, session)
    }

    /// Returns the conversation's session, creating it with `create` if there is none.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        id: &ConversationId,
        create: impl FnOnce() -> Result<GameSession, E>,
    ) -> Result<&mut GameSession, E> {
        match self.sessions.entry(id.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(create()?)),
        }
    }

    pub fn remove(&mut self, id: &ConversationId) -> Option<GameSession> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;
    use std::num::NonZeroUsize;

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::parse(secret).unwrap(), NonZeroUsize::new(5).unwrap())
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut store = SessionStore::new();
        let id = ConversationId::new("chat-1");
        assert!(store.insert(id.clone(), session("забор")).is_none());

        let previous = store.insert(id.clone(), session("игрок")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(previous.revealed_secret().is_none());

        let current = store.get_mut(&id).unwrap();
        current.submit_guess("игрок").unwrap();
        assert!(store.get(&id).unwrap().is_solved());
    }

    #[test]
    fn test_sessions_are_isolated_per_conversation() {
        let mut store = SessionStore::new();
        let alice = ConversationId::new("alice");
        let bob = ConversationId::new("bob");
        store.insert(alice.clone(), session("забор"));
        store.insert(bob.clone(), session("забор"));

        store.get_mut(&alice).unwrap().submit_guess("игрок").unwrap();
        assert_eq!(store.get(&alice).unwrap().tries_used(), 1);
        assert_eq!(store.get(&bob).unwrap().tries_used(), 0);
    }

    #[test]
    fn test_get_or_try_insert_with_creates_once() {
        let mut store = SessionStore::new();
        let id = ConversationId::new("chat");
        let mut calls = 0;
        for _ in 0..2 {
            let created: Result<&mut GameSession, ()> = store.get_or_try_insert_with(&id, || {
                calls += 1;
                Ok(session("забор"))
            });
            assert!(created.is_ok());
        }
        assert_eq!(calls, 1);

        let other = ConversationId::new("other");
        let failed = store.get_or_try_insert_with(&other, || Err("no words"));
        assert_eq!(failed.err(), Some("no words"));
        assert!(store.get(&other).is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = SessionStore::new();
        let id = ConversationId::new("chat");
        store.insert(id.clone(), session("забор"));
        assert!(store.get(&id).is_some());
        assert!(store.remove(&id).is_some());
        assert!(store.is_empty());
        assert!(store.remove(&id).is_none());
    }
}
