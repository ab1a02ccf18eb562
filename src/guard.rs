//! Generation counters that let a view drop responses it no longer wants.
//!
//! Every request takes a [`Ticket`]. Starting a newer request or leaving the
//! view bumps the counter for that key, so the older ticket goes stale and
//! its response is discarded instead of overwriting newer state.
//!
//! Checking a ticket and writing the dialogue state are separate awaits, so
//! both sides hold the chat's [`ViewGuards::section`] while they do it.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as SectionLock, OwnedMutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    generation: u64,
}

impl<K: Copy> Ticket<K> {
    pub fn key(&self) -> K {
        self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct Generations<K> {
    inner: Arc<Mutex<HashMap<K, u64>>>,
}

impl<K> Clone for Generations<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for Generations<K> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K: Copy + Eq + Hash> Generations<K> {
    /// Starts a request for `key`; any older ticket for it becomes stale.
    pub fn begin(&self, key: K) -> Ticket<K> {
        let generation = self.bump(key);
        Ticket { key, generation }
    }

    /// Marks every outstanding ticket for `key` stale.
    pub fn invalidate(&self, key: K) {
        self.bump(key);
    }

    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.inner.lock().get(&ticket.key).copied() == Some(ticket.generation)
    }

    fn bump(&self, key: K) -> u64 {
        let mut map = self.inner.lock();
        let counter = map.entry(key).or_insert(0);
        *counter += 1;
        *counter
    }
}

/// The two request kinds a chat can have in flight.
#[derive(Debug)]
pub struct ViewGuards<K> {
    pub quiz: Generations<K>,
    pub trivia: Generations<K>,
    sections: Arc<Mutex<HashMap<K, Arc<SectionLock<()>>>>>,
}

impl<K> Clone for ViewGuards<K> {
    fn clone(&self) -> Self {
        Self {
            quiz: self.quiz.clone(),
            trivia: self.trivia.clone(),
            sections: Arc::clone(&self.sections),
        }
    }
}

impl<K> Default for ViewGuards<K> {
    fn default() -> Self {
        Self {
            quiz: Generations::default(),
            trivia: Generations::default(),
            sections: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K: Copy + Eq + Hash> ViewGuards<K> {
    /// Exclusive access to `key`'s dialogue state. Hold it across the ticket
    /// check and the state write that depends on it.
    pub async fn section(&self, key: K) -> OwnedMutexGuard<()> {
        let lock = Arc::clone(self.sections.lock().entry(key).or_default());
        lock.lock_owned().await
    }

    /// Called when the learner navigates away from whatever they were on.
    pub fn leave(&self, key: K) {
        self.quiz.invalidate(key);
        self.trivia.invalidate(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let generations = Generations::default();
        let ticket = generations.begin(1u64);
        assert!(generations.is_current(&ticket));
    }

    #[test]
    fn newer_request_makes_older_stale() {
        let generations = Generations::default();
        let first = generations.begin(1u64);
        let second = generations.begin(1u64);
        assert!(!generations.is_current(&first));
        assert!(generations.is_current(&second));
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn invalidate_makes_ticket_stale() {
        let generations = Generations::default();
        let ticket = generations.begin(7i64);
        generations.invalidate(7);
        assert!(!generations.is_current(&ticket));
    }

    #[test]
    fn keys_are_independent() {
        let generations = Generations::default();
        let a = generations.begin(1u64);
        generations.begin(2u64);
        generations.invalidate(3u64);
        assert!(generations.is_current(&a));
    }

    #[test]
    fn leave_clears_both_kinds() {
        let guards = ViewGuards::default();
        let quiz = guards.quiz.begin(5u64);
        let trivia = guards.trivia.begin(5u64);
        guards.leave(5);
        assert!(!guards.quiz.is_current(&quiz));
        assert!(!guards.trivia.is_current(&trivia));
    }

    #[tokio::test]
    async fn leaving_before_delivery_discards_the_reply() {
        let guards = ViewGuards::default();
        let ticket = guards.quiz.begin(9u64);

        // the learner leaves while the reply is still being generated
        {
            let _section = guards.section(9).await;
            guards.leave(9);
        }

        let _section = guards.section(9).await;
        assert!(!guards.quiz.is_current(&ticket));
    }

    #[tokio::test]
    async fn leave_waits_for_an_open_section() {
        let guards = ViewGuards::default();
        let ticket = guards.quiz.begin(3u64);
        let delivery = guards.section(3).await;

        let leaver = {
            let guards = guards.clone();
            tokio::spawn(async move {
                let _section = guards.section(3).await;
                guards.leave(3);
            })
        };
        tokio::task::yield_now().await;

        // the delivery still owns the chat, so its check holds until it lets go
        assert!(guards.quiz.is_current(&ticket));
        drop(delivery);
        leaver.await.unwrap();
        assert!(!guards.quiz.is_current(&ticket));
    }

    #[tokio::test]
    async fn sections_are_per_key() {
        let guards = ViewGuards::default();
        let _first = guards.section(1u64).await;
        let _second = guards.section(2u64).await;
    }

    #[test]
    fn clones_share_counters() {
        let generations = Generations::default();
        let ticket = generations.begin(1u64);
        generations.clone().invalidate(1);
        assert!(!generations.is_current(&ticket));
    }
}
