use std::collections::BTreeMap;

use crate::api::{ReactionCount, ReactionKey};

/// What a call to `ReactionCounterMap::toggle` did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReactionToggle {
    /// The key was absent and got inserted with a count of 1
    Inserted,
    /// The user had not reacted yet, count went up
    Incremented,
    /// The user had reacted, count went down
    Decremented,
    /// The user's reaction was the last one, the key got dropped
    Removed,
}

/// Reaction counts keyed by reaction, with the current user's flag.
///
/// No key is ever stored with a count of 0.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReactionCounterMap {
    counts: BTreeMap<ReactionKey, ReactionCount>,
}

impl ReactionCounterMap {
    pub fn new() -> ReactionCounterMap {
        ReactionCounterMap::default()
    }

    pub fn get(&self, key: &ReactionKey) -> Option<&ReactionCount> {
        self.counts.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ReactionKey, &ReactionCount)> {
        self.counts.iter()
    }

    pub fn has_user_reacted(&self, key: &ReactionKey) -> bool {
        self.counts
            .get(key)
            .map(|c| c.has_user_reacted)
            .unwrap_or(false)
    }

    pub fn toggle(&mut self, key: &ReactionKey) -> ReactionToggle {
        match self.counts.get_mut(key) {
            None => {
                self.counts.insert(
                    key.clone(),
                    ReactionCount {
                        count: 1,
                        has_user_reacted: true,
                    },
                );
                ReactionToggle::Inserted
            }
            Some(c) if c.has_user_reacted => {
                c.count = c.count.saturating_sub(1);
                if c.count == 0 {
                    self.counts.remove(key);
                    ReactionToggle::Removed
                } else {
                    c.has_user_reacted = false;
                    ReactionToggle::Decremented
                }
            }
            Some(c) => {
                c.count = c.count.saturating_add(1);
                c.has_user_reacted = true;
                ReactionToggle::Incremented
            }
        }
    }

    pub fn into_inner(self) -> BTreeMap<ReactionKey, ReactionCount> {
        self.counts
    }
}

impl From<BTreeMap<ReactionKey, ReactionCount>> for ReactionCounterMap {
    /// Drops zero entries the host may have sent
    fn from(mut counts: BTreeMap<ReactionKey, ReactionCount>) -> ReactionCounterMap {
        counts.retain(|_, c| c.count > 0);
        ReactionCounterMap { counts }
    }
}
