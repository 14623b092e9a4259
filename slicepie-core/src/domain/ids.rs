use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque cofounder key. Unique within a session; carries no ordering meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CofounderId(pub String);

impl CofounderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for CofounderId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CofounderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CofounderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source. Ids handed out are never reused, even after removals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> CofounderId {
        let id = CofounderId::from(self.next);
        self.next += 1;
        id
    }

    /// Ensure future ids are past any numeric id already in use.
    pub fn observe(&mut self, id: &CofounderId) {
        if let Ok(n) = id.as_str().parse::<u64>() {
            if n >= self.next {
                self.next = n + 1;
            }
        }
    }

    /// Peek at the number the next id will use.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
