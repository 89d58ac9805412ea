//! One-shot flash messages carried across the POST → redirect → GET hop.
//!
//! The store is an explicit key-value handoff: `stash` returns an opaque
//! token placed in the redirect query, the next render `take`s it, and the
//! entry is gone. Nothing here is readable twice.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Entries a client never came back for are dropped after this long.
const FLASH_TTL: Duration = Duration::from_secs(120);

/// Outcome message shown once on the next render of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

struct Slot {
    flash: Flash,
    stashed_at: Instant,
}

/// Token-keyed store of pending flash messages. Shared across request
/// handlers behind an `Arc`; tokens are process-local and single-use.
#[derive(Default)]
pub struct FlashStore {
    next_token: AtomicU64,
    slots: Mutex<HashMap<u64, Slot>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a flash and return the token to carry in the redirect.
    /// Expired leftovers are pruned on the way in, keeping the map bounded
    /// even when clients abandon the redirect.
    pub fn stash(&self, flash: Flash) -> u64 {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let now = Instant::now();
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.retain(|_, slot| now.duration_since(slot.stashed_at) < FLASH_TTL);
        slots.insert(
            token,
            Slot {
                flash,
                stashed_at: now,
            },
        );
        token
    }

    /// Remove and return the flash for a token. A second take of the same
    /// token (or an unknown token) yields `None`.
    pub fn take(&self, token: u64) -> Option<Flash> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.remove(&token).map(|slot| slot.flash)
    }
}
