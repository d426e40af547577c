//! Page state types - plain data, no rendering

/// Elapsed seconds while the game is running
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerState {
    pub seconds_passed: u64,
}

impl TimerState {
    pub fn advance(&mut self) -> u64 {
        self.seconds_passed = self.seconds_passed.saturating_add(1);
        self.seconds_passed
    }

    pub fn reset(&mut self) {
        self.seconds_passed = 0;
    }
}

/// Signed click counter
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    pub count: i64,
}

impl Counter {
    pub fn increment(&mut self) -> i64 {
        self.count = self.count.wrapping_add(1);
        self.count
    }

    pub fn decrement(&mut self) -> i64 {
        self.count = self.count.wrapping_sub(1);
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Key used for the like tally
    pub fn key(&self) -> String {
        self.count.to_string()
    }
}

/// A single like tally entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeEntry {
    pub key: String,
    pub likes: u32,
}

impl LikeEntry {
    /// Line shown in the likes list
    pub fn display(&self) -> String {
        format!("Number {} has {} like(s)", self.key, self.likes)
    }
}

/// Likes per counter value, kept in order of first like.
///
/// Entries are only ever added or bumped; there is no removal.
#[derive(Clone, Debug, Default)]
pub struct LikeTracker {
    entries: Vec<LikeEntry>,
}

impl LikeTracker {
    /// Bump the tally for `key`, creating it at 1. Returns the new tally.
    pub fn like(&mut self, key: &str) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.likes = entry.likes.saturating_add(1);
            return entry.likes;
        }
        self.entries.push(LikeEntry {
            key: key.to_string(),
            likes: 1,
        });
        1
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.likes)
    }

    pub fn entries(&self) -> &[LikeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pause flag shared by the timer and the counter controls
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PauseState {
    pub is_paused: bool,
}

impl PauseState {
    /// Flip the flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.is_paused = !self.is_paused;
        self.is_paused
    }
}

/// Append-only comment feed
#[derive(Clone, Debug, Default)]
pub struct CommentLog {
    entries: Vec<String>,
}

impl CommentLog {
    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
