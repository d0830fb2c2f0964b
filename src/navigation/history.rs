//! Location history abstraction.
//!
//! # Responsibilities
//! - Expose the current location
//! - Mutate it through push/replace/back/forward
//!
//! # Design Decisions
//! - A trait seam: in a browser the provider wraps the URL bar and the
//!   session history; headless embedders and tests use `MemoryHistory`
//! - The history never resolves anything; it only owns location state

/// Abstraction over the host's URL state (the "web history" provider).
pub trait History {
    /// The current location (path, possibly with query/fragment).
    fn location(&self) -> &str;

    /// Append a new location, discarding any forward entries.
    fn push(&mut self, location: &str);

    /// Replace the current location without growing the history.
    fn replace(&mut self, location: &str);

    /// Step back one entry. Returns false at the oldest entry.
    fn back(&mut self) -> bool;

    /// Step forward one entry. Returns false at the newest entry.
    fn forward(&mut self) -> bool;
}

/// In-memory history: a stack of locations and a cursor.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Create a history positioned at the given initial location.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            stack: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Number of entries currently held (back and forward included).
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.stack[self.cursor]
    }

    fn push(&mut self, location: &str) {
        self.stack.truncate(self.cursor + 1);
        self.stack.push(location.to_string());
        self.cursor += 1;
    }

    fn replace(&mut self, location: &str) {
        self.stack[self.cursor] = location.to_string();
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.stack.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
