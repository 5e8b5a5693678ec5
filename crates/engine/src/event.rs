//! Board events and the listener registry.

use std::fmt;

use crate::matcher::Match;

/// Emitted while a cascade resolves: one `Match` per removed run, then one
/// `Refill` per gravity-and-refill pass.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BoardEvent<T> {
    Match(Match<T>),
    Refill,
}

impl<T> BoardEvent<T> {
    #[must_use]
    pub fn is_refill(&self) -> bool {
        matches!(self, Self::Refill)
    }
}

pub type Listener<T> = Box<dyn FnMut(&BoardEvent<T>)>;

/// Append-only list of listeners, called in registration order.
///
/// There is no way to unregister; a listener lives as long as its board.
pub struct Listeners<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}

impl<T> Listeners<T> {
    pub fn add(&mut self, listener: impl FnMut(&BoardEvent<T>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// A panicking listener unwinds straight through to the caller; later
    /// listeners are not called.
    pub fn emit(&mut self, event: &BoardEvent<T>) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
