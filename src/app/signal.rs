//! Observable state cells.
//!
//! A [`Signal`] owns a value and a list of listeners. Every [`Signal::set`]
//! replaces the value and then calls each listener with the new value, in
//! subscription order. Signals are single-threaded: they live on the plugin's
//! event loop and are never shared across threads.
//!
//! # Example
//!
//! ```rust
//! use formshell::app::signal::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&count);
//!
//! let mut theme = Signal::new("modern");
//! theme.subscribe(move |_| seen.set(seen.get() + 1));
//! theme.set("classic");
//!
//! assert_eq!(*theme.get(), "classic");
//! assert_eq!(count.get(), 1);
//! ```

use std::fmt;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// A value cell that notifies listeners whenever it is set.
pub struct Signal<T> {
    value: T,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T> Signal<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies every listener.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, listener) in &mut self.listeners {
            listener(&self.value);
        }
    }

    /// Registers a listener called after each `set`.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: Clone> Signal<T> {
    /// Clone of the current value.
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.value.clone()
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_receive_new_value_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut signal = Signal::new(0);

        let first = Rc::clone(&log);
        signal.subscribe(move |v| first.borrow_mut().push(format!("a{v}")));
        let second = Rc::clone(&log);
        signal.subscribe(move |v| second.borrow_mut().push(format!("b{v}")));

        signal.set(7);

        assert_eq!(*log.borrow(), vec!["a7", "b7"]);
    }

    #[test]
    fn set_with_same_value_still_notifies() {
        let hits = Rc::new(RefCell::new(0));
        let mut signal = Signal::new("x");
        let counter = Rc::clone(&hits);
        signal.subscribe(move |_| *counter.borrow_mut() += 1);

        signal.set("x");
        signal.set("x");

        assert_eq!(*hits.borrow(), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let hits = Rc::new(RefCell::new(0));
        let mut signal = Signal::new(1);
        let counter = Rc::clone(&hits);
        let id = signal.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.set(2);

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(signal.listener_count(), 0);
        assert_eq!(signal.snapshot(), 2);
    }
}
