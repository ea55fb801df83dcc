use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

type Callback<T> = Rc<dyn Fn(T)>;

/// Subscription ids are unique across every list, so an id handed out by one
/// list never matches a callback of another.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// An ordered list of callbacks, invoked in subscription order.
pub(crate) struct Observers<T> {
    callbacks: RefCell<Vec<(u64, Callback<T>)>>,
}

impl<T: Copy> Observers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: RefCell::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, f: impl Fn(T) + 'static) -> u64 {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        self.callbacks.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: u64) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let len = callbacks.len();
        callbacks.retain(|(sub, _)| *sub != id);
        callbacks.len() != len
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Calls every callback with `value`. The list is snapshotted first, so
    /// callbacks may subscribe or emit again without tripping the borrow.
    pub fn emit(&self, value: T) {
        let snapshot: Vec<Callback<T>> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in snapshot {
            f(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emits_in_subscription_order() {
        let observers = Observers::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let log = log.clone();
            observers.subscribe(move |v: bool| log.borrow_mut().push((tag, v)));
        }
        observers.emit(true);

        assert_eq!(*log.borrow(), vec![("a", true), ("b", true), ("c", true)]);
    }

    #[test]
    fn unsubscribe_removes_only_that_callback() {
        let observers = Observers::new();
        let hits = Rc::new(Cell::new(0));

        let first = {
            let hits = hits.clone();
            observers.subscribe(move |_: bool| hits.set(hits.get() + 1))
        };
        {
            let hits = hits.clone();
            observers.subscribe(move |_: bool| hits.set(hits.get() + 10));
        }

        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        observers.emit(false);

        assert_eq!(hits.get(), 10);
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn callback_may_subscribe_while_emitting() {
        let observers = Rc::new(Observers::new());
        let inner = observers.clone();
        observers.subscribe(move |_: bool| {
            inner.subscribe(|_| {});
        });

        observers.emit(true);
        assert_eq!(observers.len(), 2);
    }

    #[test]
    fn ids_from_another_list_match_nothing() {
        let a = Observers::new();
        let b = Observers::new();
        let from_a = a.subscribe(|_: bool| {});
        b.subscribe(|_: bool| {});

        assert!(!b.unsubscribe(from_a));
        assert_eq!(b.len(), 1);
        assert!(a.unsubscribe(from_a));
    }
}
