//! Change observers and subscription tokens.
//!
//! Observers are invoked synchronously, in subscription order, after a
//! mutation has fully applied. An observer only gets a shared view of the
//! change: the set is mutably borrowed for the duration of the call, so a
//! handler cannot reach back into the same set.

use core::fmt;

use crate::SetChange;

/// Receives change notifications from a set.
///
/// Implemented for every `FnMut(SetChange<&T>)` closure. Closures passed to
/// `subscribe` need their argument type spelled out so the borrow is
/// higher-ranked:
///
/// ```
/// use nexus_notify_set::{OrderedNotifySet, SetChange};
///
/// let mut set: OrderedNotifySet<u32> = OrderedNotifySet::new();
/// let _token = set.subscribe(|change: SetChange<&u32>| println!("{change}"));
/// set.add_last(1).unwrap();
/// ```
pub trait Observer<T: ?Sized> {
    /// Called once per completed mutation.
    fn on_change(&mut self, change: SetChange<&T>);
}

impl<T: ?Sized, F> Observer<T> for F
where
    F: FnMut(SetChange<&T>),
{
    #[inline]
    fn on_change(&mut self, change: SetChange<&T>) {
        self(change)
    }
}

/// Token identifying one subscription.
///
/// Tokens are never reused by the set that issued them.
#[must_use = "a subscription token is needed to unsubscribe"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subscription(u64);

impl Subscription {
    /// Returns the raw subscription id.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

struct Entry<T: ?Sized> {
    token: Subscription,
    observer: Box<dyn Observer<T>>,
}

/// Ordered registry of observers.
pub(crate) struct Observers<T: ?Sized> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T: ?Sized> Observers<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn subscribe<O: Observer<T> + 'static>(&mut self, observer: O) -> Subscription {
        let token = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            token,
            observer: Box::new(observer),
        });
        token
    }

    /// Returns `true` if the token was subscribed.
    pub(crate) fn unsubscribe(&mut self, token: Subscription) -> bool {
        match self.entries.iter().position(|entry| entry.token == token) {
            // `remove`, not `swap_remove`: dispatch order is subscription order.
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, change: SetChange<&T>) {
        for entry in &mut self.entries {
            entry.observer.on_change(change);
        }
    }
}

impl<T: ?Sized> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.token))
            .finish()
    }
}
