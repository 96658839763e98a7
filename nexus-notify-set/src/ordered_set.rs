//! The ordered notify set capability as a trait.
//!
//! [`OrderedSet`] describes what an ordered set with change notifications
//! can do. [`OrderedNotifySet`] implements it by delegating to its inherent
//! methods. Code that only needs the capability can be generic over the
//! trait.
//!
//! ```
//! use nexus_notify_set::{OrderedNotifySet, OrderedSet, Result};
//!
//! fn push_all<S: OrderedSet<u32>>(set: &mut S, items: &[u32]) -> Result<()> {
//!     for &item in items {
//!         set.add_last(item)?;
//!     }
//!     Ok(())
//! }
//!
//! let mut set: OrderedNotifySet<u32> = OrderedNotifySet::new();
//! push_all(&mut set, &[1, 2, 3]).unwrap();
//! assert_eq!(OrderedSet::iter(&set).copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use core::hash::BuildHasher;

use crate::{Element, Observer, OrderedNotifySet, Result, Subscription};

/// An ordered set of unique elements with positional insertion and change
/// notifications.
///
/// Every successful mutation notifies all subscribed observers, in
/// subscription order, before returning. A failed call leaves the set
/// unchanged and notifies nobody.
pub trait OrderedSet<T: Element> {
    /// Iterator over the elements, first to last.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Adds a unique item before the first item.
    fn add_first(&mut self, item: T) -> Result<()>;

    /// Adds a unique item after the last item.
    fn add_last(&mut self, item: T) -> Result<()>;

    /// Adds a unique item immediately after `anchor`.
    fn add_after(&mut self, anchor: &T, item: T) -> Result<()>;

    /// Adds a unique item immediately before `anchor`.
    fn add_before(&mut self, anchor: &T, item: T) -> Result<()>;

    /// Adds a unique item. Prepends, like [`add_first`](Self::add_first).
    fn add(&mut self, item: T) -> Result<()> {
        self.add_first(item)
    }

    /// First item; fails on an empty set.
    fn first(&self) -> Result<&T>;

    /// Last item; fails on an empty set.
    fn last(&self) -> Result<&T>;

    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test.
    fn contains(&self, item: &T) -> Result<bool>;

    /// Removes `item`, returning `Ok(false)` if it was not present.
    fn remove(&mut self, item: &T) -> Result<bool>;

    /// Removes every item.
    fn clear(&mut self);

    /// Copies the items into `target` starting at `offset`, if supported.
    fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()>;

    /// Iterates the items, first to last.
    fn iter(&self) -> Self::Iter<'_>;

    /// Registers an observer for every subsequent change.
    fn subscribe<O: Observer<T> + 'static>(&mut self, observer: O) -> Subscription;

    /// Removes a subscription; `false` if the token was not live.
    fn unsubscribe(&mut self, subscription: Subscription) -> bool;
}

impl<T: Element, S: BuildHasher> OrderedSet<T> for OrderedNotifySet<T, S> {
    type Iter<'a>
        = crate::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add_first(&mut self, item: T) -> Result<()> {
        OrderedNotifySet::add_first(self, item)
    }

    #[inline]
    fn add_last(&mut self, item: T) -> Result<()> {
        OrderedNotifySet::add_last(self, item)
    }

    #[inline]
    fn add_after(&mut self, anchor: &T, item: T) -> Result<()> {
        OrderedNotifySet::add_after(self, anchor, item)
    }

    #[inline]
    fn add_before(&mut self, anchor: &T, item: T) -> Result<()> {
        OrderedNotifySet::add_before(self, anchor, item)
    }

    #[inline]
    fn first(&self) -> Result<&T> {
        OrderedNotifySet::first(self)
    }

    #[inline]
    fn last(&self) -> Result<&T> {
        OrderedNotifySet::last(self)
    }

    #[inline]
    fn len(&self) -> usize {
        OrderedNotifySet::len(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> Result<bool> {
        OrderedNotifySet::contains(self, item)
    }

    #[inline]
    fn remove(&mut self, item: &T) -> Result<bool> {
        OrderedNotifySet::remove(self, item)
    }

    #[inline]
    fn clear(&mut self) {
        OrderedNotifySet::clear(self)
    }

    #[inline]
    fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()> {
        OrderedNotifySet::copy_to(self, target, offset)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        OrderedNotifySet::iter(self)
    }

    #[inline]
    fn subscribe<O: Observer<T> + 'static>(&mut self, observer: O) -> Subscription {
        OrderedNotifySet::subscribe(self, observer)
    }

    #[inline]
    fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        OrderedNotifySet::unsubscribe(self, subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeAction, Error, SetChange};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Exercises a set only through the trait.
    fn scenario<S: OrderedSet<char>>(set: &mut S) -> Vec<ChangeAction> {
        let actions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&actions);
        let token = set.subscribe(move |change: SetChange<&char>| {
            sink.borrow_mut().push(change.action());
        });

        set.add('b').unwrap();
        set.add('a').unwrap();
        set.add_last('d').unwrap();
        set.add_before(&'d', 'c').unwrap();
        set.add_after(&'d', 'e').unwrap();
        assert_eq!(set.remove(&'e'), Ok(true));
        assert_eq!(set.contains(&'c'), Ok(true));
        assert_eq!(set.contains(&'z'), Ok(false));

        assert!(set.unsubscribe(token));
        set.clear();

        actions.borrow().clone()
    }

    #[test]
    fn drives_notify_set_through_trait() {
        let mut set: OrderedNotifySet<char> = OrderedNotifySet::new();
        let actions = scenario(&mut set);

        assert_eq!(
            actions,
            vec![
                ChangeAction::AddFirst,
                ChangeAction::AddBefore,
                ChangeAction::AddAfter,
                ChangeAction::AddBefore,
                ChangeAction::AddAfter,
                ChangeAction::Remove,
            ]
        );
        assert!(OrderedSet::is_empty(&set));
    }

    #[test]
    fn trait_accessors_match_inherent() {
        let mut set: OrderedNotifySet<char> = OrderedNotifySet::new();
        assert_eq!(
            OrderedSet::first(&set),
            Err(Error::InvalidState { accessor: "first" })
        );

        OrderedSet::add_last(&mut set, 'x').unwrap();
        OrderedSet::add_last(&mut set, 'y').unwrap();
        assert_eq!(OrderedSet::first(&set), Ok(&'x'));
        assert_eq!(OrderedSet::last(&set), Ok(&'y'));
        assert_eq!(OrderedSet::len(&set), 2);
        assert_eq!(
            OrderedSet::iter(&set).copied().collect::<String>(),
            "xy"
        );

        let mut target = ['\0'; 2];
        assert!(matches!(
            OrderedSet::copy_to(&set, &mut target, 0),
            Err(Error::Unsupported { .. })
        ));
    }
}
