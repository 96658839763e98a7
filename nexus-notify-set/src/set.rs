//! Ordered set of unique elements with change notifications.
//!
//! # Structure
//!
//! ```text
//! index: HashTable<Slot>          list: List<T> (slab-backed)
//!   hash(b) -> Slot { key: 7 } ──►  [a] ⇄ [b]@7 ⇄ [c]
//! ```
//!
//! Each element is stored once, in the list's slab. The index holds only the
//! element's hash and slab key, so lookup, positional insert and removal are
//! all O(1).
//!
//! # Mutation contract
//!
//! Every mutating call validates all its arguments before touching anything,
//! then mutates the list and the index, then notifies observers in
//! subscription order. A call that fails validation changes nothing and
//! notifies nobody.
//!
//! # Single owner
//!
//! The set is not synchronized. Observers run inside the mutating call while
//! the set is mutably borrowed, so they cannot touch the set they observe.
//! The same borrow keeps the set from being mutated while an iterator from
//! [`iter`](OrderedNotifySet::iter) is alive.

use core::fmt;
use core::hash::BuildHasher;

use hashbrown::{DefaultHashBuilder, HashTable};

use crate::list::{Iter, List, NodeKey};
use crate::observer::Observers;
use crate::{Element, Error, Observer, Result, SetChange, Subscription};

/// Index entry: the element's hash next to its slab key, so the table can
/// grow without rehashing elements.
#[derive(Debug, Clone, Copy)]
struct Slot {
    hash: u64,
    key: NodeKey,
}

#[derive(Debug, Clone, Copy)]
enum Placement {
    Before,
    After,
}

/// An ordered set of unique elements that notifies observers of every change.
///
/// # Example
///
/// ```
/// use nexus_notify_set::{ChangeAction, OrderedNotifySet, SetChange};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let mut set: OrderedNotifySet<&'static str> = OrderedNotifySet::new();
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&log);
/// let _token = set.subscribe(move |change: SetChange<&&'static str>| {
///     sink.borrow_mut().push(change.cloned());
/// });
///
/// set.add_last("a").unwrap();
/// set.add_last("c").unwrap();
/// set.add_before(&"c", "b").unwrap();
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
/// assert_eq!(log.borrow().last(), Some(&SetChange::add_before("c", "b")));
/// assert_eq!(log.borrow()[0].action(), ChangeAction::AddFirst);
/// ```
pub struct OrderedNotifySet<T, S = DefaultHashBuilder> {
    list: List<T>,
    index: HashTable<Slot>,
    hasher: S,
    observers: Observers<T>,
}

impl<T> OrderedNotifySet<T> {
    /// Creates an empty set with the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S: Default> Default for OrderedNotifySet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> OrderedNotifySet<T, S> {
    /// Creates an empty set that hashes elements with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            list: List::new(),
            index: HashTable::new(),
            hasher,
            observers: Observers::new(),
        }
    }

    /// Creates an empty set with room for `capacity` elements that hashes
    /// with `hasher`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            list: List::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
            hasher,
            observers: Observers::new(),
        }
    }

    /// Returns the number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.capacity().min(self.index.capacity())
    }

    /// Returns the set's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Always `false`: the set accepts mutation.
    #[inline]
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the set is empty.
    #[inline]
    pub fn first(&self) -> Result<&T> {
        self.list
            .front()
            .ok_or(Error::InvalidState { accessor: "first" })
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the set is empty.
    #[inline]
    pub fn last(&self) -> Result<&T> {
        self.list
            .back()
            .ok_or(Error::InvalidState { accessor: "last" })
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn get_first(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn get_last(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns an iterator over the elements, first to last.
    ///
    /// The iterator borrows the set, so the set cannot be mutated while it
    /// is alive. Calling `iter` again starts over from the first element.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Removes every element and emits [`Clear`](crate::ChangeAction::Clear).
    ///
    /// Emits the notification even if the set was already empty.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.observers.notify(SetChange::clear());
    }

    /// Not supported. Always fails without touching `target`.
    ///
    /// # Errors
    ///
    /// Always [`Error::Unsupported`].
    pub fn copy_to(&self, _target: &mut [T], _offset: usize) -> Result<()> {
        Err(Error::Unsupported {
            operation: "copy_to",
        })
    }

    /// Registers `observer` for every subsequent change.
    ///
    /// Observers are called in subscription order.
    pub fn subscribe<O>(&mut self, observer: O) -> Subscription
    where
        O: Observer<T> + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Removes a subscription. Returns `false` if the token was not live.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    /// Returns the number of live subscriptions.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Element, S: BuildHasher> OrderedNotifySet<T, S> {
    /// Adds `item` at the front of the set.
    ///
    /// On an empty set this emits [`AddFirst`](crate::ChangeAction::AddFirst).
    /// Otherwise `item` goes before the current first element and the change
    /// is [`AddBefore`](crate::ChangeAction::AddBefore) with that element as
    /// the anchor.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `item` is absent.
    /// - [`Error::AlreadyExists`] if `item` is already in the set.
    pub fn add_first(&mut self, item: T) -> Result<()> {
        match self.list.front_key() {
            Some(first) => self.insert_at(first, item, Placement::Before),
            None => self.insert_sole(item, Placement::Before),
        }
    }

    /// Adds `item` at the back of the set.
    ///
    /// On an empty set this behaves as [`add_first`](Self::add_first).
    /// Otherwise `item` goes after the current last element and the change is
    /// [`AddAfter`](crate::ChangeAction::AddAfter).
    ///
    /// # Errors
    ///
    /// Same as [`add_first`](Self::add_first).
    pub fn add_last(&mut self, item: T) -> Result<()> {
        match self.list.back_key() {
            Some(last) => self.insert_at(last, item, Placement::After),
            None => self.insert_sole(item, Placement::After),
        }
    }

    /// Adds `item` at the front of the set.
    ///
    /// This is [`add_first`](Self::add_first): `add` prepends.
    #[inline]
    pub fn add(&mut self, item: T) -> Result<()> {
        self.add_first(item)
    }

    /// Adds `item` immediately after `anchor`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// 1. [`Error::InvalidArgument`] if `anchor` is absent.
    /// 2. [`Error::NotFound`] if `anchor` is not in the set.
    /// 3. [`Error::InvalidArgument`] if `item` is absent.
    /// 4. [`Error::AlreadyExists`] if `item` is already in the set.
    pub fn add_after(&mut self, anchor: &T, item: T) -> Result<()> {
        let anchor = self.locate(anchor)?;
        self.insert_at(anchor, item, Placement::After)
    }

    /// Adds `item` immediately before `anchor`.
    ///
    /// # Errors
    ///
    /// Same as [`add_after`](Self::add_after).
    pub fn add_before(&mut self, anchor: &T, item: T) -> Result<()> {
        let anchor = self.locate(anchor)?;
        self.insert_at(anchor, item, Placement::Before)
    }

    /// Returns `true` if `item` is in the set. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `item` is absent.
    pub fn contains(&self, item: &T) -> Result<bool> {
        if item.is_absent() {
            return Err(Error::InvalidArgument { argument: "item" });
        }
        Ok(self.find(self.hasher.hash_one(item), item).is_some())
    }

    /// Removes `item` and emits [`Remove`](crate::ChangeAction::Remove).
    ///
    /// Returns `Ok(false)` without notifying anyone if `item` is not in the
    /// set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `item` is absent.
    pub fn remove(&mut self, item: &T) -> Result<bool> {
        if item.is_absent() {
            return Err(Error::InvalidArgument { argument: "item" });
        }

        let hash = self.hasher.hash_one(item);
        let list = &self.list;
        let Ok(entry) = self
            .index
            .find_entry(hash, |slot| slot.hash == hash && list.get(slot.key) == Some(item))
        else {
            return Ok(false);
        };
        let (slot, _) = entry.remove();

        let removed = self.list.remove(slot.key).expect("index points at dead node");
        self.observers.notify(SetChange::remove(&removed));
        Ok(true)
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.list.reserve(additional);
        self.index.reserve(additional, |slot| slot.hash);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn find(&self, hash: u64, item: &T) -> Option<NodeKey> {
        let list = &self.list;
        self.index
            .find(hash, |slot| slot.hash == hash && list.get(slot.key) == Some(item))
            .map(|slot| slot.key)
    }

    /// Resolves an anchor argument to its node.
    fn locate(&self, anchor: &T) -> Result<NodeKey> {
        if anchor.is_absent() {
            return Err(Error::InvalidArgument { argument: "anchor" });
        }
        self.find(self.hasher.hash_one(anchor), anchor)
            .ok_or(Error::NotFound)
    }

    /// Checks that `item` may be inserted, returning its hash.
    fn admit(&self, item: &T) -> Result<u64> {
        if item.is_absent() {
            return Err(Error::InvalidArgument { argument: "item" });
        }
        let hash = self.hasher.hash_one(item);
        match self.find(hash, item) {
            Some(_) => Err(Error::AlreadyExists),
            None => Ok(hash),
        }
    }

    /// Inserts into an empty set. Either end yields the same single-node list.
    fn insert_sole(&mut self, item: T, placement: Placement) -> Result<()> {
        let hash = self.admit(&item)?;
        let key = match placement {
            Placement::Before => self.list.push_front(item),
            Placement::After => self.list.push_back(item),
        };
        self.index.insert_unique(hash, Slot { hash, key }, |slot| slot.hash);

        let inserted = self.list.get(key).expect("invalid key");
        self.observers.notify(SetChange::add_first(inserted));
        Ok(())
    }

    fn insert_at(&mut self, anchor: NodeKey, item: T, placement: Placement) -> Result<()> {
        let hash = self.admit(&item)?;
        let key = match placement {
            Placement::Before => self.list.insert_before(anchor, item),
            Placement::After => self.list.insert_after(anchor, item),
        };
        self.index.insert_unique(hash, Slot { hash, key }, |slot| slot.hash);

        let anchor = self.list.get(anchor).expect("invalid 'anchor' key");
        let inserted = self.list.get(key).expect("invalid key");
        let change = match placement {
            Placement::Before => SetChange::add_before(anchor, inserted),
            Placement::After => SetChange::add_after(anchor, inserted),
        };
        self.observers.notify(change);
        Ok(())
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedNotifySet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for OrderedNotifySet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
