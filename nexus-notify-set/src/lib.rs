//! Ordered set of unique elements with synchronous change notifications.
//!
//! [`OrderedNotifySet`] keeps its elements in an explicit order and lets
//! callers insert before or after any member, or at either end. Lookup,
//! positional insert and removal are O(1). Every successful mutation is
//! reported to subscribed observers as a [`SetChange`] before the call
//! returns.
//!
//! # Design
//!
//! The set combines two structures:
//!
//! ```text
//! List (slab-backed)  - owns elements, defines order, stable node keys
//! Index (hash table)  - element hash -> node key, O(1) membership
//! ```
//!
//! Each element is stored once. Node keys stay valid until the element is
//! removed, so finding an anchor and splicing next to it never walks the
//! list.
//!
//! # Quick Start
//!
//! ```
//! use nexus_notify_set::{ChangeAction, Error, OrderedNotifySet, SetChange};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut set: OrderedNotifySet<u32> = OrderedNotifySet::new();
//!
//! let last = Rc::new(RefCell::new(None));
//! let sink = Rc::clone(&last);
//! let token = set.subscribe(move |change: SetChange<&u32>| {
//!     *sink.borrow_mut() = Some(change.cloned());
//! });
//!
//! set.add_last(1).unwrap();
//! set.add_last(3).unwrap();
//! set.add_after(&1, 2).unwrap();
//! assert_eq!(*last.borrow(), Some(SetChange::add_after(1, 2)));
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(set.first(), Ok(&1));
//! assert_eq!(set.contains(&2), Ok(true));
//!
//! // Failed calls change nothing and notify nobody.
//! assert_eq!(set.add_last(2), Err(Error::AlreadyExists));
//! assert_eq!(set.add_before(&9, 4), Err(Error::NotFound));
//! assert_eq!(*last.borrow(), Some(SetChange::add_after(1, 2)));
//!
//! assert_eq!(set.remove(&2), Ok(true));
//! assert_eq!(last.borrow().as_ref().map(SetChange::action), Some(ChangeAction::Remove));
//!
//! set.unsubscribe(token);
//! ```
//!
//! # `add` prepends
//!
//! [`OrderedNotifySet::add`] is an alias for
//! [`add_first`](OrderedNotifySet::add_first), not for
//! [`add_last`](OrderedNotifySet::add_last).
//!
//! # Absent elements
//!
//! Element types implement [`Element`]. Its `is_absent` check lets
//! `Option<T>` and raw pointers stand in for nullable values; absent values
//! are rejected with [`Error::InvalidArgument`].
//!
//! # Single owner
//!
//! The set is not synchronized and is meant for one owner. Observers run
//! synchronously inside the mutating call and cannot reach the set they
//! observe. Mutating the set while an iterator is alive is ruled out by the
//! borrow checker.

#![warn(missing_docs)]

pub mod change;
pub mod element;
pub mod error;
mod list;
pub mod observer;
pub mod ordered_set;
pub mod set;

pub use change::{ChangeAction, SetChange};
pub use element::Element;
pub use error::{Error, Result};
pub use list::Iter;
pub use observer::{Observer, Subscription};
pub use ordered_set::OrderedSet;
pub use set::OrderedNotifySet;
