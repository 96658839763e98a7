//! Change notifications emitted by the set.
//!
//! Every successful mutation produces exactly one [`SetChange`]. The action
//! decides which item slots are filled:
//!
//! | Action | `old_item` | `new_item` |
//! |--------|------------|------------|
//! | [`AddFirst`](ChangeAction::AddFirst) | empty | inserted item |
//! | [`AddBefore`](ChangeAction::AddBefore) | anchor item | inserted item |
//! | [`AddAfter`](ChangeAction::AddAfter) | anchor item | inserted item |
//! | [`Clear`](ChangeAction::Clear) | empty | empty |
//! | [`Remove`](ChangeAction::Remove) | empty | removed item |
//!
//! Fields are private and only the per-action constructors build a change,
//! so a change with the wrong slots filled cannot exist.

use core::fmt;

/// Kind of mutation described by a [`SetChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// First item added to an empty set.
    AddFirst,
    /// Item added before an existing item.
    AddBefore,
    /// Item added after an existing item.
    AddAfter,
    /// Set was cleared.
    Clear,
    /// Item removed from the set.
    Remove,
}

impl ChangeAction {
    /// Returns the action name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddFirst => "AddFirst",
            Self::AddBefore => "AddBefore",
            Self::AddAfter => "AddAfter",
            Self::Clear => "Clear",
            Self::Remove => "Remove",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one completed mutation.
///
/// Observers receive a `SetChange<&T>` borrowing from the set. Use
/// [`cloned`](SetChange::cloned) or [`map`](SetChange::map) to keep it past
/// the callback.
///
/// # Example
///
/// ```
/// use nexus_notify_set::{ChangeAction, SetChange};
///
/// let change = SetChange::add_after("anchor", "inserted");
/// assert_eq!(change.action(), ChangeAction::AddAfter);
/// assert_eq!(change.old_item(), Some(&"anchor"));
/// assert_eq!(change.new_item(), Some(&"inserted"));
///
/// let change: SetChange<&str> = SetChange::clear();
/// assert_eq!(change.old_item(), None);
/// assert_eq!(change.new_item(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetChange<T> {
    action: ChangeAction,
    old: Option<T>,
    new: Option<T>,
}

impl<T> SetChange<T> {
    /// First item added to an empty set.
    #[inline]
    pub const fn add_first(item: T) -> Self {
        Self {
            action: ChangeAction::AddFirst,
            old: None,
            new: Some(item),
        }
    }

    /// `item` added immediately before `anchor`.
    #[inline]
    pub const fn add_before(anchor: T, item: T) -> Self {
        Self {
            action: ChangeAction::AddBefore,
            old: Some(anchor),
            new: Some(item),
        }
    }

    /// `item` added immediately after `anchor`.
    #[inline]
    pub const fn add_after(anchor: T, item: T) -> Self {
        Self {
            action: ChangeAction::AddAfter,
            old: Some(anchor),
            new: Some(item),
        }
    }

    /// Set cleared.
    #[inline]
    pub const fn clear() -> Self {
        Self {
            action: ChangeAction::Clear,
            old: None,
            new: None,
        }
    }

    /// `item` removed from the set.
    #[inline]
    pub const fn remove(item: T) -> Self {
        Self {
            action: ChangeAction::Remove,
            old: None,
            new: Some(item),
        }
    }

    /// Returns the kind of mutation.
    #[inline]
    pub const fn action(&self) -> ChangeAction {
        self.action
    }

    /// Returns the anchor item for `AddBefore`/`AddAfter`, `None` otherwise.
    #[inline]
    pub const fn old_item(&self) -> Option<&T> {
        self.old.as_ref()
    }

    /// Returns the inserted or removed item, `None` for `Clear`.
    #[inline]
    pub const fn new_item(&self) -> Option<&T> {
        self.new.as_ref()
    }

    /// Splits the change into its action and item slots.
    #[inline]
    pub fn into_parts(self) -> (ChangeAction, Option<T>, Option<T>) {
        (self.action, self.old, self.new)
    }

    /// Borrows the item slots.
    #[inline]
    pub const fn as_ref(&self) -> SetChange<&T> {
        SetChange {
            action: self.action,
            old: self.old.as_ref(),
            new: self.new.as_ref(),
        }
    }

    /// Maps both item slots with `f`, keeping the action.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SetChange<U> {
        SetChange {
            action: self.action,
            old: self.old.map(&mut f),
            new: self.new.map(&mut f),
        }
    }
}

impl<T: Clone> SetChange<&T> {
    /// Clones the borrowed items into an owned change.
    #[inline]
    pub fn cloned(self) -> SetChange<T> {
        self.map(T::clone)
    }
}

impl<T: fmt::Display> fmt::Display for SetChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        match (&self.old, &self.new) {
            (Some(old), Some(new)) => write!(f, "(old={old}, new={new})"),
            (None, Some(new)) => write!(f, "(new={new})"),
            (Some(old), None) => write!(f, "(old={old})"),
            (None, None) => Ok(()),
        }
    }
}
