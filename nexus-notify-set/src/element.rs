//! Element trait for set members.
//!
//! The [`Element`] trait is the bound every set member satisfies. Beyond
//! `Hash + Eq` it answers one question: is this value *absent*? Absent values
//! play the role of a null argument and are rejected at every entry point of
//! [`OrderedNotifySet`](crate::OrderedNotifySet).
//!
//! Most types can never be absent and use the default implementation.
//! `Option<T>` reports `None` as absent and raw pointers report null.

use core::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Trait for values that can be stored in an ordered notify set.
///
/// # Example
///
/// ```
/// use nexus_notify_set::Element;
///
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// struct TaskId(u64);
///
/// // Present by construction: the default `is_absent` returns false.
/// impl Element for TaskId {}
///
/// assert!(!TaskId(7).is_absent());
/// assert!(None::<u32>.is_absent());
/// assert!(!Some(3u32).is_absent());
/// ```
pub trait Element: Hash + Eq {
    /// Returns `true` if this value stands for "no element".
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_present_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {}
        )*
    };
}

impl_present_element!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), str, String
);

impl<T: Element + ?Sized> Element for &T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Hash + Eq> Element for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Element for *const T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Element for *mut T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}
