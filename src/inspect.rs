//! Value inspection shared by every rule
//!
//! Rules accept a bare value and any of its optional or pointer forms
//! (`Option<T>`, `&T`, `Box<T>`, `Rc<T>`, `Arc<T>`). [`Inspect`] is how a
//! rule looks through those layers: it reports whether the value is absent,
//! whether it is the empty (zero) value of its type, and what the resolved
//! value is.
//!
//! Emptiness follows the zero value of the type:
//!
//! | type | empty when |
//! |------|------------|
//! | `str`, `String`, `Cow<str>` | no bytes |
//! | `Vec`, slices, maps, sets, `VecDeque` | no elements |
//! | numbers, `bool`, `char` | equal to `Default::default()` |
//! | `Option<T>` | `None`, or `Some` of an empty value |
//! | user types via [`impl_inspect!`](crate::impl_inspect) | equal to `Default::default()` |
//!
//! # Example
//!
//! ```
//! use tideline::Inspect;
//!
//! let name = String::from("Ada");
//! assert!(!name.is_empty_value());
//! assert!(Some(String::new()).is_empty_value());
//! assert!(None::<String>.is_nil());
//! assert_eq!(Some(&name).as_text(), Some("Ada"));
//! assert!(!Some(0).is_nil());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Look through optional and pointer layers of a value.
///
/// Implemented for the common std types. Implement it for your own types
/// with [`impl_inspect!`](crate::impl_inspect), or by hand when "empty"
/// means something other than `Default::default()`.
pub trait Inspect {
    /// The value left once every optional/pointer layer is removed.
    type Target: ?Sized;

    /// The resolved value, or `None` when the value is absent.
    fn resolve(&self) -> Option<&Self::Target>;

    /// True for absent values and for the zero value of the resolved type.
    fn is_empty_value(&self) -> bool;

    /// True when the value is absent.
    fn is_nil(&self) -> bool {
        self.resolve().is_none()
    }

    /// The resolved value as text, when it is a string type.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Length of the resolved value, for strings (in chars) and collections.
    fn length(&self) -> Option<usize> {
        None
    }
}

/// Implement [`Inspect`] for types that are empty when equal to their
/// `Default` value.
///
/// The type must implement `Default` and `PartialEq`. This covers plain data
/// structs, where "zero-valued struct" means every field holds its default.
///
/// # Example
///
/// ```
/// use tideline::{impl_inspect, Rule, REQUIRED};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl_inspect!(Point);
///
/// assert!(REQUIRED.validate(&Point::default()).is_err());
/// assert!(REQUIRED.validate(&Point { x: 1, y: 0 }).is_ok());
/// ```
#[macro_export]
macro_rules! impl_inspect {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Inspect for $ty {
                type Target = $ty;

                #[inline]
                fn resolve(&self) -> ::std::option::Option<&$ty> {
                    ::std::option::Option::Some(self)
                }

                #[inline]
                fn is_empty_value(&self) -> bool {
                    *self == <$ty as ::std::default::Default>::default()
                }
            }
        )+
    };
}

crate::impl_inspect!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Inspect for str {
    type Target = str;

    #[inline]
    fn resolve(&self) -> Option<&str> {
        Some(self)
    }

    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Inspect for String {
    type Target = str;

    #[inline]
    fn resolve(&self) -> Option<&str> {
        Some(self.as_str())
    }

    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Inspect for Cow<'_, str> {
    type Target = str;

    #[inline]
    fn resolve(&self) -> Option<&str> {
        Some(self.as_ref())
    }

    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }

    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

// Collections resolve to themselves and are empty with no elements.
macro_rules! inspect_collection {
    ($([$($generics:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Inspect for $ty {
                type Target = Self;

                #[inline]
                fn resolve(&self) -> Option<&Self> {
                    Some(self)
                }

                #[inline]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }

                fn length(&self) -> Option<usize> {
                    Some(self.len())
                }
            }
        )+
    };
}

inspect_collection!(
    [T] Vec<T>,
    [T] [T],
    [T] VecDeque<T>,
    [T, const N: usize] [T; N],
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
);

impl<T: Inspect> Inspect for Option<T> {
    type Target = T::Target;

    #[inline]
    fn resolve(&self) -> Option<&T::Target> {
        self.as_ref().and_then(Inspect::resolve)
    }

    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Inspect::is_empty_value)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Inspect::as_text)
    }

    fn length(&self) -> Option<usize> {
        self.as_ref().and_then(Inspect::length)
    }
}

// Pointer forms are transparent.
macro_rules! inspect_pointer {
    ($([$($generics:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Inspect for $ty {
                type Target = T::Target;

                #[inline]
                fn resolve(&self) -> Option<&T::Target> {
                    (**self).resolve()
                }

                #[inline]
                fn is_empty_value(&self) -> bool {
                    (**self).is_empty_value()
                }

                #[inline]
                fn is_nil(&self) -> bool {
                    (**self).is_nil()
                }

                fn as_text(&self) -> Option<&str> {
                    (**self).as_text()
                }

                fn length(&self) -> Option<usize> {
                    (**self).length()
                }
            }
        )+
    };
}

inspect_pointer!(
    [T: Inspect + ?Sized] &T,
    [T: Inspect + ?Sized] &mut T,
    [T: Inspect + ?Sized] Box<T>,
    [T: Inspect + ?Sized] Rc<T>,
    [T: Inspect + ?Sized] Arc<T>,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_numbers_are_empty() {
        assert!(0_i32.is_empty_value());
        assert!(0.0_f64.is_empty_value());
        assert!(!42_u8.is_empty_value());
        assert!(false.is_empty_value());
        assert!('\0'.is_empty_value());
    }

    #[test]
    fn test_strings() {
        assert!("".is_empty_value());
        assert!(String::new().is_empty_value());
        assert!(!"a".is_empty_value());
        assert_eq!("héllo".length(), Some(5));
        assert_eq!(Cow::Borrowed("abc").as_text(), Some("abc"));
    }

    #[test]
    fn test_collections() {
        assert!(Vec::<i32>::new().is_empty_value());
        assert!(!vec![1].is_empty_value());
        assert!(HashMap::<String, i32>::new().is_empty_value());
        assert!([0_u8; 0].is_empty_value());
        assert!(![0_u8; 2].is_empty_value());
        assert_eq!(vec![1, 2, 3].length(), Some(3));
        assert_eq!(vec![1, 2, 3].as_text(), None);
    }

    #[test]
    fn test_option_is_nil_and_empty() {
        let none: Option<i32> = None;
        assert!(none.is_nil());
        assert!(none.is_empty_value());
        assert!(!Some(0).is_nil());
        assert!(Some(0).is_empty_value());
        assert!(!Some(5).is_empty_value());
    }

    #[test]
    fn test_nested_options_resolve_through() {
        let inner: Option<Option<String>> = Some(None);
        assert!(inner.is_nil());
        let value = Some(Some(String::from("x")));
        assert_eq!(value.resolve(), Some("x"));
    }

    #[test]
    fn test_pointers_are_transparent() {
        let s = String::from("abc");
        assert_eq!((&s).as_text(), Some("abc"));
        assert_eq!(Box::new(s.clone()).as_text(), Some("abc"));
        assert_eq!(Arc::new(7).resolve(), Some(&7));
        assert_eq!(Rc::new(Some(3)).resolve(), Some(&3));
        assert!(Box::new(None::<i32>).is_nil());
    }

    #[derive(Debug, Default, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    crate::impl_inspect!(Point);

    #[test]
    fn test_impl_inspect_uses_default() {
        assert!(Point::default().is_empty_value());
        assert!(!Point { x: 0, y: 1 }.is_empty_value());
        assert_eq!(Point { x: 2, y: 3 }.resolve(), Some(&Point { x: 2, y: 3 }));
    }
}
