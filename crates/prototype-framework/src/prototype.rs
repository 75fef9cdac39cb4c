//! # Prototype Trait
//!
//! The `Prototype` trait is the single capability every participant of a clonable
//! object graph implements. A root calls `copy()` on each of its fields, records call it
//! on theirs, and so on down to the leaves, so the traversal is written once per field
//! list and never per concrete graph shape.
//!
//! # Leaves vs. Composites
//!
//! - **Leaves** ([`ValueLeaf`]) are never mutated in place. Their `copy()` is identity:
//!   integers copy bitwise and [`Text`] bumps a reference count. Two clones may therefore
//!   point at the same string allocation without any observable aliasing.
//! - **Composites** (records, nodes, roots, and the std containers below) allocate a new
//!   instance and copy every field or element into it.
//!
//! Shared mutable handles (`Rc<RefCell<_>>`, `Arc<Mutex<_>>`) intentionally have no
//! `Prototype` impl. A struct that tries to hold one cannot use [`prototype!`](crate::prototype!),
//! so accidental shallow sharing of mutable state is a compile error rather than a bug.
//!
//! # Cycles
//! `copy()` is only defined for trees. The impls here recurse structurally and owned Rust
//! values cannot form cycles, so there is nothing to detect.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

/// Immutable text leaf. Copies share the allocation.
pub type Text = Arc<str>;

/// A type that can produce a fully independent copy of itself.
///
/// # Contract
/// - The copy is field-wise equal to `self` at the time of the call.
/// - No mutable storage is shared between `self` and the copy.
/// - `copy()` has no side effects on `self` and does not fail.
pub trait Prototype: Sized {
    fn copy(&self) -> Self;
}

/// Marker for leaves whose `copy()` returns the same immutable value.
///
/// Only types with no in-place mutation path may implement this. Collections of
/// `ValueLeaf` elements are the one place where element storage may be shared
/// between a prototype and its clones; see [`copy_leaves`].
pub trait ValueLeaf: Prototype {}

macro_rules! scalar_leaves {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Prototype for $ty {
                #[inline]
                fn copy(&self) -> Self {
                    *self
                }
            }

            impl ValueLeaf for $ty {}
        )*
    };
}

scalar_leaves!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, bool, char, ());

impl Prototype for &'static str {
    #[inline]
    fn copy(&self) -> Self {
        *self
    }
}

impl ValueLeaf for &'static str {}

impl Prototype for Arc<str> {
    #[inline]
    fn copy(&self) -> Self {
        Arc::clone(self)
    }
}

impl ValueLeaf for Arc<str> {}

// --- Containers ---
//
// Every container impl allocates a fresh backing store and copies each element into it.
// For `ValueLeaf` elements the per-element copy is identity, which gives the
// "new container, shared immutable elements" shape for free.

impl<T: Prototype> Prototype for Vec<T> {
    fn copy(&self) -> Self {
        self.iter().map(Prototype::copy).collect()
    }
}

impl<T: Prototype> Prototype for VecDeque<T> {
    fn copy(&self) -> Self {
        self.iter().map(Prototype::copy).collect()
    }
}

impl<T: Prototype> Prototype for Option<T> {
    fn copy(&self) -> Self {
        self.as_ref().map(Prototype::copy)
    }
}

impl<T: Prototype> Prototype for Box<T> {
    fn copy(&self) -> Self {
        Box::new((**self).copy())
    }
}

impl<K: Ord + Prototype, V: Prototype> Prototype for BTreeMap<K, V> {
    fn copy(&self) -> Self {
        self.iter().map(|(k, v)| (k.copy(), v.copy())).collect()
    }
}

macro_rules! tuple_prototype {
    ($($name:ident $var:ident),+) => {
        impl<$($name: Prototype),+> Prototype for ($($name,)+) {
            fn copy(&self) -> Self {
                let ($($var,)+) = self;
                ($($var.copy(),)+)
            }
        }
    };
}

tuple_prototype!(A a);
tuple_prototype!(A a, B b);
tuple_prototype!(A a, B b, C c);
tuple_prototype!(A a, B b, C c, D d);

/// Duplicates a slice of leaves into a new vector, sharing element storage.
///
/// Bounded on [`ValueLeaf`] so the sharing can never be applied to mutable elements.
pub fn copy_leaves<T: ValueLeaf>(leaves: &[T]) -> Vec<T> {
    leaves.iter().map(Prototype::copy).collect()
}

/// Implements [`Prototype`] for a struct by copying each listed field.
///
/// Every field must be listed; the generated body uses struct-literal syntax, so a
/// missing field is a compile error.
///
/// ```rust
/// use prototype_framework::{prototype, Prototype, Text};
///
/// #[derive(Debug, PartialEq)]
/// struct Badge {
///     label: Text,
///     rank: u32,
///     tags: Vec<Text>,
/// }
///
/// prototype!(Badge { label, rank, tags });
///
/// let badge = Badge { label: "gold".into(), rank: 1, tags: vec!["a".into()] };
/// let mut copy = badge.copy();
/// copy.tags.push("b".into());
/// assert_eq!(badge.tags.len(), 1);
/// assert_eq!(copy.label, badge.label);
/// ```
#[macro_export]
macro_rules! prototype {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Prototype for $ty {
            fn copy(&self) -> Self {
                Self {
                    $($field: $crate::Prototype::copy(&self.$field),)*
                }
            }
        }
    };
}
