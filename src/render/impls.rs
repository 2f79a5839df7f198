//! [`Render`] implementations for std and `im` types.

use super::{Render, Shape};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CStr, CString};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// SHAPE BUILDERS
// ============================================================================

fn sequence<'a, T, I>(items: I) -> Shape
where
    T: Render + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Shape::Sequence(items.into_iter().map(Render::shape).collect())
}

fn mapping<'a, K, V, I>(entries: I) -> Shape
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    Shape::Mapping(entries.into_iter().map(|(k, v)| (k.shape(), v.shape())).collect())
}

// ============================================================================
// SCALARS
// ============================================================================

impl Render for bool {
    fn shape(&self) -> Shape {
        Shape::Bool(*self)
    }
}

macro_rules! scalar_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Render for $ty {
                fn shape(&self) -> Shape {
                    Shape::Scalar(self.to_string())
                }
            }
        )+
    };
}

scalar_render!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

impl Render for () {
    fn shape(&self) -> Shape {
        Shape::Tuple(Vec::new())
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl Render for str {
    fn shape(&self) -> Shape {
        Shape::Text(self.to_owned())
    }
}

impl Render for String {
    fn shape(&self) -> Shape {
        self.as_str().shape()
    }
}

impl Render for CStr {
    fn shape(&self) -> Shape {
        Shape::Text(self.to_string_lossy().into_owned())
    }
}

impl Render for CString {
    fn shape(&self) -> Shape {
        self.as_c_str().shape()
    }
}

// ============================================================================
// POINTERS
// ============================================================================

impl<T: Render + ?Sized> Render for &T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<B> Render for Cow<'_, B>
where
    B: Render + ToOwned + ?Sized,
{
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

// ============================================================================
// OPTIONALS AND TUPLES
// ============================================================================

impl<T: Render> Render for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Optional(self.as_ref().map(|v| Box::new(v.shape())))
    }
}

macro_rules! tuple_render {
    ($($name:ident)+) => {
        impl<$($name: Render),+> Render for ($($name,)+) {
            #[allow(non_snake_case)]
            fn shape(&self) -> Shape {
                let ($($name,)+) = self;
                Shape::Tuple(vec![$($name.shape()),+])
            }
        }
    };
}

tuple_render!(A);
tuple_render!(A B);
tuple_render!(A B C);
tuple_render!(A B C D);
tuple_render!(A B C D E);
tuple_render!(A B C D E F);
tuple_render!(A B C D E F G);
tuple_render!(A B C D E F G H);
tuple_render!(A B C D E F G H I);
tuple_render!(A B C D E F G H I J);
tuple_render!(A B C D E F G H I J K);
tuple_render!(A B C D E F G H I J K L);

// ============================================================================
// SEQUENCES AND SETS
// ============================================================================

impl<T: Render> Render for [T] {
    fn shape(&self) -> Shape {
        sequence(self)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn shape(&self) -> Shape {
        sequence(self)
    }
}

impl<T: Render> Render for Vec<T> {
    fn shape(&self) -> Shape {
        sequence(self)
    }
}

impl<T: Render> Render for VecDeque<T> {
    fn shape(&self) -> Shape {
        sequence(self)
    }
}

impl<T: Render> Render for LinkedList<T> {
    fn shape(&self) -> Shape {
        sequence(self)
    }
}

impl<T: Render> Render for BTreeSet<T> {
    fn shape(&self) -> Shape {
        sequence(self)
    }
}

impl<T: Render, S> Render for HashSet<T, S> {
    fn shape(&self) -> Shape {
        sequence(self.iter())
    }
}

/// Heaps render in their internal (array) order, not sorted order.
impl<T: Render> Render for BinaryHeap<T> {
    fn shape(&self) -> Shape {
        sequence(self.iter())
    }
}

impl<T: Render + Clone> Render for im::Vector<T> {
    fn shape(&self) -> Shape {
        sequence(self.iter())
    }
}

impl<T, S> Render for im::HashSet<T, S>
where
    T: Render + Hash + Eq + Clone,
    S: BuildHasher,
{
    fn shape(&self) -> Shape {
        sequence(self.iter())
    }
}

impl<T: Render + Ord + Clone> Render for im::OrdSet<T> {
    fn shape(&self) -> Shape {
        sequence(self.iter())
    }
}

// ============================================================================
// MAPPINGS
// ============================================================================

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        mapping(self)
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn shape(&self) -> Shape {
        mapping(self.iter())
    }
}

impl<K, V, S> Render for im::HashMap<K, V, S>
where
    K: Render + Hash + Eq + Clone,
    V: Render + Clone,
    S: BuildHasher,
{
    fn shape(&self) -> Shape {
        mapping(self.iter())
    }
}

impl<K, V> Render for im::OrdMap<K, V>
where
    K: Render + Ord + Clone,
    V: Render + Clone,
{
    fn shape(&self) -> Shape {
        mapping(self.iter())
    }
}
