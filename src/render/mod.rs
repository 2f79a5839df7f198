//! # Value Rendering
//!
//! Converts values handed to or returned from a solution into the text shown
//! in test reports.
//!
//! ## Module Structure
//!
//! - **`shape`**: the [`Shape`] tagged union and its text formatting
//! - **`impls`**: [`Render`] for primitives, text, options, tuples and the
//!   standard and `im` collections
//! - **`wrappers`**: nullable text, `Display` adapters and the sentinel
//!   wrapper for opaque types
//!
//! ## Rules
//!
//! | Value                  | Text                         |
//! |------------------------|------------------------------|
//! | mapping                | `{k1: v1, k2: v2}`           |
//! | collection             | `[e1, e2]`                   |
//! | text                   | `"abc"` (null: `null`)       |
//! | bool                   | `true` / `false`             |
//! | optional               | `nullopt` / `optional(x)`    |
//! | pair / tuple           | `(a, b, c)`                  |
//! | other `Display` scalar | its `Display` output         |
//! | anything else          | `<unprintable>`              |
//!
//! Collections are rendered in their own iteration order.

mod impls;
mod shape;
mod wrappers;

pub use shape::{Shape, UNPRINTABLE};
pub use wrappers::{Displayed, TextRef, Unprintable};

// ============================================================================
// CORE TRAIT
// ============================================================================

/// A value that can be shown in a test report.
///
/// Implementations only describe the value's [`Shape`]; the text itself comes
/// from formatting that shape, so nested values always follow the same rules.
///
/// # Examples
///
/// ```rust
/// use kata::render::Render;
/// assert_eq!(vec![Some(1), None].render(), "[optional(1), nullopt]");
/// assert_eq!(("x", true).render(), "(\"x\", true)");
/// ```
pub trait Render {
    fn shape(&self) -> Shape;

    fn render(&self) -> String {
        self.shape().to_string()
    }
}

/// Renders `value` to its report text.
///
/// ```rust
/// use std::collections::BTreeMap;
/// let map = BTreeMap::from([(1, "one"), (2, "two")]);
/// assert_eq!(kata::render(&map), "{1: \"one\", 2: \"two\"}");
/// ```
pub fn render<T: Render + ?Sized>(value: &T) -> String {
    value.render()
}

/// Implements [`Render`] for types whose `Display` output is their report
/// text.
///
/// ```rust
/// use std::fmt;
/// struct Celsius(i32);
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
/// kata::impl_render_display!(Celsius);
/// assert_eq!(kata::render(&vec![Celsius(3)]), "[3C]");
/// ```
#[macro_export]
macro_rules! impl_render_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::render::Render for $ty {
                fn shape(&self) -> $crate::render::Shape {
                    $crate::render::Shape::Scalar(::std::string::ToString::to_string(self))
                }
            }
        )+
    };
}

/// Implements [`Render`] as the `<unprintable>` sentinel for opaque types.
///
/// ```rust
/// struct Handle;
/// kata::impl_render_unprintable!(Handle);
/// assert_eq!(kata::render(&Some(Handle)), "optional(<unprintable>)");
/// ```
#[macro_export]
macro_rules! impl_render_unprintable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::render::Render for $ty {
                fn shape(&self) -> $crate::render::Shape {
                    $crate::render::Shape::Unprintable
                }
            }
        )+
    };
}
