use super::{Render, Shape};
use std::fmt;

/// A text reference that may be null.
///
/// Renders `null` when empty and the quoted text otherwise; unlike
/// `Option<&str>` it never renders as an optional.
///
/// # Examples
///
/// ```rust
/// use kata::render::{Render, TextRef};
/// assert_eq!(TextRef::null().render(), "null");
/// assert_eq!(TextRef::from("abc").render(), "\"abc\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRef<'a>(Option<&'a str>);

impl<'a> TextRef<'a> {
    pub const fn null() -> Self {
        TextRef(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.0
    }
}

impl<'a> From<&'a str> for TextRef<'a> {
    fn from(text: &'a str) -> Self {
        TextRef(Some(text))
    }
}

impl<'a> From<Option<&'a str>> for TextRef<'a> {
    fn from(text: Option<&'a str>) -> Self {
        TextRef(text)
    }
}

impl Render for TextRef<'_> {
    fn shape(&self) -> Shape {
        match self.0 {
            Some(text) => text.shape(),
            None => Shape::NullText,
        }
    }
}

/// Renders the wrapped value through its `Display` impl.
///
/// Use this for foreign types that print sensibly but have no [`Render`]
/// impl of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Render for Displayed<T> {
    fn shape(&self) -> Shape {
        Shape::Scalar(self.0.to_string())
    }
}

/// Renders as `<unprintable>` whatever it wraps.
///
/// Equality, ordering and hashing still delegate to the inner value, so a
/// wrapped output keeps taking part in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unprintable<T>(pub T);

impl<T> Render for Unprintable<T> {
    fn shape(&self) -> Shape {
        Shape::Unprintable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn text_ref_variants() {
        assert!(TextRef::null().is_null());
        assert_eq!(TextRef::from(None::<&str>).render(), "null");
        assert_eq!(TextRef::from(Some("x")).as_str(), Some("x"));
        assert_eq!(vec![TextRef::from("a"), TextRef::null()].render(), "[\"a\", null]");
    }

    #[test]
    fn displayed_uses_display() {
        let addr = Displayed(Ipv4Addr::LOCALHOST);
        assert_eq!(addr.render(), "127.0.0.1");
        assert_eq!(Some(addr).render(), "optional(127.0.0.1)");
    }

    #[test]
    fn unprintable_is_sentinel_but_still_comparable() {
        struct Opaque;
        assert_eq!(Unprintable(Opaque).render(), "<unprintable>");
        assert_eq!(Unprintable(1), Unprintable(1));
        assert_eq!((Unprintable(()), 2).render(), "(<unprintable>, 2)");
    }
}
