use std::fmt;

/// The renderable shape of a value.
///
/// Every [`Render`](super::Render) implementation picks exactly one variant
/// for its type. Formatting a `Shape` with `Display` produces the canonical
/// text of the value it was built from.
///
/// # Examples
///
/// ```rust
/// use kata::render::Shape;
/// let pair = Shape::Tuple(vec![Shape::Scalar("1".into()), Shape::Text("a".into())]);
/// assert_eq!(pair.to_string(), "(1, \"a\")");
/// assert_eq!(Shape::Optional(None).to_string(), "nullopt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Bool(bool),
    /// Text, rendered inside double quotes with no escaping.
    Text(String),
    /// A text reference that points nowhere.
    NullText,
    Optional(Option<Box<Shape>>),
    /// Pairs and fixed-size tuples.
    Tuple(Vec<Shape>),
    Sequence(Vec<Shape>),
    Mapping(Vec<(Shape, Shape)>),
    /// Already-converted scalar text (numbers, chars, user `Display` types).
    Scalar(String),
    Unprintable,
}

/// Fallback text for values that have no textual form.
pub const UNPRINTABLE: &str = "<unprintable>";

impl Shape {
    /// Returns the name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Bool(_) => "Bool",
            Shape::Text(_) => "Text",
            Shape::NullText => "NullText",
            Shape::Optional(_) => "Optional",
            Shape::Tuple(_) => "Tuple",
            Shape::Sequence(_) => "Sequence",
            Shape::Mapping(_) => "Mapping",
            Shape::Scalar(_) => "Scalar",
            Shape::Unprintable => "Unprintable",
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    /// Writes `items` comma-space separated between `open` and `close`.
    fn fmt_delimited(
        f: &mut fmt::Formatter<'_>,
        open: &str,
        close: &str,
        items: &[Shape],
    ) -> fmt::Result {
        f.write_str(open)?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(close)
    }

    fn fmt_mapping(f: &mut fmt::Formatter<'_>, entries: &[(Shape, Shape)]) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (k, v) in entries {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bool(b) => write!(f, "{}", b),
            Shape::Text(s) => write!(f, "\"{}\"", s),
            Shape::NullText => f.write_str("null"),
            Shape::Optional(None) => f.write_str("nullopt"),
            Shape::Optional(Some(inner)) => write!(f, "optional({})", inner),
            Shape::Tuple(items) => Shape::fmt_delimited(f, "(", ")", items),
            Shape::Sequence(items) => Shape::fmt_delimited(f, "[", "]", items),
            Shape::Mapping(entries) => Shape::fmt_mapping(f, entries),
            Shape::Scalar(s) => f.write_str(s),
            Shape::Unprintable => f.write_str(UNPRINTABLE),
        }
    }
}
