//! Rendering rules checked through the public API.

use kata::render::{Displayed, Render, TextRef, Unprintable};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn text_is_wrapped_in_quotes() {
        for s in ["", "abc", "with space", "ünïcode"] {
            assert_eq!(kata::render(s), format!("\"{}\"", s));
            assert_eq!(kata::render(&s.to_string()), format!("\"{}\"", s));
        }
    }

    #[test]
    fn null_text_renders_null() {
        assert_eq!(kata::render(&TextRef::null()), "null");
    }

    #[test]
    fn optional_text_is_still_an_optional() {
        assert_eq!(kata::render(&None::<&str>), "nullopt");
        assert_eq!(kata::render(&Some("a")), "optional(\"a\")");
    }
}

#[cfg(test)]
mod scalar_tests {
    use super::*;

    #[test]
    fn booleans_never_render_as_digits() {
        for b in [true, false] {
            let text = kata::render(&b);
            assert!(text == "true" || text == "false");
            assert_ne!(text, "1");
            assert_ne!(text, "0");
        }
    }

    #[test]
    fn numbers_use_their_display_form() {
        assert_eq!(kata::render(&42u64), "42");
        assert_eq!(kata::render(&-3i8), "-3");
        assert_eq!(kata::render(&0.5f32), "0.5");
        assert_eq!(kata::render(&'z'), "z");
    }

    #[test]
    fn display_adapter_and_sentinel() {
        assert_eq!(kata::render(&Displayed("raw")), "raw");
        assert_eq!(kata::render(&Unprintable(vec![1])), "<unprintable>");
    }
}

#[cfg(test)]
mod composite_tests {
    use super::*;

    #[test]
    fn pairs_and_tuples_are_positional() {
        assert_eq!(kata::render(&(1, "b")), "(1, \"b\")");
        assert_eq!(kata::render(&(true, 2, 'c', "d")), "(true, 2, c, \"d\")");
        assert_eq!(kata::render(&((1, 2), (3, (4, 5)))), "((1, 2), (3, (4, 5)))");
    }

    #[test]
    fn sequences_preserve_order_and_nest() {
        assert_eq!(kata::render(&vec![5, 1, 4]), "[5, 1, 4]");
        assert_eq!(kata::render(&Vec::<i32>::new()), "[]");
        assert_eq!(kata::render(&VecDeque::from(vec!["x", "y"])), "[\"x\", \"y\"]");
        assert_eq!(
            kata::render(&vec![(1, vec![Some(true)]), (2, vec![])]),
            "[(1, [optional(true)]), (2, [])]"
        );
    }

    #[test]
    fn mappings_list_every_key_once() {
        let map = BTreeMap::from([(2, "two"), (1, "one")]);
        assert_eq!(kata::render(&map), "{1: \"one\", 2: \"two\"}");
        assert_eq!(kata::render(&HashMap::<String, i32>::new()), "{}");

        let nested = BTreeMap::from([("k", BTreeMap::from([(1, vec![2])]))]);
        assert_eq!(kata::render(&nested), "{\"k\": {1: [2]}}");
    }

    #[test]
    fn rendering_is_repeatable() {
        let map: HashMap<String, Vec<i32>> = (0..8).map(|i| (format!("k{}", i), vec![i])).collect();
        let set: HashSet<(i32, i32)> = (0..8).map(|i| (i, -i)).collect();
        assert_eq!(map.render(), map.render());
        assert_eq!(set.render(), set.render());
    }

    #[test]
    fn shapes_are_exposed_for_inspection() {
        assert_eq!(vec![1].shape().kind(), "Sequence");
        assert_eq!(BTreeMap::from([(1, 1)]).shape().kind(), "Mapping");
        assert_eq!((1, 2).shape().kind(), "Tuple");
        assert_eq!(Some(1).shape().kind(), "Optional");
    }
}
