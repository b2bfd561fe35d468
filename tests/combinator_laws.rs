//! Property-based tests for the combinator laws

use proptest::prelude::*;
use stillmatch::prelude::*;

/// A matcher description that can be generated, printed and rebuilt.
#[derive(Clone, Debug)]
enum Tree {
    IsNull,
    IsNotNull,
    Equals(i8),
    NotEquals(i8),
    Not(Box<Tree>),
    Invert(Box<Tree>),
    And(Box<Tree>, Box<Tree>),
    Or(Box<Tree>, Box<Tree>),
}

impl Tree {
    fn build(&self) -> BoxedMatcher<'static, Option<i8>> {
        match self {
            Tree::IsNull => is_null::<i8>().boxed(),
            Tree::IsNotNull => is_not_null::<i8>().boxed(),
            Tree::Equals(n) => is_equal_to(Some(*n)).boxed(),
            Tree::NotEquals(n) => is_not_equal_to(Some(*n)).boxed(),
            Tree::Not(inner) => not(inner.build()).boxed(),
            Tree::Invert(inner) => invert(inner.build(), "was inverted").boxed(),
            Tree::And(a, b) => both(a.build(), b.build()).boxed(),
            Tree::Or(a, b) => either(a.build(), b.build()).boxed(),
        }
    }

    /// Plain boolean evaluation to compare the matchers against.
    fn holds(&self, actual: Option<i8>) -> bool {
        match self {
            Tree::IsNull => actual.is_none(),
            Tree::IsNotNull => actual.is_some(),
            Tree::Equals(n) => actual == Some(*n),
            Tree::NotEquals(n) => actual != Some(*n),
            Tree::Not(inner) | Tree::Invert(inner) => !inner.holds(actual),
            Tree::And(a, b) => a.holds(actual) && b.holds(actual),
            Tree::Or(a, b) => a.holds(actual) || b.holds(actual),
        }
    }
}

fn tree() -> impl Strategy<Value = Tree> {
    let leaf = prop_oneof![
        Just(Tree::IsNull),
        Just(Tree::IsNotNull),
        (-3i8..3).prop_map(Tree::Equals),
        (-3i8..3).prop_map(Tree::NotEquals),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|t| Tree::Not(Box::new(t))),
            inner.clone().prop_map(|t| Tree::Invert(Box::new(t))),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Tree::And(Box::new(a), Box::new(b))),
            (inner.clone(), inner).prop_map(|(a, b)| Tree::Or(Box::new(a), Box::new(b))),
        ]
    })
}

fn actual() -> impl Strategy<Value = Option<i8>> {
    proptest::option::of(-3i8..3)
}

proptest! {
    #[test]
    fn prop_matches_agrees_with_boolean_model(t in tree(), a in actual()) {
        prop_assert_eq!(t.build().matches(&a).passed(), t.holds(a));
    }

    #[test]
    fn prop_matches_and_not_matches_are_complements(t in tree(), a in actual()) {
        let m = t.build();
        prop_assert_ne!(m.matches(&a).failed(), m.not_matches(&a).failed());
    }

    #[test]
    fn prop_double_negation_is_identity(t in tree(), a in actual()) {
        let m = t.build();
        let doubled = not(not(t.build()));
        prop_assert_eq!(doubled.matches(&a), m.matches(&a));
        prop_assert_eq!(doubled.not_matches(&a), m.not_matches(&a));
    }

    #[test]
    fn prop_not_swaps_methods(t in tree(), a in actual()) {
        let m = t.build();
        let negated = not(t.build());
        prop_assert_eq!(negated.matches(&a), m.not_matches(&a));
        prop_assert_eq!(negated.not_matches(&a), m.matches(&a));
    }

    #[test]
    fn prop_and_identity(x in tree(), y in tree(), a in actual()) {
        let expected = x.build().matches(&a).failed() || y.build().matches(&a).failed();
        let m = all_of(x.build(), y.build(), Vec::new());
        prop_assert_eq!(m.matches(&a).failed(), expected);
    }

    #[test]
    fn prop_or_identity(x in tree(), y in tree(), a in actual()) {
        let expected = x.build().matches(&a).failed() && y.build().matches(&a).failed();
        let m = any_of(x.build(), y.build(), Vec::new());
        prop_assert_eq!(m.matches(&a).failed(), expected);
    }

    #[test]
    fn prop_de_morgan(x in tree(), y in tree(), a in actual()) {
        let left = not(both(x.build(), y.build())).matches(&a).failed();
        let right = either(not(x.build()), not(y.build())).matches(&a).failed();
        prop_assert_eq!(left, right);

        let left = not(either(x.build(), y.build())).matches(&a).failed();
        let right = both(not(x.build()), not(y.build())).matches(&a).failed();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_fold_order_does_not_change_outcome(
        x in tree(),
        y in tree(),
        z in tree(),
        a in actual()
    ) {
        let left = all_of(x.build(), y.build(), [z.build()]);
        let right = both(x.build(), both(y.build(), z.build()));
        prop_assert_eq!(left.matches(&a).failed(), right.matches(&a).failed());

        let left = any_of(x.build(), y.build(), [z.build()]);
        let right = either(x.build(), either(y.build(), z.build()));
        prop_assert_eq!(left.matches(&a).failed(), right.matches(&a).failed());
    }

    #[test]
    fn prop_compound_text_embeds_both_branches(x in tree(), y in tree(), a in actual()) {
        let one = x.build().matches(&a);
        let two = y.build().matches(&a);
        let result = both(x.build(), y.build()).matches(&a);

        prop_assert!(result.expected().contains(one.expected()));
        prop_assert!(result.expected().contains(two.expected()));
        prop_assert!(result.actual().contains(one.actual()));
        prop_assert!(result.actual().contains(two.actual()));
    }
}
