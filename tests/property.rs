// SPDX-License-Identifier: Unlicense
use arith::{parse, Value};
use proptest::prelude::*;

fn arb_atom() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..1000).prop_map(|n| n.to_string()),
        (0i64..1000).prop_map(|n| format!("-{n}")),
        Just("0".to_string()),
    ]
}

fn arb_expr(depth: u32) -> BoxedStrategy<String> {
    if depth == 0 {
        return arb_atom().boxed();
    }

    let leaf = arb_atom();
    let nested = (
        arb_expr(depth - 1),
        prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("%"), Just("^")],
        arb_expr(depth - 1),
    )
        .prop_map(|(lhs, op, rhs)| format!("({lhs} {op} {rhs})"));
    prop_oneof![leaf, nested].boxed()
}

proptest! {
    #[test]
    fn eval_is_deterministic(expr in arb_expr(4)) {
        let tree = parse(&expr).expect("generated expression should parse");
        prop_assert_eq!(tree.eval(), tree.eval());
    }

    #[test]
    fn canonical_form_is_a_fixed_point(expr in arb_expr(4)) {
        let tree = parse(&expr).expect("generated expression should parse");
        let printed = tree.to_string();
        let reparsed = parse(&printed).expect("canonical output should reparse");
        prop_assert_eq!(reparsed.to_string(), printed);
        prop_assert_eq!(reparsed.eval(), tree.eval());
    }

    #[test]
    fn addition_matches_i64(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let tree = parse(&format!("{a} + ({b})")).expect("sum should parse");
        prop_assert_eq!(tree.eval(), Value::Int(a + b));
    }
}
