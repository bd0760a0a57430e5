//! Property tests: generated well-formed expressions against a direct
//! floating-point reference evaluation.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use calc_eval::{BinaryOp, Calculator};
use proptest::prelude::*;

/// Small expression tree used to generate input and its expected value.
#[derive(Clone, Debug)]
enum Expr {
    Num(u8),
    /// A leading `-`: folded into a literal, or negating a group.
    Neg(Box<Expr>),
    Bin(Box<Expr>, BinaryOp, Box<Expr>),
}

impl Expr {
    /// Source text; every binary node is parenthesized.
    fn source(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Neg(inner) => match **inner {
                Expr::Num(n) => format!("-{n}"),
                Expr::Bin(..) => format!("-{}", inner.source()),
                Expr::Neg(_) => format!("-({})", inner.source()),
            },
            Expr::Bin(l, op, r) => format!("({}{}{})", l.source(), op.as_symbol(), r.source()),
        }
    }

    /// Reference value; `None` if a division by zero occurs.
    fn value(&self) -> Option<f64> {
        match self {
            Expr::Num(n) => Some(f64::from(*n)),
            Expr::Neg(inner) => Some(-inner.value()?),
            Expr::Bin(l, op, r) => {
                let (a, b) = (l.value()?, r.value()?);
                match op {
                    BinaryOp::Add => Some(a + b),
                    BinaryOp::Sub => Some(a - b),
                    BinaryOp::Mul => Some(a * b),
                    BinaryOp::Div if b == 0.0 => None,
                    BinaryOp::Div => Some(a / b),
                    BinaryOp::Pow => Some(a.powf(b)),
                }
            }
        }
    }

    fn count(&self, target: BinaryOp) -> u64 {
        match self {
            Expr::Num(_) => 0,
            Expr::Neg(inner) => inner.count(target),
            Expr::Bin(l, op, r) => u64::from(*op == target) + l.count(target) + r.count(target),
        }
    }
}

/// Equal values, treating NaN as equal to itself.
fn same_value(actual: f64, expected: f64) -> bool {
    actual == expected || (actual.is_nan() && expected.is_nan())
}

fn operator() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(BinaryOp::ALL.to_vec())
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        3 => (0u8..20).prop_map(Expr::Num),
        1 => (0u8..20).prop_map(|n| Expr::Neg(Box::new(Expr::Num(n)))),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            4 => (inner.clone(), operator(), inner.clone())
                .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r))),
            1 => inner.prop_map(|e| Expr::Neg(Box::new(e))),
        ]
    })
}

/// Flat chains like `3+4*2**2-7` without parentheses.
fn flat_chain() -> impl Strategy<Value = (u8, Vec<(BinaryOp, u8)>)> {
    (1u8..10, prop::collection::vec((operator(), 1u8..10), 0..6))
}

/// Fold every operator of `tier` into its left neighbour, left to right.
fn fold_tier(values: &mut Vec<f64>, ops: &mut Vec<BinaryOp>, tier: usize) {
    let mut i = 0;
    while i < ops.len() {
        if ops[i].tier() != tier {
            i += 1;
            continue;
        }
        let (a, b) = (values[i], values[i + 1]);
        values[i] = match ops[i] {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
        };
        values.remove(i + 1);
        ops.remove(i);
    }
}

/// Precedence-aware reference evaluation of a flat chain.
fn reference_chain(first: u8, rest: &[(BinaryOp, u8)]) -> f64 {
    let mut values = vec![f64::from(first)];
    let mut ops = Vec::new();
    for &(op, n) in rest {
        ops.push(op);
        values.push(f64::from(n));
    }
    for tier in 0..BinaryOp::TIERS.len() {
        fold_tier(&mut values, &mut ops, tier);
    }
    values[0]
}

proptest! {
    #[test]
    fn parenthesized_expressions_match_reference(e in expr()) {
        let mut calc = Calculator::new();
        let outcome = calc.evaluate(&e.source());
        match e.value() {
            Some(expected) => {
                let actual = outcome.unwrap();
                prop_assert!(
                    same_value(actual, expected),
                    "{} gave {actual}, expected {expected}",
                    e.source()
                );
            }
            None => prop_assert!(outcome.is_err()),
        }
    }

    #[test]
    fn flat_chains_respect_precedence((first, rest) in flat_chain()) {
        let mut source = first.to_string();
        for (op, n) in &rest {
            source.push_str(op.as_symbol());
            source.push_str(&n.to_string());
        }
        let value = Calculator::new().evaluate(&source).unwrap();
        let expected = reference_chain(first, &rest);
        prop_assert!(
            same_value(value, expected),
            "{source} gave {value}, expected {expected}"
        );
    }

    #[test]
    fn statistics_count_operator_occurrences(e in expr()) {
        prop_assume!(e.value().is_some());
        let mut calc = Calculator::new();
        calc.evaluate(&e.source()).unwrap();
        calc.evaluate(&e.source()).unwrap();
        let mut dispatched = 0;
        for op in BinaryOp::ALL {
            prop_assert_eq!(calc.statistics().get(op.name()), Some(2 * e.count(op)));
            dispatched += e.count(op);
        }
        // History only covers the second evaluation: one request and one
        // response per operator.
        prop_assert_eq!(calc.history().len() as u64, 2 * dispatched);
    }
}
