//! Cooked tokens and binary operators.

use std::fmt;

/// Binary operators understood by the evaluator.
///
/// Each operator belongs to exactly one precedence tier. Tiers are applied
/// in the order given by [`BinaryOp::TIERS`], each as a single left-to-right
/// scan, so every operator is left-associative (including `**`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Every operator, in registration order.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    /// Precedence tiers, highest first.
    pub const TIERS: [&'static [BinaryOp]; 3] = [
        &[BinaryOp::Pow],
        &[BinaryOp::Mul, BinaryOp::Div],
        &[BinaryOp::Add, BinaryOp::Sub],
    ];

    /// Source symbol of the operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }

    /// Human-readable operation name, used as the statistics key.
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "addition",
            BinaryOp::Sub => "subtraction",
            BinaryOp::Mul => "multiplication",
            BinaryOp::Div => "division",
            BinaryOp::Pow => "power",
        }
    }

    /// Index into [`BinaryOp::TIERS`]; lower binds tighter.
    pub const fn tier(self) -> usize {
        match self {
            BinaryOp::Pow => 0,
            BinaryOp::Mul | BinaryOp::Div => 1,
            BinaryOp::Add | BinaryOp::Sub => 2,
        }
    }

    /// Look up an operator by its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// A token of the working sequence the evaluator rewrites in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token {
    /// Numeric literal; a folded unary minus is already applied.
    Number(f64),
    Operator(BinaryOp),
    LeftParen,
    RightParen,
}

impl Token {
    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` for tokens after which a `-` is a sign, not a subtraction.
    pub fn starts_operand(&self) -> bool {
        matches!(self, Token::Operator(_) | Token::LeftParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Render a token sequence separated by single spaces.
pub fn display_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&token.to_string());
    }
    out
}
