//! Polish-notation descent.
//!
//! ```text
//! formula := operator formula formula
//!          | operand
//! ```
//!
//! The descent is written once in [`FormulaParser`] and is generic over a
//! [`Reducer`], which decides what a leaf and an operator application turn
//! into. [`Evaluator`] reduces to an `i64` while parsing; [`TreeBuilder`]
//! reduces to a [`Formula`] tree. Both see the tokens in the same order, so a
//! line fails the same way under either reducer up to the first reduction
//! error.

use std::fmt;

use descent_lex::{tokenize, Operator, PolishScanner, Token, TokenKind, TokenStream};
use descent_util::Span;

use crate::error::EvalError;
use crate::limits::{DepthCounter, ParseLimits};

/// What the descent builds out of leaves and operator applications.
pub trait Reducer {
    /// The value one `formula` reduces to.
    type Output;

    /// Reduces an operand token.
    fn leaf(&mut self, token: &Token) -> Result<Self::Output, EvalError>;

    /// Reduces `op` applied to two already-reduced operands. `span` is the
    /// operator's location.
    fn node(
        &mut self,
        op: Operator,
        span: Span,
        left: Self::Output,
        right: Self::Output,
    ) -> Result<Self::Output, EvalError>;
}

/// Reduces a formula to its integer value as it is parsed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Reducer for Evaluator {
    type Output = i64;

    fn leaf(&mut self, token: &Token) -> Result<i64, EvalError> {
        parse_operand(token)
    }

    fn node(&mut self, op: Operator, span: Span, left: i64, right: i64) -> Result<i64, EvalError> {
        apply(op, left, right, span)
    }
}

/// Reduces a formula to a [`Formula`] tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl Reducer for TreeBuilder {
    type Output = Formula;

    fn leaf(&mut self, token: &Token) -> Result<Formula, EvalError> {
        parse_operand(token).map(Formula::Leaf)
    }

    fn node(
        &mut self,
        op: Operator,
        _span: Span,
        left: Formula,
        right: Formula,
    ) -> Result<Formula, EvalError> {
        Ok(Formula::Node {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

fn parse_operand(token: &Token) -> Result<i64, EvalError> {
    token.lexeme().parse().map_err(|_| EvalError::Overflow {
        text: token.lexeme().to_string(),
        span: token.span(),
    })
}

fn apply(op: Operator, left: i64, right: i64, span: Span) -> Result<i64, EvalError> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => {
            if right == 0 {
                return Err(EvalError::DivideByZero { span });
            }
            left.checked_div(right)
        },
    };
    result.ok_or_else(|| EvalError::Overflow {
        text: format!("{} {} {}", op, left, right),
        span,
    })
}

/// A parsed Polish-notation formula.
///
/// Displays fully parenthesised, e.g. `(* 3 (+ 4 5))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// An operand
    Leaf(i64),
    /// An operator applied to two sub-formulas
    Node {
        /// The operator
        op: Operator,
        /// First operand
        left: Box<Formula>,
        /// Second operand
        right: Box<Formula>,
    },
}

impl Formula {
    /// Computes the value of the tree with the same arithmetic as
    /// [`Evaluator`].
    ///
    /// ```
    /// use descent_par::{parse_formula, ParseLimits};
    ///
    /// let formula = parse_formula("* 3 + 4 5", &ParseLimits::default()).unwrap();
    /// assert_eq!(formula.to_string(), "(* 3 (+ 4 5))");
    /// assert_eq!(formula.evaluate(), Ok(27));
    /// ```
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        match self {
            Formula::Leaf(value) => Ok(*value),
            Formula::Node { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                apply(*op, left, right, Span::DUMMY)
            },
        }
    }

    /// Renders the tree back into space-separated prefix notation, the form
    /// the calculator reads.
    pub fn to_prefix(&self) -> String {
        let mut out = String::new();
        self.write_prefix(&mut out);
        out
    }

    fn write_prefix(&self, out: &mut String) {
        if !out.is_empty() {
            out.push(' ');
        }
        match self {
            Formula::Leaf(value) => out.push_str(&value.to_string()),
            Formula::Node { op, left, right } => {
                out.push(op.symbol());
                left.write_prefix(out);
                right.write_prefix(out);
            },
        }
    }

    /// Number of nested `formula` levels, 1 for a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Formula::Leaf(_) => 1,
            Formula::Node { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Leaf(value) => write!(f, "{}", value),
            Formula::Node { op, left, right } => write!(f, "({} {} {})", op, left, right),
        }
    }
}

/// Recursive-descent parser for one line of Polish notation.
pub struct FormulaParser<R> {
    reducer: R,
    limits: ParseLimits,
    depth: DepthCounter,
}

impl<R: Reducer> FormulaParser<R> {
    /// Creates a parser that reduces with `reducer`.
    pub fn new(reducer: R, limits: ParseLimits) -> Self {
        Self {
            reducer,
            limits,
            depth: DepthCounter::default(),
        }
    }

    /// Parses and reduces one complete formula.
    ///
    /// The whole stream must be consumed: tokens left after the formula make
    /// the line a `MalformedFormula`, even if the prefix reduced successfully.
    pub fn parse(&mut self, stream: &mut TokenStream) -> Result<R::Output, EvalError> {
        self.depth.reset();
        let value = self.formula(stream)?;
        if !stream.is_exhausted() {
            return Err(EvalError::MalformedFormula {
                position: stream.consumed(),
            });
        }
        Ok(value)
    }

    fn formula(&mut self, stream: &mut TokenStream) -> Result<R::Output, EvalError> {
        if !self.depth.enter(&self.limits) {
            return Err(EvalError::TooDeep {
                limit: self.limits.max_depth,
            });
        }

        let position = stream.consumed();
        let token = stream
            .bump()
            .ok_or(EvalError::MalformedFormula { position })?;

        let value = match token.kind() {
            TokenKind::Operator(op) => {
                let left = self.formula(stream)?;
                let right = self.formula(stream)?;
                self.reducer.node(op, token.span(), left, right)?
            },
            TokenKind::Operand => self.reducer.leaf(&token)?,
            _ => return Err(EvalError::MalformedFormula { position }),
        };

        self.depth.leave();
        Ok(value)
    }
}

/// Scans and evaluates one line.
///
/// ```
/// use descent_par::{evaluate, EvalError, ParseLimits};
///
/// let limits = ParseLimits::default();
/// assert_eq!(evaluate("+ 1 2", &limits), Ok(3));
/// assert!(matches!(evaluate("+ 1", &limits), Err(EvalError::MalformedFormula { .. })));
/// ```
pub fn evaluate(source: &str, limits: &ParseLimits) -> Result<i64, EvalError> {
    let mut stream = tokenize(PolishScanner::new(source))?;
    FormulaParser::new(Evaluator, *limits).parse(&mut stream)
}

/// Scans and parses one line into a [`Formula`].
pub fn parse_formula(source: &str, limits: &ParseLimits) -> Result<Formula, EvalError> {
    let mut stream = tokenize(PolishScanner::new(source))?;
    FormulaParser::new(TreeBuilder, *limits).parse(&mut stream)
}
