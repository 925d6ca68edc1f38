//! Parsing, differentiation and compilation of single-variable formulas
//!
//! A formula goes through four stages:
//!
//! ```text
//! source -> whitelist -> lexer -> parser -> Expr -> derivative Expr
//!                                             \            \
//!                                           Program      Program
//! ```
//!
//! The whitelist rejects anything outside the accepted characters and words
//! before the parser ever sees the input, so structural problems and lexical
//! problems surface as different [`ParseError`] variants.
mod diff;
mod display;
mod lexer;
mod parser;
mod program;
mod whitelist;

pub use crate::error::ParseError;
pub use program::Program;

use crate::function::Function;

/// Binary operators of the formula grammar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a ^ b` (also written `a ** b`)
    Pow,
}

impl BinaryOp {
    /// Applies the operator to two floats.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
        }
    }

    /// Binding strength used by both the parser and the printer.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 10,
            BinaryOp::Mul | BinaryOp::Div => 20,
            BinaryOp::Pow => 30,
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

/// Named functions accepted in formulas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Func {
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
    /// Inverse sine
    Asin,
    /// Inverse cosine
    Acos,
    /// Inverse tangent
    Atan,
    /// Exponential function
    Exp,
    /// Natural logarithm
    Ln,
    /// Natural logarithm (alias of `ln`)
    Log,
    /// Square root
    Sqrt,
}

impl Func {
    /// All accepted functions.
    pub const ALL: [Func; 10] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Exp,
        Func::Ln,
        Func::Log,
        Func::Sqrt,
    ];

    /// Name as written in a formula.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log => "log",
            Func::Sqrt => "sqrt",
        }
    }

    /// Looks up a function by its formula name.
    pub fn from_name(name: &str) -> Option<Func> {
        Func::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Evaluates the function, returning NaN or ±∞ outside its domain.
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Asin => v.asin(),
            Func::Acos => v.acos(),
            Func::Atan => v.atan(),
            Func::Exp => v.exp(),
            Func::Ln | Func::Log => v.ln(),
            Func::Sqrt => v.sqrt(),
        }
    }
}

/// Immutable expression tree of a single-variable formula
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Constant(f64),
    /// Named variable
    Variable(String),
    /// Binary operation
    Binary {
        /// Operator
        op: BinaryOp,
        /// Left operand
        lhs: Box<Expr>,
        /// Right operand
        rhs: Box<Expr>,
    },
    /// Call of a named function with one argument
    Call {
        /// Called function
        func: Func,
        /// Argument
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Builds a binary node without any folding.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Builds a function call node.
    pub fn call(func: Func, arg: Expr) -> Expr {
        Expr::Call {
            func,
            arg: Box::new(arg),
        }
    }

    /// Returns the literal value if this is a constant.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(c) => Some(*c),
            _ => None,
        }
    }

    /// Checks whether the expression mentions `var`.
    pub fn depends_on(&self, var: &str) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable(name) => name == var,
            Expr::Binary { lhs, rhs, .. } => lhs.depends_on(var) || rhs.depends_on(var),
            Expr::Call { arg, .. } => arg.depends_on(var),
        }
    }

    /// Evaluates the tree directly, binding `var` to `x`.
    ///
    /// Any other variable evaluates to NaN. [`Program`] gives the same
    /// results without walking the tree.
    pub fn eval(&self, var: &str, x: f64) -> f64 {
        match self {
            Expr::Constant(c) => *c,
            Expr::Variable(name) if name == var => x,
            Expr::Variable(_) => f64::NAN,
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval(var, x), rhs.eval(var, x)),
            Expr::Call { func, arg } => func.apply(arg.eval(var, x)),
        }
    }
}

/// Parses a formula into an expression tree without differentiating it.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    whitelist::check(source)?;
    let tokens = lexer::lex(source)?;
    parser::parse_expression(&tokens)
}

/// A formula together with its symbolic derivative, both compiled for evaluation
#[derive(Clone, Debug)]
pub struct CompiledFunction {
    source: String,
    variable: String,
    expr: Expr,
    derivative_expr: Expr,
    value_program: Program,
    derivative_program: Program,
}

impl CompiledFunction {
    /// Formula text this function was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Variable the evaluators bind their argument to.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Parsed formula.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Symbolic derivative of the formula.
    pub fn derivative_expr(&self) -> &Expr {
        &self.derivative_expr
    }
}

impl Function for CompiledFunction {
    fn evaluate(&self, x: f64) -> f64 {
        self.value_program.eval(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.derivative_program.eval(x)
    }
}

/// Compiles a formula into an evaluable function and its derivative.
///
/// The formula may only contain digits, `x`, whitespace, parentheses, the
/// operators `+ - * / ^ **` and the functions `sin cos tan asin acos atan exp
/// ln log sqrt`. Anything else yields [`ParseError::InvalidCharacters`];
/// accepted tokens that do not form an expression yield
/// [`ParseError::MalformedExpression`].
///
/// `variable` names the symbol that the argument of the evaluators binds to
/// and that the derivative is taken with respect to.
pub fn compile(source: &str, variable: &str) -> Result<CompiledFunction, ParseError> {
    let expr = parse(source)?;
    let derivative_expr = expr.derivative(variable);
    let value_program = Program::compile(&expr, variable);
    let derivative_program = Program::compile(&derivative_expr, variable);
    Ok(CompiledFunction {
        source: source.to_string(),
        variable: variable.to_string(),
        expr,
        derivative_expr,
        value_program,
        derivative_program,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_quadratic() {
        let f = compile("x^2 - 4", "x").unwrap();
        assert_eq!(f.evaluate(2.0), 0.0);
        assert_eq!(f.derivative(2.0), 4.0);
        assert_eq!(f.evaluate(-3.0), 5.0);
        assert_eq!(f.derivative(-3.0), -6.0);
    }

    #[test]
    fn test_double_star_is_power() {
        let caret = compile("x^3", "x").unwrap();
        let stars = compile("x**3", "x").unwrap();
        assert_eq!(caret.expr(), stars.expr());
        assert_eq!(stars.evaluate(2.0), 8.0);
    }

    #[test]
    fn test_implicit_multiplication_rejected() {
        assert!(matches!(
            compile("2x", "x"),
            Err(ParseError::InvalidCharacters { .. })
        ));
        assert!(matches!(
            compile("2 x", "x"),
            Err(ParseError::MalformedExpression { .. })
        ));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert!(matches!(
            compile("(x + 1", "x"),
            Err(ParseError::MalformedExpression { .. })
        ));
        assert!(matches!(
            compile("x + 1)", "x"),
            Err(ParseError::MalformedExpression { .. })
        ));
    }

    #[test]
    fn test_domain_errors_are_values() {
        let f = compile("sqrt(x) + ln(x)", "x").unwrap();
        assert!(f.evaluate(-1.0).is_nan());
        assert_eq!(f.evaluate(0.0), f64::NEG_INFINITY);
        let g = compile("1 / x", "x").unwrap();
        assert_eq!(g.evaluate(0.0), f64::INFINITY);
    }

    #[test]
    fn test_compile_is_idempotent() {
        let a = compile("sin(5*x) - x + exp(x) - 2", "x").unwrap();
        let b = compile("sin(5*x) - x + exp(x) - 2", "x").unwrap();
        for i in -20..=20 {
            let x = i as f64 * 0.37;
            assert_eq!(a.evaluate(x).to_bits(), b.evaluate(x).to_bits());
            assert_eq!(a.derivative(x).to_bits(), b.derivative(x).to_bits());
        }
    }

    #[test]
    fn test_other_variable_gives_zero_derivative() {
        let f = compile("x^2", "y").unwrap();
        assert_eq!(f.derivative(3.0), 0.0);
        assert!(f.evaluate(3.0).is_nan());
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}x{}", "(".repeat(50_000), ")".repeat(50_000));
        assert_eq!(
            compile(&deep, "x").unwrap_err(),
            ParseError::malformed("formula nested too deeply")
        );

        let nested = format!("{}x{}", "sin(".repeat(200), ")".repeat(200));
        let f = compile(&nested, "x").unwrap();
        let mut value = 0.5_f64;
        let mut slope = 1.0;
        for _ in 0..200 {
            slope *= value.cos();
            value = value.sin();
        }
        assert!((f.evaluate(0.5) - value).abs() < 1e-12);
        assert!((f.derivative(0.5) - slope).abs() < 1e-12);
    }

    #[test]
    fn test_func_names_round_trip() {
        for func in Func::ALL {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
        assert_eq!(Func::from_name("sinh"), None);
    }
}
