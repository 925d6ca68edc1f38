use std::fmt;

use super::{BinaryOp, Expr};

/// Printing precedence of a node; higher binds tighter.
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Constant(c) if *c < 0.0 => 25,
        Expr::Binary {
            op: BinaryOp::Mul,
            lhs,
            ..
        } if lhs.as_constant() == Some(-1.0) => 25,
        Expr::Binary { op, .. } => op.precedence(),
        Expr::Constant(_) | Expr::Variable(_) | Expr::Call { .. } => u8::MAX,
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(c) => write!(f, "{c}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Call { func, arg } => write!(f, "{}({arg})", func.name()),
            Expr::Binary {
                op: BinaryOp::Mul,
                lhs,
                rhs,
            } if lhs.as_constant() == Some(-1.0) => {
                write!(f, "-")?;
                write_operand(f, rhs, precedence(rhs) < BinaryOp::Pow.precedence())
            }
            Expr::Binary { op, lhs, rhs } => {
                let own = op.precedence();
                let (lhs_parens, rhs_parens) = if *op == BinaryOp::Pow {
                    (precedence(lhs) <= own, precedence(rhs) < own)
                } else {
                    let non_associative = matches!(op, BinaryOp::Sub | BinaryOp::Div);
                    (
                        precedence(lhs) < own,
                        precedence(rhs) < own || (non_associative && precedence(rhs) == own),
                    )
                };
                write_operand(f, lhs, lhs_parens)?;
                match op {
                    BinaryOp::Pow => write!(f, "^")?,
                    _ => write!(f, " {} ", op.symbol())?,
                }
                write_operand(f, rhs, rhs_parens)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse;

    fn reprint(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    #[test]
    fn test_minimal_parentheses() {
        assert_eq!(reprint("(x + 1) * 2"), "(x + 1) * 2");
        assert_eq!(reprint("x + (1 * 2)"), "x + 1 * 2");
        assert_eq!(reprint("x - (1 - x)"), "x - (1 - x)");
        assert_eq!(reprint("(x^2)^3"), "(x^2)^3");
        assert_eq!(reprint("x^2^3"), "x^2^3");
    }

    #[test]
    fn test_negation() {
        assert_eq!(reprint("-x^2"), "-x^2");
        assert_eq!(reprint("-(x + 1)"), "-(x + 1)");
        assert_eq!(reprint("(-2)^x"), "(-2)^x");
        assert_eq!(reprint("sin(-x)"), "sin(-x)");
    }

    #[test]
    fn test_reprint_parses_back_to_same_tree() {
        for source in ["sin(5*x) - x + exp(x) - 2", "x^3 - 2*x + 1", "1/(x - 2)/x", "-x^-2"] {
            let expr = parse(source).unwrap();
            assert_eq!(parse(&expr.to_string()).unwrap(), expr);
        }
    }
}
