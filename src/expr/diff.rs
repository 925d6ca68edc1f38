//! Symbolic differentiation
//!
//! The derivative is assembled through folding constructors that drop
//! `0 + a`, `1 * a`, `a ^ 1` and similar operands on the spot. Without them
//! the chain and product rules bury the useful part of the result in trivial
//! factors.
use super::{BinaryOp, Expr, Func};

fn constant(c: f64) -> Expr {
    Expr::Constant(c)
}

fn is_constant(expr: &Expr, value: f64) -> bool {
    expr.as_constant() == Some(value)
}

fn add(a: Expr, b: Expr) -> Expr {
    match (a.as_constant(), b.as_constant()) {
        (Some(x), Some(y)) => constant(x + y),
        (Some(x), _) if x == 0.0 => b,
        (_, Some(y)) if y == 0.0 => a,
        _ => Expr::binary(BinaryOp::Add, a, b),
    }
}

fn sub(a: Expr, b: Expr) -> Expr {
    match (a.as_constant(), b.as_constant()) {
        (Some(x), Some(y)) => constant(x - y),
        (Some(x), _) if x == 0.0 => neg(b),
        (_, Some(y)) if y == 0.0 => a,
        _ => Expr::binary(BinaryOp::Sub, a, b),
    }
}

fn mul(a: Expr, b: Expr) -> Expr {
    match (a.as_constant(), b.as_constant()) {
        (Some(x), Some(y)) => constant(x * y),
        (Some(x), _) | (_, Some(x)) if x == 0.0 => constant(0.0),
        (Some(x), _) if x == 1.0 => b,
        (_, Some(y)) if y == 1.0 => a,
        _ => Expr::binary(BinaryOp::Mul, a, b),
    }
}

fn div(a: Expr, b: Expr) -> Expr {
    if is_constant(&a, 0.0) {
        return constant(0.0);
    }
    if is_constant(&b, 1.0) {
        return a;
    }
    Expr::binary(BinaryOp::Div, a, b)
}

fn pow(a: Expr, b: Expr) -> Expr {
    if is_constant(&b, 0.0) {
        return constant(1.0);
    }
    if is_constant(&b, 1.0) {
        return a;
    }
    Expr::binary(BinaryOp::Pow, a, b)
}

fn neg(a: Expr) -> Expr {
    match a.as_constant() {
        Some(x) => constant(-x),
        None => Expr::binary(BinaryOp::Mul, constant(-1.0), a),
    }
}

fn call(func: Func, arg: &Expr) -> Expr {
    Expr::call(func, arg.clone())
}

/// Derivative of `func` with respect to its argument `u`.
fn outer_derivative(func: Func, u: &Expr) -> Expr {
    let u_squared = || pow(u.clone(), constant(2.0));
    match func {
        Func::Sin => call(Func::Cos, u),
        Func::Cos => neg(call(Func::Sin, u)),
        Func::Tan => add(pow(call(Func::Tan, u), constant(2.0)), constant(1.0)),
        Func::Asin => div(
            constant(1.0),
            Expr::call(Func::Sqrt, sub(constant(1.0), u_squared())),
        ),
        Func::Acos => div(
            constant(-1.0),
            Expr::call(Func::Sqrt, sub(constant(1.0), u_squared())),
        ),
        Func::Atan => div(constant(1.0), add(u_squared(), constant(1.0))),
        Func::Exp => call(Func::Exp, u),
        Func::Ln | Func::Log => div(constant(1.0), u.clone()),
        Func::Sqrt => div(constant(1.0), mul(constant(2.0), call(Func::Sqrt, u))),
    }
}

impl Expr {
    /// Differentiates the expression with respect to `var`.
    pub fn derivative(&self, var: &str) -> Expr {
        match self {
            Expr::Constant(_) => constant(0.0),
            Expr::Variable(name) => constant(if name == var { 1.0 } else { 0.0 }),
            Expr::Binary { op, lhs: u, rhs: v } => {
                let du = u.derivative(var);
                match op {
                    BinaryOp::Add => add(du, v.derivative(var)),
                    BinaryOp::Sub => sub(du, v.derivative(var)),
                    // (u v)' = u' v + u v'
                    BinaryOp::Mul => add(
                        mul(du, (**v).clone()),
                        mul((**u).clone(), v.derivative(var)),
                    ),
                    // (u / v)' = (u' v - u v') / v^2
                    BinaryOp::Div => {
                        let dv = v.derivative(var);
                        if is_constant(&dv, 0.0) {
                            return div(du, (**v).clone());
                        }
                        div(
                            sub(mul(du, (**v).clone()), mul((**u).clone(), dv)),
                            pow((**v).clone(), constant(2.0)),
                        )
                    }
                    BinaryOp::Pow => power_rule(u, v, du, var),
                }
            }
            Expr::Call { func, arg } => mul(outer_derivative(*func, arg), arg.derivative(var)),
        }
    }
}

fn power_rule(u: &Expr, v: &Expr, du: Expr, var: &str) -> Expr {
    if !v.depends_on(var) {
        // (u^n)' = n u^(n-1) u'
        let n_minus_1 = match v.as_constant() {
            Some(n) => constant(n - 1.0),
            None => sub(v.clone(), constant(1.0)),
        };
        return mul(mul(v.clone(), pow(u.clone(), n_minus_1)), du);
    }
    let dv = v.derivative(var);
    let u_pow_v = pow(u.clone(), v.clone());
    if !u.depends_on(var) {
        // (a^v)' = a^v ln(a) v'
        return mul(mul(u_pow_v, call(Func::Ln, u)), dv);
    }
    // (u^v)' = u^v (v' ln(u) + v u' / u)
    mul(
        u_pow_v,
        add(
            mul(dv, call(Func::Ln, u)),
            div(mul(v.clone(), du), u.clone()),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;
    use approx::assert_relative_eq;

    fn derivative_at(source: &str, x: f64) -> f64 {
        parse(source).unwrap().derivative("x").eval("x", x)
    }

    #[test]
    fn test_polynomial_derivative_is_folded() {
        let expr = parse("x^3 - 2*x + 1").unwrap();
        let derivative = expr.derivative("x");
        assert_eq!(derivative.to_string(), "3 * x^2 - 2");
    }

    #[test]
    fn test_square_derivative_is_exact() {
        let derivative = parse("x^2 - 4").unwrap().derivative("x");
        assert_eq!(
            derivative,
            Expr::binary(
                BinaryOp::Mul,
                Expr::Constant(2.0),
                Expr::Variable("x".to_string())
            )
        );
    }

    #[test]
    fn test_constant_derivative() {
        assert_eq!(parse("7 + 3^2").unwrap().derivative("x"), Expr::Constant(0.0));
    }

    #[test]
    fn test_function_table() {
        let x = 0.3_f64;
        assert_relative_eq!(derivative_at("sin(x)", x), x.cos(), epsilon = 1e-12);
        assert_relative_eq!(derivative_at("cos(x)", x), -x.sin(), epsilon = 1e-12);
        assert_relative_eq!(derivative_at("tan(x)", x), 1.0 / (x.cos() * x.cos()), epsilon = 1e-12);
        assert_relative_eq!(derivative_at("asin(x)", x), 1.0 / (1.0 - x * x).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(derivative_at("acos(x)", x), -1.0 / (1.0 - x * x).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(derivative_at("atan(x)", x), 1.0 / (1.0 + x * x), epsilon = 1e-12);
        assert_relative_eq!(derivative_at("exp(x)", x), x.exp(), epsilon = 1e-12);
        assert_relative_eq!(derivative_at("ln(x)", x), 1.0 / x, epsilon = 1e-12);
        assert_relative_eq!(derivative_at("log(x)", x), 1.0 / x, epsilon = 1e-12);
        assert_relative_eq!(derivative_at("sqrt(x)", x), 0.5 / x.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_chain_rule() {
        let x = 0.7_f64;
        assert_relative_eq!(
            derivative_at("sin(5*x)", x),
            5.0 * (5.0 * x).cos(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            derivative_at("exp(x^2)", x),
            2.0 * x * (x * x).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_product_and_quotient_rules() {
        let x = 1.3_f64;
        assert_relative_eq!(
            derivative_at("x * sin(x)", x),
            x.sin() + x * x.cos(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            derivative_at("sin(x) / x", x),
            (x.cos() * x - x.sin()) / (x * x),
            epsilon = 1e-12
        );
        assert_relative_eq!(derivative_at("1 / x", x), -1.0 / (x * x), epsilon = 1e-12);
    }

    #[test]
    fn test_variable_exponents() {
        let x = 1.7_f64;
        assert_relative_eq!(
            derivative_at("2^x", x),
            2.0_f64.powf(x) * 2.0_f64.ln(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            derivative_at("x^x", x),
            x.powf(x) * (x.ln() + 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_negation() {
        assert_eq!(derivative_at("-x^2", 3.0), -6.0);
        assert_eq!(derivative_at("5 - x", 3.0), -1.0);
    }
}
