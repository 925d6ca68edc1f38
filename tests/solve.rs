use approx::assert_abs_diff_eq;
use newton_trace::newton::{self, Params};
use newton_trace::plot::PlotData;
use newton_trace::session::Session;
use newton_trace::{compile, Function, ParseError, StatusCode};

#[test]
fn cubic_roots_from_formula() {
    let f = compile("x^3 - 2*x + 1", "x").unwrap();
    let params = Params::new();
    for (x0, expected) in [(-2.0, -1.618034), (-3.0, -1.618034), (0.0, 0.618034), (1.5, 1.0)] {
        let result = newton::solve(&f, x0, &params);
        assert_eq!(result.code, StatusCode::Converged, "x0 = {x0}");
        assert_abs_diff_eq!(result.root, expected, epsilon = 1e-5);
        assert!(f.evaluate(result.root).abs() < params.tol);
    }
}

#[test]
fn trace_invariants_hold_for_every_outcome() {
    let cases = [
        ("x^3 - 2*x + 1", 0.0),
        ("x^2 + 1", 0.0),
        ("x^2 + 1", 0.5),
        ("sqrt(x)", -4.0),
        ("cos(x) - x", 1.0),
    ];
    for (source, x0) in cases {
        let f = compile(source, "x").unwrap();
        let result = newton::solve(&f, x0, &Params::new());
        assert!(!result.trace.is_empty());
        assert_eq!(result.trace[0].to_bits(), x0.to_bits());
        assert_eq!(
            result.root.to_bits(),
            result.trace.latest().to_bits(),
            "{source}"
        );
        assert_eq!(result.steps, result.trace.len() - 1);
    }
}

#[test]
fn kepler_like_equation() {
    let f = compile("cos(x) - x", "x").unwrap();
    let result = newton::solve(&f, 1.0, &Params::new());
    assert_eq!(result.code, StatusCode::Converged);
    assert_eq!(result.trace.len(), 4);
    assert_abs_diff_eq!(result.root, 0.739085133385284, epsilon = 1e-9);
}

#[test]
fn flat_tangent_from_formula() {
    let f = compile("x^2 + 1", "x").unwrap();
    let result = newton::solve(&f, 0.0, &Params::new());
    assert_eq!(result.code, StatusCode::ZeroDerivative);
    assert_eq!(result.trace.len(), 1);
}

#[test]
fn no_real_root_exhausts_iterations() {
    let f = compile("x^2 + 1", "x").unwrap();
    let params = Params::new().with_max_steps(25);
    let result = newton::solve(&f, 0.5, &params);
    assert_eq!(result.code, StatusCode::MaxIterationsExceeded);
    assert_eq!(result.trace.len(), 26);
}

#[test]
fn square_and_its_derivative() {
    let f = compile("x^2 - 4", "x").unwrap();
    assert_eq!(f.evaluate(2.0), 0.0);
    assert_eq!(f.derivative(2.0), 4.0);
}

#[test]
fn implicit_multiplication_is_rejected() {
    for source in ["2x", "2 x", "x(x + 1)", "(x + 1)(x - 1)"] {
        let err = compile(source, "x").unwrap_err();
        assert!(
            matches!(
                err,
                ParseError::InvalidCharacters { .. } | ParseError::MalformedExpression { .. }
            ),
            "{source}"
        );
    }
}

#[test]
fn error_messages() {
    let err = compile("x + y", "x").unwrap_err();
    assert_eq!(err, ParseError::InvalidCharacters { position: 4 });
    assert!(err.to_string().starts_with("invalid input at position 5"));

    let err = compile("(x + 1", "x").unwrap_err();
    assert_eq!(err.to_string(), "malformed expression: missing ')'");
}

#[test]
fn solver_is_deterministic_across_compilations() {
    let a = compile("sin(5*x) - x + exp(x) - 2", "x").unwrap();
    let b = compile("sin(5*x) - x + exp(x) - 2", "x").unwrap();
    let params = Params::new();
    for x0 in [-1.0, 0.0, 0.5, 2.0] {
        let first = newton::solve(&a, x0, &params);
        std::thread::sleep(std::time::Duration::from_millis(1));
        let second = newton::solve(&b, x0, &params);
        assert_eq!(first, second, "x0 = {x0}");
    }
}

#[test]
fn compiled_function_is_shareable_across_threads() {
    let mut session = Session::new();
    let f = session.compile("x^3 - 2*x + 1").unwrap();
    let handles: Vec<_> = [-2.0, 0.0, 1.5]
        .into_iter()
        .map(|x0| {
            let f = std::sync::Arc::clone(&f);
            std::thread::spawn(move || newton::solve(&*f, x0, &Params::new()).root)
        })
        .collect();
    let roots: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_abs_diff_eq!(roots[0], -1.618034, epsilon = 1e-5);
    assert_abs_diff_eq!(roots[1], 0.618034, epsilon = 1e-5);
    assert_abs_diff_eq!(roots[2], 1.0, epsilon = 1e-5);
}

#[test]
fn plot_data_for_a_run() {
    let f = compile("x^2 - 4", "x").unwrap();
    let result = newton::solve(&f, 1.0, &Params::new());
    let data = PlotData::new(&f, &result.trace);
    assert_eq!(data.tangents.len(), result.trace.len());
    assert_eq!(data.root.0, result.root);
    assert_abs_diff_eq!(data.tangents[0].intercept, result.trace[1]);
}
