//! Interactive Newton's method on the command line
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use newton_trace::newton::Params;
use newton_trace::session::Session;
use newton_trace::{newton, CompiledFunction, Function, ParseError, SolveResult, StatusCode};

const BANNER: &str = "\n|-----------------------------|\n| Newton's method root finder |\n|-----------------------------|\n";

/// Prints `message` and reads one line; `None` once input is exhausted.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask_yes(input: &mut impl BufRead, message: &str) -> io::Result<bool> {
    Ok(prompt(input, message)?.map_or(false, |answer| answer.trim().eq_ignore_ascii_case("y")))
}

fn ask_for_function(
    input: &mut impl BufRead,
    session: &mut Session,
) -> io::Result<Option<Arc<CompiledFunction>>> {
    loop {
        let Some(source) = prompt(
            input,
            "Enter the function f(x) (in terms of x, e.g., sin(x) - x + exp(x) - 2): ",
        )?
        else {
            return Ok(None);
        };
        match session.compile(&source) {
            Ok(function) => {
                println!("f(x)  = {}", function.expr());
                println!("f'(x) = {}", function.derivative_expr());
                return Ok(Some(function));
            }
            Err(err @ ParseError::InvalidCharacters { .. }) => {
                println!("Invalid input. Please use only numbers, x, and mathematical operators.");
                println!("  ({err})");
            }
            Err(err @ ParseError::MalformedExpression { .. }) => {
                println!("Invalid input. Please enter a valid mathematical expression.");
                println!("  ({err})");
            }
        }
    }
}

fn ask_for_guess(input: &mut impl BufRead) -> io::Result<Option<f64>> {
    loop {
        let Some(answer) = prompt(input, "Enter the initial guess: ")? else {
            return Ok(None);
        };
        match answer.trim().parse::<f64>() {
            Ok(x0) => return Ok(Some(x0)),
            Err(_) => println!("Must enter a numeric value, try again."),
        }
    }
}

fn report(function: &CompiledFunction, result: &SolveResult) {
    match result.code {
        StatusCode::Converged => println!("The root of the function is: {:.6}", result.root),
        StatusCode::ZeroDerivative => {
            println!("Derivative is zero at the current point, can not continue.");
            println!("Could not find the root, showing the attempt.");
        }
        _ => {
            println!("Maximum number of iterations reached without convergence.");
            println!("Could not find the root, showing the attempt.");
        }
    }
    println!("{:>10} {:>16} {:>16}", "iteration", "x", "f(x)");
    for (i, &x) in result.trace.iter().enumerate() {
        println!("{:>10} {:>16.6} {:>16.6e}", i, x, function.evaluate(x));
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session = Session::new();
    let params = Params::new();

    println!("{BANNER}");

    let Some(mut function) = ask_for_function(&mut input, &mut session)? else {
        return Ok(());
    };

    loop {
        let Some(x0) = ask_for_guess(&mut input)? else {
            break;
        };
        let result = newton::solve(&*function, x0, &params);
        report(&function, &result);

        if ask_yes(&mut input, "Do you want to guess again? (y/n): ")? {
            continue;
        }
        if !ask_yes(&mut input, "Would you like to use a different function? (y/n): ")? {
            break;
        }
        match ask_for_function(&mut input, &mut session)? {
            Some(next) => function = next,
            None => break,
        }
    }

    println!("{BANNER}");
    Ok(())
}
