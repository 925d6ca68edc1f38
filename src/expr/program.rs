use super::{BinaryOp, Expr, Func};

/// Bytecode instruction for stack-based evaluation
#[derive(Clone, Copy, Debug, PartialEq)]
enum Instruction {
    /// Push a constant value onto the stack
    LoadConst(f64),
    /// Push the argument onto the stack
    LoadArg,
    /// Pop two operands, push the result
    Binary(BinaryOp),
    /// Replace the top of the stack by the function value
    Call(Func),
}

/// Expression tree flattened into postfix instructions
///
/// A program is built once and evaluated many times; evaluation never fails
/// and propagates NaN and ±∞ like plain float arithmetic.
#[derive(Clone, Debug)]
pub struct Program {
    instructions: Vec<Instruction>,
    stack_size: usize,
}

impl Program {
    /// Compiles `expr` with its argument bound to `var`.
    ///
    /// Variables other than `var` are replaced by NaN.
    pub fn compile(expr: &Expr, var: &str) -> Program {
        let mut program = Program {
            instructions: Vec::new(),
            stack_size: 0,
        };
        program.emit(expr, var, 0);
        program
    }

    /// Emits the instructions of `expr` assuming `depth` values already sit on the stack.
    fn emit(&mut self, expr: &Expr, var: &str, depth: usize) {
        self.stack_size = self.stack_size.max(depth + 1);
        match expr {
            Expr::Constant(c) => self.instructions.push(Instruction::LoadConst(*c)),
            Expr::Variable(name) if name == var => self.instructions.push(Instruction::LoadArg),
            Expr::Variable(_) => self.instructions.push(Instruction::LoadConst(f64::NAN)),
            Expr::Binary { op, lhs, rhs } => {
                self.emit(lhs, var, depth);
                self.emit(rhs, var, depth + 1);
                self.instructions.push(Instruction::Binary(*op));
            }
            Expr::Call { func, arg } => {
                self.emit(arg, var, depth);
                self.instructions.push(Instruction::Call(*func));
            }
        }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Checks whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Evaluates the program at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let mut stack: Vec<f64> = Vec::with_capacity(self.stack_size);
        for instruction in &self.instructions {
            match *instruction {
                Instruction::LoadConst(c) => stack.push(c),
                Instruction::LoadArg => stack.push(x),
                Instruction::Binary(op) => {
                    let b = stack.pop().unwrap_or(f64::NAN);
                    if let Some(a) = stack.last_mut() {
                        *a = op.apply(*a, b);
                    }
                }
                Instruction::Call(func) => {
                    if let Some(top) = stack.last_mut() {
                        *top = func.apply(*top);
                    }
                }
            }
        }
        stack.pop().unwrap_or(f64::NAN)
    }
}
