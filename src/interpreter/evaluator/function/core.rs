use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Environment, EvalResult},
        function::builtin,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments; the table guarantees the
/// slice length matches the declared arity.
type BuiltinFn = fn(&[f64]) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a name, an exact arity and the implementing
/// function. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of `(name, arity)` pairs).
macro_rules! builtin_functions {
    (
        $(
            $name:literal / $arity:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every builtin as a `(name, arity)` pair.
        pub const BUILTIN_FUNCTIONS: &[(&str, usize)] = &[
            $(($name, $arity),)*
        ];
    };
}

builtin_functions! {
    "sin"   / 1 => |a| a[0].sin(),
    "cos"   / 1 => |a| a[0].cos(),
    "tan"   / 1 => |a| a[0].tan(),
    "asin"  / 1 => |a| a[0].asin(),
    "acos"  / 1 => |a| a[0].acos(),
    "atan"  / 1 => |a| a[0].atan(),
    "sinh"  / 1 => |a| a[0].sinh(),
    "cosh"  / 1 => |a| a[0].cosh(),
    "tanh"  / 1 => |a| a[0].tanh(),
    "asinh" / 1 => |a| a[0].asinh(),
    "acosh" / 1 => |a| a[0].acosh(),
    "atanh" / 1 => |a| a[0].atanh(),
    "sqrt"  / 1 => |a| a[0].sqrt(),
    "cbrt"  / 1 => |a| a[0].cbrt(),
    "exp"   / 1 => |a| a[0].exp(),
    "ln"    / 1 => |a| a[0].ln(),
    "log10" / 1 => |a| a[0].log10(),
    "log2"  / 1 => |a| a[0].log2(),
    "abs"   / 1 => |a| a[0].abs(),
    "log"   / 2 => |a| builtin::log(a[0], a[1]),
    "pow"   / 2 => |a| a[0].powf(a[1]),
    "mod"   / 2 => |a| builtin::fmod(a[0], a[1]),
}

/// Finds the builtin for a call with `arity` arguments named `name`.
///
/// Arity is matched first, then the exact (case-sensitive) name, so `log`
/// with one argument is unknown even though `log` exists with two.
fn lookup(name: &str, arity: usize) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter()
                 .filter(|b| b.arity == arity)
                 .find(|b| b.name == name)
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The builtin is resolved before any argument is evaluated, so a call
    /// to an unknown function has no side effects. Arguments are then
    /// evaluated left to right; an assignment inside an argument commits
    /// before the next argument runs.
    ///
    /// # Errors
    /// - `UnknownFunction` when no builtin has this name and arity.
    /// - Any error raised while evaluating an argument.
    pub(crate) fn eval_function_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let builtin =
            lookup(name, arguments.len()).ok_or_else(|| RuntimeError::UnknownFunction {
                                             name:  name.to_string(),
                                             arity: arguments.len(),
                                         })?;

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        Ok((builtin.func)(&values))
    }
}
