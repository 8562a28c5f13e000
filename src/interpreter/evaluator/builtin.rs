use std::f64::consts;

use crate::interpreter::evaluator::env::Environment;

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and the current
/// environment. None of the fixed builtins read the environment, but the
/// signature threads it so one could in principle recurse into evaluation.
pub type BuiltinFn = fn(&[f64], &Environment) -> f64;

/// Metadata for one entry of the builtin registry.
pub struct BuiltinDef {
    /// The case-sensitive builtin name.
    pub name:  &'static str,
    /// The exact number of arguments the builtin accepts.
    pub arity: usize,
    /// The handler invoked with the evaluated arguments.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name, an exact arity, and a function pointer
/// implementing the builtin. The macro produces `BUILTIN_TABLE` (static
/// table for lookup) and `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of every registered builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => { arity: 1, func: |args, _env| args[0].sin() },
    "cos"   => { arity: 1, func: |args, _env| args[0].cos() },
    "tan"   => { arity: 1, func: |args, _env| args[0].tan() },
    "asin"  => { arity: 1, func: |args, _env| args[0].asin() },
    "asinh" => { arity: 1, func: |args, _env| args[0].asinh() },
    "acos"  => { arity: 1, func: |args, _env| args[0].acos() },
    "acosh" => { arity: 1, func: |args, _env| args[0].acosh() },
    "atan"  => { arity: 1, func: |args, _env| args[0].atan() },
    "atan2" => { arity: 2, func: |args, _env| args[0].atan2(args[1]) },
    "atanh" => { arity: 1, func: |args, _env| args[0].atanh() },
    "ceil"  => { arity: 1, func: |args, _env| args[0].ceil() },
    "floor" => { arity: 1, func: |args, _env| args[0].floor() },
    "round" => { arity: 1, func: |args, _env| args[0].round() },
    "log"   => { arity: 1, func: |args, _env| args[0].log10() },
    "ln"    => { arity: 1, func: |args, _env| args[0].ln() },
}

/// Looks up a builtin function by its case-sensitive name.
///
/// # Returns
/// The registry entry, or `None` when the name is not a builtin.
#[must_use]
pub fn builtin_function(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Looks up a builtin constant by its case-sensitive name.
///
/// # Example
/// ```
/// use mathlet::interpreter::evaluator::builtin::builtin_constant;
///
/// assert_eq!(builtin_constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(builtin_constant("tau"), None);
/// ```
#[must_use]
pub fn builtin_constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        _ => None,
    }
}
