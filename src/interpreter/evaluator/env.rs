use std::{collections::HashMap, rc::Rc};

use crate::ast::Binding;

/// An immutable overlay mapping names to bindings.
///
/// Scoped definitions extend the environment and the interpreter consults
/// it; extending *never* mutates the parent. [`Environment::overlay`] builds
/// a child that shadows identically-named entries while the bindings
/// themselves stay shared behind `Rc`, so no holder of an environment ever
/// observes another holder's changes.
///
/// The one mutating entry point, [`Environment::define`], exists for the
/// consumer that owns a persistent table across interpreter turns: the
/// read-evaluate loop installing terminal `Let` definitions. It is never
/// called during evaluation.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Rc<Binding>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a child environment extended with `extra`.
    ///
    /// Entries in `extra` shadow same-named entries of `self`. The receiver
    /// is left untouched.
    #[must_use]
    pub fn overlay(&self, extra: &HashMap<String, Rc<Binding>>) -> Self {
        let mut bindings = self.bindings.clone();
        for (name, binding) in extra {
            bindings.insert(name.clone(), Rc::clone(binding));
        }

        Self { bindings }
    }

    /// Installs a binding into this environment in place.
    ///
    /// For the consumer's persistent table only; evaluation always goes
    /// through [`Environment::overlay`].
    pub fn define(&mut self, name: String, binding: Rc<Binding>) {
        self.bindings.insert(name, binding);
    }

    /// Looks up a binding by name.
    ///
    /// Builtins are not part of the environment; callers fall through to the
    /// builtin registry on a miss.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Rc<Binding>> {
        self.bindings.get(name)
    }
}
