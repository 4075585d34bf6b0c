//! Host extension points.
//!
//! A calculator knows nothing about the names used in an expression. The host
//! supplies a [`VariableResolver`] for bare names, a [`MethodInvoker`] for
//! calls the native library does not cover, and a [`Tracer`] that receives
//! debug output. Plain closures implement all three.

use hashbrown::HashMap;

use super::Calculator;

/// Resolves a variable name to its value.
pub trait VariableResolver {
    /// Return `None` when the name is unknown.
    fn resolve(&self, calculator: &Calculator, name: &str) -> Option<f64>;
}

/// Runs a host-defined function.
pub trait MethodInvoker {
    /// Return `None` when the host does not handle `name`.
    fn invoke(&self, calculator: &Calculator, name: &str, args: &[f64]) -> Option<f64>;
}

/// Receives human-readable trace lines while debug mode is on.
pub trait Tracer {
    fn trace(&self, line: &str);
}

impl<F> VariableResolver for F
where
    F: Fn(&Calculator, &str) -> Option<f64>,
{
    fn resolve(&self, calculator: &Calculator, name: &str) -> Option<f64> {
        self(calculator, name)
    }
}

impl<F> MethodInvoker for F
where
    F: Fn(&Calculator, &str, &[f64]) -> Option<f64>,
{
    fn invoke(&self, calculator: &Calculator, name: &str, args: &[f64]) -> Option<f64> {
        self(calculator, name, args)
    }
}

impl<F> Tracer for F
where
    F: Fn(&str),
{
    fn trace(&self, line: &str) {
        self(line)
    }
}

/// A map of variable values, usable directly as a resolver.
///
/// # Example
///
/// ```
/// use reckon_core::{Calculator, Variables};
///
/// let mut variables = Variables::new();
/// variables.insert("width", 4.0);
/// variables.insert("height", 2.5);
///
/// let mut calculator = Calculator::new();
/// calculator.set_variable_resolver(Some(Box::new(variables)));
/// assert_eq!(calculator.calculate("width * height").unwrap(), 10.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning its previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl VariableResolver for Variables {
    fn resolve(&self, _calculator: &Calculator, name: &str) -> Option<f64> {
        self.get(name)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Variables {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
    }
}
