use crate::{RNativeFunction, RookFunction};
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

type ModuleMap = IndexMap<&'static str, RNativeFunction, BuildHasherDefault<FxHasher>>;

/// A named collection of builtins
///
/// Entries keep their registration order. Registering a name twice replaces the earlier entry.
#[derive(Clone, Debug, Default)]
pub struct Module(ModuleMap);

impl Module {
    /// Creates an empty module
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a builtin with the given name
    pub fn add_fn(&mut self, name: &'static str, f: impl RookFunction) {
        self.0.insert(name, RNativeFunction::new(f));
    }

    /// Returns the builtin with the given name
    pub fn get(&self, name: &str) -> Option<&RNativeFunction> {
        self.0.get(name)
    }

    /// Adds all of the other module's builtins to this module
    pub fn extend(&mut self, other: &Module) {
        self.0
            .extend(other.0.iter().map(|(name, f)| (*name, f.clone())));
    }

    /// Returns an iterator over the module's builtin names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// The number of builtins in the module
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the module contains no builtins
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallContext, RValue, RuntimeSettings};

    #[test]
    fn names_are_kept_in_registration_order() {
        let mut module = Module::new();
        module.add_fn("b", |_| Ok(().into()));
        module.add_fn("a", |_| Ok(().into()));
        module.add_fn("b", |_| Ok(RValue::Int(1).into()));

        assert_eq!(module.names().collect::<Vec<_>>(), ["b", "a"]);

        let settings = RuntimeSettings::default();
        let mut ctx = CallContext::new(&settings, Vec::new());
        let result = module.get("b").unwrap().call(&mut ctx).unwrap();
        assert_eq!(result.first(), RValue::Int(1));
    }
}
