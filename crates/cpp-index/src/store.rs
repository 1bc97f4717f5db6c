//! The accumulating definition table shared across translation units.

use std::collections::{BTreeMap, btree_map::Entry};

use crate::extract::{ClassDef, FunctionDef};

/// Reconciliation strategy for a class key discovered more than once.
///
/// Headers are parsed once per including translation unit, so rediscovery is
/// the normal case, not an error. One policy is chosen per run and applied
/// consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassMergePolicy {
    /// Keep the incumbent unless its recorded size is non-positive
    /// (incomplete). Stable once a complete definition has been seen.
    #[default]
    KeepCompleted,
    /// Keep whichever candidate has the larger recorded size; picks the most
    /// complete instantiation when templates differ across units.
    LargestSize,
}

/// Flat, deduplicated tables of class and function definitions, keyed by
/// fully-qualified name.
///
/// `BTreeMap` keeps iteration in ascending FQN order, which is the report
/// order and what makes reruns byte-identical.
#[derive(Debug, Default)]
pub struct DefinitionStore {
    policy: ClassMergePolicy,
    classes: BTreeMap<String, ClassDef>,
    functions: BTreeMap<String, FunctionDef>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ClassMergePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Merge a rediscovered or new class definition per the active policy.
    pub fn merge_class(
        &mut self,
        def: ClassDef,
    ) {
        match self.classes.entry(def.fqn.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(def);
            }
            Entry::Occupied(mut entry) => {
                let replace = match self.policy {
                    ClassMergePolicy::KeepCompleted => entry.get().size <= 0,
                    ClassMergePolicy::LargestSize => def.size > entry.get().size,
                };
                if replace {
                    entry.insert(def);
                }
            }
        }
    }

    /// Merge a function definition: last write wins, unconditionally.
    ///
    /// Overload sets sharing one fully-qualified name collapse to the
    /// last-seen overload; a documented limitation.
    pub fn merge_function(
        &mut self,
        def: FunctionDef,
    ) {
        self.functions.insert(def.fqn.clone(), def);
    }

    /// Classes in ascending FQN order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.values()
    }

    /// Functions in ascending FQN order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
        self.functions.values()
    }

    pub fn class(
        &self,
        fqn: &str,
    ) -> Option<&ClassDef> {
        self.classes.get(fqn)
    }

    pub fn function(
        &self,
        fqn: &str,
    ) -> Option<&FunctionDef> {
        self.functions.get(fqn)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

#[cfg(test)]
#[path = "../tests/src/store_tests.rs"]
mod tests;
