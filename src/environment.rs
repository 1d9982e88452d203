//! The per-build naming authority.
//!
//! Every rendered variable name comes out of one [`Environment`] so that
//! independently built fragments cannot clobber each other's names when
//! composed under a single build. The first request for a reference
//! allocates a name derived from its hint; later requests return the
//! memoized name. Within one build the mapping is a bijection from
//! reference identity to name.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::references::{RefId, VariableRef};
use crate::utils::identifier::{is_reserved_word, sanitize_identifier};

#[derive(Debug, Default)]
struct ScopeTable {
    names: HashMap<RefId, String>,
    taken: HashSet<String>,
}

/// Scope-aware name allocator, local to one `build` invocation.
///
/// Subquery scopes obtained through [`Environment::child`] share the
/// allocation table, which is what keeps imported variables resolving to
/// the same names inside a `CALL { ... }` block as outside it.
#[derive(Debug, Clone)]
pub struct Environment {
    scope: Rc<RefCell<ScopeTable>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scope: Rc::new(RefCell::new(ScopeTable::default())),
        }
    }

    /// A scope handle for a nested subquery. Shares the build's
    /// allocation table so enclosing-scope names stay stable across the
    /// subquery boundary.
    pub fn child(&self) -> Environment {
        Environment {
            scope: Rc::clone(&self.scope),
        }
    }

    /// Resolve the rendered name for a reference, allocating on first
    /// encounter. Never renames an already-allocated reference.
    pub fn name_for(&mut self, var: &VariableRef) -> String {
        let mut table = self.scope.borrow_mut();
        if let Some(name) = table.names.get(&var.id()) {
            return name.clone();
        }
        let name = match var {
            VariableRef::Named(named) => {
                // fixed names render verbatim but still reserve the slot
                let name = named.name().to_string();
                table.taken.insert(name.clone());
                name
            }
            _ => Self::allocate(&mut table, &sanitize_identifier(var.hint())),
        };
        table.names.insert(var.id(), name.clone());
        name
    }

    /// The assigned name, if this reference has been encountered.
    pub fn lookup(&self, var: &VariableRef) -> Option<String> {
        self.scope.borrow().names.get(&var.id()).cloned()
    }

    fn allocate(table: &mut ScopeTable, base: &str) -> String {
        let name = if !is_reserved_word(base) && !table.taken.contains(base) {
            base.to_string()
        } else {
            // keyword hints and collisions take a numeric suffix,
            // skipping names already handed out
            let mut suffix = 0usize;
            loop {
                let candidate = format!("{}{}", base, suffix);
                if !table.taken.contains(&candidate) && !is_reserved_word(&candidate) {
                    break candidate;
                }
                suffix += 1;
            }
        };
        log::trace!("allocated variable name '{}' for hint '{}'", name, base);
        table.taken.insert(name.clone());
        name
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
