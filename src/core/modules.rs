//! # Modules
//!
//! The data `modup` shows: one `Module` per dependency with a pending
//! update, kept in a `ModuleList` together with the cursor.
//!
//! ```text
//! ModuleList
//! ├── modules: Vec<Module>   // direct first, then indirect; each by path
//! └── cursor: usize          // meaningful only when modules is non-empty
//! ```

use std::cmp::Ordering;

use serde::Deserialize;

/// A newer version available for a module.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModuleUpdate {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Version")]
    pub version: String,
}

/// A single dependency module as reported by `go list -m -u -json`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Module {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Version", default)]
    pub version: String,
    #[serde(rename = "Update", default)]
    pub update: Option<ModuleUpdate>,
    #[serde(rename = "Main", default)]
    pub main: bool,
    #[serde(rename = "Indirect", default)]
    pub indirect: bool,
}

impl Module {
    /// True if this module belongs in the update list.
    pub fn is_updatable(&self) -> bool {
        !self.main && self.update.is_some()
    }

    /// The `path@version` argument handed to `go get`.
    pub fn update_target(&self) -> Option<String> {
        self.update
            .as_ref()
            .map(|u| format!("{}@{}", u.path, u.version))
    }
}

/// Direct modules before indirect ones, then by path.
fn display_order(a: &Module, b: &Module) -> Ordering {
    a.indirect
        .cmp(&b.indirect)
        .then_with(|| a.path.cmp(&b.path))
}

/// Sorts modules into display order.
pub fn sort_modules(modules: &mut [Module]) {
    modules.sort_by(display_order);
}

/// The ordered update list plus the cursor into it.
///
/// Only `core::action::update` mutates this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleList {
    modules: Vec<Module>,
    cursor: usize,
}

impl ModuleList {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules, cursor: 0 }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The module under the cursor, `None` when the list is empty.
    pub fn selected(&self) -> Option<&Module> {
        self.modules.get(self.cursor)
    }

    /// Moves the cursor by `delta`, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.modules.is_empty() {
            return;
        }
        self.cursor = wrap_index(self.cursor as isize + delta, self.modules.len());
    }

    /// Places the cursor without wrapping. Used by viewport reconciliation,
    /// which always hands back an index inside the visible window.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.modules.len().saturating_sub(1));
    }

    /// Swaps in a freshly loaded list and wraps the cursor into it.
    pub fn replace(&mut self, modules: Vec<Module>) {
        self.modules = modules;
        self.clamp_cursor();
    }

    /// Wraps the cursor into `[0, len)`, so an index one past the end lands
    /// on the first entry. Leaves an empty list's cursor alone.
    pub fn clamp_cursor(&mut self) {
        if self.modules.is_empty() {
            return;
        }
        self.cursor = wrap_index(self.cursor as isize, self.modules.len());
    }
}

/// Wraps `index` into `[0, len)`. `len` must be non-zero.
pub fn wrap_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}
