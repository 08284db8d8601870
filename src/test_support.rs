//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::modules::{Module, ModuleUpdate};
use crate::core::state::App;
use crate::source::{DependencySource, SourceError};

fn module(path: &str, version: &str, update_version: &str, indirect: bool) -> Module {
    Module {
        path: path.to_string(),
        version: version.to_string(),
        update: Some(ModuleUpdate {
            path: path.to_string(),
            version: update_version.to_string(),
        }),
        main: false,
        indirect,
    }
}

/// A direct dependency with an update available.
pub fn direct(path: &str, version: &str, update_version: &str) -> Module {
    module(path, version, update_version, false)
}

/// An indirect dependency with an update available.
pub fn indirect(path: &str, version: &str, update_version: &str) -> Module {
    module(path, version, update_version, true)
}

/// `count` direct modules whose paths sort in index order.
pub fn numbered(count: usize) -> Vec<Module> {
    (0..count)
        .map(|i| direct(&format!("example.com/mod{i:02}"), "v1.0.0", "v1.1.0"))
        .collect()
}

/// An App that has seen a terminal of `terminal_height` rows and a load.
pub fn ready_app(terminal_height: u16, modules: Vec<Module>) -> App {
    let mut app = App::new();
    update(
        &mut app,
        Action::Resize {
            width: 80,
            height: terminal_height,
        },
    );
    update(&mut app, Action::Loaded(Ok(modules)));
    app
}

/// A source that always returns the same list.
pub struct StaticSource(pub Vec<Module>);

#[async_trait]
impl DependencySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<Vec<Module>, SourceError> {
        Ok(self.0.clone())
    }

    async fn apply_update(&self, _module: &Module) -> Result<Vec<Module>, SourceError> {
        Ok(self.0.clone())
    }
}
