//! # TUI Components
//!
//! Both components are stateless: they are built each frame from props
//! borrowed out of `App` and rendered into their slice of the layout.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (status line: loading / up-to-date / counter)
//! └── update_list.rs   (viewport-windowed module list with cursor)
//! ```
//!
//! The footer is a constant line and is drawn directly by `ui.rs`.

pub mod header;
pub mod update_list;

pub use header::Header;
pub use update_list::UpdateList;
