use std::fs;
use std::path::PathBuf;

use modup::source::GoModules;

// ============================================================================
// Helper Functions
// ============================================================================

/// Path to the shell script that stands in for `go`.
pub fn fake_go() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fake-go.sh")
}

/// A `GoModules` source running the fake `go` in a fresh module directory.
///
/// `mode` selects the fake's behavior: `ok`, `list-fails`, `malformed` or
/// `get-fails`. The directory is returned so tests can inspect `get.log`.
pub fn go_source(test: &str, mode: &str) -> (GoModules, PathBuf) {
    let dir = std::env::temp_dir().join(format!("modup-{}-{}", std::process::id(), test));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("mode"), mode).unwrap();

    let source = GoModules::new(fake_go()).with_dir(Some(dir.clone()));
    (source, dir)
}
