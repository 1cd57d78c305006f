use std::fs;
use std::path::{Path, PathBuf};

/// A JSON file in the system temp dir that is removed again when dropped.
pub struct Fixture {
    path: PathBuf,
}

impl Fixture {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Writes `contents` to a file that is unique per test.
pub fn write_fixture(test_name: &str, contents: &str) -> Fixture {
    let path = std::env::temp_dir().join(format!("volunteer_signup_{}_{}.json", std::process::id(), test_name));
    fs::write(&path, contents).expect("failed to write fixture");
    Fixture { path }
}
