//! Common test utilities for relprep integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Configuration used by pipeline tests: the converter copies the authoring
/// text through unchanged, and the packaging/upload commands drop marker
/// files so their invocation is observable.
#[allow(dead_code)]
pub const PIPELINE_CONFIG: &str = "\
converter: [cp, '{input}', '{output}']
package_command: [touch, packaged.marker]
publish_command: [touch, uploaded.marker]
";

/// A package workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory backing the workspace
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace seeded with source documents and the pipeline
    /// test configuration
    pub fn with_sample_package() -> Self {
        let workspace = Self::new();
        workspace.write_file(
            "README.md",
            "<!-- badges -->\n# Sample\n\nA sample package.\n",
        );
        workspace.write_file("HISTORY.md", "## 1.0.0 (2026-08-05)\n\n* first release\n");
        workspace.write_file("LICENSE", "MIT terms\n");
        workspace.write_file("relprep.yaml", PIPELINE_CONFIG);
        workspace
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Run the relprep binary with the workspace as working directory
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(dead_code, deprecated)]
pub fn relprep_cmd(workspace: &TestWorkspace) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("relprep").expect("relprep binary");
    cmd.current_dir(&workspace.path);
    cmd
}
