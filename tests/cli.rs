//! End-to-end tests for the compmap binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

fn compmap() -> Command {
    Command::cargo_bin("compmap").expect("binary should build")
}

fn sample_project() -> TestProject {
    let project = TestProject::new();
    project.add_file("Foo.tsx", "export default function Foo() {}\n");
    project.add_file("Bar.js", "import Foo from \"./Foo\"\n");
    project
}

#[test]
fn test_export_mode() {
    let project = sample_project();

    compmap()
        .arg("export")
        .arg(project.path())
        .assert()
        .success()
        .stdout("Foo.tsx: [Foo]\n");
}

#[test]
fn test_import_mode() {
    let project = sample_project();

    compmap()
        .arg("import")
        .arg(project.path())
        .assert()
        .success()
        .stdout("Bar.js: [Foo]\n");
}

#[test]
fn test_nested_paths_are_relative_to_root() {
    let project = TestProject::new();
    project.add_file(
        "src/components/Button.tsx",
        "export const Button = () => null;\nexport default Button;\n",
    );
    project.add_file("src/styles.css", ".button {}\n");

    compmap()
        .arg("export")
        .arg(project.path())
        .assert()
        .success()
        .stdout("src/components/Button.tsx: [Button Button]\n");
}

#[test]
fn test_default_only_flag() {
    let project = TestProject::new();
    project.add_file(
        "Card.tsx",
        "export const CardBody = () => null;\nexport default function Card() {}\n",
    );

    compmap()
        .args(["export", "--default-only"])
        .arg(project.path())
        .assert()
        .success()
        .stdout("Card.tsx: [Card]\n");
}

#[test]
fn test_all_names_flag() {
    let project = TestProject::new();
    project.add_file("Page.js", "import { Grid, GridItem } from \"@/layout/grid\";\n");

    compmap()
        .arg("import")
        .arg(project.path())
        .assert()
        .success()
        .stdout("Page.js: [Grid]\n");

    compmap()
        .args(["import", "--all-names"])
        .arg(project.path())
        .assert()
        .success()
        .stdout("Page.js: [Grid GridItem]\n");
}

#[test]
fn test_skip_dir_flag() {
    let project = sample_project();
    project.add_file("node_modules/lib/Vendor.js", "export default Vendor;\n");

    compmap()
        .args(["export", "--skip-dir", "node_modules"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Vendor").not());
}

#[test]
fn test_json_format() {
    let project = sample_project();

    let output = compmap()
        .args(["export", "--format", "json"])
        .arg(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["mode"], "export");
    assert_eq!(parsed["files"][0]["path"], "Foo.tsx");
    assert_eq!(parsed["files"][0]["components"][0], "Foo");
}

#[test]
fn test_no_matches_prints_nothing() {
    let project = TestProject::new();
    project.add_file("util.js", "export function helper() {}\n");

    compmap()
        .arg("export")
        .arg(project.path())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_unknown_mode_is_usage_error() {
    let project = sample_project();

    compmap()
        .arg("exports")
        .arg(project.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown mode"));
}

#[test]
fn test_missing_path_is_usage_error() {
    compmap().arg("export").assert().failure().code(2);
}

#[test]
fn test_extra_argument_is_usage_error() {
    let project = sample_project();

    compmap()
        .arg("export")
        .arg(project.path())
        .arg("extra")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_root_is_fatal() {
    let project = TestProject::new();

    compmap()
        .arg("export")
        .arg(project.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to scan"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_does_not_fail_run() {
    use std::os::unix::fs::symlink;

    let project = sample_project();
    // A dangling symlink is located but cannot be read.
    symlink(
        project.path().join("missing-target.tsx"),
        project.path().join("Broken.tsx"),
    )
    .unwrap();

    compmap()
        .arg("export")
        .arg(project.path())
        .assert()
        .success()
        .stdout("Foo.tsx: [Foo]\n")
        .stderr(predicate::str::contains("Broken.tsx"));
}
