use crate::common::command::{master_oid, repository_dir, run_twig_command, twig_commit};
use crate::common::file::{FileSpec, write_file, write_file_at};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn write_commit_successfully_for_nested_project(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_twig_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("b").join("2.txt"), "two".to_string()));
    run_twig_command(dir, &["add", "."]).assert().success();

    twig_commit(dir, "Initial commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master \(root-commit\) [0-9a-f]{7}\] Initial commit\n$",
        )?);
    let first = master_oid(dir);

    write_file_at(FileSpec::new(dir.join("a").join("b").join("2.txt"), "deux".to_string()), 1_000);
    run_twig_command(dir, &["add", "a"]).assert().success();

    twig_commit(dir, "Second commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master [0-9a-f]{7}\] Second commit\n$",
        )?);
    let second = master_oid(dir);

    assert_ne!(first, second);
    assert_eq!(second.len(), 40);
    assert!(
        dir.join(".twig")
            .join("objects")
            .join(&second[..2])
            .join(&second[2..])
            .is_file()
    );

    Ok(())
}
