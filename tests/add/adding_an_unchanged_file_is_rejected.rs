use crate::common::command::{repository_dir, run_twig_command};
use crate::common::file::{FileSpec, touch, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn adding_an_unchanged_file_is_rejected(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let file = repository_dir.path().join("a.txt");
    write_file(FileSpec::new(file.clone(), "hello".to_string()));

    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already staged and unchanged"));

    touch(&file, 1_000_000);
    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
}
