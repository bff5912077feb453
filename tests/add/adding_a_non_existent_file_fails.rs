use crate::common::command::{repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_fails(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_twig_command(repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "pathspec 'missing.txt' did not match any files",
        ));
}

#[rstest]
fn adding_a_path_outside_the_repository_fails(repository_dir: TempDir) {
    let project = repository_dir.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(repository_dir.path().join("outside.txt"), "outside").unwrap();
    run_twig_command(&project, &["init"]).assert().success();

    run_twig_command(&project, &["add", "../outside.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed path"));
}
