use crate::common::command::{repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["commit", "-m", "nothing"])]
fn commands_outside_a_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_twig_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a twig repository"));
}

#[rstest]
fn commands_work_from_a_subdirectory(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let nested = repository_dir.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    run_twig_command(&nested, &["status", "--porcelain"])
        .assert()
        .success()
        .stdout("");
}
