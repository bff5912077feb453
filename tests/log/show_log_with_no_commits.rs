use crate::common::command::{repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_log_with_no_commits(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_twig_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "current branch does not have any commits yet",
        ));
}
