use crate::common::command::{init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("missing-branch")]
#[case("HEAD~7")]
#[case("bad..name")]
fn show_log_from_invalid_revision(init_repository_dir: TempDir, #[case] revision: &str) {
    run_twig_command(init_repository_dir.path(), &["log", revision])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("unknown revision '{revision}'")));
}
