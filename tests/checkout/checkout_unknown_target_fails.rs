use crate::common::command::{init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("feature", "branch 'feature' does not exist")]
#[case("HEAD~3", "unknown revision 'HEAD~3'")]
#[case("0000000000000000000000000000000000000000", "not found")]
fn checkout_unknown_target_fails(
    init_repository_dir: TempDir,
    #[case] target: &str,
    #[case] message: &str,
) {
    run_twig_command(init_repository_dir.path(), &["checkout", target])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}
