use crate::common::command::{init_repository_dir, master_oid, twig_commit};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_without_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let before = master_oid(dir);

    twig_commit(dir, "Nothing new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(master_oid(dir), before);
}
