use crate::common::command::{init_repository_dir, master_oid, read_head, run_twig_command, twig_commit};
use crate::common::file::{FileSpec, read_file, write_file_at};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_reattaches_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = master_oid(dir);
    write_file_at(FileSpec::new(dir.join("a").join("2.txt"), "deux".to_string()), 1_000);
    run_twig_command(dir, &["add", "a"]).assert().success();
    twig_commit(dir, "second").assert().success();

    run_twig_command(dir, &["checkout", &first[..10]])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("HEAD is now detached"));
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two");
    assert_eq!(read_head(dir), first);

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("On branch master"));
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "deux");
    assert_eq!(read_head(dir), "ref: refs/heads/master");
}
