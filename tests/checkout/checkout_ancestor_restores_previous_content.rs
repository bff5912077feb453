use crate::common::command::{master_oid, read_head, repository_dir, run_twig_command, twig_commit};
use crate::common::file::{FileSpec, read_file, write_file_at};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_ancestor_restores_previous_content(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_twig_command(dir, &["init"]).assert().success();

    write_file_at(FileSpec::new(dir.join("a.txt"), "hello".to_string()), 1_000);
    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    twig_commit(dir, "first").assert().success();
    let first = master_oid(dir);

    write_file_at(FileSpec::new(dir.join("a.txt"), "world".to_string()), 2_000);
    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    twig_commit(dir, "second").assert().success();

    run_twig_command(dir, &["checkout", "HEAD~1"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "hello");
    assert_eq!(read_head(dir), first);
    run_twig_command(dir, &["status", "--porcelain"])
        .assert()
        .success()
        .stdout("");
}
