use crate::common::command::{init_repository_dir, master_oid, read_head, run_twig_command, stdout_of, twig_commit};
use crate::common::file::{FileSpec, read_file, write_file_at};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_moves_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = master_oid(dir);
    write_file_at(FileSpec::new(dir.join("1.txt"), "uno".to_string()), 1_000);
    run_twig_command(dir, &["add", "1.txt"]).assert().success();
    twig_commit(dir, "second").assert().success();

    run_twig_command(dir, &["reset", "HEAD~1"]).assert().success();

    assert_eq!(master_oid(dir), first);
    assert_eq!(read_head(dir), "ref: refs/heads/master");
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(
        stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"])),
        ""
    );
}

#[rstest]
fn reset_on_detached_head_moves_master(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = master_oid(dir);
    write_file_at(FileSpec::new(dir.join("1.txt"), "uno".to_string()), 1_000);
    run_twig_command(dir, &["add", "1.txt"]).assert().success();
    twig_commit(dir, "second").assert().success();
    let second = master_oid(dir);
    run_twig_command(dir, &["checkout", "HEAD~1"]).assert().success();

    run_twig_command(dir, &["reset", &second]).assert().success();

    assert_eq!(master_oid(dir), second);
    assert_eq!(read_head(dir), first);
    assert_eq!(read_file(&dir.join("1.txt")), "uno");
}
