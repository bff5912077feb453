use crate::common::command::{repository_dir, run_twig_command, stdout_of, twig_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_new_file_through_its_lifecycle(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_twig_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));

    let untracked = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));
    assert_eq!(untracked, "?? a.txt\n");

    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    let staged = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));
    assert_eq!(staged, "M  a.txt\n");

    twig_commit(dir, "first").assert().success();
    let clean = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));
    assert_eq!(clean, "");
}
