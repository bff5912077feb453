use crate::common::command::{init_repository_dir, run_twig_command, stdout_of};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files_from_last_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    delete_path(&dir.join("1.txt"));

    let actual = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));

    assert_eq!(actual, " D 1.txt\n");
}

#[rstest]
fn report_files_in_deleted_directories(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    delete_path(&dir.join("a"));

    let actual = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));

    assert_eq!(actual, " D a/2.txt\n D a/b/3.txt\n");
}
