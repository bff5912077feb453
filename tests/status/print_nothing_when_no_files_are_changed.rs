use crate::common::command::{init_repository_dir, run_twig_command, stdout_of};
use crate::common::file::touch;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_when_no_files_are_changed(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    let actual = stdout_of(&mut run_twig_command(dir, &["status"]));

    assert_eq!(actual, "On branch master\nnothing to commit, working tree clean\n");
}

#[rstest]
fn print_nothing_if_a_file_is_touched(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    touch(&dir.join("1.txt"), 1_000_000);

    let actual = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));

    assert_eq!(actual, "");
}
