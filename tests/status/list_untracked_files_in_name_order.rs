use crate::common::command::{init_repository_dir, run_twig_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_in_name_order(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("z.txt"), "z".to_string()));
    write_file(FileSpec::new(dir.join("a").join("new.txt"), "new".to_string()));
    write_file(FileSpec::new(dir.join("0.txt"), "zero".to_string()));

    let actual = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));

    assert_eq!(actual, "?? 0.txt\n?? a/new.txt\n?? z.txt\n");
}

#[rstest]
fn do_not_list_empty_directories(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::create_dir_all(dir.join("empty").join("nested")).unwrap();

    let actual = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));

    assert_eq!(actual, "");
}
