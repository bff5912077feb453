use crate::common::command::{init_repository_dir, run_twig_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let index_before = std::fs::read(dir.join(".twig").join("index")).unwrap();
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "modified".to_string()));

    let actual = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));

    assert_eq!(actual, " M 1.txt\n M a/2.txt\n");
    assert_eq!(std::fs::read(dir.join(".twig").join("index")).unwrap(), index_before);
}

#[rstest]
fn report_modified_files_with_unchanged_size(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a").join("b").join("3.txt"), "hello".to_string()));

    let actual = stdout_of(&mut run_twig_command(dir, &["status", "--porcelain"]));

    assert_eq!(actual, " M a/b/3.txt\n");
}
