use crate::common::command::{init_repository_dir, run_twig_command, twig_commit};
use crate::common::file::{FileSpec, delete_path, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn checkout_keeps_untracked_files_in_the_way(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["rm", "1.txt"]).assert().success();
    twig_commit(dir, "Drop 1.txt").assert().success();
    delete_path(&dir.join("1.txt"));
    write_file(FileSpec::new(
        dir.join("1.txt").join("notes.txt"),
        "untracked notes".to_string(),
    ));

    run_twig_command(dir, &["checkout", "HEAD~1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1.txt/notes.txt"));

    assert_eq!(read_file(&dir.join("1.txt").join("notes.txt")), "untracked notes");
}
