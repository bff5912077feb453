use crate::common::command::{repository_dir, run_twig_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty twig repository in .+\.twig\n$",
        )?);

    let metadata = repository_dir.child(".twig");
    metadata.child("objects").assert(predicate::path::is_dir());
    metadata.child("refs/heads").assert(predicate::path::is_dir());
    metadata.child("refs/tags").assert(predicate::path::is_dir());
    metadata.child("branches").assert(predicate::path::is_dir());
    metadata.child("HEAD").assert("ref: refs/heads/master\n");
    metadata
        .child("description")
        .assert(predicate::str::contains("Edit this file to name the repository"));
    metadata
        .child("config")
        .assert(predicate::str::contains("repositoryformatversion = 0"));

    Ok(())
}

#[rstest]
fn init_at_a_nested_path(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    repository_dir
        .child("nested/project/.twig/HEAD")
        .assert(predicate::path::is_file());
}
