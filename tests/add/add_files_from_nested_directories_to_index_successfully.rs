use crate::common::command::{repository_dir, run_twig_command, stdout_of};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_to_index_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let nested = repository_dir.path().join("src").join("nested");
    let mut files = write_generated_files(&repository_dir.path().join("src"), 2);
    files.extend(write_generated_files(&nested, 3));

    run_twig_command(repository_dir.path(), &["add", "src"])
        .assert()
        .success();

    let mut expected = files
        .iter()
        .map(|file| {
            let relative = file.path.strip_prefix(repository_dir.path()).unwrap();
            format!("M  {}", relative.to_string_lossy())
        })
        .collect::<Vec<_>>();
    expected.sort();

    let actual = stdout_of(&mut run_twig_command(
        repository_dir.path(),
        &["status", "--porcelain"],
    ));

    assert_eq!(actual, format!("{}\n", expected.join("\n")));

    Ok(())
}

#[rstest]
fn adding_the_same_directory_twice_succeeds(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_generated_files(repository_dir.path(), 3);

    run_twig_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    run_twig_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
}
