use crate::common::command::{init_repository_dir, master_oid, run_twig_command, stdout_of, twig_commit};
use crate::common::file::{FileSpec, write_file_at};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_medium_format(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = master_oid(dir);
    write_file_at(FileSpec::new(dir.join("1.txt"), "uno".to_string()), 1_000);
    run_twig_command(dir, &["add", "1.txt"]).assert().success();
    twig_commit(dir, "Second commit").assert().success();
    let second = master_oid(dir);

    let actual = stdout_of(&mut run_twig_command(dir, &["log"]));

    let date = r"Date:   \w{3} \w{3} \d{2} \d{2}:\d{2}:\d{2} \d{4}";
    let pattern = format!(
        "^commit {second}\n{date}\n\n    Second commit\n\ncommit {first}\n{date}\n\n    Initial commit\n\n$"
    );
    assert!(
        regex::Regex::new(&pattern)?.is_match(&actual),
        "unexpected log output:\n{actual}"
    );
    assert_eq!(actual.matches("commit ").count(), 2);

    Ok(())
}
