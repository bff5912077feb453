use crate::common::command::{init_repository_dir, master_oid, run_twig_command, stdout_of, twig_commit};
use crate::common::file::{FileSpec, write_file_at};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("HEAD~1")]
#[case("master^")]
#[case("@~1")]
fn show_log_from_ancestor(init_repository_dir: TempDir, #[case] revision: &str) {
    let dir = init_repository_dir.path();
    let first = master_oid(dir);
    write_file_at(FileSpec::new(dir.join("1.txt"), "uno".to_string()), 1_000);
    run_twig_command(dir, &["add", "1.txt"]).assert().success();
    twig_commit(dir, "Second commit").assert().success();

    let actual = stdout_of(&mut run_twig_command(dir, &["log", revision]));

    assert!(actual.starts_with(&format!("commit {first}\n")));
    assert!(!actual.contains("Second commit"));
}
