use crate::common::command::{init_repository_dir, master_oid, run_twig_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_log_from_abbreviated_sha(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let oid = master_oid(dir);

    let actual = stdout_of(&mut run_twig_command(dir, &["log", &oid[..8]]));

    assert!(actual.starts_with(&format!("commit {oid}\n")));
}
