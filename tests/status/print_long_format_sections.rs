use crate::common::command::{
    init_repository_dir, master_oid, run_twig_command, stdout_of, twig_commit,
};
use crate::common::file::{FileSpec, delete_path, write_file, write_file_at};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_long_format_sections(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file_at(FileSpec::new(dir.join("1.txt"), "one, staged".to_string()), 1_000);
    run_twig_command(dir, &["add", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "two, edited".to_string()));
    delete_path(&dir.join("a").join("b").join("3.txt"));
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));

    let actual = stdout_of(&mut run_twig_command(dir, &["status"]));

    let expected = "On branch master

Changes to be committed:
        1.txt

Changes not staged for commit:
        a/2.txt

Removed files:
        a/b/3.txt

Untracked files:
        new.txt
";
    assert_eq!(actual, expected);
}

#[rstest]
fn print_detached_head_in_header(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = master_oid(dir);
    write_file_at(FileSpec::new(dir.join("1.txt"), "one, again".to_string()), 1_000);
    run_twig_command(dir, &["add", "1.txt"]).assert().success();
    twig_commit(dir, "second").assert().success();

    run_twig_command(dir, &["checkout", "HEAD~1"]).assert().success();
    let actual = stdout_of(&mut run_twig_command(dir, &["status"]));

    assert_eq!(
        actual,
        format!(
            "HEAD detached at {}\nnothing to commit, working tree clean\n",
            &first[..7]
        )
    );
}
