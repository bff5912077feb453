mod commit_without_changes_fails;
mod write_commit_successfully_for_nested_project;
