mod show_log_from_abbreviated_sha;
mod show_log_from_ancestor;
mod show_log_from_invalid_revision;
mod show_log_with_no_commits;
mod show_multiple_commits_in_medium_format;
