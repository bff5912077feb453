mod list_new_file_through_its_lifecycle;
mod list_untracked_files_in_name_order;
mod print_long_format_sections;
mod print_nothing_when_no_files_are_changed;
mod report_deleted_files_from_last_commit;
mod report_files_with_modified_contents;
