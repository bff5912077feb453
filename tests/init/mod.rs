mod commands_outside_a_repository_fail;
mod init_repository_successfully;
