mod checkout_ancestor_restores_previous_content;
mod checkout_branch_reattaches_head;
mod checkout_keeps_untracked_files_in_the_way;
mod checkout_unknown_target_fails;
mod reset_moves_the_current_branch;
