//! User-facing commands
//!
//! Each command is an `impl Repository` block that loads what it needs, performs the
//! operation and writes its human-readable output to the repository writer.
//!
//! ## Commands
//!
//! - `init`: create the repository layout
//! - `add`: stage files
//! - `rm`: unstage files
//! - `commit`: record the staged tree
//! - `status`: compare workspace, index and HEAD
//! - `log`: show commit history
//! - `checkout`: move HEAD or restore files
//! - `reset`: move the current branch

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod reset;
pub mod rm;
pub mod status;
