use colored::Colorize;

const LABEL_WIDTH: usize = 8;

/// How a single path differs between the workspace, the index and HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileStatus {
    /// Staged content differs from HEAD and will be committed
    Staged,
    /// Working content differs from what is staged
    Unstaged,
    /// Staged path missing on disk, or committed path no longer staged
    Removed,
    /// Neither staged nor committed
    Untracked,
}

impl FileStatus {
    pub const ALL: [FileStatus; 4] = [
        FileStatus::Staged,
        FileStatus::Unstaged,
        FileStatus::Removed,
        FileStatus::Untracked,
    ];

    /// Two-column code used by `status --porcelain`
    pub fn porcelain_code(&self) -> &'static str {
        match self {
            FileStatus::Staged => "M ",
            FileStatus::Unstaged => " M",
            FileStatus::Removed => " D",
            FileStatus::Untracked => "??",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            FileStatus::Staged => "Changes to be committed:",
            FileStatus::Unstaged => "Changes not staged for commit:",
            FileStatus::Removed => "Removed files:",
            FileStatus::Untracked => "Untracked files:",
        }
    }
}

/// One line of the long status format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange<'a> {
    pub(crate) path: &'a str,
    pub(crate) status: FileStatus,
}

impl std::fmt::Display for FileChange<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colored_path = match self.status {
            FileStatus::Staged => self.path.green(),
            FileStatus::Unstaged | FileStatus::Removed | FileStatus::Untracked => self.path.red(),
        };
        write!(f, "{:>width$}{}", "", colored_path, width = LABEL_WIDTH)
    }
}
