use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use twig::areas::repository::Repository;

const LOG_ENV: &str = "TWIG_LOG";

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version control system",
    long_about = "twig stores file snapshots as content-addressed blobs and trees, \
    stages changes in an index and records them as a linear history of commits.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages the given files. Directories are expanded to every file below them."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "rm",
        about = "Unstage files",
        long_about = "This command removes the given files from the index, leaving them on disk."
    )]
    Rm {
        #[arg(index = 1, required = true, help = "The files to unstage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command shows the files that are untracked, staged, modified or removed."
    )]
    Status {
        #[arg(long, help = "Print the status in a machine-readable format")]
        porcelain: bool,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists the commits reachable from the given revision, or from HEAD."
    )]
    Log {
        #[arg(index = 1, help = "The revision to start from")]
        revision: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a revision or restore files",
        long_about = "This command moves HEAD to a branch or commit and rewrites the working tree to match. \
        With -f, it restores the given files from the HEAD commit instead."
    )]
    Checkout {
        #[arg(short = 'f', long = "files", help = "Restore the given files from HEAD")]
        files: bool,
        #[arg(index = 1, required = true, help = "The revision, or the files with -f")]
        targets: Vec<String>,
    },
    #[command(
        name = "reset",
        about = "Move the current branch to a revision",
        long_about = "This command points the current branch at the given revision and rewrites the working tree to match."
    )]
    Reset {
        #[arg(index = 1, help = "The revision to reset to")]
        revision: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pwd = std::env::current_dir().context("unable to read the current directory")?;

    match &cli.command {
        Commands::Init { path } => {
            let root = match path {
                Some(path) => pwd.join(path),
                None => pwd,
            };
            std::fs::create_dir_all(&root)
                .with_context(|| format!("unable to create {}", root.display()))?;

            Repository::new(&root, Box::new(std::io::stdout())).init()?
        }
        Commands::Add { paths } => open(&pwd)?.add(&absolute(&pwd, paths))?,
        Commands::Rm { paths } => open(&pwd)?.rm(&absolute(&pwd, paths))?,
        Commands::Commit { message } => {
            open(&pwd)?.commit(message)?;
        }
        Commands::Status { porcelain } => {
            open(&pwd)?.status(*porcelain)?;
        }
        Commands::Log { revision } => open(&pwd)?.log(revision.as_deref())?,
        Commands::Checkout { files, targets } => {
            let repository = open(&pwd)?;

            if *files {
                repository.checkout_files(&absolute(&pwd, targets))?
            } else {
                match targets.as_slice() {
                    [target] => {
                        repository.checkout(target)?;
                    }
                    _ => anyhow::bail!("checkout expects a single revision"),
                }
            }
        }
        Commands::Reset { revision } => {
            open(&pwd)?.reset(revision)?;
        }
    }

    Ok(())
}

fn open(pwd: &Path) -> Result<Repository> {
    Ok(Repository::discover(pwd, Box::new(std::io::stdout()))?)
}

fn absolute<P: AsRef<Path>>(pwd: &Path, paths: &[P]) -> Vec<PathBuf> {
    paths.iter().map(|path| pwd.join(path)).collect()
}
