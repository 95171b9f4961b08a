//! objstore CLI - Command line interface for the object store
//!
//! Thin wrapper over the library: `init`, `hash-object` and `cat-file`.

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use objstore::{cat_file, hash_bytes, hash_object, CatMode, Repository};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "objstore")]
#[command(about = "A minimal content-addressed object store")]
#[command(version)]
struct Cli {
    /// Directory to run in (the store is searched for from here upward,
    /// defaults to the current directory)
    #[arg(short = 'C', long = "dir")]
    dir: Option<PathBuf>,

    /// Log store activity to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty store in the target directory
    Init,

    /// Compute the object hash of a file, optionally storing it
    HashObject {
        /// Write the object into the store
        #[arg(short, long)]
        write: bool,
        /// Read content from stdin instead of a file
        #[arg(long, conflicts_with = "file")]
        stdin: bool,
        /// File to hash
        #[arg(required_unless_present = "stdin")]
        file: Option<PathBuf>,
    },

    /// Show the content, type or size of a stored object
    #[command(group(ArgGroup::new("cat_mode").required(true)))]
    CatFile {
        /// Print the object content
        #[arg(short = 'p', group = "cat_mode")]
        print: bool,
        /// Print the object type
        #[arg(short = 't', group = "cat_mode")]
        show_type: bool,
        /// Print the object size
        #[arg(short = 's', group = "cat_mode")]
        size: bool,
        /// Mode by name: print-content, print-type or print-size
        #[arg(long, group = "cat_mode")]
        mode: Option<String>,
        /// Object hash (40 hex characters)
        hash: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init => {
            let root = cli.dir.unwrap_or_else(|| PathBuf::from("."));
            let repo = Repository::init(root)?;
            println!("Initialized empty store in {}", repo.meta_dir().display());
        }

        Commands::HashObject { write, stdin, file } => {
            let repo = if write {
                Some(open_store(cli.dir.as_deref())?)
            } else {
                None
            };
            let hash = if stdin {
                let mut content = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut content)
                    .context("could not read stdin")?;
                hash_bytes(repo.as_ref(), content, write)?
            } else {
                let file = file.context("no file given")?;
                hash_object(repo.as_ref(), file, write)?
            };
            println!("{}", hash);
        }

        Commands::CatFile {
            print,
            show_type,
            size: _,
            mode,
            hash,
        } => {
            let mode: CatMode = match mode {
                Some(name) => name.parse()?,
                None if print => CatMode::PrintContent,
                None if show_type => CatMode::PrintType,
                None => CatMode::PrintSize,
            };
            let repo = open_store(cli.dir.as_deref())?;
            let output = cat_file(&repo, mode, &hash)?;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&output)?;
            if mode != CatMode::PrintContent {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Open the store enclosing `dir`, or the current directory
fn open_store(dir: Option<&Path>) -> anyhow::Result<Repository> {
    let root = match dir {
        Some(dir) => Repository::discover(dir)?,
        None => Repository::locate()?,
    };
    Ok(Repository::open(root)?)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
