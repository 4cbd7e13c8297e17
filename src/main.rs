use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};

use merkle_blocks::merkle::MerkleTree;
use merkle_blocks::printer;

#[cfg(not(feature = "ring"))]
type Algo = merkle_blocks::crypto_sha1::Sha1Algorithm;
#[cfg(feature = "ring")]
type Algo = merkle_blocks::ring_sha1::RingSha1Algorithm;

/// Builds binary merkle trees over data blocks and prints them.
#[derive(Parser, Debug)]
#[command(name = "merkle-blocks", version, about, long_about = None)]
struct Args {
    /// Verbosity level, logs go to stderr
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tree and print it
    Build {
        /// Data blocks, one leaf each, in order
        #[arg(required_unless_present_any = ["file", "stdin"])]
        blocks: Vec<String>,

        /// Read each leaf from a file, in order
        #[arg(short, long, conflicts_with_all = ["blocks", "stdin"])]
        file: Vec<PathBuf>,

        /// Read each line of standard input as a leaf
        #[arg(long, conflicts_with = "blocks")]
        stdin: bool,

        /// Only print the root digest
        #[arg(long)]
        root_only: bool,
    },

    /// Print a 4 leaf tree, then the same tree with a 5th leaf added
    Demo,
}

fn read_blocks(blocks: &[String], files: &[PathBuf], stdin: bool) -> Result<Vec<Vec<u8>>> {
    if stdin {
        return read_lines(io::stdin().lock());
    }

    if !files.is_empty() {
        return files
            .iter()
            .map(|path| {
                fs::read(path).with_context(|| format!("failed to read block file {:?}", path))
            })
            .collect();
    }

    Ok(blocks.iter().map(|b| b.clone().into_bytes()).collect())
}

/// Splits `reader` on `\n` into raw blocks, dropping a trailing `\r`.
fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| {
            let mut line = line.context("failed to read a block from stdin")?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(line)
        })
        .collect()
}

fn print_tree<W: Write>(tree: &MerkleTree<Algo>, root_only: bool, out: &mut W) -> Result<()> {
    if root_only {
        writeln!(out, "{}", tree.root_digest())?;
    } else {
        printer::write_tree(tree.root(), out)?;
    }
    Ok(())
}

fn build<W: Write>(blocks: Vec<Vec<u8>>, root_only: bool, out: &mut W) -> Result<()> {
    info!("building tree over {} blocks", blocks.len());
    let tree = MerkleTree::<Algo>::from_blocks(blocks).context("failed to build merkle tree")?;
    debug!("{:?}", tree);

    print_tree(&tree, root_only, out)
}

fn demo<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Tree 1:")?;
    let t1 = MerkleTree::<Algo>::from_blocks(["a", "b", "c", "d"])?;
    print_tree(&t1, false, out)?;

    writeln!(out, "Tree 2 (added 1 element):")?;
    let t2 = MerkleTree::<Algo>::from_blocks(["a", "b", "c", "d", "e"])?;
    print_tree(&t2, false, out)?;

    info!(
        "root changed from {} to {}",
        t1.root_digest(),
        t2.root_digest()
    );
    Ok(())
}

fn main() -> Result<()> {
    // Load args
    let args = Args::parse();

    // Init logger
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Commands::Build {
            blocks,
            file,
            stdin,
            root_only,
        } => {
            let blocks = read_blocks(blocks, file, *stdin)?;
            build(blocks, *root_only, &mut out)
        }
        Commands::Demo => demo(&mut out),
    }
}
