//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Huffman prefix-code trees: build, encode and decode text
#[derive(Parser, Debug)]
#[command(name = "rshuff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: global and ./.rshuff.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Drop a trailing incomplete code instead of failing
    #[arg(long, global = true)]
    pub drop_truncated: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build, encode and decode a message, then show its tree
    Demo {
        /// Message to code
        message: String,
    },

    /// Encode a message to a bit string
    Encode {
        /// Message to encode
        message: String,
        /// Text the tree is built from (default: the message)
        #[arg(short, long)]
        alphabet: Option<String>,
    },

    /// Decode a bit string
    Decode {
        /// Bits, e.g. 0110
        bits: String,
        /// Text the tree is built from
        #[arg(short, long)]
        alphabet: String,
    },

    /// Show the tree of a text
    Tree {
        /// Text the tree is built from
        text: String,
    },

    /// List the code of every symbol of a text
    Codes {
        /// Text the tree is built from
        text: String,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
