// hex-rewrite/src/lib.rs

//! In-place rewriting of hexadecimal literals to decimal
//!
//! This crate provides:
//! - Discovery of `0x`-prefixed hex literals in arbitrary text
//! - Arbitrary-precision hex to decimal conversion
//! - An address-aware mode that leaves 20-byte account addresses untouched
//! - A read-rewrite-write pass over a single file

pub mod literal;
pub mod rewrite;

pub use literal::{hex_to_decimal, is_address, literals, HexLiteral, ADDRESS_LEN};
pub use rewrite::{rewrite, rewrite_file, rewrite_text, Rewrite, RewriteMode, RewriteReport};

use std::path::PathBuf;

/// Result type for rewrite operations
pub type HexRewriteResult<T> = Result<T, HexRewriteError>;

/// Errors that can occur while rewriting a file
#[derive(Debug, thiserror::Error)]
pub enum HexRewriteError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hex literal: {0}")]
    InvalidLiteral(String),
}

impl HexRewriteError {
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => HexRewriteError::FileNotFound(path.to_path_buf()),
            _ => HexRewriteError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
