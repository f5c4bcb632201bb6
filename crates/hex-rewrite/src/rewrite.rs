// hex-rewrite/src/rewrite.rs
use crate::literal::literals;
use crate::{HexRewriteError, HexRewriteResult};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Which literals get converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteMode {
    /// Convert every literal
    #[default]
    All,
    /// Leave address-shaped literals (`0x` + 40 hex digits) as they are
    KeepAddresses,
}

impl RewriteMode {
    pub fn keeps_addresses(self) -> bool {
        matches!(self, RewriteMode::KeepAddresses)
    }
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteMode::All => write!(f, "all"),
            RewriteMode::KeepAddresses => write!(f, "keep-addresses"),
        }
    }
}

/// Output of a single rewrite pass over some text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub converted: usize,
    pub kept: usize,
}

/// Summary of a completed file rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub mode: RewriteMode,
    pub converted: usize,
    pub kept: usize,
}

/// Replace every hex literal in `text` with its decimal form.
///
/// Single left-to-right pass over the input; replacement text is never
/// scanned again. Everything outside a literal is copied through untouched.
pub fn rewrite(text: &str, mode: RewriteMode) -> Rewrite {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut converted = 0;
    let mut kept = 0;

    for literal in literals(text) {
        out.push_str(&text[last..literal.start()]);
        if mode.keeps_addresses() && literal.is_address() {
            out.push_str(literal.as_str());
            kept += 1;
        } else {
            out.push_str(&literal.to_decimal());
            converted += 1;
        }
        last = literal.end();
    }
    out.push_str(&text[last..]);

    Rewrite {
        text: out,
        converted,
        kept,
    }
}

pub fn rewrite_text(text: &str, mode: RewriteMode) -> String {
    rewrite(text, mode).text
}

/// Rewrite the file at `path` in place.
///
/// The whole file is read before anything is written; a failed read leaves
/// it untouched. The result overwrites the original content directly.
pub fn rewrite_file(
    path: impl AsRef<Path>,
    mode: RewriteMode,
) -> HexRewriteResult<RewriteReport> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| HexRewriteError::from_io(path, e))?;
    let rewrite = rewrite(&contents, mode);

    fs::write(path, rewrite.text.as_bytes()).map_err(|e| HexRewriteError::from_io(path, e))?;

    tracing::debug!(
        path = %path.display(),
        %mode,
        converted = rewrite.converted,
        kept = rewrite.kept,
        "Rewrote hex literals"
    );

    Ok(RewriteReport {
        path: path.to_path_buf(),
        mode,
        converted: rewrite.converted,
        kept: rewrite.kept,
    })
}
