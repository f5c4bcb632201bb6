// chain-devtools/src/bin/hex2dec.rs
use clap::Parser;
use hex_rewrite::{rewrite_file, HexRewriteError, RewriteMode};

#[derive(Parser)]
#[command(name = "hex2dec")]
#[command(about = "Rewrite 0x-prefixed hex literals in a file to decimal, in place", version, long_about = None)]
struct Cli {
    /// File to rewrite
    file_path: String,

    /// Leave 42-character account addresses (0x + 40 hex digits) unchanged
    #[arg(short = 'a', long)]
    keep_addresses: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    chain_devtools::init_tracing(cli.debug);

    let mode = if cli.keep_addresses {
        RewriteMode::KeepAddresses
    } else {
        RewriteMode::All
    };

    match rewrite_file(&cli.file_path, mode) {
        Ok(report) => {
            tracing::info!(
                "Converted {} literal(s) in {}, kept {} address(es)",
                report.converted,
                report.path.display(),
                report.kept
            );
            print!(
                "Conversion successful. Hex numbers in '{}' converted to decimal.",
                cli.file_path
            );
            if mode.keeps_addresses() {
                print!(" Ethereum addresses were left unchanged.");
            }
            println!();
        }
        Err(HexRewriteError::FileNotFound(_)) => {
            println!("Error: File '{}' not found.", cli.file_path);
        }
        Err(e) => {
            println!("Error occurred: {}", e);
        }
    }

    Ok(())
}
