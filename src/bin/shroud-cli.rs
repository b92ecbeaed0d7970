//! Shroud command-line binary

use clap::{Parser, Subcommand};
use shroud::exit_codes::{
    EXIT_INVALID_ARGS, EXIT_IO_ERROR, EXIT_PANIC, EXIT_SELFTEST_ERROR, EXIT_SUCCESS,
};
use shroud::{KeySource, ShroudError, derive_key, run_self_test, transform_file};
use std::{panic, path::PathBuf, process};

const VERSION: &str = shroud::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Scramble or unscramble payload files")]
struct Args {
    /// Log level (trace, debug, info, warn, error, or json:<level>)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the keystream transform to a file (its own inverse)
    Apply {
        /// Input payload path
        #[arg(short, long)]
        input: PathBuf,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,

        /// Raw 64-bit key seed
        #[arg(long, conflicts_with = "passphrase")]
        key_seed: Option<u64>,

        /// Passphrase to derive the key from
        #[arg(long)]
        passphrase: Option<String>,
    },

    /// Run randomized round-trip self-tests
    Selftest {
        /// Seed for the test's random source
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Number of trials to run
        #[arg(long, default_value_t = 1000)]
        trials: usize,
    },
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in shroud-cli");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        shroud::logger::init_with_level(level);
    } else {
        shroud::logger::init();
    }

    match execute(args.command) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                ShroudError::InvalidKey(_) => EXIT_INVALID_ARGS,
                ShroudError::SelfTestFailed(_) => EXIT_SELFTEST_ERROR,
                ShroudError::IoError(_) => EXIT_IO_ERROR,
            }
        }
    }
}

fn execute(command: Command) -> Result<(), ShroudError> {
    match command {
        Command::Apply {
            input,
            output,
            key_seed,
            passphrase,
        } => {
            let source = key_source(key_seed, passphrase)?;
            let key = derive_key(&source);
            transform_file(&input, &output, &key)?;
            Ok(())
        }
        Command::Selftest { seed, trials } => {
            run_self_test(seed, trials)?;
            println!("Self-test passed ({trials} trials)");
            Ok(())
        }
    }
}

fn key_source(key_seed: Option<u64>, passphrase: Option<String>) -> Result<KeySource, ShroudError> {
    match (key_seed, passphrase) {
        (Some(seed), None) => Ok(KeySource::Seed(seed)),
        (None, Some(phrase)) => Ok(KeySource::Passphrase(phrase)),
        (None, None) => Err(ShroudError::InvalidKey(
            "no key material provided; pass --key-seed or --passphrase".to_string(),
        )),
        // clap rejects this combination already
        (Some(_), Some(_)) => Err(ShroudError::InvalidKey(
            "--key-seed and --passphrase are mutually exclusive".to_string(),
        )),
    }
}
