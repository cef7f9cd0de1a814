use clap::{Parser, Subcommand};
use columna::cli::{
    decrypt_file, encrypt_file, generate_key, DecryptOptions, EncryptOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Build info from build.rs
const GIT_HASH: &str = env!("COLUMNA_GIT_HASH");
const PROFILE: &str = env!("COLUMNA_PROFILE");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} ({})", env!("CARGO_PKG_VERSION"), PROFILE, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "columna")]
#[command(author, about = "Columnar transposition cipher for text files", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a text file
    #[command(alias = "e")]
    Encrypt {
        /// Input file to encrypt
        input: PathBuf,

        /// Output file (defaults to encrypted_<name> next to the input)
        output: Option<PathBuf>,

        /// Columns for a freshly generated key
        #[arg(long, default_value = "3")]
        columns: usize,

        /// Use this key instead of generating one, e.g. "[2, 0, 1]"
        #[arg(long, conflicts_with = "key_file")]
        key: Option<String>,

        /// Load the key from a key file instead of generating one
        #[arg(long)]
        key_file: Option<PathBuf>,

        /// Where to save a freshly generated key
        /// (defaults to encryption_key.txt next to the input)
        #[arg(long)]
        key_out: Option<PathBuf>,
    },

    /// Decrypt a text file
    #[command(alias = "d")]
    Decrypt {
        /// Input file to decrypt
        input: PathBuf,

        /// Output file (defaults to decrypted_<name> next to the input)
        output: Option<PathBuf>,

        /// Use this key, e.g. "[2, 0, 1]"
        #[arg(long, conflicts_with = "key_file")]
        key: Option<String>,

        /// Load the key from a key file
        /// (defaults to encryption_key.txt next to the input)
        #[arg(long)]
        key_file: Option<PathBuf>,
    },

    /// Generate a key and print it
    #[command(alias = "k")]
    Keygen {
        /// Number of columns
        #[arg(long, default_value = "3")]
        columns: usize,

        /// Also save the key to this file
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.version {
        println!("columna {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            input,
            output,
            columns,
            key,
            key_file,
            key_out,
        } => {
            let options = EncryptOptions {
                columns,
                key,
                key_file,
                key_out,
            };

            encrypt_file(&input, output.as_deref(), &options).map(|report| {
                println!(
                    "Encrypted {} -> {}",
                    input.display(),
                    report.output.display()
                );
                if let Some(key_path) = report.key_path {
                    println!("Encryption key saved to {}", key_path.display());
                }
            })
        }

        Commands::Decrypt {
            input,
            output,
            key,
            key_file,
        } => {
            let options = DecryptOptions { key, key_file };

            decrypt_file(&input, output.as_deref(), &options).map(|output| {
                println!("Decrypted {} -> {}", input.display(), output.display());
            })
        }

        Commands::Keygen { columns, output } => {
            let generated = generate_key(columns, output.as_deref());
            generated.map(|key| {
                println!("{}", key);
                if let Some(path) = output {
                    println!("Key saved to {}", path.display());
                }
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", e.category(), e);
            ExitCode::FAILURE
        }
    }
}
