//! Ferrule CLI — run the utility operations locally or drive them through a
//! dynamically loaded library.

mod config;

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use config::{CliConfig, ConfigError, CONFIG_FILE, CONFIG_TEMPLATE};
use ferrule_core::TypeSizes;
use ferrule_host::{resolve_library_path, HostError, SymbolTable, UtilityLibrary};

#[derive(Parser)]
#[command(name = "ferrule", version, about = "Native utility library driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one to an integer
    Inc {
        value: i32,
    },
    /// Print a string quoted and report its byte length
    Describe {
        text: String,
    },
    /// Principal square root
    Sqrt {
        value: f64,
    },
    /// Gauss error function
    Erf {
        value: f64,
    },
    /// A random value in [0, 1)
    Random,
    /// Report the byte sizes of the native primitive types
    Sizes {
        /// Emit the report as JSON instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Load a utility library and run every routine once
    Exercise {
        /// Library path or bare stem (default from ferrule.toml)
        library: Option<String>,

        /// Symbol set the library exports: demo or analysis
        #[arg(long)]
        symbols: Option<String>,

        /// Extra directory to probe when resolving a bare stem
        #[arg(long)]
        search_dir: Option<PathBuf>,
    },
    /// Create a ferrule.toml template in the current directory
    Init,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unknown symbol set '{0}' (expected 'demo' or 'analysis')")]
    UnknownVariant(String),
    #[error("no library to exercise: pass one or set `library` in ferrule.toml")]
    NoLibrary,
    #[error("ferrule.toml already exists in this directory")]
    ConfigExists,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Inc { value } => {
            println!("{}", ferrule_core::increment(value));
        }
        Commands::Describe { text } => {
            let mut out = io::stdout().lock();
            let len =
                ferrule_core::describe_to("String passed library is:", text.as_bytes(), &mut out)?;
            writeln!(out, "{len}")?;
        }
        Commands::Sqrt { value } => {
            println!("{}", ferrule_core::sqroot(value));
        }
        Commands::Erf { value } => {
            println!("{}", ferrule_core::erf(value));
        }
        Commands::Random => {
            println!("{}", ferrule_core::random_unit());
        }
        Commands::Sizes { json } => {
            let sizes = TypeSizes::measure();
            if json {
                println!("{}", serde_json::to_string_pretty(&sizes)?);
            } else {
                sizes.write_report(&mut io::stdout().lock())?;
            }
        }
        Commands::Exercise {
            library,
            symbols,
            search_dir,
        } => {
            let lib = open_library(library, symbols, search_dir.as_deref())?;
            exercise(&lib)?;
        }
        Commands::Init => {
            init_config()?;
        }
    }
    Ok(())
}

/// Resolve flag/config defaults and load the library.
fn open_library(
    library: Option<String>,
    symbols: Option<String>,
    search_dir: Option<&Path>,
) -> Result<UtilityLibrary, CliError> {
    let file_config = CliConfig::load(Path::new("."))?;

    let name = library
        .or(file_config.library)
        .ok_or(CliError::NoLibrary)?;
    let variant = symbols
        .or(file_config.symbols)
        .unwrap_or_else(|| "demo".to_string());
    let table =
        SymbolTable::for_variant(&variant).ok_or_else(|| CliError::UnknownVariant(variant))?;

    let path = resolve_library_path(&name, search_dir);
    Ok(UtilityLibrary::open(&path, table)?)
}

/// Run every routine the loaded library exports, one result line each.
fn exercise(lib: &UtilityLibrary) -> Result<(), CliError> {
    let x = 999;
    println!("Increment of {} is {}", x, lib.increment(x)?);

    let v = 123456.0;
    println!("The square root of {:.1} is {:.1}.", v, lib.sqroot(v)?);

    let text = "Greetings from the host";
    let len = lib.describe(text)?;
    println!("Library says string length was {len} characters");

    lib.report_sizes()?;

    match lib.random_unit() {
        Ok(r) => println!("Here is a random number between zero and one: {r:.3}"),
        Err(HostError::Unsupported { .. }) => {
            println!("({} variant exports no random routine)", lib.symbols().variant);
        }
        Err(e) => return Err(e.into()),
    }

    let e_in = 2.0;
    match lib.erf(e_in) {
        Ok(e_out) => println!("Error function of {e_in:.3} is {e_out:.6}"),
        Err(HostError::Unsupported { .. }) => {
            println!("({} variant exports no error function)", lib.symbols().variant);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn init_config() -> Result<(), CliError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        return Err(CliError::ConfigExists);
    }
    std::fs::write(path, CONFIG_TEMPLATE)?;
    println!("wrote {CONFIG_FILE}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_inc() {
        let cli = Cli::try_parse_from(["ferrule", "inc", "5"]).unwrap();
        assert!(matches!(cli.command, Commands::Inc { value: 5 }));
    }

    #[test]
    fn parses_negative_inc_value() {
        let cli = Cli::try_parse_from(["ferrule", "inc", "--", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Inc { value: -3 }));
    }

    #[test]
    fn parses_sizes_json_flag() {
        let cli = Cli::try_parse_from(["ferrule", "sizes", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Sizes { json: true }));
    }

    #[test]
    fn parses_exercise_with_symbols() {
        let cli =
            Cli::try_parse_from(["ferrule", "exercise", "mylib", "--symbols", "analysis"]).unwrap();
        match cli.command {
            Commands::Exercise {
                library, symbols, ..
            } => {
                assert_eq!(library.as_deref(), Some("mylib"));
                assert_eq!(symbols.as_deref(), Some("analysis"));
            }
            _ => panic!("expected exercise command"),
        }
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Cli::try_parse_from(["ferrule", "frobnicate"]).is_err());
    }

    #[test]
    fn unknown_variant_is_a_cli_error() {
        let err = open_library(Some("lib".into()), Some("neither".into()), None).unwrap_err();
        assert!(matches!(err, CliError::UnknownVariant(_)));
    }

    #[test]
    fn sizes_json_round_trips() {
        let sizes = TypeSizes::measure();
        let json = serde_json::to_string(&sizes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["char_bytes"], 1);
        assert!(value["int_bytes"].as_u64().unwrap() > 0);
    }
}
