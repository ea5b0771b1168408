//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for student-registrar
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(author, version, about = "Maintain student academic records from the console")]
#[command(long_about = r#"
Student Registrar keeps personal details, enrollment data, and semester
course history for every student in a single JSON file.

Records are loaded once at startup and written back when you choose
"Save and Exit" from the menu. Ending input (Ctrl-D) exits without saving.

Configuration files are loaded from (in priority order):
1. REGISTRAR_* environment variables (e.g. REGISTRAR_STORE__PATH)
2. --config <path>     Explicit config file
3. ./registrar.toml    Project-level config
4. ~/.config/student-registrar/config.toml   Global config

Example:
  registrar
  registrar --store /srv/records/students.json -v
  printf '5\n6\n' | registrar --no-color
"#)]
pub struct Cli {
    /// Path of the JSON record file (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
