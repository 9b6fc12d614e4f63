use clap::{Parser, Subcommand};

use yomikae_cli::commands::translit_ops::TransliterateOptions;
use yomikae_cli::commands::{batch_ops, config_ops, translit_ops};
use yomikae_cli::logging;
use yomikae_core::Target;

#[derive(Parser)]
#[command(
    name = "yomikae",
    about = "Transliterate Japanese proper names into other scripts"
)]
struct Cli {
    /// Log pipeline decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Path to a settings TOML replacing the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Path to a kana TOML replacing the built-in kana table
    #[arg(long, global = true)]
    kana_table: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a name and print every candidate
    Transliterate {
        /// Target code: tok, ru, uk or lt
        target: Target,
        /// Name in romaji or kana; several arguments are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Treat the input as a "Kuil ..." label and extract the name
        #[arg(long)]
        label: bool,
        /// Drop a trailing shrine suffix such as "Jinja"
        #[arg(long)]
        strip_suffix: bool,
        /// Also print the genitive of each candidate
        #[arg(long)]
        decline: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decline an already transliterated name into the genitive
    Decline {
        /// Target code: ru, uk or lt
        target: Target,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Transliterate names from a file (one per line) into JSONL
    Batch {
        target: Target,
        /// Path to the input file
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Add a "declined" column
        #[arg(long)]
        decline: bool,
    },

    /// List the supported targets
    Targets,

    /// Export or validate configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
    /// Print the built-in kana table
    KanaExport,
    /// Validate a kana TOML file
    KanaValidate { file: String },
    /// Print the built-in mapping table of a target
    TableExport { target: Target },
    /// Validate a target mapping table
    TableValidate { file: String },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    config_ops::load_overrides(cli.settings.as_deref(), cli.kana_table.as_deref());

    match cli.command {
        Command::Transliterate {
            target,
            name,
            label,
            strip_suffix,
            decline,
            json,
        } => {
            let opts = TransliterateOptions {
                label,
                strip_suffix,
                decline,
                json,
            };
            translit_ops::transliterate_cmd(target, &name.join(" "), &opts);
        }
        Command::Decline { target, name } => translit_ops::decline_cmd(target, &name.join(" ")),
        Command::Batch {
            target,
            input_file,
            output_file,
            decline,
        } => batch_ops::batch_cmd(target, &input_file, &output_file, decline),
        Command::Targets => translit_ops::targets_cmd(),
        Command::Config { action } => match action {
            ConfigAction::SettingsExport => config_ops::settings_export(),
            ConfigAction::SettingsValidate { file } => config_ops::settings_validate(&file),
            ConfigAction::KanaExport => config_ops::kana_export(),
            ConfigAction::KanaValidate { file } => config_ops::kana_validate(&file),
            ConfigAction::TableExport { target } => config_ops::table_export(target),
            ConfigAction::TableValidate { file } => config_ops::table_validate(&file),
        },
    }
}
