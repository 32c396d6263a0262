mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use lexvoice_core::config::loader::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lexv",
    version,
    about = "Fill legal document templates from transcribed speech"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and the template store
    Doctor,

    /// List templates found under templates_dir
    ListTemplates(ListArgs),

    /// Show a template's variables and body
    Show(ShowArgs),

    /// Extract variables from transcribed text
    Extract(ExtractArgs),

    /// Write the built-in templates into templates_dir
    Seed(SeedArgs),

    /// Fill a template and write the resulting document
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include inactive templates
    #[arg(long)]
    pub all: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Template name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Read text from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print JSON instead of key: value lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Overwrite existing template files
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Template name (e.g. "rental_agreement")
    pub template: String,

    /// Variable value, repeatable (e.g. --var tenant_name="Asha Verma")
    #[arg(long = "var", value_parser = prompt::parse_var_arg)]
    pub vars: Vec<(String, String)>,

    /// Transcript to pre-fill variables from ("-" for stdin)
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Output file; relative paths land under documents_dir
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Never prompt; fail if required variables are missing
    #[arg(long)]
    pub batch: bool,
}

fn main() {
    let cli = Cli::parse();

    let cfg = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref()).ok();
    logging::init(cfg.as_ref().map(|c| &c.logging));

    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::ListTemplates(args) => cmd::list_templates::run(config, profile, &args),
        Commands::Show(args) => cmd::show::run(config, profile, &args.name),
        Commands::Extract(args) => cmd::extract::run(&args),
        Commands::Seed(args) => cmd::seed::run(config, profile, args.force),
        Commands::Generate(args) => cmd::generate::run(config, profile, args),
    }
}
