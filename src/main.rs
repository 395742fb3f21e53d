use std::io;
use std::process;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, shells};
use imgsplit::commands::config::{self, ConfigArgs};
use imgsplit::commands::run::{self, RunArgs};

const ROOT_HELP_EXAMPLES: &str = "Examples:\n  imgsplit run ./photos\n  imgsplit run ./photos ./halves --json\n  imgsplit config check\n  imgsplit completion bash > ~/.local/share/bash-completion/completions/imgsplit";

const RUN_HELP_EXAMPLES: &str = "Examples:\n  imgsplit run ./photos\n  imgsplit run ./photos ./halves\n  IMS_OUTPUT_DIR=./halves imgsplit run ./photos --quiet\n  imgsplit run ./photos --report json";

#[derive(Debug, Parser)]
#[command(
    name = "imgsplit",
    about = "Split images in half and rotate both halves",
    after_help = ROOT_HELP_EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(
        about = "Split every image in a folder and rotate the halves",
        after_help = RUN_HELP_EXAMPLES
    )]
    Run(RunArgs),
    #[command(about = "Manage local config")]
    Config(ConfigArgs),
    #[command(about = "Generate shell completion script")]
    Completion {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

fn print_completion(shell: CompletionShell) {
    let mut cmd = Cli::command();
    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut cmd, "imgsplit", &mut io::stdout()),
        CompletionShell::Zsh => generate(shells::Zsh, &mut cmd, "imgsplit", &mut io::stdout()),
        CompletionShell::Fish => generate(shells::Fish, &mut cmd, "imgsplit", &mut io::stdout()),
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => run::run(args),
        Commands::Config(args) => config::run(args),
        Commands::Completion { shell } => {
            print_completion(shell);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
