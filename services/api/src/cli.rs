use crate::commands::{
    run_analyze, run_generate, run_questions, run_quiz, run_tip, AnalyzeArgs, GenerateArgs,
    QuizArgs, TipArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dhara::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dhara",
    about = "Score dosha questionnaires, analyze symptoms, and generate training data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the questionnaire with numbered options
    Questions,
    /// Score a completed questionnaire and print the recommended routine
    Quiz(QuizArgs),
    /// Detect symptoms in free text and print the resulting imbalance
    Analyze(AnalyzeArgs),
    /// Print a quick wellness tip
    Tip(TipArgs),
    /// Generate labelled synthetic samples for training an approximating classifier
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions => run_questions(),
        Command::Quiz(args) => run_quiz(args),
        Command::Analyze(args) => run_analyze(args),
        Command::Tip(args) => run_tip(args),
        Command::Generate(args) => run_generate(args),
    }
}
