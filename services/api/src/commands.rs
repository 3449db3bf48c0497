use crate::infra::parse_answers;
use chrono::Utc;
use clap::Args;
use dhara::assessment::domain::BAR_WIDTH;
use dhara::assessment::training::export::{write_label_index, write_samples_csv};
use dhara::assessment::{
    AssessmentEngine, AssessmentReport, DatasetError, DatasetManifest, QuestionBank, QuickTopic,
};
use dhara::config::{AppConfig, TrainingConfig};
use dhara::error::AppError;
use dhara::telemetry;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Comma-separated option numbers, one per question (e.g. 1,3,2,4)
    #[arg(long)]
    pub(crate) answers: String,
    /// Reject answers outside the questionnaire instead of skipping them
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Free-text description of symptoms; commas mark an explicit list
    #[arg(required = true)]
    pub(crate) text: Vec<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TipArgs {
    /// One of: stress, diet, sleep, energy, seasonal
    pub(crate) topic: String,
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Number of samples (defaults to DHARA_SAMPLE_COUNT or 5000)
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Seed for reproducible batches (defaults to DHARA_SEED, else random)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Destination CSV file for the samples
    #[arg(long)]
    pub(crate) output: PathBuf,
    /// Optional label index listing (index: name per line)
    #[arg(long)]
    pub(crate) labels: Option<PathBuf>,
    /// Optional JSON manifest describing the batch
    #[arg(long)]
    pub(crate) manifest: Option<PathBuf>,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    render_questions(&QuestionBank::standard());
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let engine = AssessmentEngine::standard();
    let answers = parse_answers(&args.answers).map_err(|err| AppError::Input(err.to_string()))?;

    if args.strict {
        for selection in &answers {
            engine
                .questions()
                .validate(*selection)
                .map_err(|err| AppError::Input(err.to_string()))?;
        }
    }

    let report = engine.assess_answers(&answers);
    if args.json {
        print_json(&report)?;
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let engine = AssessmentEngine::standard();
    let text = args.text.join(" ");

    match engine.assess_text(&text) {
        Some(report) if args.json => print_json(&report)?,
        Some(report) => render_report(&report),
        None => {
            println!("I understand. Ayurveda focuses on balance.");
            println!("Could you describe your symptoms or choose an option?");
        }
    }
    Ok(())
}

pub(crate) fn run_tip(args: TipArgs) -> Result<(), AppError> {
    let topic = args
        .topic
        .parse::<QuickTopic>()
        .map_err(|err| AppError::Input(err.to_string()))?;
    println!("{}", topic.reply());
    Ok(())
}

pub(crate) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let manifest = write_dataset(&args, &config.training)?;
    println!(
        "Wrote {} samples to {}",
        manifest.sample_count,
        args.output.display()
    );
    if let Some(path) = &args.labels {
        println!("Wrote label index to {}", path.display());
    }
    if let Some(path) = &args.manifest {
        println!("Wrote manifest to {}", path.display());
    }
    Ok(())
}

/// Generate a batch and write the requested files. Flags take precedence over `training`.
pub(crate) fn write_dataset(
    args: &GenerateArgs,
    training: &TrainingConfig,
) -> Result<DatasetManifest, AppError> {
    let count = args.count.unwrap_or(training.sample_count);
    if count == 0 {
        return Err(AppError::Input("count must be at least 1".to_string()));
    }
    let seed = args.seed.or(training.seed);

    let engine = AssessmentEngine::standard();
    let samples = engine.generate_samples(count, seed);

    write_samples_csv(BufWriter::new(File::create(&args.output)?), &samples)?;

    if let Some(path) = &args.labels {
        write_label_index(BufWriter::new(File::create(path)?))?;
    }

    let manifest = DatasetManifest::new(&samples, seed, Utc::now());
    if let Some(path) = &args.manifest {
        manifest.write_json(BufWriter::new(File::create(path)?))?;
    }

    Ok(manifest)
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Dataset(DatasetError::Json(err)))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", encode_json(value)?);
    Ok(())
}

fn render_questions(bank: &QuestionBank) {
    for (index, question) in bank.questions().iter().enumerate() {
        println!("Q{}: {}", index + 1, question.prompt);
        for (option_index, option) in question.options.iter().enumerate() {
            println!("  {}. {}", option_index + 1, option.label);
        }
    }
}

fn render_report(report: &AssessmentReport) {
    if let Some(symptoms) = &report.symptoms {
        println!("Detected symptoms: {}", symptoms.join(", "));
    }

    if !report.shares.is_empty() {
        println!("\nDosha balance");
        for share in &report.shares {
            let filled = share.bar_cells as usize;
            let empty = BAR_WIDTH as usize - filled;
            println!(
                "{:<5} : {}{} {}%",
                share.dosha.label(),
                "#".repeat(filled),
                ".".repeat(empty),
                share.percent
            );
        }
    }

    println!("\nDetected imbalance: {}", report.imbalance);
    println!("\nRecommended diet: {}", report.advice.diet);
    println!("Lifestyle: {}", report.advice.lifestyle);
    println!("Avoid: {}", report.advice.avoid);
}
