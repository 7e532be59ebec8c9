use crate::demo::{run_demo, DemoArgs};
use crate::infra::{parse_category, parse_profile, read_score_request, ScoreRequest};
use ayush_registry::applications::{
    ApplicationScorer, AssistantReply, AyushSystem, FaqAssistant, ScoringProfile,
};
use ayush_registry::config::AppConfig;
use ayush_registry::error::AppError;
use ayush_registry::telemetry;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "AYUSH Startup Registry",
    about = "Score and review AYUSH startup applications from the command line",
    version
)]
struct Cli {
    /// Scoring profile override (density or count); defaults to APP_SCORING_PROFILE
    #[arg(long, global = true, value_parser = parse_profile)]
    profile: Option<ScoringProfile>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score application text and print the result as JSON
    Score(ScoreArgs),
    /// Submit, edit and review a sample application against an in-memory registry
    Demo(DemoArgs),
    /// Ask the FAQ assistant a question about registration
    Ask(AskArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Idea explanation text
    #[arg(long, conflicts_with = "input")]
    pub(crate) idea: Option<String>,
    /// Company description text
    #[arg(long, default_value = "", conflicts_with = "input")]
    pub(crate) description: String,
    /// AYUSH system the startup operates in
    #[arg(long, value_parser = parse_category, default_value = "ayurveda", conflicts_with = "input")]
    pub(crate) category: AyushSystem,
    /// Supporting document name; repeat for each upload
    #[arg(long = "document", conflicts_with = "input")]
    pub(crate) documents: Vec<String>,
    /// JSON file holding ideaExplanation, description, businessType and documents
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Include per-criterion keyword match counts in the output
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub(crate) question: Vec<String>,
    /// Which fallback reply to use when no FAQ entry matches
    #[arg(long, default_value_t = 0)]
    pub(crate) fallback_index: usize,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load_with_profile(cli.profile)?;
    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        profile = config.scoring.profile.name(),
        "configuration loaded"
    );

    match cli.command {
        Command::Score(args) => run_score(args, ApplicationScorer::new(config.scoring)),
        Command::Demo(args) => run_demo(args, config.scoring),
        Command::Ask(args) => run_ask(args),
    }
}

fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        return Err(AppError::InvalidInput("question must not be blank".to_string()));
    }

    let reply = FaqAssistant::default().reply(&question, args.fallback_index);
    let category = match reply {
        AssistantReply::Faq { entry, .. } => Some(entry.category),
        _ => None,
    };
    let output = json!({
        "kind": reply.kind(),
        "category": category,
        "answer": reply.text(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_score(args: ScoreArgs, scorer: ApplicationScorer) -> Result<(), AppError> {
    let explain = args.explain;
    let request = match args.input {
        Some(path) => read_score_request(&path)?,
        None => ScoreRequest {
            idea_explanation: args.idea.ok_or_else(|| {
                AppError::InvalidInput("either --idea or --input is required".to_string())
            })?,
            description: args.description,
            business_type: args.category,
            documents: args
                .documents
                .into_iter()
                .map(serde_json::Value::String)
                .collect(),
        },
    };

    let result = scorer.score(
        &request.idea_explanation,
        &request.description,
        request.business_type,
        &request.documents,
    );

    let mut output = json!({
        "profile": scorer.config().profile.name(),
        "policy": scorer.config().status_policy.summary(),
        "result": result,
    });
    if explain {
        let matches = scorer.keyword_matches(&request.idea_explanation, &request.description);
        output["keywordMatches"] = serde_json::to_value(matches)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
