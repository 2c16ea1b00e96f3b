//! VibeCheckr CLI
//!
//! Usage:
//!   vibecheckr --text "your text here"                # Single analysis
//!   vibecheckr --text "text" --context feedback       # With context tag
//!   vibecheckr --interactive                          # Read lines from stdin
//!   vibecheckr --samples                              # Analyze built-in samples
//!   vibecheckr --history-file h.json --stats          # Statistics over saved history
//!   vibecheckr --history-file h.json --export csv     # Export saved history
//!   vibecheckr --serve                                # HTTP API server

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vibecheckr::core::{
    export_records, run_server, AnalysisHistory, ExportFormat, SentimentAnalyzer, SAMPLE_TEXTS,
};
use vibecheckr::types::{AnalysisContext, AnalysisRecord, Emotion, HistoryReason, SentimentStats};
use vibecheckr::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "vibecheckr",
    version = VERSION,
    about = "VibeCheckr - Lexicon-based sentiment and emotion analysis",
    long_about = "VibeCheckr scores free text for polarity (positive / negative / neutral),\n\
                  six emotions and salient keywords using fixed word lists.\n\n\
                  Contexts:\n  \
                  review    - product reviews (no extra rules)\n  \
                  feedback  - service feedback (service vocabulary counts)\n  \
                  social    - social media posts (no extra rules)"
)]
struct Args {
    /// Text to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Context tag: review, feedback or social (unknown tags are ignored)
    #[arg(short, long)]
    context: Option<String>,

    /// Interactive mode - analyze each line read from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Analyze the built-in sample texts
    #[arg(long)]
    samples: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Load history from this JSON file and save new analyses back to it
    #[arg(long)]
    history_file: Option<String>,

    /// Print statistics over the history
    #[arg(long)]
    stats: bool,

    /// Write the history to stdout as json or csv
    #[arg(long)]
    export: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show score breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = match &args.history_file {
        Some(path) => AnalysisHistory::load(path)?,
        None => AnalysisHistory::new(),
    };
    let context = parse_context(args.context.as_deref());
    let analyzer = SentimentAnalyzer::new();

    if args.serve {
        print_header("API Server");
        return run_server(&args.addr, history, args.history_file.as_ref().map(PathBuf::from)).await;
    }

    let mut analyzed = false;
    if let Some(ref text) = args.text {
        let record = analyzer.analyze(text, context);
        print_record(&record, args)?;
        history.push(record);
        analyzed = true;
    } else if args.samples {
        run_samples(&analyzer, &mut history, args)?;
        analyzed = true;
    } else if args.interactive || (!args.stats && args.export.is_none()) {
        // Default to interactive if nothing else was asked for
        run_interactive(&analyzer, context, &mut history, args)?;
        analyzed = true;
    }

    if analyzed {
        if let Some(path) = &args.history_file {
            history.save(path)?;
        }
    }

    if args.stats {
        print_stats(&SentimentStats::from_records(history.records()), args.json)?;
    }

    if let Some(format) = &args.export {
        let format = ExportFormat::parse(format)?;
        let body = export_records(history.records(), format)?;
        io::stdout().write_all(body.as_bytes())?;
    }

    Ok(())
}

/// Lenient context parse; unknown tags mean no context
fn parse_context(tag: Option<&str>) -> Option<AnalysisContext> {
    let tag = tag?;
    let context = AnalysisContext::from_tag(tag);
    if context.is_none() {
        info!(tag, "unknown context tag, analyzing without context");
    }
    context
}

/// Analyze every sample text
fn run_samples(
    analyzer: &SentimentAnalyzer,
    history: &mut AnalysisHistory,
    args: &Args,
) -> Result<(), HistoryReason> {
    for sample in SAMPLE_TEXTS {
        if !args.json {
            println!("{} {}", format!("[{}]", sample.category).bold(), sample.label.dimmed());
        }
        let record = analyzer.analyze(sample.text, sample.context);
        print_record(&record, args)?;
        history.push(record);
        if !args.json {
            println!();
        }
    }
    Ok(())
}

/// Interactive mode: one analysis per stdin line
fn run_interactive(
    analyzer: &SentimentAnalyzer,
    context: Option<AnalysisContext>,
    history: &mut AnalysisHistory,
    args: &Args,
) -> Result<(), HistoryReason> {
    print_header("Interactive");
    println!("Type text and press Enter to analyze. Type 'quit' to exit.");
    if let Some(context) = context {
        println!("Context: {}", context);
    }
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", ">".bold());
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Analyses: {}", history.len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let record = analyzer.analyze(line, context);
        print_record(&record, args)?;
        history.push(record);
    }
    Ok(())
}

fn print_record(record: &AnalysisRecord, args: &Args) -> Result<(), HistoryReason> {
    if args.json {
        let json = serde_json::to_string_pretty(record)
            .map_err(|_| HistoryReason::R412_EXPORT_SERIALIZE_ERROR)?;
        println!("{}", json);
    } else if args.verbose {
        print_verbose(record);
    } else if args.no_color {
        println!("{}", record.to_parseable_string());
    } else {
        println!("{}", record.to_terminal_string());
    }
    Ok(())
}

/// Print header
fn print_header(mode: &str) {
    println!("{}", "========================================".bold());
    println!("{}", format!("  VibeCheckr v{} - {}", VERSION, mode).bold());
    println!("{}", "========================================".bold());
    println!();
}

/// Print full score breakdown
fn print_verbose(record: &AnalysisRecord) {
    let color = record.sentiment.color();
    let rule = "----------------------------------------".color(color);

    println!("{}", rule);
    println!(
        "{}",
        format!(
            "{} {}  ({} words, {:.0}% confidence)",
            record.sentiment.emoji(),
            record.sentiment,
            record.word_count,
            record.confidence * 100.0
        )
        .color(color)
        .bold()
    );
    if let Some(context) = record.analysis_context {
        println!("  context: {}", context);
    }
    println!("{}", rule);
    println!("  Polarity:");
    println!("    positive:  {:.4}", record.scores.positive);
    println!("    negative:  {:.4}", record.scores.negative);
    println!("    neutral:   {:.4}", record.scores.neutral);
    println!("  Emotions:");
    for emotion in Emotion::ALL {
        let value = record.emotions.get(emotion);
        let bar = "#".repeat((value * 4.0).round() as usize);
        println!("    {:<9} {:.2} {}", emotion.as_str(), value, bar);
    }
    if let Some(emotion) = record.emotions.dominant() {
        println!("  Dominant emotion: {}", emotion);
    }
    if !record.keywords.is_empty() {
        println!("  Keywords: {}", record.keywords.join(", "));
    }
    println!("{}", rule);
}

fn print_stats(stats: &SentimentStats, json: bool) -> Result<(), HistoryReason> {
    if json {
        let out = serde_json::to_string_pretty(stats)
            .map_err(|_| HistoryReason::R412_EXPORT_SERIALIZE_ERROR)?;
        println!("{}", out);
        return Ok(());
    }

    print_header("Insights");
    if stats.total_analyses == 0 {
        println!("No analyses yet. Analyze some text to see statistics.");
        return Ok(());
    }

    let dist = &stats.sentiment_distribution;
    println!("Total analyses:        {}", stats.total_analyses);
    println!("Satisfaction score:    {}%", stats.customer_satisfaction_score);
    println!("Average confidence:    {:.0}%", stats.average_confidence * 100.0);
    println!("Average length:        {} words", stats.average_word_count);
    println!();
    println!("{}", format!("  positive  {}", dist.positive).green());
    println!("{}", format!("  negative  {}", dist.negative).red());
    println!("{}", format!("  neutral   {}", dist.neutral).bright_black());
    println!();
    println!("Contexts:");
    for (context, count) in &stats.context_distribution {
        println!("  {:<9} {}", context, count);
    }
    println!("Emotion averages:");
    for emotion in Emotion::ALL {
        println!("  {:<9} {:.2}", emotion.as_str(), stats.emotion_averages.get(emotion));
    }
    if let Some(emotion) = stats.emotion_averages.dominant() {
        println!("  strongest: {}", emotion);
    }
    if !stats.most_common_keywords.is_empty() {
        println!("Top keywords:");
        for kw in &stats.most_common_keywords {
            println!("  {:<16} {}", kw.word, kw.count);
        }
    }
    Ok(())
}
