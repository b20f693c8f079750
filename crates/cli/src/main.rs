use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use seoscope_core::{
    EvaluatorConfig, FetchConfig, analyze_html, content_excerpt, evaluate_content, fetch_file, fetch_stdin, fetch_url,
};

mod echo;

use echo::{print_banner, print_report_summary, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze the on-page SEO of a web page
#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(author = "Seoscope Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Analyze the on-page SEO of a web page", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canonical URL for the HTTPS check and report attribution
    /// (defaults to the input)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Also request a content-quality evaluation (needs OPENROUTER_API_KEY)
    #[arg(long)]
    evaluate: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    if let Some(canonical) = &args.url {
        url::Url::parse(canonical).with_context(|| format!("Invalid --url value: {}", canonical))?;
    }

    let total_steps = if args.evaluate { 4 } else { 3 };

    let html = if args.input == "-" {
        if args.verbose {
            print_step(1, total_steps, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            print_step(1, total_steps, &format!("Fetching {}", args.input));
        }

        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
        };

        fetch_url(&args.input, &config).await.context("Failed to fetch URL")?
    } else {
        if args.verbose {
            print_step(1, total_steps, &format!("Reading file {}", args.input));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        eprintln!("  {} input", echo::format_size(html.len()));
    }

    if args.verbose {
        print_step(2, total_steps, "Analyzing page");
    }

    let url = args.url.unwrap_or_else(|| args.input.clone());
    let analyzed = analyze_html(&html, &url).await.context("Failed to analyze page")?;

    if args.verbose {
        print_report_summary(&analyzed.report);
    }

    let mut value = serde_json::to_value(&analyzed.report).context("Failed to serialize report")?;

    if args.evaluate {
        if args.verbose {
            print_step(3, total_steps, "Evaluating content quality");
        }

        let evaluator = EvaluatorConfig::from_env();
        if evaluator.api_key.is_none() && args.verbose {
            print_warning("OPENROUTER_API_KEY is not set; the evaluation will report an error");
        }

        let verdict = evaluate_content(&evaluator, content_excerpt(&analyzed.text), &url).await;
        value["content_evaluation"] = verdict;
    }

    if args.verbose {
        print_step(total_steps, total_steps, "Writing report");
    }

    let report = if args.pretty {
        serde_json::to_string_pretty(&value).context("Failed to encode report")?
    } else {
        serde_json::to_string(&value).context("Failed to encode report")?
    };

    match args.output {
        Some(path) => {
            fs::write(&path, report).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            if args.verbose {
                print_success(&format!("Report written to {}", path.display()));
            }
        }
        None => {
            println!("{}", report);
        }
    }

    Ok(())
}
