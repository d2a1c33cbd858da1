use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use teller_agents::TriageAgent;
use teller_core::{TriageInput, TriageReport, DEFAULT_MAX_CANDIDATES};
use teller_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "teller")]
#[command(about = "Banking support triage CLI")]
struct Cli {
    /// Customer query; multiple tokens are joined with single spaces
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Maximum number of candidate categories to keep
    #[arg(long, default_value_t = DEFAULT_MAX_CANDIDATES)]
    max_candidates: usize,

    /// Print the full report as JSON instead of the labelled sections
    #[arg(long)]
    json: bool,

    /// Triage queries line by line from stdin
    #[arg(long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("teller_cli");
    let cli = Cli::parse();

    let agent = TriageAgent::new(AppMetrics::shared());

    if cli.interactive {
        return run_interactive(&agent, cli.max_candidates).await;
    }

    if cli.query.is_empty() {
        eprintln!("usage: teller [--json] [--max-candidates N] \"<customer query>\"");
        process::exit(1);
    }

    let report = agent
        .triage(TriageInput {
            text: cli.query.join(" "),
            max_candidates: Some(cli.max_candidates),
        })
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report)?;
    }

    Ok(())
}

fn print_report(report: &TriageReport) -> Result<()> {
    println!("1) Interpreted intent: {}", report.intent);
    println!("2) Candidate categories:");
    for candidate in &report.candidates {
        println!("   - {candidate}");
    }
    println!("3) Chosen category: {}", report.chosen);
    println!("4) Extracted details:");
    println!("{}", serde_json::to_string_pretty(&report.details)?);
    println!("5) Final reply: {}", report.reply);
    Ok(())
}

async fn run_interactive(agent: &TriageAgent, max_candidates: usize) -> Result<()> {
    println!("Teller triage interactive mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let report = agent
            .triage(TriageInput {
                text: message.to_string(),
                max_candidates: Some(max_candidates),
            })
            .await?;

        println!("\n{}\n", report.reply);

        if !report.details.missing_required.is_empty() {
            println!("Missing required details:");
            for field in &report.details.missing_required {
                println!("- {field}");
            }
            println!();
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&agent.metrics_snapshot())?
    );
    Ok(())
}
