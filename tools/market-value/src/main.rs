//! CLI for the market value researcher: read an article, invoke the graph, print the answer.
//!
//! Loads `.env`, resolves `Config`, builds `ChatOpenAI` with the
//! `get_market_value` tool bound and runs one invocation.

use std::path::PathBuf;
use std::sync::Arc;

use agent_graph::Message;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_value::{chat_model, read_input, Config, MarketValueResearcher, MarketValueState};

#[derive(Parser)]
#[command(name = "market-value")]
#[command(about = "Determine a player's market value from an article using an LLM with a lookup tool")]
struct Args {
    /// Article text. Read from stdin when neither this nor --input is given.
    article: Option<String>,

    /// JSON file with the input record, e.g. {"article": "..."}
    #[arg(long, short, conflicts_with = "article")]
    input: Option<PathBuf>,

    /// OpenAI model name
    #[arg(long, default_value = agent_graph::llm::DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature (provider default when omitted)
    #[arg(long)]
    temperature: Option<f32>,

    /// Maximum tool-calling rounds before giving up
    #[arg(long, default_value_t = agent_graph::llm::DEFAULT_MAX_TOOL_ROUNDS)]
    max_tool_rounds: usize,

    /// Print the output record as JSON
    #[arg(long)]
    json: bool,

    /// Print the final message history to stderr
    #[arg(long)]
    show_messages: bool,
}

fn print_messages(state: &MarketValueState) {
    for m in &state.messages {
        match m {
            Message::System(x) => eprintln!("[System] {}", x),
            Message::Human(x) => eprintln!("[Human] {}", x),
            Message::Ai(x) => eprintln!("[AI] {}", x.content),
            Message::Tool(x) => eprintln!("[Tool {}] {}", x.call_id, x.content),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "market_value=info,agent_graph=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let input = read_input(args.article.clone(), args.input.as_deref(), std::io::stdin())?;

    let cfg = Config::from_env_and_args(args.model.clone(), args.temperature, args.max_tool_rounds)?;
    let llm: Arc<dyn agent_graph::LlmClient> = Arc::new(chat_model(&cfg));
    let researcher = MarketValueResearcher::with_max_tool_rounds(llm, cfg.max_tool_rounds)
        .context("build market value graph")?;

    let state = researcher
        .invoke_state(input.into())
        .await
        .map_err(|e| anyhow::anyhow!("invoke failed: {}", e))?;

    if args.show_messages {
        print_messages(&state);
    }
    let output = state.output();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.agent_output);
    }
    Ok(())
}
