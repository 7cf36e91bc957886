//! Configuration: API key/base from the environment, model options from the CLI.
//!
//! **Interaction**: Used by `main` to build the chat model via `chat_model`.
//! Caller should run `dotenv::dotenv().ok()` first.

use agent_graph::{ChatOpenAI, OpenAiConfig};
use anyhow::{Context, Result};

use crate::tools::market_value_tools;

/// Resolved configuration for one run.
#[derive(Clone, Debug)]
pub struct Config {
    pub openai: OpenAiConfig,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tool_rounds: usize,
}

impl Config {
    /// Reads the connection from `OpenAiConfig::from_env`; the key must be non-empty.
    pub fn from_env_and_args(
        model: String,
        temperature: Option<f32>,
        max_tool_rounds: usize,
    ) -> Result<Self> {
        let openai =
            OpenAiConfig::from_env().context("OPENAI_API_KEY not set (put it in .env or environment)")?;
        if openai.api_key.is_empty() {
            anyhow::bail!("OPENAI_API_KEY is empty (check .env: whole key on one line)");
        }

        Ok(Self {
            openai,
            model,
            temperature,
            max_tool_rounds,
        })
    }
}

/// OpenAI client for `cfg` with `get_market_value` bound.
pub fn chat_model(cfg: &Config) -> ChatOpenAI {
    let llm = ChatOpenAI::with_config(cfg.openai.clone(), cfg.model.clone())
        .with_tools(market_value_tools().specs());
    match cfg.temperature {
        Some(t) => llm.with_temperature(t),
        None => llm,
    }
}
