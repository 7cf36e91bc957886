//! Market value researcher: a one-node agent graph that reads an article and
//! asks a chat model, which may call `get_market_value`, for the player's value.
//!
//! Flow: START → `call_model_market_value` → END.

pub mod config;
pub mod graph;
pub mod input;
pub mod node;
pub mod state;
pub mod tools;

pub use config::{chat_model, Config};
pub use graph::{build_market_value_graph, MarketValueResearcher};
pub use input::read_input;
pub use node::{CallModelNode, NODE_ID, SYSTEM_PROMPT};
pub use state::{InputState, MarketValueState, OutputState};
pub use tools::{get_market_value, market_value_tools, GetMarketValueTool, NOT_AVAILABLE};
