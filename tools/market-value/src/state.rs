//! Input, output and overall state of the researcher graph.
//!
//! **Interaction**: `InputState` is what callers pass in, `OutputState` what
//! they get back; `MarketValueState` flows through `CallModelNode`.

use agent_graph::Message;
use serde::{Deserialize, Serialize};

/// Entry record: the article to research.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub article: String,
}

/// Exit record: the model's answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputState {
    pub agent_output: String,
}

/// State threaded through the graph.
///
/// `article` is fixed at entry; `messages` only grows; `agent_output` holds
/// the latest model answer and is overwritten on every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketValueState {
    pub article: String,
    pub messages: Vec<Message>,
    pub agent_output: String,
}

impl MarketValueState {
    /// Projects the state onto the exit record.
    pub fn output(&self) -> OutputState {
        OutputState {
            agent_output: self.agent_output.clone(),
        }
    }
}

impl From<InputState> for MarketValueState {
    fn from(input: InputState) -> Self {
        Self {
            article: input.article,
            messages: Vec::new(),
            agent_output: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_starts_empty() {
        let state = MarketValueState::from(InputState {
            article: "Messi scored twice.".into(),
        });
        assert_eq!(state.article, "Messi scored twice.");
        assert!(state.messages.is_empty());
        assert!(state.agent_output.is_empty());
    }

    #[test]
    fn records_serialize_with_field_names() {
        let input: InputState = serde_json::from_str(r#"{"article":"a"}"#).unwrap();
        assert_eq!(input.article, "a");
        let out = serde_json::to_string(&OutputState {
            agent_output: "b".into(),
        })
        .unwrap();
        assert_eq!(out, r#"{"agent_output":"b"}"#);
    }
}
