//! OpenAI-compatible chat model client (Chat Completions API) implementing `LlmClient`.
//!
//! Requires `OPENAI_API_KEY` (or explicit config). Tools bound with
//! `with_tools` are declared on every request, so the model may answer with
//! `tool_calls` instead of text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::message::Message;
use crate::tool::ToolSpec;

use super::client::LlmClient;
use super::error::LlmError;
use super::types::{LlmResponse, ToolCall, Usage};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer key, usually from `OPENAI_API_KEY`.
    pub api_key: String,
    /// Base URL without trailing slash; `/chat/completions` is appended.
    pub api_base: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Overrides the base URL (proxies, Azure, local gateways).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// `OPENAI_API_KEY` is required, `OPENAI_API_BASE` is optional.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Auth("OPENAI_API_KEY not set".to_string()))?;
        let config = Self::new(api_key.trim());
        Ok(match std::env::var("OPENAI_API_BASE") {
            Ok(base) => config.with_api_base(base.trim()),
            Err(_) => config,
        })
    }
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<OpenAiToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiToolCall {
    id: String,
    #[serde(rename = "type", default)]
    kind: String,
    function: OpenAiFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Debug, Serialize)]
struct OpenAiTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: OpenAiFunction,
}

#[derive(Debug, Serialize)]
struct OpenAiFunction {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    parameters: Value,
}

#[derive(Debug, Serialize)]
struct OpenAiRequestBody {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<OpenAiTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessageOut,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessageOut {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<OpenAiToolCall>>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

fn plain(role: &'static str, content: &str) -> OpenAiMessage {
    OpenAiMessage {
        role,
        content: Some(content.to_string()),
        tool_calls: Vec::new(),
        tool_call_id: None,
    }
}

fn to_openai_message(m: &Message) -> OpenAiMessage {
    match m {
        Message::System(s) => plain("system", s),
        Message::Human(s) => plain("user", s),
        Message::Ai(ai) => OpenAiMessage {
            role: "assistant",
            // Assistant turns that only call tools are sent with null content.
            content: if ai.content.is_empty() && !ai.tool_calls.is_empty() {
                None
            } else {
                Some(ai.content.clone())
            },
            tool_calls: ai
                .tool_calls
                .iter()
                .map(|tc| OpenAiToolCall {
                    id: tc.id.clone(),
                    kind: "function".to_string(),
                    function: OpenAiFunctionCall {
                        name: tc.name.clone(),
                        arguments: tc.arguments.clone(),
                    },
                })
                .collect(),
            tool_call_id: None,
        },
        Message::Tool(t) => OpenAiMessage {
            role: "tool",
            content: Some(t.content.clone()),
            tool_calls: Vec::new(),
            tool_call_id: Some(t.call_id.clone()),
        },
    }
}

fn parse_response(text: &str) -> Result<LlmResponse, LlmError> {
    let parsed: OpenAiResponse =
        serde_json::from_str(text).map_err(|e| LlmError::Parsing(format!("{e}: {text}")))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyChoices)?;
    let tool_calls = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|tc| ToolCall {
            id: tc.id,
            name: tc.function.name,
            arguments: tc.function.arguments,
        })
        .collect();
    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        tool_calls,
        usage: parsed.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        }),
    })
}

/// OpenAI Chat Completions client implementing `LlmClient`.
///
/// Equivalent of LangChain's `ChatOpenAI(model=...).bind_tools(tools)` when
/// built with `with_tools`.
///
/// **Interaction**: Implements `LlmClient`; wrapped by `ToolCallingChat` which
/// executes the returned tool calls.
#[derive(Debug, Clone)]
pub struct ChatOpenAI {
    config: OpenAiConfig,
    client: reqwest::Client,
    model: String,
    tools: Vec<ToolSpec>,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Builds a client from the environment (`OPENAI_API_KEY`, `OPENAI_API_BASE`).
    ///
    /// A missing key is not an error here; the first request fails with `LlmError::Auth`.
    pub fn new(model: impl Into<String>) -> Self {
        let config = OpenAiConfig::from_env().unwrap_or_else(|_| OpenAiConfig::new(""));
        Self::with_config(config, model)
    }

    /// Builds a client with explicit connection settings.
    pub fn with_config(config: OpenAiConfig, model: impl Into<String>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            model: model.into(),
            tools: Vec::new(),
            temperature: None,
        }
    }

    /// Declares tools the model may call.
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_body(&self, messages: &[Message]) -> OpenAiRequestBody {
        OpenAiRequestBody {
            model: self.model.clone(),
            messages: messages.iter().map(to_openai_message).collect(),
            tools: self
                .tools
                .iter()
                .map(|t| OpenAiTool {
                    kind: "function",
                    function: OpenAiFunction {
                        name: t.name.clone(),
                        description: t.description.clone(),
                        parameters: t.input_schema.clone(),
                    },
                })
                .collect(),
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        if self.config.api_key.is_empty() {
            return Err(LlmError::Auth("OPENAI_API_KEY not set".to_string()));
        }
        let url = format!("{}/chat/completions", self.config.api_base);
        let body = self.build_body(messages);
        debug!(
            model = %self.model,
            messages = body.messages.len(),
            tools = body.tools.len(),
            "chat completion request"
        );
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        let status = res.status();
        let text = res.text().await.map_err(|e| LlmError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(LlmError::from_status(status.as_u16(), text));
        }
        let response = parse_response(&text)?;
        debug!(
            tool_calls = response.tool_calls.len(),
            usage = ?response.usage,
            "chat completion response"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ChatOpenAI {
        ChatOpenAI::with_config(OpenAiConfig::new("sk-test"), DEFAULT_MODEL)
    }

    #[test]
    fn config_trims_trailing_slash() {
        let c = OpenAiConfig::new("k").with_api_base("http://localhost:8080/v1/");
        assert_eq!(c.api_base, "http://localhost:8080/v1");
    }

    #[test]
    fn body_maps_roles_and_tools() {
        let llm = client()
            .with_temperature(0.2)
            .with_tools(vec![ToolSpec {
                name: "get_market_value".into(),
                description: Some("Gets current market value of a player".into()),
                input_schema: serde_json::json!({"type": "object"}),
            }]);
        let body = llm.build_body(&[Message::system("sys"), Message::human("hi")]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert!(json["messages"][1].get("tool_calls").is_none());
        assert_eq!(json["tools"][0]["type"], "function");
        assert_eq!(json["tools"][0]["function"]["name"], "get_market_value");
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn body_omits_tools_when_none_bound() {
        let json = serde_json::to_value(client().build_body(&[Message::human("hi")])).unwrap();
        assert!(json.get("tools").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn body_encodes_tool_round_trip_messages() {
        let ai = Message::Ai(crate::message::AiMessage {
            content: String::new(),
            tool_calls: vec![ToolCall {
                id: "call_1".into(),
                name: "get_market_value".into(),
                arguments: r#"{"player_name":"Lionel Messi"}"#.into(),
            }],
        });
        let tool = Message::tool("call_1", "€50 million");
        let json = serde_json::to_value(client().build_body(&[ai, tool])).unwrap();
        let assistant = &json["messages"][0];
        assert_eq!(assistant["role"], "assistant");
        assert!(assistant["content"].is_null());
        assert_eq!(assistant["tool_calls"][0]["id"], "call_1");
        assert_eq!(assistant["tool_calls"][0]["type"], "function");
        assert_eq!(assistant["tool_calls"][0]["function"]["name"], "get_market_value");
        let tool = &json["messages"][1];
        assert_eq!(tool["role"], "tool");
        assert_eq!(tool["tool_call_id"], "call_1");
        assert_eq!(tool["content"], "€50 million");
    }

    #[test]
    fn parse_text_response() {
        let text = r#"{"choices":[{"message":{"role":"assistant","content":"Hello"}}],
                       "usage":{"prompt_tokens":3,"completion_tokens":1,"total_tokens":4}}"#;
        let r = parse_response(text).unwrap();
        assert_eq!(r.content, "Hello");
        assert!(r.tool_calls.is_empty());
        assert_eq!(
            r.usage,
            Some(Usage {
                prompt_tokens: 3,
                completion_tokens: 1
            })
        );
    }

    #[test]
    fn parse_tool_call_response_with_null_content() {
        let text = r#"{"choices":[{"message":{"role":"assistant","content":null,
            "tool_calls":[{"id":"call_9","type":"function",
            "function":{"name":"get_market_value","arguments":"{\"player_name\":\"Cristiano Ronaldo\"}"}}]}}]}"#;
        let r = parse_response(text).unwrap();
        assert_eq!(r.content, "");
        assert_eq!(r.tool_calls.len(), 1);
        assert_eq!(r.tool_calls[0].id, "call_9");
        assert_eq!(r.tool_calls[0].name, "get_market_value");
        assert!(r.tool_calls[0].arguments.contains("Cristiano Ronaldo"));
        assert!(r.usage.is_none());
    }

    #[test]
    fn parse_empty_choices() {
        assert_eq!(
            parse_response(r#"{"choices":[]}"#).unwrap_err(),
            LlmError::EmptyChoices
        );
    }

    #[test]
    fn parse_garbage_is_parsing_error() {
        assert!(matches!(
            parse_response("<html>bad gateway</html>"),
            Err(LlmError::Parsing(_))
        ));
    }

    #[tokio::test]
    async fn invoke_without_key_fails_with_auth() {
        let llm = ChatOpenAI::with_config(OpenAiConfig::new(""), DEFAULT_MODEL);
        let err = llm.invoke(&[Message::human("hi")]).await.unwrap_err();
        assert!(matches!(err, LlmError::Auth(_)));
    }
}
