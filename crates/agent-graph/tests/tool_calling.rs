//! Integration tests for ToolCallingChat with MockLlm and ToolRegistry.

use std::sync::Arc;

use agent_graph::{
    AgentError, LlmResponse, Message, MockLlm, Tool, ToolCall, ToolCallingChat, ToolError,
    ToolRegistry,
};
use serde_json::Value;

/// Looks a city up in a two-entry table.
struct Population;

impl Tool for Population {
    fn name(&self) -> &str {
        "population"
    }

    fn description(&self) -> &str {
        "Population of a city"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": { "city": { "type": "string" } },
            "required": ["city"]
        })
    }

    fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let city = args.get("city").and_then(Value::as_str).unwrap_or_default();
        Ok(Value::String(
            match city {
                "Oslo" => "700k",
                "Bergen" => "290k",
                _ => "unknown",
            }
            .to_string(),
        ))
    }
}

fn tools() -> Arc<ToolRegistry> {
    let mut reg = ToolRegistry::new();
    reg.register(Box::new(Population));
    Arc::new(reg)
}

fn call(id: &str, name: &str, arguments: &str) -> ToolCall {
    ToolCall {
        id: id.into(),
        name: name.into(),
        arguments: arguments.into(),
    }
}

#[tokio::test]
async fn no_tool_calls_returns_first_reply() {
    let llm = Arc::new(MockLlm::with_response("no tools needed"));
    let chat = ToolCallingChat::new(llm.clone(), tools());

    let r = chat.invoke(&[Message::human("hi")]).await.unwrap();
    assert_eq!(r.content, "no tools needed");
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn tool_result_is_sent_back_to_model() {
    let llm = Arc::new(MockLlm::tool_call_then_answer(
        call("c1", "population", r#"{"city":"Oslo"}"#),
        "Oslo has 700k people.",
    ));
    let chat = ToolCallingChat::new(llm.clone(), tools());

    let r = chat
        .invoke(&[Message::system("sys"), Message::human("How big is Oslo?")])
        .await
        .unwrap();
    assert_eq!(r.content, "Oslo has 700k people.");

    let calls = llm.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].len(), 2);
    let second = &calls[1];
    assert_eq!(second.len(), 4);
    assert!(matches!(&second[2], Message::Ai(m) if m.tool_calls.len() == 1));
    assert_eq!(second[3], Message::tool("c1", "700k"));
}

#[tokio::test]
async fn parallel_tool_calls_each_get_a_reply() {
    let llm = Arc::new(MockLlm::scripted(vec![
        LlmResponse::with_tool_calls(vec![
            call("a", "population", r#"{"city":"Oslo"}"#),
            call("b", "population", r#"{"city":"Bergen"}"#),
        ]),
        LlmResponse::text("done"),
    ]));
    let chat = ToolCallingChat::new(llm.clone(), tools());

    chat.invoke(&[Message::human("compare")]).await.unwrap();
    let calls = llm.calls();
    let second = &calls[1];
    assert_eq!(second.len(), 4);
    assert_eq!(second[0], Message::human("compare"));
    assert!(matches!(&second[1], Message::Ai(m) if m.tool_calls.len() == 2));
    assert_eq!(second[2], Message::tool("a", "700k"));
    assert_eq!(second[3], Message::tool("b", "290k"));
}

#[tokio::test]
async fn unknown_tool_aborts() {
    let llm = Arc::new(MockLlm::tool_call_then_answer(call("c1", "weather", "{}"), "x"));
    let chat = ToolCallingChat::new(llm, tools());

    let err = chat.invoke(&[Message::human("hi")]).await.unwrap_err();
    assert!(matches!(err, AgentError::Tool(ToolError::NotFound(ref n)) if n == "weather"));
}

#[tokio::test]
async fn missing_required_argument_aborts() {
    let llm = Arc::new(MockLlm::tool_call_then_answer(call("c1", "population", "{}"), "x"));
    let chat = ToolCallingChat::new(llm, tools());

    let err = chat.invoke(&[Message::human("hi")]).await.unwrap_err();
    assert!(matches!(err, AgentError::Tool(ToolError::ValidationFailed(_))));
}

#[tokio::test]
async fn endless_tool_calls_hit_the_round_limit() {
    let llm = Arc::new(MockLlm::from_fn(|_| {
        LlmResponse::with_tool_calls(vec![ToolCall {
            id: "loop".into(),
            name: "population".into(),
            arguments: r#"{"city":"Oslo"}"#.into(),
        }])
    }));
    let chat = ToolCallingChat::new(llm.clone(), tools()).with_max_rounds(2);

    let err = chat.invoke(&[Message::human("hi")]).await.unwrap_err();
    assert!(matches!(err, AgentError::ToolRoundsExceeded(2)));
    assert_eq!(llm.call_count(), 3);
}

#[tokio::test]
async fn model_error_propagates() {
    let llm = Arc::new(MockLlm::scripted(vec![]));
    let chat = ToolCallingChat::new(llm, tools());

    let err = chat.invoke(&[Message::human("hi")]).await.unwrap_err();
    assert!(matches!(err, AgentError::Llm(_)));
}
