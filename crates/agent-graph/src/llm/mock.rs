//! Mock chat model for tests and offline runs.
//!
//! Returns a fixed reply, a scripted sequence of replies, or a reply computed
//! from the incoming messages. Every invocation is recorded so tests can assert
//! on what the model was sent.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::llm::{LlmClient, LlmError, LlmResponse, ToolCall};
use crate::message::Message;

type ReplyFn = Box<dyn Fn(&[Message]) -> LlmResponse + Send + Sync>;

enum Behavior {
    Fixed(LlmResponse),
    Script(Mutex<VecDeque<LlmResponse>>),
    Func(ReplyFn),
}

/// Mock LLM: deterministic replies plus a log of received message lists.
///
/// **Interaction**: Implements `LlmClient`; substitutes `ChatOpenAI` wherever
/// an `Arc<dyn LlmClient>` is injected.
pub struct MockLlm {
    behavior: Behavior,
    calls: Mutex<Vec<Vec<Message>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockLlm {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `content` and no tool calls.
    pub fn with_response(content: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fixed(LlmResponse::text(content)))
    }

    /// Replies in order; fails with `LlmError::ApiError` once the script is exhausted.
    pub fn scripted(responses: Vec<LlmResponse>) -> Self {
        Self::with_behavior(Behavior::Script(Mutex::new(responses.into())))
    }

    /// First reply requests `call`, second reply answers with `content`.
    pub fn tool_call_then_answer(call: ToolCall, content: impl Into<String>) -> Self {
        Self::scripted(vec![
            LlmResponse::with_tool_calls(vec![call]),
            LlmResponse::text(content),
        ])
    }

    /// Computes each reply from the messages received.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&[Message]) -> LlmResponse + Send + Sync + 'static,
    {
        Self::with_behavior(Behavior::Func(Box::new(f)))
    }

    /// Message lists received so far, one entry per invocation.
    pub fn calls(&self) -> Vec<Vec<Message>> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        lock(&self.calls).push(messages.to_vec());
        match &self.behavior {
            Behavior::Fixed(r) => Ok(r.clone()),
            Behavior::Script(queue) => {
                let next = lock(queue).pop_front();
                next.ok_or_else(|| LlmError::ApiError("mock script exhausted".to_string()))
            }
            Behavior::Func(f) => Ok(f(messages)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_response_repeats() {
        let llm = MockLlm::with_response("ok");
        for _ in 0..2 {
            let r = llm.invoke(&[Message::human("hi")]).await.unwrap();
            assert_eq!(r.content, "ok");
        }
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn script_runs_out() {
        let llm = MockLlm::scripted(vec![LlmResponse::text("one")]);
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "one");
        assert!(matches!(llm.invoke(&[]).await, Err(LlmError::ApiError(_))));
    }

    #[tokio::test]
    async fn records_messages() {
        let llm = MockLlm::from_fn(|m| LlmResponse::text(m.len().to_string()));
        let r = llm
            .invoke(&[Message::system("s"), Message::human("h")])
            .await
            .unwrap();
        assert_eq!(r.content, "2");
        assert_eq!(llm.calls()[0][1], Message::human("h"));
    }
}
