//! OpenAI-style chat completion record definitions.
//!
//! This module specifies the record types of the OpenAI-style chat
//! completion wire protocol. Wire names already match the snake_case
//! Rust fields, so renames appear only where a field would collide with
//! a Rust keyword.
//!
//! Request and response records are immutable value types. The streaming
//! chunk family (`ChatCompletionChunk` and its deltas) is mutable:
//! consumers accumulate streamed deltas in place.

use stencil_define::{Capabilities, FieldSpec, RecordModule, RecordSpec};

fn record(name: &str, description: &str, fields: Vec<FieldSpec>, caps: Capabilities) -> RecordSpec {
    RecordSpec {
        name: name.to_string(),
        description: description.to_string(),
        fields,
        caps,
    }
}

/// Creates the OpenAI-style chat completion record module.
///
/// ## Examples
///
/// ```
/// use stencil_definitions::openai::define_openai_module;
///
/// let module = define_openai_module();
/// assert_eq!(module.name, "OpenAi");
/// assert!(module.records.iter().any(|r| r.name == "ChatCompletionRequest"));
/// ```
pub fn define_openai_module() -> RecordModule {
    RecordModule {
        name: "OpenAi".to_string(),
        description: "OpenAI-style chat completion wire protocol.".to_string(),
        docs_url: Some("https://platform.openai.com/docs/api-reference/chat".to_string()),
        module_path: Some("openai".to_string()),
        records: vec![
            record(
                "SystemMessage",
                "A system message in a chat completion request",
                vec![
                    FieldSpec::required("content", "String"),
                    FieldSpec::optional("name", "String"),
                    FieldSpec::optional("role", "String"),
                ],
                Capabilities::value(),
            ),
            record(
                "UserMessage",
                "A user message in a chat completion request",
                vec![
                    FieldSpec::required("content", "String"),
                    FieldSpec::optional("name", "String"),
                    FieldSpec::optional("role", "String"),
                ],
                Capabilities::value(),
            ),
            record(
                "AssistantMessage",
                "An assistant message, possibly carrying tool calls",
                vec![
                    FieldSpec::optional("content", "String"),
                    FieldSpec::optional("name", "String"),
                    FieldSpec::optional("role", "String"),
                    FieldSpec::optional("reasoning", "String"),
                    FieldSpec::optional("tool_calls", "Vec<ToolCall>"),
                ],
                Capabilities::value(),
            ),
            record(
                "ToolMessage",
                "A tool result message answering a tool call",
                vec![
                    FieldSpec::required("content", "String"),
                    FieldSpec::required("tool_call_id", "String"),
                    FieldSpec::optional("name", "String"),
                    FieldSpec::optional("role", "String"),
                ],
                Capabilities::value(),
            ),
            record(
                "ToolCallFunction",
                "The function name and serialized arguments of a tool call",
                vec![
                    FieldSpec::required("name", "String"),
                    FieldSpec::required("arguments", "String"),
                ],
                Capabilities::value(),
            ),
            record(
                "ToolCall",
                "A model-requested tool invocation",
                vec![
                    FieldSpec::required("id", "String"),
                    FieldSpec::required("function", "ToolCallFunction"),
                    FieldSpec::optional("kind", "String").wire("type"),
                ],
                Capabilities::value(),
            ),
            record(
                "ToolFunction",
                "A callable function declaration with its JSON schema",
                vec![
                    FieldSpec::required("name", "String"),
                    FieldSpec::optional("description", "String"),
                    FieldSpec::optional("parameters", "serde_json::Value"),
                    FieldSpec::optional("strict", "bool"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "Tool",
                "A tool offered to the model",
                vec![
                    FieldSpec::required("function", "ToolFunction"),
                    FieldSpec::optional("kind", "String").wire("type"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "ExecutedTool",
                "A server-side tool execution reported back in a response",
                vec![
                    FieldSpec::required("arguments", "String"),
                    FieldSpec::required("index", "i64"),
                    FieldSpec::required("kind", "String").wire("type"),
                    FieldSpec::optional("browser_results", "serde_json::Value"),
                    FieldSpec::optional("code_results", "serde_json::Value"),
                    FieldSpec::optional("output", "String"),
                    FieldSpec::optional("search_results", "serde_json::Value"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "ResponseFormat",
                "The requested response format",
                vec![FieldSpec::optional("kind", "String").wire("type")],
                Capabilities::value(),
            ),
            record(
                "ChatCompletionRequest",
                "A complete chat completion request body",
                vec![
                    FieldSpec::required("model", "String"),
                    FieldSpec::required("messages", "Vec<serde_json::Value>"),
                    FieldSpec::optional("frequency_penalty", "f64"),
                    FieldSpec::optional("logprobs", "bool"),
                    FieldSpec::optional("max_completion_tokens", "i64"),
                    FieldSpec::optional("n", "i64"),
                    FieldSpec::optional("parallel_tool_calls", "bool"),
                    FieldSpec::optional("presence_penalty", "f64"),
                    FieldSpec::optional("response_format", "ResponseFormat"),
                    FieldSpec::optional("seed", "i64"),
                    FieldSpec::optional("service_tier", "String"),
                    FieldSpec::optional("stop", "Vec<String>"),
                    FieldSpec::optional("stream", "bool"),
                    FieldSpec::optional("temperature", "f64"),
                    FieldSpec::optional("tool_choice", "serde_json::Value"),
                    FieldSpec::optional("tools", "Vec<Tool>"),
                    FieldSpec::optional("top_logprobs", "i64"),
                    FieldSpec::optional("top_p", "f64"),
                    FieldSpec::optional("user", "String"),
                ],
                Capabilities::value().without_hash(),
            )
            .keyword_only(),
            record(
                "Usage",
                "Token and timing accounting for one completion",
                vec![
                    FieldSpec::optional("completion_tokens", "i64"),
                    FieldSpec::optional("prompt_tokens", "i64"),
                    FieldSpec::optional("total_tokens", "i64"),
                    FieldSpec::optional("completion_time", "f64"),
                    FieldSpec::optional("prompt_time", "f64"),
                    FieldSpec::optional("queue_time", "f64"),
                    FieldSpec::optional("total_time", "f64"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "ChoiceMessage",
                "The assistant message inside a response choice",
                vec![
                    FieldSpec::optional("role", "String"),
                    FieldSpec::optional("content", "String"),
                    FieldSpec::optional("reasoning", "String"),
                    FieldSpec::optional("annotations", "serde_json::Value"),
                    FieldSpec::optional("tool_calls", "Vec<ToolCall>"),
                    FieldSpec::optional("executed_tools", "Vec<ExecutedTool>"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "Choice",
                "One completed answer in a chat completion response",
                vec![
                    FieldSpec::required("finish_reason", "String"),
                    FieldSpec::required("index", "i64"),
                    FieldSpec::required("message", "ChoiceMessage"),
                    FieldSpec::optional("logprobs", "serde_json::Value"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "ChatCompletionResponse",
                "A complete chat completion response body",
                vec![
                    FieldSpec::required("id", "String"),
                    FieldSpec::required("created", "i64"),
                    FieldSpec::required("model", "String"),
                    FieldSpec::required("choices", "Vec<Choice>"),
                    FieldSpec::optional("object", "String"),
                    FieldSpec::optional("system_fingerprint", "String"),
                    FieldSpec::optional("service_tier", "String"),
                    FieldSpec::optional("usage", "Usage"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "DeltaFunction",
                "A streamed fragment of a tool call function",
                vec![
                    FieldSpec::optional("name", "String"),
                    FieldSpec::optional("arguments", "String"),
                ],
                Capabilities::value().without_frozen(),
            ),
            record(
                "DeltaToolCall",
                "A streamed fragment of a tool call",
                vec![
                    FieldSpec::required("index", "i64"),
                    FieldSpec::optional("id", "String"),
                    FieldSpec::optional("function", "DeltaFunction"),
                    FieldSpec::optional("kind", "String").wire("type"),
                ],
                Capabilities::value().without_frozen(),
            ),
            record(
                "Delta",
                "A streamed fragment of an assistant message",
                vec![
                    FieldSpec::optional("role", "String"),
                    FieldSpec::optional("content", "String"),
                    FieldSpec::optional("channel", "String"),
                    FieldSpec::optional("reasoning", "String"),
                    FieldSpec::optional("tool_calls", "Vec<DeltaToolCall>"),
                    FieldSpec::optional("executed_tools", "Vec<ExecutedTool>"),
                ],
                Capabilities::value().without_frozen(),
            ),
            record(
                "ChunkChoice",
                "One choice slot inside a streamed chunk",
                vec![
                    FieldSpec::required("index", "i64"),
                    FieldSpec::required("delta", "Delta"),
                    FieldSpec::optional("finish_reason", "String"),
                    FieldSpec::optional("logprobs", "serde_json::Value"),
                ],
                Capabilities::value().without_frozen(),
            ),
            record(
                "ChatCompletionChunk",
                "One server-sent chunk of a streamed completion",
                vec![
                    FieldSpec::required("id", "String"),
                    FieldSpec::required("created", "i64"),
                    FieldSpec::required("model", "String"),
                    FieldSpec::required("choices", "Vec<ChunkChoice>"),
                    FieldSpec::optional("object", "String"),
                    FieldSpec::optional("system_fingerprint", "String"),
                    FieldSpec::optional("service_tier", "String"),
                    FieldSpec::optional("usage", "Usage"),
                ],
                Capabilities::value().without_frozen(),
            ),
        ],
    }
}
