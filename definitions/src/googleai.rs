//! Google generateContent record definitions.
//!
//! This module specifies the record types of the Google generateContent
//! wire protocol. Every record is an immutable keyword-only value type;
//! wire names are lowerCamelCase while the Rust fields stay snake_case.

use stencil_define::{Capabilities, FieldSpec, RecordModule, RecordSpec};

fn record(name: &str, description: &str, fields: Vec<FieldSpec>, caps: Capabilities) -> RecordSpec {
    RecordSpec {
        name: name.to_string(),
        description: description.to_string(),
        fields,
        caps,
    }
    .keyword_only()
}

/// Creates the Google generateContent record module.
///
/// Records nesting floats or untyped JSON opt out of hashing; everything
/// else is a fully capable value type.
///
/// ## Examples
///
/// ```
/// use stencil_definitions::googleai::define_googleai_module;
///
/// let module = define_googleai_module();
/// assert_eq!(module.name, "GoogleAi");
/// assert!(module.records.iter().any(|r| r.name == "GenerateContentRequest"));
/// ```
pub fn define_googleai_module() -> RecordModule {
    RecordModule {
        name: "GoogleAi".to_string(),
        description: "Google generateContent wire protocol.".to_string(),
        docs_url: Some("https://ai.google.dev/api/generate-content".to_string()),
        module_path: Some("googleai".to_string()),
        records: vec![
            record(
                "Blob",
                "Inline media bytes with their media type",
                vec![
                    FieldSpec::required("mine_type", "String").wire("mineType"),
                    FieldSpec::required("data", "Vec<u8>").base64().no_repr(),
                ],
                Capabilities::value(),
            ),
            record(
                "FileData",
                "A file referenced by URI rather than carried inline",
                vec![
                    FieldSpec::required("mime_type", "String").wire("mimeType"),
                    FieldSpec::required("file_uri", "String").wire("fileUri"),
                ],
                Capabilities::value(),
            ),
            record(
                "ExecutableCode",
                "Model-generated code intended for execution",
                vec![
                    FieldSpec::required("language", "String"),
                    FieldSpec::required("code", "String"),
                ],
                Capabilities::value(),
            ),
            record(
                "CodeExecutionResult",
                "The outcome of running model-generated code",
                vec![
                    FieldSpec::required("outcome", "String"),
                    FieldSpec::required("output", "String"),
                ],
                Capabilities::value(),
            ),
            record(
                "VideoMetadata",
                "Offsets and sampling rate for a video input",
                vec![
                    FieldSpec::required("start_offset", "String").wire("startOffset"),
                    FieldSpec::required("end_offset", "String").wire("endOffset"),
                    FieldSpec::required("fps", "f64"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "FunctionCall",
                "A model-predicted invocation of a declared function",
                vec![
                    FieldSpec::optional("id", "String"),
                    FieldSpec::required("name", "String"),
                    FieldSpec::optional("args", "serde_json::Value"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "FunctionResponse",
                "The result of a function call, fed back to the model",
                vec![
                    FieldSpec::optional("id", "String"),
                    FieldSpec::required("name", "String"),
                    FieldSpec::optional("response", "serde_json::Value"),
                    FieldSpec::optional("will_continue", "bool").wire("willContinue"),
                    FieldSpec::optional("scheduling", "String"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "Part",
                "One piece of multi-part content",
                vec![
                    FieldSpec::optional("text", "String"),
                    FieldSpec::optional("inline_data", "Blob").wire("inlineData"),
                    FieldSpec::optional("function_call", "FunctionCall").wire("functionCall"),
                    FieldSpec::optional("function_response", "FunctionResponse")
                        .wire("functionResponse"),
                    FieldSpec::optional("file_data", "FileData").wire("fileData"),
                    FieldSpec::optional("executable_code", "ExecutableCode").wire("executableCode"),
                    FieldSpec::optional("code_execution_result", "CodeExecutionResult")
                        .wire("codeExecutionResult"),
                    FieldSpec::optional("video_metadata", "VideoMetadata").wire("videoMetadata"),
                    FieldSpec::optional("thought", "bool"),
                    FieldSpec::optional("thought_signature", "Vec<u8>")
                        .wire("thoughtSignature")
                        .base64()
                        .no_repr(),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "Content",
                "Multi-part content with the role that produced it",
                vec![
                    FieldSpec::optional("role", "String"),
                    FieldSpec::optional("parts", "Vec<Part>"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "SafetySetting",
                "A harm category threshold applied to generation",
                vec![
                    FieldSpec::required("category", "String"),
                    FieldSpec::required("threshold", "String"),
                    FieldSpec::optional("method", "String"),
                ],
                Capabilities::value(),
            ),
            record(
                "SafetyRating",
                "A harm assessment attached to a candidate",
                vec![
                    FieldSpec::optional("category", "String"),
                    FieldSpec::optional("probability", "String"),
                    FieldSpec::optional("blocked", "bool"),
                ],
                Capabilities::value(),
            ),
            record(
                "ThinkingConfig",
                "Controls for model reasoning output",
                vec![
                    FieldSpec::optional("include_thoughts", "bool").wire("includeThoughts"),
                    FieldSpec::optional("thinking_budget", "i64").wire("thinkingBudget"),
                ],
                Capabilities::value(),
            ),
            record(
                "GenerationConfig",
                "Sampling and output controls for a generation request",
                vec![
                    FieldSpec::optional("stop_sequences", "Vec<String>").wire("stopSequences"),
                    FieldSpec::optional("response_mime_type", "String").wire("responseMimeType"),
                    FieldSpec::optional("candidate_count", "i64").wire("candidateCount"),
                    FieldSpec::optional("max_output_tokens", "i64").wire("maxOutputTokens"),
                    FieldSpec::optional("temperature", "f64"),
                    FieldSpec::optional("top_p", "f64").wire("topP"),
                    FieldSpec::optional("top_k", "i64").wire("topK"),
                    FieldSpec::optional("seed", "i64"),
                    FieldSpec::optional("presence_penalty", "f64").wire("presencePenalty"),
                    FieldSpec::optional("frequency_penalty", "f64").wire("frequencyPenalty"),
                    FieldSpec::optional("response_logprobs", "bool").wire("responseLogprobs"),
                    FieldSpec::optional("logprobs", "i64"),
                    FieldSpec::optional("thinking_config", "ThinkingConfig").wire("thinkingConfig"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "Schema",
                "A JSON-schema fragment describing a function parameter shape",
                vec![
                    FieldSpec::optional("kind", "String").wire("type"),
                    FieldSpec::optional("format", "String"),
                    FieldSpec::optional("description", "String"),
                    FieldSpec::optional("nullable", "bool"),
                    FieldSpec::optional("enum_values", "Vec<String>").wire("enum"),
                    FieldSpec::optional("items", "serde_json::Value"),
                    FieldSpec::optional("properties", "serde_json::Value"),
                    FieldSpec::optional("required", "Vec<String>"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "FunctionDeclaration",
                "A function the model may call, with its JSON schema",
                vec![
                    FieldSpec::required("name", "String"),
                    FieldSpec::optional("description", "String"),
                    FieldSpec::optional("parameters", "Schema"),
                    FieldSpec::optional("response", "Schema"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "GoogleSearch",
                "Enables grounding through Google Search",
                vec![],
                Capabilities::value(),
            ),
            record(
                "CodeExecution",
                "Enables model-generated code execution",
                vec![],
                Capabilities::value(),
            ),
            record(
                "UrlContext",
                "Enables URL context retrieval",
                vec![],
                Capabilities::value(),
            ),
            record(
                "Tool",
                "A tool surface offered to the model",
                vec![
                    FieldSpec::optional("function_declarations", "Vec<FunctionDeclaration>")
                        .wire("functionDeclarations"),
                    FieldSpec::optional("google_search", "GoogleSearch").wire("googleSearch"),
                    FieldSpec::optional("code_execution", "CodeExecution").wire("codeExecution"),
                    FieldSpec::optional("url_context", "UrlContext").wire("urlContext"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "FunctionCallingConfig",
                "Constraints on which functions the model may call",
                vec![
                    FieldSpec::optional("mode", "String"),
                    FieldSpec::optional("allowed_function_names", "Vec<String>")
                        .wire("allowedFunctionNames"),
                ],
                Capabilities::value(),
            ),
            record(
                "ToolConfig",
                "Request-level tool behavior configuration",
                vec![
                    FieldSpec::optional("function_calling_config", "FunctionCallingConfig")
                        .wire("functionCallingConfig"),
                ],
                Capabilities::value(),
            ),
            record(
                "GenerateContentRequest",
                "A complete generateContent request body",
                vec![
                    FieldSpec::required("contents", "Vec<Content>"),
                    FieldSpec::optional("tools", "Vec<Tool>"),
                    FieldSpec::optional("tool_config", "ToolConfig").wire("toolConfig"),
                    FieldSpec::optional("safety_settings", "Vec<SafetySetting>")
                        .wire("safetySettings"),
                    FieldSpec::optional("system_instruction", "Content").wire("systemInstruction"),
                    FieldSpec::optional("generation_config", "GenerationConfig")
                        .wire("generationConfig"),
                    FieldSpec::optional("cached_content", "String").wire("cachedContent"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "Candidate",
                "One generated answer with its quality signals",
                vec![
                    FieldSpec::optional("content", "Content"),
                    FieldSpec::optional("finish_reason", "String").wire("finishReason"),
                    FieldSpec::optional("safety_ratings", "Vec<SafetyRating>")
                        .wire("safetyRatings"),
                    FieldSpec::optional("token_count", "i64").wire("tokenCount"),
                    FieldSpec::optional("index", "i64"),
                    FieldSpec::optional("avg_logprobs", "f64").wire("avgLogprobs"),
                ],
                Capabilities::value().without_hash(),
            ),
            record(
                "PromptFeedback",
                "Why a prompt was blocked, when it was",
                vec![
                    FieldSpec::optional("block_reason", "String").wire("blockReason"),
                    FieldSpec::optional("safety_ratings", "Vec<SafetyRating>")
                        .wire("safetyRatings"),
                ],
                Capabilities::value(),
            ),
            record(
                "ModalityTokenCount",
                "Token count for one input or output modality",
                vec![
                    FieldSpec::optional("modality", "String"),
                    FieldSpec::optional("token_count", "i64").wire("tokenCount"),
                ],
                Capabilities::value(),
            ),
            record(
                "UsageMetadata",
                "Token accounting for one generateContent exchange",
                vec![
                    FieldSpec::optional("prompt_token_count", "i64").wire("promptTokenCount"),
                    FieldSpec::optional("cached_content_token_count", "i64")
                        .wire("cachedContentTokenCount"),
                    FieldSpec::optional("candidates_token_count", "i64")
                        .wire("candidatesTokenCount"),
                    FieldSpec::optional("tool_use_prompt_token_count", "i64")
                        .wire("toolUsePromptTokenCount"),
                    FieldSpec::optional("thoughts_token_count", "i64").wire("thoughtsTokenCount"),
                    FieldSpec::optional("total_token_count", "i64").wire("totalTokenCount"),
                    FieldSpec::optional("prompt_tokens_details", "Vec<ModalityTokenCount>")
                        .wire("promptTokensDetails"),
                    FieldSpec::optional("candidates_tokens_details", "Vec<ModalityTokenCount>")
                        .wire("candidatesTokensDetails"),
                ],
                Capabilities::value(),
            ),
            record(
                "GenerateContentResponse",
                "A complete generateContent response body",
                vec![
                    FieldSpec::optional("candidates", "Vec<Candidate>"),
                    FieldSpec::optional("prompt_feedback", "PromptFeedback")
                        .wire("promptFeedback"),
                    FieldSpec::optional("usage_metadata", "UsageMetadata").wire("usageMetadata"),
                    FieldSpec::optional("model_version", "String").wire("modelVersion"),
                    FieldSpec::optional("response_id", "String").wire("responseId"),
                ],
                Capabilities::value().without_hash(),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_define::Binding;

    #[test]
    fn module_has_correct_metadata() {
        let module = define_googleai_module();

        assert_eq!(module.name, "GoogleAi");
        assert_eq!(module.output_module(), "googleai");
        assert!(module.docs_url.is_some());
        assert_eq!(module.records.len(), 27);
    }

    #[test]
    fn every_field_is_keyword_only() {
        let module = define_googleai_module();
        for record in &module.records {
            for field in &record.fields {
                assert_eq!(
                    field.binding,
                    Binding::KeywordOnly,
                    "{}.{} should be keyword-only",
                    record.name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn every_record_is_frozen() {
        let module = define_googleai_module();
        assert!(module.records.iter().all(|r| r.caps.frozen));
    }

    #[test]
    fn float_carrying_records_opt_out_of_hashing() {
        let module = define_googleai_module();
        for record in &module.records {
            if record.fields.iter().any(|f| f.ty.contains("f64")) {
                assert!(!record.caps.hash, "{} must not hash", record.name);
            }
        }
    }

    #[test]
    fn wire_names_are_lower_camel_case() {
        let module = define_googleai_module();
        for record in &module.records {
            for field in &record.fields {
                if let Some(wire) = &field.wire_name {
                    assert!(
                        !wire.contains('_'),
                        "{}.{} wire name '{}' should be lowerCamelCase",
                        record.name,
                        field.name,
                        wire
                    );
                }
            }
        }
    }

    #[test]
    fn byte_fields_travel_as_base64() {
        let module = define_googleai_module();
        for record in &module.records {
            for field in &record.fields {
                let byte_typed = field.ty == "Vec<u8>" || field.ty == "Option<Vec<u8>>";
                assert_eq!(
                    field.base64, byte_typed,
                    "{}.{} base64 flag must match its byte typing",
                    record.name, field.name
                );
            }
        }

        let blob = module.records.iter().find(|r| r.name == "Blob").unwrap();
        assert!(blob.fields.iter().find(|f| f.name == "data").unwrap().base64);
        let part = module.records.iter().find(|r| r.name == "Part").unwrap();
        assert!(
            part.fields
                .iter()
                .find(|f| f.name == "thought_signature")
                .unwrap()
                .base64
        );
    }

    #[test]
    fn blob_hides_its_payload_from_debug_output() {
        let module = define_googleai_module();
        let blob = module.records.iter().find(|r| r.name == "Blob").unwrap();
        let data = blob.fields.iter().find(|f| f.name == "data").unwrap();
        assert!(!data.repr);
    }

    #[test]
    fn media_and_execution_payloads_require_their_fields() {
        let module = define_googleai_module();

        let file_data = module.records.iter().find(|r| r.name == "FileData").unwrap();
        let required: Vec<_> = file_data.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(required, vec!["mime_type", "file_uri"]);

        let result = module
            .records
            .iter()
            .find(|r| r.name == "CodeExecutionResult")
            .unwrap();
        let required: Vec<_> = result.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(required, vec!["outcome", "output"]);

        let video = module.records.iter().find(|r| r.name == "VideoMetadata").unwrap();
        assert_eq!(video.required_fields().count(), 3);
    }

    #[test]
    fn request_requires_contents() {
        let module = define_googleai_module();
        let request = module
            .records
            .iter()
            .find(|r| r.name == "GenerateContentRequest")
            .unwrap();

        let required: Vec<_> = request.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(required, vec!["contents"]);
    }

    #[test]
    fn response_is_fully_defaulted() {
        let module = define_googleai_module();
        let response = module
            .records
            .iter()
            .find(|r| r.name == "GenerateContentResponse")
            .unwrap();
        assert!(response.all_fields_defaulted());
    }
}
