//! Docstring generation agent.
//!
//! Builds the instruction prompt, performs the single call to the
//! text-generation provider, and pipes the raw output through the
//! post-processing pipeline. Provider failures never escape this module:
//! they are converted to an error string carried in the normal response
//! payload.

use crate::config::Config;
use crate::postprocess;
use crate::provider::GenerationClient;

/// Prefix shared by every error string returned in place of generated code.
pub const ERROR_PREFIX: &str = "# Error";

/// Returned for empty or all-whitespace input. No provider call is made.
pub const EMPTY_INPUT_ERROR: &str = "# Error: The provided source code is empty.";

/// Instructional prompt with a one-shot example and the conditional
/// syntax-error rule. `{code}` is replaced with the user's source.
const PROMPT_TEMPLATE: &str = r#"You are an expert Python documentation agent. Your task is to add Google-style docstrings to the provided Python code.

**Rules:**
1. ONLY return the updated Python code. No explanations, no markdown fences.
2. Use **Google-style docstrings** (PEP 257) - triple quotes, Args/Returns sections indented **4 spaces inside** the docstring.
3. **DO NOT modify the logic or the structure of the code.** Keep the original function/class body exactly as is.
4. If the code **contains syntax errors**, still add docstrings wherever possible **and** add an inline comment `# TODO: Fix syntax error` **on the line after the function/class definition**.
   If the code is **valid**, do NOT add any TODO comments.

**Example of correct output (valid code):**
def multiply(x, y):
    """Multiply two numbers.

    Args:
        x (int): First number.
        y (int): Second number.

    Returns:
        int: The product of x and y.
    """
    return x * y

**Now process this code:**
{code}
"#;

/// Stateless handler for one source snippet at a time.
pub struct DocstringAgent {
    client: GenerationClient,
}

impl DocstringAgent {
    /// Create an agent backed by the configured provider.
    pub fn new(config: &Config) -> Self {
        Self {
            client: GenerationClient::new(config),
        }
    }

    /// Add Google-style docstrings to the given Python source.
    ///
    /// Always returns a string: either the documented code, or an error
    /// message prefixed with [`ERROR_PREFIX`].
    pub async fn generate_docstrings(&self, source_code: &str) -> String {
        if source_code.trim().is_empty() {
            return EMPTY_INPUT_ERROR.to_string();
        }

        let prompt = PROMPT_TEMPLATE.replace("{code}", source_code);
        match self.client.generate(&prompt).await {
            Ok(response) => postprocess::process(&response, source_code),
            Err(error) => format!("{ERROR_PREFIX} generating docstrings: {error}"),
        }
    }
}

/// Whether an agent result is one of the error strings rather than code.
pub fn is_error_output(output: &str) -> bool {
    output.starts_with(ERROR_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::path::PathBuf;
    use std::time::Duration;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-flash-latest:generateContent";

    fn test_config(api_base: String) -> Config {
        Config {
            api_key: "test-key".to_string(),
            key_source: "GOOGLE_API_KEY",
            model: "gemini-flash-latest".to_string(),
            api_base,
            request_timeout: Duration::from_secs(5),
            temperature: 0.1,
            port: 0,
            frontend_dir: PathBuf::from("frontend"),
        }
    }

    fn agent_for(server: &MockServer) -> DocstringAgent {
        DocstringAgent::new(&test_config(server.base_url()))
    }

    #[tokio::test]
    async fn test_empty_input_skips_provider() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(json!({}));
        });

        let agent = agent_for(&server);
        assert_eq!(agent.generate_docstrings("").await, EMPTY_INPUT_ERROR);
        assert_eq!(agent.generate_docstrings("   \n\t  ").await, EMPTY_INPUT_ERROR);
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_error_string() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(500).json_body(json!({
                "error": { "message": "model is overloaded" }
            }));
        });

        let agent = agent_for(&server);
        let output = agent.generate_docstrings("def f():\n    pass\n").await;

        mock.assert();
        assert!(is_error_output(&output));
        assert!(output.contains("model is overloaded"));
    }

    #[tokio::test]
    async fn test_successful_generation_is_post_processed() {
        let generated = concat!(
            "```python\n",
            "def double(x):\n",
            "    # TODO: Fix syntax error\n",
            "    \"\"\"Double a number.\n",
            "\n",
            "    Args:\n",
            "    x (int): The value.\n",
            "    \"\"\"\n",
            "    return x * 2\n",
            "```",
        );
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .header("x-goog-api-key", "test-key")
                .json_body_partial(r#"{ "generationConfig": { "temperature": 0.1 } }"#);
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": generated }], "role": "model" },
                    "finishReason": "STOP"
                }]
            }));
        });

        let agent = agent_for(&server);
        let output = agent
            .generate_docstrings("def double(x):\n    return x * 2\n")
            .await;

        mock.assert();
        assert!(!is_error_output(&output));
        assert!(!output.contains("```"));
        assert!(!output.contains("# TODO: Fix syntax error"));
        assert!(output.contains("        Args:"));
        assert!(output.ends_with("return x * 2"));
    }

    #[tokio::test]
    async fn test_prompt_embeds_source() {
        let source = "def unique_marker_fn():\n    pass\n";
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .body_contains("unique_marker_fn");
            then.status(200).json_body(json!({
                "candidates": [{ "content": { "parts": [{ "text": "def unique_marker_fn():\n    \"\"\"Stub.\"\"\"\n    pass" }] } }]
            }));
        });

        let agent = agent_for(&server);
        let output = agent.generate_docstrings(source).await;

        mock.assert();
        assert!(output.contains("unique_marker_fn"));
    }
}
