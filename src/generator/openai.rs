use async_trait::async_trait;
use chatgpt::client::ChatGPT;
use chatgpt::types::CompletionResponse;

use super::{CompletionBackend, CompletionRequest, GeneratorError};

/// ChatGPT backend. The chat endpoint has no schema parameter here, so the
/// schema travels inside the prompt and the reply is parsed leniently.
pub struct OpenAiBackend {
    chat_gpt: ChatGPT,
}

impl OpenAiBackend {
    pub fn new(chat_gpt: ChatGPT) -> Self {
        Self { chat_gpt }
    }
}

pub(crate) fn prompt_with_schema(request: &CompletionRequest) -> String {
    format!(
        "{}\n\nRespond with JSON only, no prose and no Markdown. The JSON must match this schema:\n{}",
        request.prompt, request.schema
    )
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "ChatGPT"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
        let prompt = prompt_with_schema(request);

        let response: CompletionResponse = self.chat_gpt.send_message(prompt).await?;
        let content = response.message().clone().content;

        log::debug!("Completion: {:?}", content);

        Ok(content)
    }
}
