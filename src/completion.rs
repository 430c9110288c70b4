use anyhow::Result;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::info;

use crate::config::AppConfig;

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

/// One message of the prompt sent to the completion API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptMessage {
    System(String),
    User(String),
    Assistant(String),
}

/// A hosted language model answering a full conversation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Text of the first choice, `None` when the model returned no content.
    async fn complete(&self, messages: Vec<PromptMessage>) -> Result<Option<String>>;
}

/// OpenAI-compatible endpoint (Groq by default) with fixed sampling parameters.
pub struct GroqCompletion {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqCompletion {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::with_config(
            OpenAIConfig::new()
                .with_api_key(config.completion_api_key.clone())
                .with_api_base(config.completion_api_base.clone()),
        );

        Self {
            client,
            model: config.completion_model.clone(),
        }
    }
}

fn to_request_message(message: PromptMessage) -> Result<ChatCompletionRequestMessage> {
    let message = match message {
        PromptMessage::System(content) => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        PromptMessage::User(content) => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        PromptMessage::Assistant(content) => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(message)
}

#[async_trait]
impl CompletionClient for GroqCompletion {
    async fn complete(&self, messages: Vec<PromptMessage>) -> Result<Option<String>> {
        let message_count = messages.len();
        let messages = messages
            .into_iter()
            .map(to_request_message)
            .collect::<Result<Vec<_>>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .messages(messages)
            .build()?;

        info!(
            "Requesting completion from {} with {} messages",
            self.model, message_count
        );

        let response = self.client.chat().create(request).await?;

        if let Some(choice) = response.choices.first() {
            info!("Chat completion finished with reason: {:?}", choice.finish_reason);
        }

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_messages_map_to_matching_roles() {
        let system = to_request_message(PromptMessage::System("be kind".into())).unwrap();
        let user = to_request_message(PromptMessage::User("hi".into())).unwrap();
        let assistant = to_request_message(PromptMessage::Assistant("hello".into())).unwrap();

        assert!(matches!(system, ChatCompletionRequestMessage::System(_)));
        assert!(matches!(user, ChatCompletionRequestMessage::User(_)));
        assert!(matches!(assistant, ChatCompletionRequestMessage::Assistant(_)));
    }
}
