//! Selectable language models.

use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// OpenAI models offered to the user, identified by their API name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum Model {
    #[default]
    #[strum(to_string = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[strum(to_string = "gpt-3.5-turbo-instruct")]
    Gpt35TurboInstruct,
    #[strum(to_string = "gpt-4")]
    Gpt4,
    #[strum(to_string = "gpt-4-turbo")]
    Gpt4Turbo,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown model: {0}")]
pub struct UnknownModel(pub String);

impl Model {
    /// API identifier, e.g. `gpt-4-turbo`.
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Button label with a rough cost hint.
    pub fn label(&self) -> &'static str {
        match self {
            Model::Gpt35Turbo => "GPT-3.5 Turbo 💸 very cheap",
            Model::Gpt35TurboInstruct => "GPT-3.5 Instruct 💵 cheap",
            Model::Gpt4 => "GPT-4 💰 expensive",
            Model::Gpt4Turbo => "GPT-4 Turbo 💎 very expensive",
        }
    }

    pub fn all() -> Vec<Model> {
        Model::iter().collect()
    }

    /// Parses an API identifier, trimming whitespace.
    pub fn parse(id: &str) -> Result<Model, UnknownModel> {
        Model::from_str(id.trim()).map_err(|_| UnknownModel(id.trim().to_string()))
    }
}
