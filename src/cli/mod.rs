//! Command-line front end.
//!
//! Parses a content query from the argument list, runs it against any
//! [`ContentSource`], and returns the `{data, meta}` result for printing.

mod commands;
mod errors;
mod help;


pub use commands::ContentCommand;
pub use errors::CommandParseError;
pub use help::help_text;

use serde::Serialize;

use crate::content::ApiResponse;
use crate::error::ApiError;
use crate::model::{Article, Collection, Section};
use crate::traits::ContentSource;

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// A collection.
    Collection(ApiResponse<Collection>),
    /// A single story.
    Article(ApiResponse<Article>),
    /// A list of stories.
    Articles(ApiResponse<Vec<Article>>),
    /// A section.
    Section(ApiResponse<Section>),
    /// Usage text.
    Help(&'static str),
}

/// Run `command` against `source`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] of the underlying query.
pub async fn execute(
    source: &impl ContentSource,
    command: ContentCommand,
) -> Result<CommandOutput, ApiError> {
    tracing::debug!(?command, "Executing command");

    let output = match command {
        ContentCommand::Collection {
            identifier,
            by,
            fields,
        } => CommandOutput::Collection(source.get_collection(&identifier, by, fields).await?),
        ContentCommand::Article {
            identifier,
            by,
            fields,
        } => CommandOutput::Article(source.get_article(&identifier, by, fields).await?),
        ContentCommand::Tag { slug, options } => {
            CommandOutput::Articles(source.list_articles_by_tag(&slug, options).await?)
        }
        ContentCommand::Author { slug, options } => {
            CommandOutput::Articles(source.list_articles_by_author(&slug, options).await?)
        }
        ContentCommand::Stories { options } => {
            CommandOutput::Articles(source.list_stories(options).await?)
        }
        ContentCommand::Section { id, fields } => {
            CommandOutput::Section(source.get_section(&id, fields).await?)
        }
        ContentCommand::Help => CommandOutput::Help(help_text()),
    };

    Ok(output)
}
