//! Command definitions and argument parsing.

use super::errors::CommandParseError;
use crate::content::{
    ArticleBy, CollectionBy, FieldSelection, ListOptions, SortDirection,
};

/// Content queries runnable from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentCommand {
    /// Get a collection.
    Collection {
        /// Alias or id.
        identifier: String,
        /// Which of the two `identifier` is.
        by: CollectionBy,
        /// Field selection.
        fields: Option<FieldSelection>,
    },

    /// Get a story.
    Article {
        /// Slug or id.
        identifier: String,
        /// Which of the two `identifier` is.
        by: ArticleBy,
        /// Field selection.
        fields: Option<FieldSelection>,
    },

    /// List stories with a tag.
    Tag {
        /// Tag slug.
        slug: String,
        /// List options.
        options: ListOptions,
    },

    /// List stories by an author.
    Author {
        /// Author slug.
        slug: String,
        /// List options.
        options: ListOptions,
    },

    /// List all stories.
    Stories {
        /// List options.
        options: ListOptions,
    },

    /// Get a section.
    Section {
        /// Section id.
        id: String,
        /// Field selection.
        fields: Option<FieldSelection>,
    },

    /// Print usage.
    Help,
}

/// Flags after the command name, before validation against the command.
#[derive(Debug, Default)]
struct Flags {
    positional: Option<String>,
    by_id: bool,
    fields: Option<FieldSelection>,
    options: ListOptions,
    list_flag: Option<String>,
}

impl Flags {
    fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        let mut flags = Self::default();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--id" => flags.by_id = true,
                "--fields" | "-f" => {
                    let value = flag_value(args, &mut i, "--fields")?;
                    flags.fields = Some(value.split(',').collect());
                }
                "--limit" | "-l" => {
                    let value = flag_value(args, &mut i, "--limit")?;
                    flags.options.pagination.limit = Some(parse_number("--limit", value)?);
                    flags.list_flag.get_or_insert_with(|| "--limit".into());
                }
                "--offset" | "-o" => {
                    let value = flag_value(args, &mut i, "--offset")?;
                    flags.options.pagination.offset = Some(parse_number("--offset", value)?);
                    flags.list_flag.get_or_insert_with(|| "--offset".into());
                }
                "--sort-field" => {
                    let value = flag_value(args, &mut i, "--sort-field")?;
                    flags.options.sort.sort_field = Some(value.to_string());
                    flags.list_flag.get_or_insert_with(|| "--sort-field".into());
                }
                "--sort-direction" => {
                    let value = flag_value(args, &mut i, "--sort-direction")?;
                    flags.options.sort.sort_direction = Some(parse_direction(value)?);
                    flags.list_flag.get_or_insert_with(|| "--sort-direction".into());
                }
                _ if arg.starts_with('-') => {
                    return Err(CommandParseError::UnknownFlag(arg.to_string()));
                }
                _ if flags.positional.is_none() => flags.positional = Some(arg.to_string()),
                _ => return Err(CommandParseError::UnknownFlag(arg.to_string())),
            }
            i += 1;
        }

        flags.options.fields.clone_from(&flags.fields);
        Ok(flags)
    }

    fn required(&mut self, name: &str) -> Result<String, CommandParseError> {
        self.positional
            .take()
            .ok_or_else(|| CommandParseError::MissingValue(name.into()))
    }

    fn reject_id(&self, command: &str) -> Result<(), CommandParseError> {
        if self.by_id {
            return Err(unsupported(command, "--id"));
        }
        Ok(())
    }

    fn reject_list_options(&self, command: &str) -> Result<(), CommandParseError> {
        match &self.list_flag {
            Some(flag) => Err(unsupported(command, flag)),
            None => Ok(()),
        }
    }
}

fn unsupported(command: &str, flag: &str) -> CommandParseError {
    CommandParseError::UnsupportedFlag {
        command: command.into(),
        flag: flag.into(),
    }
}

fn flag_value<'a>(
    args: &'a [String],
    i: &mut usize,
    flag: &str,
) -> Result<&'a str, CommandParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| CommandParseError::MissingValue(flag.into()))
}

fn parse_number(flag: &str, value: &str) -> Result<u32, CommandParseError> {
    value.parse().map_err(|_| CommandParseError::InvalidValue {
        flag: flag.into(),
        value: value.into(),
    })
}

fn parse_direction(value: &str) -> Result<SortDirection, CommandParseError> {
    match value.to_lowercase().as_str() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        _ => Err(CommandParseError::InvalidValue {
            flag: "--sort-direction".into(),
            value: value.into(),
        }),
    }
}

impl ContentCommand {
    /// Parse a command from string arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] for an unknown command or flag, a
    /// missing identifier, or an unparsable flag value.
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        let Some(first) = args.first() else {
            return Err(CommandParseError::MissingCommand);
        };

        let cmd = first.to_lowercase();
        if matches!(cmd.as_str(), "help" | "--help" | "-h") {
            return Ok(Self::Help);
        }

        let mut flags = Flags::parse(&args[1..])?;
        match cmd.as_str() {
            "collection" => {
                flags.reject_list_options(&cmd)?;
                Ok(Self::Collection {
                    identifier: flags.required("identifier")?,
                    by: if flags.by_id {
                        CollectionBy::Id
                    } else {
                        CollectionBy::Alias
                    },
                    fields: flags.fields,
                })
            }

            "article" | "story" => {
                flags.reject_list_options(&cmd)?;
                Ok(Self::Article {
                    identifier: flags.required("identifier")?,
                    by: if flags.by_id {
                        ArticleBy::Id
                    } else {
                        ArticleBy::Slug
                    },
                    fields: flags.fields,
                })
            }

            "tag" => {
                flags.reject_id(&cmd)?;
                Ok(Self::Tag {
                    slug: flags.required("tag_slug")?,
                    options: flags.options,
                })
            }

            "author" => {
                flags.reject_id(&cmd)?;
                Ok(Self::Author {
                    slug: flags.required("author_slug")?,
                    options: flags.options,
                })
            }

            "stories" => {
                flags.reject_id(&cmd)?;
                if let Some(extra) = flags.positional {
                    return Err(CommandParseError::UnknownFlag(extra));
                }
                Ok(Self::Stories {
                    options: flags.options,
                })
            }

            "section" => {
                flags.reject_id(&cmd)?;
                flags.reject_list_options(&cmd)?;
                Ok(Self::Section {
                    id: flags.required("section_id")?,
                    fields: flags.fields,
                })
            }

            _ => Err(CommandParseError::UnknownCommand(cmd)),
        }
    }
}
