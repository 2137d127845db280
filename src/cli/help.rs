//! Usage text.

/// Usage text printed by `help`.
#[must_use]
pub const fn help_text() -> &'static str {
    r"Usage: newsroom-content <command> [identifier] [flags]

Commands:
  collection <alias>     Get a collection (--id: identifier is a collection id)
  article <slug>         Get a story (--id: identifier is a story id)
  tag <tag_slug>         List stories with a tag
  author <author_slug>   List stories by an author
  stories                List all stories
  section <section_id>   Get a section
  help                   Show this text

Flags:
  -f, --fields <a,b,c>        Attributes to return
  -l, --limit <n>             Page size (list commands)
  -o, --offset <n>            Records to skip (list commands)
      --sort-field <field>    Sort attribute (list commands)
      --sort-direction <dir>  asc or desc (list commands)

Environment:
  CONTENT_CACHE_API_URL      Content API base URL (required)
  CF_ACCESS_CLIENT_ID        Service client id
  CF_ACCESS_CLIENT_SECRET    Service client secret
  CONTENT_API_TIMEOUT_MS     Per-request deadline (default 15000)
  LOG_LEVEL                  Log filter (default info)"
}
