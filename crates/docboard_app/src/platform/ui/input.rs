use std::collections::BTreeSet;

use docboard_core::{ConfigError, DocumentId, Msg, SortField, StatusFilter};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  refresh                     reload documents
  search <text>               filter by text (empty clears)
  status <all|Received|...>   filter by status tab
  role [label, label, ...]    filter by role labels (empty clears)
  reset                       restore default filters
  sort <field>                sort by id|file_name|type_name|property_name|created_at|status
  page <n>                    go to page n (1-based)
  rows <n>                    rows per page
  dense <on|off>              compact table
  select <id> | select all | select none
  process                     open the processing confirmation
  confirm | cancel            answer the confirmation
  delete <id>                 remove a row locally
  edit <id> | view <id>       open the edit or extracted-data view
  risky <id> | close          inspect risky clauses
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CommandError {
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Parses one input line. Blank lines are a no-op dispatch.
pub(crate) fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msg = match word {
        "" => Msg::NoOp,
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "refresh" => Msg::RefreshRequested,
        "search" => Msg::FilterNameChanged(rest.to_string()),
        "status" => Msg::FilterStatusChanged(rest.parse::<StatusFilter>()?),
        "role" | "roles" => Msg::FilterRolesChanged(parse_roles(rest)),
        "reset" => Msg::FiltersReset,
        "sort" => Msg::SortRequested(rest.parse::<SortField>()?),
        "page" => {
            let page = parse_number("page", "a page number from 1", rest)?;
            if page == 0 {
                return Err(CommandError::BadArgument {
                    command: "page",
                    expected: "a page number from 1",
                });
            }
            Msg::PageChanged(page - 1)
        }
        "rows" => Msg::RowsPerPageChanged(parse_number("rows", "a row count", rest)?),
        "dense" => match rest {
            "on" => Msg::DenseToggled(true),
            "off" => Msg::DenseToggled(false),
            _ => {
                return Err(CommandError::BadArgument {
                    command: "dense",
                    expected: "on or off",
                })
            }
        },
        "select" => match rest {
            "all" => Msg::AllRowsToggled(true),
            "none" => Msg::AllRowsToggled(false),
            _ => Msg::RowToggled(parse_id("select", rest)?),
        },
        "process" => Msg::ProcessConfirmOpened,
        "confirm" => Msg::ProcessConfirmed,
        "cancel" => Msg::ProcessConfirmClosed,
        "delete" => Msg::RowDeleted(parse_id("delete", rest)?),
        "edit" => Msg::EditRequested(parse_id("edit", rest)?),
        "view" => Msg::ExtractedDataRequested(parse_id("view", rest)?),
        "risky" => Msg::RiskyClausesOpened(parse_id("risky", rest)?),
        "close" => Msg::RiskyClausesClosed,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn parse_roles(rest: &str) -> BTreeSet<String> {
    rest.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parse_number(
    command: &'static str,
    expected: &'static str,
    rest: &str,
) -> Result<usize, CommandError> {
    rest.parse()
        .map_err(|_| CommandError::BadArgument { command, expected })
}

fn parse_id(command: &'static str, rest: &str) -> Result<DocumentId, CommandError> {
    rest.parse().map_err(|_| CommandError::BadArgument {
        command,
        expected: "a document id",
    })
}
