use std::str::FromStr;

use crate::AppError;

/// 终端交互命令，一行一条
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Add(String),
    Remove(String),
    List,
    Methods,
    Method(String),
    Draw,
    Reveal,
    RevealAll,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <name>      add a participant
  remove <name>   remove a participant
  list            show participants
  methods         show available draw methods
  method <key>    select a draw method
  draw            draw pairings (replaces the previous draw)
  reveal          reveal the next pairing
  reveal-all      reveal every remaining pairing
  status          show the session state
  help            show this help
  quit            leave
";

impl FromStr for ConsoleCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |what: &str| {
            if arg.is_empty() {
                Err(AppError::InvalidCommand(format!("`{verb}` needs {what}")))
            } else {
                Ok(arg.to_string())
            }
        };
        let no_arg = |command: ConsoleCommand| {
            if arg.is_empty() {
                Ok(command)
            } else {
                Err(AppError::InvalidCommand(format!(
                    "`{verb}` takes no argument"
                )))
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            // 空名字交给名单校验，返回 EmptyName
            "add" => Ok(ConsoleCommand::Add(arg.to_string())),
            "remove" | "rm" => needs_arg("a name").map(ConsoleCommand::Remove),
            "method" => needs_arg("a method key").map(ConsoleCommand::Method),
            "list" | "ls" => no_arg(ConsoleCommand::List),
            "methods" => no_arg(ConsoleCommand::Methods),
            "draw" => no_arg(ConsoleCommand::Draw),
            "reveal" | "next" => no_arg(ConsoleCommand::Reveal),
            "reveal-all" => no_arg(ConsoleCommand::RevealAll),
            "status" => no_arg(ConsoleCommand::Status),
            "help" | "?" => no_arg(ConsoleCommand::Help),
            "quit" | "exit" => no_arg(ConsoleCommand::Quit),
            _ => Err(AppError::InvalidCommand(format!(
                "unknown command `{verb}`, type `help`"
            ))),
        }
    }
}
