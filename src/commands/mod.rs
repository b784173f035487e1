//! Command implementations.
//!
//! Each command lives in its own submodule, takes the session context and
//! returns the text to print. [`dispatch`] routes a parsed [`Command`].

mod add;
mod complete;
mod convert;
mod joke;
mod list;
mod news;
mod parse;
mod weather;

pub use add::add;
pub use complete::complete;
pub use convert::convert;
pub use joke::joke;
pub use list::list;
pub use news::news;
pub use parse::{parse, Command, ADD_USAGE, COMPLETE_USAGE, CONVERT_USAGE, WEATHER_USAGE};
pub use weather::weather;

use crate::{render, ConciergeContext};

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Print(String),
    /// Nothing to print (blank input).
    Silent,
    /// Print the farewell and stop.
    Exit(String),
}

pub fn dispatch(ctx: &mut ConciergeContext, command: Command) -> Reply {
    let text = match command {
        Command::Weather { city } => weather(ctx, &city),
        Command::Joke => joke(ctx),
        Command::News { topic } => news(ctx, topic.as_deref()),
        Command::Convert { amount, from, to } => convert(ctx, amount, &from, &to),
        Command::Add { description } => add(ctx, &description),
        Command::List => list(ctx),
        Command::Complete { id } => complete(ctx, &id),
        Command::Help => render::help(),
        Command::Usage(usage) => render::usage(usage),
        Command::Unknown(_) => render::unknown_command(),
        Command::Empty => return Reply::Silent,
        Command::Exit => return Reply::Exit(render::farewell()),
    };
    Reply::Print(text)
}
