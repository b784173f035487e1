//! User-facing text for every command result.

use owo_colors::OwoColorize;

use crate::api::{ApiOutcome, Conversion, Headlines, Joke, Provider, Weather};
use crate::context::{StoreError, Task};

pub const COMMAND_SUMMARY: &str =
    "weather <city>, joke, news [topic], convert <amount> <from> <to>, add <task>, list, complete <id>, help, exit";

pub fn banner() -> String {
    format!(
        "{}\nCommands: {}",
        "🌟 Concierge - Your Personal CLI Helper 🌟".bold(),
        COMMAND_SUMMARY
    )
}

pub fn help() -> String {
    let rows = [
        ("weather <city>", "current weather for a city"),
        ("joke", "a random joke"),
        ("news [topic]", "top headlines for a topic"),
        ("convert <amount> <from> <to>", "convert between currencies, e.g. convert 10 usd eur"),
        ("add <task>", "add a task"),
        ("list", "show all tasks"),
        ("complete <id>", "mark a task as done"),
        ("help", "show this help"),
        ("exit", "quit"),
    ];
    let width = rows.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);

    let mut out = format!("{}", "Commands:".bold());
    for (cmd, about) in rows {
        out.push_str(&format!("\n  {}  {}", format!("{:width$}", cmd).cyan(), about));
    }
    out
}

pub fn farewell() -> String {
    "👋 Goodbye!".to_string()
}

pub fn unknown_command() -> String {
    format!("{} Unknown command. Try: {}", "❌".red(), COMMAND_SUMMARY)
}

pub fn usage(usage: &str) -> String {
    format!("{} Usage: {}", "❌".red(), usage.cyan())
}

fn error(message: &str) -> String {
    format!("{} {}", "⚠️ Error:".red().bold(), message)
}

/// Text for the outcomes that carry no payload.
fn failure<T>(provider: Provider, outcome: &ApiOutcome<T>) -> String {
    match outcome {
        ApiOutcome::ConfigMissing => {
            let var = provider.key_var().unwrap_or_default();
            error(&format!(
                "No API key found. Set {} (get one from {}).",
                var.yellow(),
                provider.signup_url().cyan()
            ))
        }
        _ => error(match provider {
            Provider::Weather => "Could not fetch weather data.",
            Provider::Joke => "Could not fetch a joke.",
            Provider::News => "Could not fetch news.",
            Provider::Currency => "Could not convert currency.",
        }),
    }
}

pub fn weather(outcome: &ApiOutcome<Weather>) -> String {
    match outcome {
        ApiOutcome::Success(w) => format!(
            "🌤️ Weather in {}: {:.1}°C, {}",
            w.city.bold(),
            w.temperature,
            capitalize(&w.description)
        ),
        other => failure(Provider::Weather, other),
    }
}

pub fn joke(outcome: &ApiOutcome<Joke>) -> String {
    match outcome {
        ApiOutcome::Success(Joke::Single { joke }) => format!("😂 Joke: {}", joke),
        ApiOutcome::Success(Joke::TwoPart { setup, delivery }) => {
            format!("😂 Joke: {}\n...{}", setup, delivery)
        }
        other => failure(Provider::Joke, other),
    }
}

pub fn news(topic: &str, outcome: &ApiOutcome<Headlines>) -> String {
    match outcome {
        ApiOutcome::Success(headlines) => {
            let mut out = format!("📰 Top news on {}:", headlines.topic.bold());
            for (i, article) in headlines.articles.iter().enumerate() {
                out.push_str(&format!(
                    "\n{}. {} ({})",
                    i + 1,
                    article.title,
                    article.source.dimmed()
                ));
            }
            out
        }
        ApiOutcome::EmptyResult => format!("📰 No news found for '{}'.", topic),
        other => failure(Provider::News, other),
    }
}

pub fn conversion(outcome: &ApiOutcome<Conversion>) -> String {
    match outcome {
        ApiOutcome::Success(c) => format!(
            "💱 {} {} = {} {} (rate: {:.4})",
            c.amount,
            c.from,
            format!("{:.2}", c.converted).bold(),
            c.to,
            c.rate
        ),
        other => failure(Provider::Currency, other),
    }
}

pub fn task_added(task: &Task) -> String {
    format!("✅ Added task #{}: '{}'", task.id, task.description)
}

pub fn task_completed(task: &Task) -> String {
    format!("🎉 Completed task #{}: '{}'", task.id, task.description)
}

pub fn task_not_found(id: u32) -> String {
    format!("{} No task with id {}.", "❌".red(), id.yellow())
}

pub fn invalid_task_id(raw: &str) -> String {
    format!(
        "{} '{}' is not a valid task id. Use the number shown by {}.",
        "❌".red(),
        raw.yellow(),
        "list".cyan()
    )
}

pub fn store_error(err: &StoreError) -> String {
    error(&format!("Could not save tasks: {}", err))
}

pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "📝 No tasks yet!".to_string();
    }

    let mut out = "📝 Your Tasks:".to_string();
    for task in tasks {
        out.push('\n');
        out.push_str(&format_task_line(task));
    }
    out
}

pub fn task_marker(task: &Task) -> String {
    if task.is_complete() {
        "✔".green().to_string()
    } else {
        "○".bright_black().to_string()
    }
}

pub fn format_task_line(task: &Task) -> String {
    let description = if task.is_complete() {
        task.description.bright_black().to_string()
    } else {
        task.description.clone()
    };
    format!(
        "{}. {} {} {}",
        task.id,
        task_marker(task),
        description,
        format!("(added {})", task.created_at).dimmed()
    )
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
