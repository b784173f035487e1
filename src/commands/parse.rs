//! Turning an input line into a [`Command`].
//!
//! The first word is the keyword and is matched case-insensitively. The
//! rest of the line, trimmed, is the argument text and keeps its case, so a
//! city or task description may contain spaces.
//!
//! Only the keyword is lowercased. Argument text is never case-normalized
//! here: `add Call Mom` stores "Call Mom" and `news AI` searches for "AI".

pub const WEATHER_USAGE: &str = "weather <city>";
pub const CONVERT_USAGE: &str = "convert <amount> <from> <to>  (e.g. convert 10 usd eur)";
pub const ADD_USAGE: &str = "add <task>";
pub const COMPLETE_USAGE: &str = "complete <id>";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Weather { city: String },
    Joke,
    News { topic: Option<String> },
    Convert { amount: f64, from: String, to: String },
    Add { description: String },
    List,
    /// Raw id text; the store decides whether it is valid.
    Complete { id: String },
    Help,
    Exit,
    /// Blank line.
    Empty,
    /// A known keyword with missing or malformed arguments.
    Usage(&'static str),
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_lowercase().as_str() {
        "weather" if rest.is_empty() => Command::Usage(WEATHER_USAGE),
        "weather" => Command::Weather {
            city: rest.to_string(),
        },
        "joke" if rest.is_empty() => Command::Joke,
        "news" => Command::News {
            topic: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "convert" => parse_convert(rest),
        "add" if rest.is_empty() => Command::Usage(ADD_USAGE),
        "add" => Command::Add {
            description: rest.to_string(),
        },
        "list" if rest.is_empty() => Command::List,
        "complete" if rest.is_empty() => Command::Usage(COMPLETE_USAGE),
        "complete" => Command::Complete {
            id: rest.to_string(),
        },
        "help" if rest.is_empty() => Command::Help,
        "exit" if rest.is_empty() => Command::Exit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn parse_convert(args: &str) -> Command {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let [amount, from, to] = tokens.as_slice() else {
        return Command::Usage(CONVERT_USAGE);
    };

    match amount.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Command::Convert {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        },
        _ => Command::Usage(CONVERT_USAGE),
    }
}
