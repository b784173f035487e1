//! Interactive prompt loop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::commands::{self, Reply};
use crate::{render, ConciergeContext};

pub const PROMPT: &str = "> ";

/// Read commands from `input` until `exit` or end of input.
///
/// End of input behaves like `exit`. Only I/O errors on `input` or
/// `output` end the loop early.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut ConciergeContext,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", render::banner())?;

    let mut line = String::new();
    loop {
        write!(output, "\n{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "{}", render::farewell())?;
            return Ok(());
        }

        let command = commands::parse(&line);
        debug!(?command, "dispatching");

        match commands::dispatch(ctx, command) {
            Reply::Print(text) => writeln!(output, "{}", text)?,
            Reply::Silent => {}
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::stub::StubTransport;
    use crate::context::testing;
    use tempfile::TempDir;

    fn strip_ansi(s: &str) -> String {
        let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn session(dir: &std::path::Path, stub: StubTransport, script: &str) -> String {
        let mut ctx = testing::context(dir, testing::all_keys(), stub);
        let mut output = Vec::new();
        run(&mut ctx, script.as_bytes(), &mut output).unwrap();
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_session_until_exit() {
        let temp_dir = TempDir::new().unwrap();
        let stub = StubTransport::new()
            .respond(200, r#"{"type":"twopart","setup":"Why?","delivery":"Because."}"#);

        let out = session(
            temp_dir.path(),
            stub,
            "add Buy milk\n\nlist\njoke\nexit\nadd never reached\n",
        );

        assert!(out.starts_with("🌟 Concierge"));
        assert!(out.contains("✅ Added task #1: 'Buy milk'"));
        assert!(out.contains("1. ○ Buy milk"));
        assert!(out.contains("😂 Joke: Why?\n...Because."));
        assert!(out.trim_end().ends_with("👋 Goodbye!"));
        assert!(!out.contains("never reached"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let temp_dir = TempDir::new().unwrap();
        let out = session(temp_dir.path(), StubTransport::new(), "list");

        assert!(out.contains("📝 No tasks yet!"));
        assert!(out.trim_end().ends_with("👋 Goodbye!"));
    }

    #[test]
    fn test_tasks_survive_restart() {
        let temp_dir = TempDir::new().unwrap();
        session(
            temp_dir.path(),
            StubTransport::new(),
            "add first\nadd second\nadd third\ncomplete 2\nexit\n",
        );

        let out = session(temp_dir.path(), StubTransport::new(), "list\nadd fourth\nexit\n");
        assert!(out.contains("1. ○ first"));
        assert!(out.contains("2. ✔ second"));
        assert!(out.contains("3. ○ third"));
        assert!(out.contains("✅ Added task #4: 'fourth'"));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let temp_dir = TempDir::new().unwrap();
        let out = session(
            temp_dir.path(),
            StubTransport::new().respond(503, ""),
            "weather Paris\nconvert x y\ncomplete 9\nbogus\nlist\nexit\n",
        );

        assert!(out.contains("Could not fetch weather data."));
        assert!(out.contains("Usage: convert"));
        assert!(out.contains("No task with id 9."));
        assert!(out.contains("Unknown command."));
        assert!(out.contains("📝 No tasks yet!"));
        assert!(out.trim_end().ends_with("👋 Goodbye!"));
    }
}
