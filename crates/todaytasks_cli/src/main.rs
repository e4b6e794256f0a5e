//! Terminal driver for the today's-tasks screen.
//!
//! # Responsibility
//! - Verify `todaytasks_core` linkage without a Flutter runtime.
//! - Drive one `TaskScreen` from stdin for manual rule checks.
//!
//! Environment:
//! - `TODAYTASKS_LOG_DIR`: absolute directory for rolling logs (optional).
//! - `TODAYTASKS_RULES_PATH`: JSON rules document (optional).
//!
//! Input lines: `:done N` removes item N, `:list` prints the list,
//! `:quit` exits; any other line is submitted as a task.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use todaytasks_core::{
    core_version, default_log_level, init_logging, ping, InMemoryTaskStore, SubmitOutcome,
    TaskScreen, TaskScreenCallbacks, TaskService, TaskValidator, ValidationRules, SECTION_TITLE,
};

const LOG_DIR_ENV: &str = "TODAYTASKS_LOG_DIR";
const RULES_PATH_ENV: &str = "TODAYTASKS_RULES_PATH";

fn main() -> ExitCode {
    // Why: keep a terminal driver to exercise core wiring without a Flutter runtime.
    println!("todaytasks_core ping={}", ping());
    println!("todaytasks_core version={}", core_version());

    if let Some(log_dir) = non_empty_env(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let validator = match load_validator() {
        Ok(validator) => validator,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut screen = TaskScreen::new(
        TaskService::new(InMemoryTaskStore::new(), validator),
        TaskScreenCallbacks {
            on_refresh: Box::new(|tasks: &[String]| print_tasks(tasks)),
            on_error: Box::new(|title: &str, message: &str| eprintln!("{title}: {message}")),
        },
    );

    match run(&mut screen) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stdin error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(screen: &mut TaskScreen<InMemoryTaskStore>) -> io::Result<()> {
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        // Why: every line goes through `TaskScreen` as typed, so manual runs hit
        // the same trim and validation path as the app's input field.
        match parse_command(&line) {
            Command::Quit => break,
            Command::List => print_tasks(&screen.tasks()),
            Command::Done(Some(position)) => {
                if let Err(err) = screen.tap(position - 1) {
                    eprintln!("{err}");
                }
            }
            Command::Done(None) => eprintln!("usage: :done <number from the list>"),
            Command::Submit(text) => {
                screen.set_input(text);
                if let SubmitOutcome::Added(text) = screen.submit() {
                    println!("added: {text}");
                }
            }
        }
        prompt()?;
    }
    Ok(())
}

enum Command<'a> {
    Quit,
    List,
    /// 1-based position as printed by `print_tasks`.
    Done(Option<usize>),
    Submit(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        ":quit" | ":q" => Command::Quit,
        ":list" | ":ls" => Command::List,
        other => match other.strip_prefix(":done") {
            Some(rest) => Command::Done(rest.trim().parse::<usize>().ok().filter(|n| *n > 0)),
            None => Command::Submit(line),
        },
    }
}

fn load_validator() -> Result<TaskValidator, String> {
    let Some(path) = non_empty_env(RULES_PATH_ENV) else {
        return Ok(TaskValidator::default());
    };
    let json = std::fs::read_to_string(&path)
        .map_err(|err| format!("failed to read rules `{path}`: {err}"))?;
    ValidationRules::from_json(&json)
        .and_then(TaskValidator::new)
        .map_err(|err| format!("invalid rules `{path}`: {err}"))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn print_tasks(tasks: &[String]) {
    println!("{SECTION_TITLE}");
    if tasks.is_empty() {
        println!("  (none)");
    }
    for (position, task) in tasks.iter().enumerate() {
        println!("  {}. {task}", position + 1);
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};

    #[test]
    fn parse_command_recognizes_controls() {
        assert!(matches!(parse_command(" :quit "), Command::Quit));
        assert!(matches!(parse_command(":list"), Command::List));
        assert!(matches!(parse_command(":done 2"), Command::Done(Some(2))));
        assert!(matches!(parse_command(":done 0"), Command::Done(None)));
        assert!(matches!(parse_command(":done x"), Command::Done(None)));
    }

    #[test]
    fn other_lines_are_submitted_untrimmed() {
        assert!(matches!(parse_command("  Buy milk "), Command::Submit("  Buy milk ")));
    }
}
