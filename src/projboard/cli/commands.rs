//! # CLI Layer
//!
//! This module is **one possible UI client** for projboard. It plays the role
//! of the page: it builds one [`BoardApi`] at startup, feeds it board
//! commands line by line, and redraws whatever re-rendered.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Installs the tracing subscriber
//!
//! ## Error Handling
//!
//! A rejected form shows the `Invalid input` alert and the session goes on.
//! A malformed line prints clap's message and the session goes on. Anything
//! else (unreadable input, a broken config file) ends the process with an
//! error.

use super::print::{
    print_alert, print_config, print_messages, print_projects, print_rendered,
};
use super::setup::{BoardCommand, BoardLine, Cli};
use super::words::split_words;
use clap::{CommandFactory, Parser};
use projboard::api::BoardApi;
use projboard::commands::{CmdMessage, CmdResult};
use projboard::config::BoardConfig;
use projboard::error::{BoardError, Result};
use projboard::model::ProjectStatus;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

const PROMPT: &str = "projboard> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;
    let mut api = BoardApi::new(config);

    match &cli.script {
        Some(path) => {
            let file = File::open(path)?;
            run_session(&mut api, BufReader::new(file), false)
        }
        None => {
            let interactive = io::stdin().is_terminal() && console::user_attended();
            run_session(&mut api, io::stdin().lock(), interactive)
        }
    }
}

fn init_logging(verbose: bool) {
    let directive = if verbose {
        "projboard=debug"
    } else {
        "projboard=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    match path {
        Some(path) if !path.exists() => Err(BoardError::Config(format!(
            "config file not found: {}",
            path.display()
        ))),
        Some(path) => BoardConfig::load(path),
        None => match BoardConfig::default_path() {
            Some(path) => BoardConfig::load(path),
            None => Ok(BoardConfig::default()),
        },
    }
}

fn run_session<R: BufRead>(api: &mut BoardApi, mut reader: R, interactive: bool) -> Result<()> {
    if interactive {
        print_rendered(&api.render_board());
        println!();
        println!("Type `help` for board commands, `quit` to leave.");
    }

    let mut line = String::new();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if handle_line(api, &line)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn handle_line(api: &mut BoardApi, line: &str) -> Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let words = match split_words(line) {
        Ok(words) => words,
        Err(e) => {
            print_alert(&e.to_string());
            return Ok(Flow::Continue);
        }
    };

    let command = match BoardLine::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            e.print()?;
            return Ok(Flow::Continue);
        }
    };

    let flow = dispatch(api, command)?;
    for text in api.take_rerendered() {
        println!();
        print_rendered(&text);
    }
    Ok(flow)
}

fn dispatch(api: &mut BoardApi, command: BoardCommand) -> Result<Flow> {
    match command {
        BoardCommand::Add {
            title,
            description,
            people,
        } => handle_submit(api.submit_project(title, description, people))?,
        BoardCommand::Title { words } => api.set_title(words.join(" ")),
        BoardCommand::Description { words } => api.set_description(words.join(" ")),
        BoardCommand::People { value } => api.set_people(value.unwrap_or_default()),
        BoardCommand::Submit => handle_submit(api.submit())?,
        BoardCommand::Clear => api.clear_form(),
        BoardCommand::Move { project, status } => handle_move(api, &project, status)?,
        BoardCommand::List { status, json } => handle_list(api, status, json)?,
        BoardCommand::Board => print_rendered(&api.render_board()),
        BoardCommand::Config => print_config(api.config()),
        BoardCommand::Help => BoardLine::command().print_help()?,
        BoardCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_submit(submitted: Result<CmdResult>) -> Result<()> {
    match submitted {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(BoardError::InvalidInput) => {
            print_alert(&BoardError::InvalidInput.to_string());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_move(api: &mut BoardApi, selector: &str, status: ProjectStatus) -> Result<()> {
    let Some(id) = api.resolve_project(selector) else {
        print_messages(&[CmdMessage::warning(format!(
            "No project matches '{}'",
            selector
        ))]);
        return Ok(());
    };

    let result = api.move_project(&id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &BoardApi, status: Option<ProjectStatus>, json: bool) -> Result<()> {
    let result = api.list_projects(status)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_projects)?);
    } else {
        print_projects(&result.listed_projects);
    }
    print_messages(&result.messages);
    Ok(())
}
