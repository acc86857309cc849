use clap::{Parser, Subcommand};
use projboard::model::ProjectStatus;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "projboard", bin_name = "projboard", version)]
#[command(
    about = "A reactive project board for the terminal",
    long_about = "Reads board commands from stdin (or --script) and redraws the \
                  project lists whenever they change. Type `help` in a session \
                  for the list of board commands."
)]
pub struct Cli {
    /// Path to a projboard.json with form rules
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read board commands from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of a board session.
#[derive(Parser, Debug)]
#[command(
    name = "board",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct BoardLine {
    #[command(subcommand)]
    pub command: BoardCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum BoardCommand {
    /// Fill in the whole form and submit it
    #[command(alias = "n")]
    Add {
        title: String,
        description: String,
        /// Number of people (1 to 5 with the default rules)
        #[arg(allow_hyphen_values = true)]
        people: String,
    },

    /// Set the form's title
    Title {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the form's description
    Description {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the form's number of people
    People {
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Submit the form
    Submit,

    /// Clear the form
    Clear,

    /// Drag a project onto the active or finished list
    #[command(alias = "drop")]
    Move {
        /// Project id, id prefix or exact title
        project: String,
        /// Target list: active or finished
        status: ProjectStatus,
    },

    /// List projects
    #[command(alias = "ls")]
    List {
        /// Only projects with this status
        #[arg(short, long)]
        status: Option<ProjectStatus>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the whole board
    #[command(alias = "show")]
    Board,

    /// Show the active form rules
    Config,

    /// Show board commands
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
