mod commands;
mod print;
mod setup;
mod words;

pub use commands::run;
