//! Colored terminal output helpers.

use std::fmt;

use colored::Colorize;

pub fn info(message: impl fmt::Display) {
    println!("{}", message.to_string().cyan());
}

pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", message.to_string().yellow());
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", message.to_string().red());
}

/// Prints a bold section header with a separator line.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "-".repeat(title.len()));
}
