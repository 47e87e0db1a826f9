//! Transcript state for the "about me" terminal window.
//!
//! The session is pure; the terminal view drives [`TerminalSession::tick`] from an interval to
//! stream queued lines.

use std::{collections::VecDeque, time::Duration};

/// Delay between streamed transcript lines.
pub const STREAM_INTERVAL: Duration = Duration::from_millis(50);

const BANNER: [&str; 3] = ["Terminal v1.0.0", "Type @me or @about for info", ""];

const ABOUT_SCRIPT: [&str; 27] = [
    "",
    "$ whoami",
    "sakila-lakmal",
    "",
    "$ role",
    "Full Stack Developer / Backend Engineer",
    "",
    "$ about",
    "I am a Computer Science undergraduate (Class of 2027)",
    "focused on backend systems, microservices,",
    "and scalable architectures.",
    "",
    "I build production-grade systems using:",
    "  * Node.js, TypeScript, Express",
    "  * RabbitMQ event-driven microservices",
    "  * SQL Server, PostgreSQL",
    "  * Docker & CI/CD pipelines",
    "",
    "$ interests",
    "  * Backend Engineering",
    "  * DevOps & Infrastructure",
    "  * System Design",
    "  * Distributed Systems",
    "",
    "$ status",
    "Learning. Building. Shipping.",
    "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand<'a> {
    About,
    Empty,
    Unknown(&'a str),
}

impl<'a> TerminalCommand<'a> {
    pub fn parse(input: &'a str) -> Self {
        match input.trim() {
            "@me" | "@about" => Self::About,
            "" => Self::Empty,
            other => Self::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    lines: Vec<String>,
    pending: VecDeque<&'static str>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self {
            lines: BANNER.iter().map(|line| line.to_string()).collect(),
            pending: VecDeque::new(),
        }
    }
}

impl TerminalSession {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_streaming(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Handles one submitted input line. Input is ignored while a script is still streaming.
    ///
    /// Returns `true` when the submission was accepted.
    pub fn submit(&mut self, input: &str) -> bool {
        if self.is_streaming() {
            return false;
        }
        match TerminalCommand::parse(input) {
            TerminalCommand::About => {
                self.lines.push(format!("$ {}", input.trim()));
                self.pending.extend(ABOUT_SCRIPT);
            }
            TerminalCommand::Empty => self.lines.push("$ ".to_string()),
            TerminalCommand::Unknown(command) => {
                self.lines.push(format!("$ {command}"));
                self.lines.push(format!("Command not found: {command}"));
                self.lines.push("Available commands: @me, @about".to_string());
                self.lines.push(String::new());
            }
        }
        true
    }

    /// Moves the next queued line into the transcript. Returns `false` once nothing is queued.
    pub fn tick(&mut self) -> bool {
        match self.pending.pop_front() {
            Some(line) => {
                self.lines.push(line.to_string());
                true
            }
            None => false,
        }
    }
}
