use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, Write};
use thiserror::Error;

use super::render::{self, HELP};
use crate::application::{AppError, BudgetService};
use crate::domain::EntryType;
use crate::io::{ExportFormat, Exporter};

/// A command typed into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Raw fields are passed on untouched; validation happens in the service
    Add {
        entry_type: String,
        amount: String,
        description: String,
    },
    Remove {
        key: String,
    },
    List {
        entry_type: Option<EntryType>,
    },
    Totals,
    Export {
        format: ExportFormat,
        path: Option<String>,
    },
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Unknown command '{0}' (type 'help' for a list of commands)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid argument '{0}'")]
    InvalidArgument(String),
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseCommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "add" | "a" => {
                let entry_type = tokens
                    .next()
                    .ok_or(ParseCommandError::Usage(
                        "add <income|expense> <amount> <description>",
                    ))?
                    .to_string();
                let amount = tokens.next().unwrap_or_default().to_string();
                let description = tokens.collect::<Vec<_>>().join(" ");
                SessionCommand::Add {
                    entry_type,
                    amount,
                    description,
                }
            }
            "rm" | "delete" | "del" => {
                let key = tokens
                    .next()
                    .ok_or(ParseCommandError::Usage("rm <type-id>"))?
                    .to_string();
                SessionCommand::Remove { key }
            }
            "list" | "ls" => {
                let entry_type = match tokens.next() {
                    Some(t) => Some(
                        EntryType::from_str(t)
                            .ok_or_else(|| ParseCommandError::InvalidArgument(t.to_string()))?,
                    ),
                    None => None,
                };
                SessionCommand::List { entry_type }
            }
            "totals" | "balance" => SessionCommand::Totals,
            "export" => {
                let format = tokens
                    .next()
                    .ok_or(ParseCommandError::Usage("export <csv|json> [path]"))?;
                let format = ExportFormat::from_str(format)
                    .ok_or_else(|| ParseCommandError::InvalidArgument(format.to_string()))?;
                let path = tokens.next().map(str::to_string);
                SessionCommand::Export { format, path }
            }
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive budget session: reads commands line by line, drives the
/// [`BudgetService`] and renders results.
pub struct Session<R, W> {
    service: BudgetService,
    input: R,
    output: W,
    assume_yes: bool,
    prompt: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(service: BudgetService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            assume_yes: false,
            prompt: false,
        }
    }

    /// Skip the confirmation before deleting an entry.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Print a "> " prompt before reading each command.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn into_service(self) -> BudgetService {
        self.service
    }

    /// Run until `quit` or end of input.
    ///
    /// Invalid commands and rejected input are reported and the session goes
    /// on; only failures to read input or write output end it with an error.
    pub fn run(&mut self) -> Result<()> {
        self.write_summary()?;

        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }
            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.output, "Error: {}", err)?;
                    continue;
                }
            };

            tracing::debug!(?command, "executing");
            match self.execute(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => match err.downcast_ref::<AppError>() {
                    Some(app_err) => writeln!(self.output, "Error: {}", app_err)?,
                    None => return Err(err),
                },
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Add {
                entry_type,
                amount,
                description,
            } => {
                let entry = self
                    .service
                    .record_entry(&entry_type, &description, &amount)?;
                writeln!(self.output, "Added {}", render::entry_line(&entry))?;
                self.write_summary()?;
            }

            SessionCommand::Remove { key } => {
                // Resolve before asking, so a typo is reported without a prompt
                let entry = self.service.find_by_key(&key)?;
                let question = format!(
                    "Delete {} ({} {})? [y/N] ",
                    entry.key(),
                    entry.description,
                    render::entry_amount(entry)
                );

                if !self.assume_yes && !self.confirm(&question)? {
                    writeln!(self.output, "Cancelled")?;
                    return Ok(Flow::Continue);
                }

                let removed = self.service.remove_by_key(&key)?;
                writeln!(self.output, "Removed {}", removed.key())?;
                self.write_summary()?;
            }

            SessionCommand::List { entry_type } => {
                let types = match entry_type {
                    Some(t) => vec![t],
                    None => EntryType::ALL.to_vec(),
                };
                for (i, t) in types.into_iter().enumerate() {
                    if i > 0 {
                        writeln!(self.output)?;
                    }
                    render::write_list(
                        &mut self.output,
                        t,
                        self.service.list_entries(Some(t)),
                    )?;
                }
            }

            SessionCommand::Totals => self.write_summary()?,

            SessionCommand::Export { format, path } => self.export(format, path.as_deref())?,

            SessionCommand::Help => writeln!(self.output, "{}", HELP)?,

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn export(&mut self, format: ExportFormat, path: Option<&str>) -> Result<()> {
        let exporter = Exporter::new(&self.service);

        let Some(path) = path else {
            match format {
                ExportFormat::Csv => {
                    exporter
                        .export_entries_csv(&mut self.output)
                        .map_err(AppError::Export)?;
                }
                ExportFormat::Json => {
                    exporter
                        .export_snapshot_json(&mut self.output)
                        .map_err(AppError::Export)?;
                }
            }
            return Ok(());
        };

        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))
            .map_err(AppError::Export)?;

        let count = match format {
            ExportFormat::Csv => exporter.export_entries_csv(file),
            ExportFormat::Json => exporter
                .export_snapshot_json(file)
                .map(|snapshot| snapshot.entries.len()),
        }
        .map_err(AppError::Export)?;

        writeln!(
            self.output,
            "Exported {} entries as {} to {}",
            count,
            format.as_str(),
            path
        )?;
        Ok(())
    }

    fn write_summary(&mut self) -> Result<()> {
        render::write_summary(&mut self.output, &self.service.summary())?;
        Ok(())
    }

    /// Ask a yes/no question; anything but "y"/"yes" (or end of input) is no.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let answer = self.read_line()?;
        if !self.prompt {
            // Keep the transcript readable when input is not echoed
            writeln!(self.output)?;
        }
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
