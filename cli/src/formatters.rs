use serde::{Serialize, Serializer};
use serde_json::Value;
use std::{fmt::Display, io::Write};
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// A command result that can be shown either as a table or as JSON.
///
/// Both forms carry the same fields. The heading is printed above the table
/// only; anything in it a script may need (such as a total count) must also
/// be a serialized field. A result without a table prints its heading alone.
pub trait Renderable: Serialize {
    fn heading(&self) -> Option<String> {
        None
    }

    fn table(&self) -> Option<Table> {
        None
    }
}

/// A one-line outcome: plain text in table form, a small object in JSON.
#[derive(Debug)]
pub struct Notice {
    message: String,
    json: Value,
}

impl Notice {
    pub fn new<M: Into<String>>(message: M, json: Value) -> Self {
        Notice {
            message: message.into(),
            json,
        }
    }
}

impl Serialize for Notice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json.serialize(serializer)
    }
}

impl Renderable for Notice {
    fn heading(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

/// One row of a single-record TITLE/DETAILS table.
#[derive(Tabled)]
pub struct DetailRow {
    #[tabled(rename = "TITLE")]
    pub title: &'static str,
    #[tabled(rename = "DETAILS")]
    pub details: String,
}

/// Table cell for optional API fields.
pub fn display_option<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

pub fn render<R: Renderable, W: Write>(
    out: &mut W,
    format: OutputFormat,
    value: &R,
) -> eyre::Result<()> {
    match format {
        OutputFormat::Table => match value.table() {
            Some(mut table) => {
                if let Some(heading) = value.heading() {
                    writeln!(out, "{}", console::style(heading).bold())?;
                }
                table.with(Style::psql().remove_horizontals());
                writeln!(out, "{table}")?;
            }
            None => {
                if let Some(heading) = value.heading() {
                    writeln!(out, "{heading}")?;
                }
            }
        },
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
        }
    }

    Ok(())
}
