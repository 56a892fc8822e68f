//! Command output: pretty JSON by default, compact JSON with `--format raw`,
//! and fixed-column tables with `--format table`.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Cell, TableOptions};

/// A record with a fixed column layout.
pub trait Tabular {
    /// Column headers for list views.
    const COLUMNS: &'static [&'static str];

    /// One list row, in `COLUMNS` order.
    fn row(&self) -> Vec<Cell>;

    /// Fields for the single-record view. Defaults to the list columns.
    fn fields(&self) -> Vec<(&'static str, Cell)> {
        Self::COLUMNS.iter().copied().zip(self.row()).collect()
    }
}

/// Anything a command prints.
pub trait Render: Serialize {
    fn table(&self, options: TableOptions) -> String;
}

impl<T: Tabular + Serialize> Render for Vec<T> {
    fn table(&self, options: TableOptions) -> String {
        if self.is_empty() {
            return String::from("(none)");
        }
        let rows = self.iter().map(Tabular::row).collect::<Vec<_>>();
        table::render_rows(T::COLUMNS, &rows, options)
    }
}

/// Single records print as a field list.
macro_rules! render_as_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::output::Render for $ty {
                fn table(&self, options: $crate::output::table::TableOptions) -> String {
                    $crate::output::table::render_record(
                        &$crate::output::Tabular::fields(self),
                        options,
                    )
                }
            }
        )*
    };
}

mod views;

pub use views::{CustomerCard, Deleted};

/// Render a command result in the requested format.
pub fn render<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(value.table(table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a command result to stdout in the requested format.
pub fn output<T: Render>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}
