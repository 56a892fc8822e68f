//! Plain-text tables for `--format table`.
//!
//! Widths are counted in characters, not bytes, so names like "João" or
//! "Conceição" stay aligned. Color is applied after padding.

const MIN_WIDTH: usize = 4;
const GAP: &str = "  ";

/// Layout options for [`render_rows`] and [`render_record`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Highlight for a cell when color is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Needs attention: unresolved urgent entries, overdue reminders.
    Alert,
    /// Finished: completed reminders, viewed entries.
    Done,
    /// Relationship labels and other secondary markers.
    Info,
    /// Placeholders for missing values.
    Muted,
}

impl Tone {
    const fn ansi(self) -> &'static str {
        match self {
            Self::Alert => "31",
            Self::Done => "32",
            Self::Info => "36",
            Self::Muted => "2",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// One table cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    text: String,
    align: Align,
    tone: Option<Tone>,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            align: Align::Left,
            tone: None,
        }
    }

    /// An optional value; absent shows as a muted `-`.
    pub fn opt(value: Option<&str>) -> Self {
        value.map_or_else(Self::empty, Self::text)
    }

    pub fn empty() -> Self {
        Self::text("-").tone(Tone::Muted)
    }

    /// A money amount, right-aligned with two decimals.
    pub fn amount(value: f64) -> Self {
        Self {
            text: format!("{value:.2}"),
            align: Align::Right,
            tone: None,
        }
    }

    /// `label` when `set`, a muted `-` otherwise.
    pub fn flag(set: bool, label: &str, tone: Tone) -> Self {
        if set {
            Self::text(label).tone(tone)
        } else {
            Self::empty()
        }
    }

    #[must_use]
    pub const fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Render rows under a header line and a divider.
#[must_use]
pub fn render_rows(columns: &[&str], rows: &[Vec<Cell>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| char_len(&cell.text))
                .chain(std::iter::once(char_len(column)))
                .max()
                .unwrap_or(0)
        })
        .collect();
    fit_widths(&mut widths, options.max_width);

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(&truncate(column, *width), *width, Align::Left))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(char_len(header.trim_end()));

    let mut lines = vec![header.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).cloned().unwrap_or_else(Cell::empty);
                draw(&cell, *width, options.color)
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Render one record as `field  value` lines.
#[must_use]
pub fn render_record(fields: &[(&str, Cell)], options: TableOptions) -> String {
    let label_width = fields
        .iter()
        .map(|(label, _)| char_len(label))
        .max()
        .unwrap_or(0);
    let value_width = options
        .max_width
        .map(|max| max.saturating_sub(label_width + GAP.len()).max(MIN_WIDTH));

    fields
        .iter()
        .map(|(label, cell)| {
            let full = char_len(&cell.text);
            let width = value_width.map_or(full, |w| w.min(full));
            let value = draw(
                &Cell {
                    align: Align::Left,
                    ..cell.clone()
                },
                width,
                options.color,
            );
            format!("{}{GAP}{value}", pad(label, label_width, Align::Left))
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw(cell: &Cell, width: usize, color: bool) -> String {
    let padded = pad(&truncate(&cell.text, width), width, cell.align);
    match cell.tone {
        Some(tone) if color => format!("\u{1b}[{}m{padded}\u{1b}[0m", tone.ansi()),
        _ => padded,
    }
}

/// Shrink the widest columns until the line fits `max_width`.
fn fit_widths(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_WIDTH)
            .max_by_key(|width| **width)
        else {
            return;
        };
        *widest -= 1;
    }
}

fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(char_len(text)));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn accented_names_stay_aligned() {
        let rows = vec![
            vec![Cell::text("João"), Cell::text("conjuge")],
            vec![Cell::text("Maria da Conceição"), Cell::text("pai")],
        ];
        let out = render_rows(&["name", "relationship"], &rows, PLAIN);
        let lines: Vec<&str> = out.lines().collect();

        let column = |line: &str, needle: &str| {
            line.find(needle)
                .map(|byte| line[..byte].chars().count())
        };
        assert_eq!(column(lines[0], "relationship"), column(lines[2], "conjuge"));
        assert_eq!(column(lines[2], "conjuge"), column(lines[3], "pai"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn amounts_are_right_aligned() {
        let rows = vec![vec![Cell::amount(5.0)], vec![Cell::amount(1250.5)]];
        let out = render_rows(&["amount"], &rows, PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "   5.00");
        assert_eq!(lines[3], "1250.50");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            Cell::text("his-0001"),
            Cell::text("Pedido de certidão de domicílio fiscal"),
        ]];
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let out = render_rows(&["id", "occurrence"], &rows, options);
        for line in out.lines() {
            assert!(line.chars().count() <= 30, "{line}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn tones_color_only_when_enabled() {
        let rows = vec![vec![Cell::flag(true, "urgent", Tone::Alert), Cell::empty()]];
        let colored = render_rows(
            &["urgent", "viewed"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(colored.contains("\u{1b}[31murgent"));
        assert!(!render_rows(&["urgent", "viewed"], &rows, PLAIN).contains('\u{1b}'));
    }

    #[test]
    fn record_lists_fields_with_placeholders() {
        let out = render_record(
            &[("name", Cell::text("Maria")), ("email", Cell::opt(None))],
            PLAIN,
        );
        assert_eq!(out, "name   Maria\nemail  -");
    }
}
