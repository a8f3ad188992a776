use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL_CONDENSED,
};

use crate::core::{Category, TokenCredit, UsageBreakdown};
use crate::output::format::{NumberFormat, format_number};

#[derive(Debug, Clone, Copy)]
pub(crate) struct BreakdownTableOptions<'a> {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
    /// Model name shown in the title, if known
    pub(crate) model: Option<&'a str>,
}

/// Text styling shared by every cell of one row
#[derive(Debug, Clone, Copy)]
struct RowStyle {
    color: Option<Color>,
    bold: bool,
}

impl RowStyle {
    fn header(use_color: bool) -> Self {
        RowStyle {
            color: use_color.then_some(Color::Cyan),
            bold: true,
        }
    }

    /// Totals are bold; color marks totals and reasoning output
    fn for_category(category: Category, use_color: bool) -> Self {
        let color = match category {
            Category::TotalTokens => Some(Color::Yellow),
            Category::TotalInputTokens | Category::TotalOutputTokens => Some(Color::Green),
            Category::OutputReasoning => Some(Color::Magenta),
            _ => None,
        };
        RowStyle {
            color: color.filter(|_| use_color),
            bold: category.is_total(),
        }
    }

    fn cell(self, text: &str, alignment: CellAlignment) -> Cell {
        let mut cell = Cell::new(text).set_alignment(alignment);
        if let Some(color) = self.color {
            cell = cell.fg(color);
        }
        if self.bold {
            cell = cell.add_attribute(Attribute::Bold);
        }
        cell
    }

    fn number(self, n: i64, fmt: NumberFormat) -> Cell {
        self.cell(&format_number(n, fmt), CellAlignment::Right)
    }
}

fn build_header(opts: &BreakdownTableOptions<'_>) -> Vec<Cell> {
    let style = RowStyle::header(opts.use_color);
    let titles: &[&str] = if opts.compact {
        &["Part", "Credit"]
    } else {
        &["Category", "Tokens", "Credit"]
    };
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let alignment = if i == 0 {
                CellAlignment::Left
            } else {
                CellAlignment::Right
            };
            style.cell(title, alignment)
        })
        .collect()
}

fn build_row(category: Category, entry: TokenCredit, opts: &BreakdownTableOptions<'_>) -> Vec<Cell> {
    let style = RowStyle::for_category(category, opts.use_color);
    let fmt = opts.number_format;
    if opts.compact {
        vec![
            style.cell(category.short_label(), CellAlignment::Left),
            style.number(entry.credit, fmt),
        ]
    } else {
        vec![
            style.cell(category.label(), CellAlignment::Left),
            style.number(entry.token, fmt),
            style.number(entry.credit, fmt),
        ]
    }
}

pub(crate) fn build_breakdown_table(
    breakdown: &UsageBreakdown,
    opts: &BreakdownTableOptions<'_>,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(build_header(opts));
    for (category, entry) in breakdown.entries() {
        table.add_row(build_row(category, entry, opts));
    }
    table
}

pub(crate) fn print_breakdown_table(breakdown: &UsageBreakdown, opts: BreakdownTableOptions<'_>) {
    if breakdown.is_empty() {
        println!("No token usage to break down.");
        return;
    }

    let title = match opts.model {
        Some(model) => format!("Token Usage Breakdown ({model})"),
        None => "Token Usage Breakdown".to_string(),
    };
    if opts.use_color {
        println!("\n  \x1b[1m{title}\x1b[0m\n");
    } else {
        println!("\n  {title}\n");
    }

    println!("{}", build_breakdown_table(breakdown, &opts));
    println!();
}
