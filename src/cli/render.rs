use std::io::{self, Write};

use crate::application::BudgetSummary;
use crate::domain::{format_grouped, format_signed, Entry, EntryType};

/// Signed amount as shown next to an entry: "+ 1,000.00" or "- 12.50".
pub fn entry_amount(entry: &Entry) -> String {
    format!("{} {}", entry.entry_type.sign(), format_grouped(entry.value))
}

/// One line of the income or expense list.
pub fn entry_line(entry: &Entry) -> String {
    format!(
        "{:<12} {:<30} {:>16}",
        entry.key().to_string(),
        entry.description,
        entry_amount(entry)
    )
}

fn list_title(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Income => "INCOME",
        EntryType::Expense => "EXPENSES",
    }
}

/// Render the list of one entry type, newest last.
pub fn write_list<'a, W, I>(out: &mut W, entry_type: EntryType, entries: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    writeln!(out, "{}", list_title(entry_type))?;
    writeln!(out, "{}", "-".repeat(60))?;

    let mut count = 0;
    for entry in entries {
        writeln!(out, "{}", entry_line(entry))?;
        count += 1;
    }
    if count == 0 {
        writeln!(out, "  (none)")?;
    }
    Ok(())
}

/// Render the budget header: month title, balance, income and expenses.
pub fn write_summary<W: Write>(out: &mut W, summary: &BudgetSummary) -> io::Result<()> {
    writeln!(out, "Available budget in {}:", summary.month)?;
    writeln!(out, "  {}", format_signed(summary.balance))?;
    writeln!(
        out,
        "{:<20} {:>16}",
        format!("Income ({})", summary.income_count),
        format!("+ {}", format_grouped(summary.total_income))
    )?;
    writeln!(
        out,
        "{:<20} {:>16}",
        format!("Expenses ({})", summary.expense_count),
        format!("- {}", format_grouped(summary.total_expense))
    )?;
    Ok(())
}

pub const HELP: &str = "\
Commands:
  add <income|expense> <amount> <description>   record an entry
  rm <type-id>                                  delete an entry (e.g. rm expense-0)
  list [income|expense]                         show entries
  totals                                        show the budget summary
  export <csv|json> [path]                      export entries (stdout if no path)
  help                                          show this help
  quit                                          leave the session";
