use std::fmt;
use std::io::{self, Write};

use colored::Colorize;
use expense_core::MonthlyReport;
use expense_domain::{Budget, Expense};
use rust_decimal::Decimal;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Info => text,
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => format!("{} {}", "Warning:".yellow().bold(), text),
        MessageKind::Section => text.bold().to_string(),
    }
}

pub fn print<W: Write>(out: &mut W, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", apply_style(kind, message))
}

pub fn info<W: Write>(out: &mut W, message: impl fmt::Display) -> io::Result<()> {
    print(out, MessageKind::Info, message)
}

pub fn success<W: Write>(out: &mut W, message: impl fmt::Display) -> io::Result<()> {
    print(out, MessageKind::Success, message)
}

pub fn warning<W: Write>(out: &mut W, message: impl fmt::Display) -> io::Result<()> {
    print(out, MessageKind::Warning, message)
}

pub fn section<W: Write>(out: &mut W, title: impl fmt::Display) -> io::Result<()> {
    print(out, MessageKind::Section, title)
}

/// Formats an amount with the configured currency symbol and two decimals.
pub fn money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

pub fn expense_table<W: Write>(out: &mut W, symbol: &str, expenses: &[Expense]) -> io::Result<()> {
    section(
        out,
        format!(
            "{:>5}  {:<10}  {:<15}  {:>12}  {}",
            "ID", "Date", "Category", "Amount", "Description"
        ),
    )?;
    for expense in expenses {
        info(
            out,
            format!(
                "{:>5}  {:<10}  {:<15}  {:>12}  {}",
                expense.id,
                expense.date.format("%Y-%m-%d"),
                expense.category,
                money(symbol, expense.amount),
                expense.description
            ),
        )?;
    }
    let total: Decimal = expenses.iter().map(|expense| expense.amount).sum();
    info(
        out,
        format!("{} expense(s), total {}", expenses.len(), money(symbol, total)),
    )
}

pub fn budget_details<W: Write>(out: &mut W, symbol: &str, budget: &Budget) -> io::Result<()> {
    section(
        out,
        format!("Budget for {}: {}", budget.period(), money(symbol, budget.amount)),
    )?;
    if let Some(limits) = &budget.category_limits {
        for (category, limit) in limits {
            info(out, format!("  {category}: {}", money(symbol, *limit)))?;
        }
        info(out, format!("Unallocated: {}", money(symbol, budget.unallocated())))?;
    }
    Ok(())
}

pub fn monthly_report<W: Write>(out: &mut W, symbol: &str, report: &MonthlyReport) -> io::Result<()> {
    section(
        out,
        format!(
            "Report for {} ({} expense(s))",
            report.period, report.expense_count
        ),
    )?;
    info(
        out,
        format!("{:<15}  {:>12}  {:>12}  {}", "Category", "Spent", "Limit", "Status"),
    )?;
    for line in &report.lines {
        let limit = line
            .limit
            .map(|limit| money(symbol, limit))
            .unwrap_or_else(|| "-".into());
        let status = match line.limit {
            Some(_) if line.exceeded() => "OVER".red().bold().to_string(),
            Some(_) => "ok".to_string(),
            None => String::new(),
        };
        info(
            out,
            format!(
                "{:<15}  {:>12}  {:>12}  {}",
                line.category,
                money(symbol, line.spent),
                limit,
                status
            )
            .trim_end(),
        )?;
    }

    let total = money(symbol, report.total);
    match (report.budget, report.remaining()) {
        (Some(budget), Some(remaining)) if report.over_budget() => warning(
            out,
            format!(
                "Total: {total} of {} budget ({} over)",
                money(symbol, budget),
                money(symbol, -remaining)
            ),
        ),
        (Some(budget), Some(remaining)) => info(
            out,
            format!(
                "Total: {total} of {} budget ({} remaining)",
                money(symbol, budget),
                money(symbol, remaining)
            ),
        ),
        _ => info(out, format!("Total: {total} (no budget set)")),
    }
}
