use std::io::Write;
use std::path::{Path, PathBuf};

use expense_config::{paths, Config, ConfigKey, ConfigManager};
use expense_core::{CategoryCatalog, ExpenseFilter, ExpenseManager, NewExpense, PeriodScope};
use expense_domain::{Budget, MonthPeriod};
use expense_storage_json::JsonExpenseStorage;
use tracing::debug;

use super::{
    limits::parse_category_limits, output, system_clock::SystemClock, Command, ConfigAction,
};
use crate::errors::{Result, TrackerError};
use crate::export;

/// Everything a command needs: the loaded configuration and a manager over the data directory.
pub struct AppContext {
    pub config: Config,
    pub config_manager: ConfigManager,
    pub data_dir: PathBuf,
    pub manager: ExpenseManager,
}

impl AppContext {
    /// Loads the configuration from the application home and opens the JSON documents.
    pub fn open(data_dir_override: Option<&Path>) -> Result<Self> {
        let home = paths::app_home();
        let config_manager = ConfigManager::with_base_dir(&home);
        let config = config_manager.load()?;
        let data_dir = config.resolve_data_dir(&home, data_dir_override);
        debug!(data_dir = %data_dir.display(), "opening expense store");
        let storage = JsonExpenseStorage::in_dir(&data_dir)?;
        let catalog = CategoryCatalog::new(&config.categories);
        let manager = ExpenseManager::new(Box::new(storage), Box::new(SystemClock), catalog);
        Ok(Self {
            config,
            config_manager,
            data_dir,
            manager,
        })
    }

    fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}

pub fn dispatch<W: Write>(context: &AppContext, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Add {
            description,
            amount,
            category,
            date,
        } => {
            let mut input = NewExpense::new(description, amount, category);
            input.date = date;
            add_expense(context, input, out)
        }
        Command::Delete { id } => delete_expense(context, id, out),
        Command::List {
            month,
            year,
            category,
        } => list_expenses(context, PeriodScope::from_parts(month, year)?, category, out),
        Command::SetBudget {
            month,
            year,
            amount,
            category_limits,
        } => {
            let limits = category_limits
                .as_deref()
                .map(parse_category_limits)
                .transpose()?;
            set_budget(context, Budget::new(month, year, amount, limits).map_err(core_error)?, out)
        }
        Command::ShowBudget { month, year } => show_budget(context, period(month, year)?, out),
        Command::RemoveBudget { month, year } => remove_budget(context, period(month, year)?, out),
        Command::CategorySummary {
            category,
            month,
            year,
        } => category_summary(context, &category, PeriodScope::from_parts(month, year)?, out),
        Command::Report { month, year } => report(context, period(month, year)?, out),
        Command::Categories => categories(context, out),
        Command::Export { output: path } => export_csv(context, &path, out),
        Command::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => show_config(context, out),
            ConfigAction::Set { key, value } => set_config(context, key.into(), &value, out),
        },
    }
}

fn core_error(err: expense_domain::DomainError) -> TrackerError {
    TrackerError::from(expense_core::CoreError::from(err))
}

fn period(month: u32, year: i32) -> Result<MonthPeriod> {
    MonthPeriod::new(month, year).map_err(core_error)
}

fn add_expense<W: Write>(context: &AppContext, input: NewExpense, out: &mut W) -> Result<()> {
    let outcome = context.manager.add_expense(input)?;
    output::success(
        out,
        format!("Expense added successfully (ID: {})", outcome.id()),
    )?;
    for warning in &outcome.warnings {
        output::warning(out, warning)?;
    }
    Ok(())
}

fn delete_expense<W: Write>(context: &AppContext, id: u64, out: &mut W) -> Result<()> {
    let removed = context.manager.delete_expense(id)?;
    output::success(out, format!("Expense {} deleted", removed.id))?;
    Ok(())
}

fn list_expenses<W: Write>(
    context: &AppContext,
    scope: PeriodScope,
    category: Option<String>,
    out: &mut W,
) -> Result<()> {
    let expenses = context
        .manager
        .list_expenses(&ExpenseFilter { scope, category })?;
    if expenses.is_empty() {
        output::info(out, "No expenses found.")?;
    } else {
        output::expense_table(out, context.symbol(), &expenses)?;
    }
    Ok(())
}

fn set_budget<W: Write>(context: &AppContext, budget: Budget, out: &mut W) -> Result<()> {
    let (month, year) = (budget.month, budget.year);
    context.manager.set_budget(budget)?;
    output::success(out, format!("Budget set successfully for {month}/{year}"))?;
    Ok(())
}

fn show_budget<W: Write>(context: &AppContext, period: MonthPeriod, out: &mut W) -> Result<()> {
    match context.manager.budget_for(period)? {
        Some(budget) => output::budget_details(out, context.symbol(), &budget)?,
        None => output::info(out, format!("No budget set for {period}"))?,
    }
    Ok(())
}

fn remove_budget<W: Write>(context: &AppContext, period: MonthPeriod, out: &mut W) -> Result<()> {
    context.manager.remove_budget(period)?;
    output::success(out, format!("Budget removed for {period}"))?;
    Ok(())
}

fn category_summary<W: Write>(
    context: &AppContext,
    category: &str,
    scope: PeriodScope,
    out: &mut W,
) -> Result<()> {
    let total = context.manager.category_summary(category, scope)?;
    output::info(
        out,
        format!(
            "Total expenses for category '{}' {}: {}",
            category,
            scope,
            output::money(context.symbol(), total)
        ),
    )?;
    Ok(())
}

fn report<W: Write>(context: &AppContext, period: MonthPeriod, out: &mut W) -> Result<()> {
    let report = context.manager.monthly_report(period)?;
    output::monthly_report(out, context.symbol(), &report)?;
    Ok(())
}

fn categories<W: Write>(context: &AppContext, out: &mut W) -> Result<()> {
    let catalog = context.manager.catalog();
    if catalog.is_open() {
        output::info(out, "Any category is accepted.")?;
        return Ok(());
    }
    for category in catalog.categories() {
        output::info(out, category)?;
    }
    Ok(())
}

fn export_csv<W: Write>(context: &AppContext, path: &Path, out: &mut W) -> Result<()> {
    let expenses = context.manager.all_expenses()?;
    export::export_expenses(&expenses, path)?;
    output::success(
        out,
        format!("Expenses exported successfully to {}", path.display()),
    )?;
    Ok(())
}

fn show_config<W: Write>(context: &AppContext, out: &mut W) -> Result<()> {
    let config = &context.config;
    let categories = if config.categories.is_empty() {
        "(any)".to_string()
    } else {
        config.categories.join(", ")
    };
    output::section(
        out,
        format!("Configuration ({})", context.config_manager.config_path().display()),
    )?;
    output::info(out, format!("{}: {}", ConfigKey::CurrencySymbol, config.currency_symbol))?;
    output::info(out, format!("{}: {categories}", ConfigKey::Categories))?;
    output::info(out, format!("{}: {}", ConfigKey::DataDir, context.data_dir.display()))?;
    Ok(())
}

fn set_config<W: Write>(
    context: &AppContext,
    key: ConfigKey,
    value: &str,
    out: &mut W,
) -> Result<()> {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;
    debug!(%key, "configuration saved");
    output::success(out, format!("Configuration updated: {key}"))?;
    Ok(())
}
