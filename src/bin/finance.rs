use std::{
    error::Error,
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};

use finance_tracker::{
    CategoryTotals, Config, DEFAULT_CATEGORY, DEFAULT_DB_PATH, IncomeExpense, Pagination, Period,
    RecordService, SUGGESTED_CATEGORIES, Transaction, TransactionId, category_or_default,
    format_amount, format_currency, parse_amount, read_csv, render_report_page, report_charts,
    setup_logging, today, write_csv,
};

/// A personal finance tracker for dated, categorized income and expenses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, env = "FINANCE_TRACKER_DB", default_value = DEFAULT_DB_PATH, global = true)]
    db_path: PathBuf,

    /// Also append debug logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log more detail to stderr, repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new transaction.
    Add {
        /// The date of the transaction (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        fields: TransactionFields,
    },

    /// Show transactions, most recent first.
    List {
        /// The maximum number of transactions to show.
        #[arg(long)]
        limit: Option<u64>,

        /// The number of transactions to skip.
        #[arg(long, default_value_t = 0, conflicts_with = "page")]
        offset: u64,

        /// Show this page of `limit` transactions, starting at 1.
        #[arg(long)]
        page: Option<u64>,
    },

    /// Replace every field of an existing transaction.
    Update {
        /// The ID of the transaction, as shown by `list`.
        id: TransactionId,

        /// The date of the transaction (YYYY-MM-DD).
        #[arg(long)]
        date: String,

        #[command(flatten)]
        fields: TransactionFields,
    },

    /// Delete one or more transactions.
    Delete {
        /// The IDs of the transactions, as shown by `list`.
        #[arg(required = true)]
        ids: Vec<TransactionId>,
    },

    /// Write every transaction to a CSV file, oldest first.
    Export {
        /// The CSV file to create or overwrite.
        path: PathBuf,
    },

    /// Add the transactions in a CSV file, skipping rows that cannot be read.
    Import {
        /// The CSV file with the columns t_date, amount, category, description.
        path: PathBuf,
    },

    /// Show the total for each category in a year or month.
    Totals {
        #[command(flatten)]
        period: PeriodArgs,

        /// Print the totals as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the income and expenses in a year or month.
    Split {
        #[command(flatten)]
        period: PeriodArgs,

        /// Print the split as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Draw the category and income/expense charts for a year or month to an HTML file.
    Chart {
        #[command(flatten)]
        period: PeriodArgs,

        /// The HTML file to create or overwrite.
        #[arg(short, long, default_value = "report.html")]
        output: PathBuf,
    },

    /// List the suggested categories.
    Categories,
}

#[derive(clap::Args, Debug)]
struct TransactionFields {
    /// The amount, positive for income and negative for expenses.
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    /// The category, e.g. "Groceries".
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// What the transaction was for.
    #[arg(long, default_value = "")]
    description: String,
}

#[derive(clap::Args, Debug)]
struct PeriodArgs {
    /// The year, defaults to the current year.
    #[arg(long)]
    year: Option<i32>,

    /// The month from 1 to 12, the whole year is used if not given.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: Option<u8>,
}

impl PeriodArgs {
    fn period(&self) -> Result<Period, finance_tracker::Error> {
        let year = self.year.unwrap_or_else(|| today().year());

        match self.month {
            Some(month) => Period::month(year, month),
            None => Ok(Period::year(year)),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(args.verbose, args.log_file.as_deref()) {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }

    let service = match RecordService::from_config(&Config::new(&args.db_path)) {
        Ok(service) => service,
        Err(error) => {
            eprintln!(
                "Error: could not open the database at {}: {error}",
                args.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    match run(args.command, &service) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, service: &RecordService) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Add { date, fields } => {
            let date = date.unwrap_or_else(|| today().to_string());
            let amount = parse_amount(&fields.amount)?;
            let id = service.add_transaction(
                &date,
                amount,
                category_or_default(&fields.category),
                &fields.description,
            )?;
            println!("Added transaction #{id}");
        }
        Command::List {
            limit,
            offset,
            page,
        } => {
            let limit = limit.unwrap_or(service.default_page().limit);
            let pagination = match page {
                Some(page) => Pagination::from_page(page, limit),
                None => Pagination::new(limit, offset),
            };
            print_transactions(&service.list_transactions(pagination)?);
        }
        Command::Update { id, date, fields } => {
            let amount = parse_amount(&fields.amount)?;
            service.update_transaction(
                id,
                &date,
                amount,
                category_or_default(&fields.category),
                &fields.description,
            )?;
            println!("Saved transaction #{id}");
        }
        Command::Delete { ids } => {
            for id in ids {
                service.delete_transaction(id)?;
                println!("Deleted transaction #{id}");
            }
        }
        Command::Export { path } => export_csv(service, &path)?,
        Command::Import { path } => import_csv(service, &path)?,
        Command::Totals { period, json } => {
            let period = period.period()?;
            let totals = category_totals(service, period)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&totals)?);
            } else if totals.is_empty() {
                println!("{}", no_data_message(period));
            } else {
                print_category_totals(period, &totals);
            }
        }
        Command::Split { period, json } => {
            let period = period.period()?;
            let split = income_expense(service, period)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&split)?);
            } else if split.is_empty() {
                println!("{}", no_data_message(period));
            } else {
                print_income_expense(period, &split);
            }
        }
        Command::Chart { period, output } => {
            let period = period.period()?;
            let totals = category_totals(service, period)?;
            let split = income_expense(service, period)?;

            if totals.is_empty() {
                println!("{}", no_data_message(period));
                return Ok(());
            }

            let charts = report_charts(period, &totals, &split);
            let page = render_report_page(&format!("Finance Report {period}"), &charts);
            std::fs::write(&output, page)?;
            println!("Wrote {} charts to {}", charts.len(), output.display());
        }
        Command::Categories => {
            for category in SUGGESTED_CATEGORIES {
                println!("{category}");
            }
        }
    }

    Ok(())
}

fn export_csv(service: &RecordService, path: &Path) -> Result<(), Box<dyn Error>> {
    let rows = service.export_csv_rows()?;
    let file = File::create(path)?;
    write_csv(&rows, file)?;
    println!("Exported {} rows to {}", rows.len() - 1, path.display());

    Ok(())
}

fn import_csv(service: &RecordService, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    let rows = read_csv(file)?;
    let added = service.import_csv_rows(&rows)?;
    println!("Imported {added} rows.");

    Ok(())
}

fn category_totals(
    service: &RecordService,
    period: Period,
) -> Result<CategoryTotals, finance_tracker::Error> {
    match period {
        Period::Year(year) => service.yearly_totals(year),
        Period::Month { year, month } => service.monthly_totals(year, u8::from(month)),
    }
}

fn income_expense(
    service: &RecordService,
    period: Period,
) -> Result<IncomeExpense, finance_tracker::Error> {
    match period {
        Period::Year(year) => service.yearly_income_expense(year),
        Period::Month { year, month } => service.monthly_income_expense(year, u8::from(month)),
    }
}

fn no_data_message(period: Period) -> &'static str {
    match period {
        Period::Year(_) => "No transactions for that year.",
        Period::Month { .. } => "No transactions for that month.",
    }
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions.");
        return;
    }

    let category_width = transactions
        .iter()
        .map(|transaction| transaction.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    println!(
        "{:>6}  {:<10}  {:>12}  {:<category_width$}  Description",
        "ID", "Date", "Amount", "Category"
    );

    for transaction in transactions {
        println!(
            "{:>6}  {:<10}  {:>12}  {:<category_width$}  {}",
            transaction.id,
            transaction.date.to_string(),
            format_amount(transaction.amount),
            transaction.category,
            transaction.description
        );
    }
}

fn print_category_totals(period: Period, totals: &CategoryTotals) {
    let category_width = totals
        .keys()
        .map(|category| category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Net".len());

    println!("Category totals for {period}");
    for (category, total) in totals {
        println!("{category:<category_width$}  {:>14}", format_currency(*total));
    }
    println!(
        "{:<category_width$}  {:>14}",
        "Net",
        format_currency(totals.values().sum())
    );
}

fn print_income_expense(period: Period, split: &IncomeExpense) {
    println!("Income vs expense for {period}");
    println!("Income   {:>14}", format_currency(split.income));
    println!("Expense  {:>14}", format_currency(split.expense));
    println!("Net      {:>14}", format_currency(split.net()));
}
