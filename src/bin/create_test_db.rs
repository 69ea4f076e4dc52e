use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Date, Duration, Month};

use finance_tracker::{Database, RecordService, today};

/// A utility for creating a test database for the finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many months of transactions to generate, ending with the current month.
    #[arg(long, short, default_value_t = 12)]
    months: u32,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let service = RecordService::new(Database::new(output_path))?;

    println!("Creating test transactions...");
    let today = today();
    let mut count = 0;

    for months_ago in (0..args.months).rev() {
        let month_start = first_of_month_before(today, months_ago)?;

        for (day, amount, category, description) in sample_month(months_ago) {
            let date = month_start + Duration::days(day);
            if date > today {
                continue;
            }

            service.add_transaction(&date.to_string(), amount, category, description)?;
            count += 1;
        }
    }

    println!("Created {count} transactions.");
    println!("Success!");

    Ok(())
}

/// The first day of the month `months_ago` months before the month of `date`.
fn first_of_month_before(date: Date, months_ago: u32) -> Result<Date, Box<dyn Error>> {
    let month_index = date.year() * 12 + i32::from(u8::from(date.month())) - 1;
    let month_index = month_index - i32::try_from(months_ago)?;
    let month = Month::try_from(u8::try_from(month_index.rem_euclid(12) + 1)?)?;

    Ok(Date::from_calendar_date(
        month_index.div_euclid(12),
        month,
        1,
    )?)
}

/// Day offsets and transactions for one month, varied a little by `seed`.
fn sample_month(seed: u32) -> Vec<(i64, f64, &'static str, &'static str)> {
    let wobble = f64::from(seed % 5) * 7.25;

    vec![
        (0, 4200.0, "Income", "Salary"),
        (0, -1650.0, "Rent", "Monthly rent"),
        (2, -84.3 - wobble, "Utilities", "Power bill"),
        (3, -132.45 + wobble, "Groceries", "Weekly shop"),
        (6, -18.5, "Transportation", "Bus card top up"),
        (10, -128.9 - wobble, "Groceries", "Weekly shop"),
        (12, -45.0, "Entertainment", "Movie night"),
        (14, -62.0, "Healthcare", "Pharmacy"),
        (17, -141.2 + wobble, "Groceries", "Weekly shop"),
        (19, 120.0, "Income", "Sold old bike parts"),
        (21, -12.99, "Subscriptions", "Music streaming"),
        (24, -119.75, "Groceries", "Weekly shop"),
        (26, -15.0, "Other", "Gift card"),
    ]
}
