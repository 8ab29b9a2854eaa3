use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use bankr::{NewTransaction, TransactionType, count_transactions, create_transaction, initialize_db};

/// A utility for creating a test database for the REST API server of bankr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
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
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    for transaction in sample_transactions() {
        create_transaction(transaction, &conn)?;
    }

    println!("Created {} transactions.", count_transactions(&conn)?);
    println!("Success!");

    Ok(())
}

fn sample_transactions() -> Vec<NewTransaction> {
    vec![
        NewTransaction::new("2025-09-01", "Salary", 4200.0, TransactionType::Income)
            .description("September pay"),
        NewTransaction::new("2025-09-02", "Rent", 1650.0, TransactionType::Expense),
        NewTransaction::new("2025-09-04", "Groceries", 182.35, TransactionType::Expense)
            .description("Weekly shop"),
        NewTransaction::new("2025-09-09", "Transport", 48.0, TransactionType::Expense),
        NewTransaction::new("2025-09-15", "Freelance", 600.0, TransactionType::Income)
            .description("Website invoice"),
        NewTransaction::new("2025-09-20", "Dining", 74.5, TransactionType::Expense),
        NewTransaction::new("2025-10-01", "Salary", 4200.0, TransactionType::Income)
            .description("October pay"),
        NewTransaction::new("2025-10-02", "Rent", 1650.0, TransactionType::Expense),
    ]
}
