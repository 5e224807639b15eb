//! holidays - check public holidays from the command line
//!
//! A small demo binary over the `holidays` library. Set `RUST_LOG=debug` to
//! see cache hits and upstream requests.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use holidays::cli::{Cli, Command};
use holidays::Holidays;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let holidays = match Holidays::new(cli.config()) {
        Ok(holidays) => holidays,
        Err(e) => {
            eprintln!("Failed to create holiday client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Check { country, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let answer = if holidays.is_holiday(&country, date).await {
                "yes"
            } else {
                "no"
            };
            println!("Is {date} a holiday in {}? {answer}", country.to_uppercase());
        }
        Command::Today => match holidays.today_holiday_countries().await {
            Ok(list) if list.is_empty() => println!("No country has a public holiday today"),
            Ok(list) => {
                println!("Countries having a holiday today:");
                for holiday in list {
                    println!("  {holiday}");
                }
            }
            Err(e) => {
                eprintln!("Failed to fetch today's holidays: {e}");
                return ExitCode::FAILURE;
            }
        },
        Command::List { country, year } => match holidays.holidays(&country, year).await {
            Ok(list) => {
                for holiday in list {
                    println!("{holiday}");
                }
            }
            Err(e) => {
                eprintln!("Failed to fetch holidays for {country} {year}: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
