use std::{env, fs, path::PathBuf, process};

use colored::Colorize;
use recurring_core::{
    config::ConfigManager,
    core::{
        services::{RecurrenceService, UpcomingTotals},
        SystemClock,
    },
    errors::RecurringError,
    init,
    ledger::{format_iso, parse_date, Frequency, Transaction, TransactionKind},
    utils::persistence,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

#[derive(Default)]
struct Options {
    positional: Vec<String>,
    today: Option<String>,
    count: Option<usize>,
    existing: Option<PathBuf>,
    json: bool,
}

fn parse_options(
    mut args: impl Iterator<Item = String>,
) -> Result<Options, Box<dyn std::error::Error>> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--today" => options.today = Some(required_value(&mut args, "--today")?),
            "--count" => {
                let raw = required_value(&mut args, "--count")?;
                options.count = Some(raw.parse().map_err(|_| {
                    RecurringError::InvalidArgument(format!(
                        "--count expects a number, got `{raw}`"
                    ))
                })?);
            }
            "--existing" => {
                options.existing = Some(PathBuf::from(required_value(&mut args, "--existing")?))
            }
            "--json" => options.json = true,
            _ => options.positional.push(arg),
        }
    }
    Ok(options)
}

fn required_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.next()
        .ok_or_else(|| RecurringError::InvalidArgument(format!("{flag} requires a value")).into())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    let options = parse_options(args)?;
    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    let today = RecurrenceService::resolve_today(options.today.as_deref(), &SystemClock)?;

    match command.as_str() {
        "due" => {
            let path = series_path(&options, &config_manager, &config);
            let series = persistence::load_series_from_file(&path)?;
            let existing: Vec<Transaction> = match &options.existing {
                Some(file) => serde_json::from_str(&fs::read_to_string(file)?)?,
                None => Vec::new(),
            };
            let created = RecurrenceService::generate_due(&series, today, &existing);
            if options.json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else if created.is_empty() {
                println!("Nothing due on {}", format_iso(today));
            } else {
                for txn in &created {
                    println!(
                        "{}  {:<24} {}",
                        format_iso(txn.date),
                        txn.name,
                        signed_amount(txn.kind, txn.amount)
                    );
                }
            }
        }
        "upcoming" => {
            let path = series_path(&options, &config_manager, &config);
            let series = persistence::load_series_from_file(&path)?;
            let count = options.count.unwrap_or(config.upcoming_count);
            let predictions = RecurrenceService::predict_upcoming(&series, today, count);
            if options.json {
                println!("{}", serde_json::to_string_pretty(&predictions)?);
            } else {
                for prediction in &predictions {
                    println!(
                        "{}  {:<24} {}  ({})",
                        format_iso(prediction.date),
                        prediction.name,
                        signed_amount(prediction.kind, prediction.amount),
                        prediction.frequency
                    );
                }
                print_totals(&UpcomingTotals::from_predictions(&predictions));
            }
        }
        "next" => {
            let (Some(label), Some(raw_date)) =
                (options.positional.first(), options.positional.get(1))
            else {
                print_usage();
                process::exit(1);
            };
            let frequency = Frequency::from(label.as_str());
            let from = parse_date(raw_date)?;
            let count = options.count.unwrap_or(1);
            let dates = RecurrenceService::next_dates(&frequency, from, count)?;
            if options.json {
                let rendered: Vec<String> = dates.into_iter().map(format_iso).collect();
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                for date in dates {
                    println!("{}", format_iso(date));
                }
            }
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn series_path(
    options: &Options,
    manager: &ConfigManager,
    config: &recurring_core::config::Config,
) -> PathBuf {
    options
        .positional
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| manager.series_file(config))
}

fn signed_amount(kind: TransactionKind, amount: f64) -> String {
    match kind {
        TransactionKind::Income => format!("+{amount:.2}").green().to_string(),
        TransactionKind::Expense => format!("-{amount:.2}").red().to_string(),
    }
}

fn print_totals(totals: &UpcomingTotals) {
    println!(
        "{} upcoming, inflow {:.2}, outflow {:.2}, net {:.2}",
        totals.count, totals.projected_inflow, totals.projected_outflow, totals.net
    );
}

fn print_usage() {
    eprintln!(
        "Usage: recurring_core_cli <command> [options]\n\
         Commands:\n  \
         due [series.json] [--today YYYY-MM-DD] [--existing transactions.json] [--json]\n  \
         upcoming [series.json] [--count N] [--today YYYY-MM-DD] [--json]\n  \
         next <frequency> <date> [--count N] [--json]"
    );
}
