//! Gilded Rose Inventory Driver
//!
//! Prints the standard stock day by day, or benchmarks the aging system on
//! a large random stock.

use clap::Parser;
use serde::Serialize;
use simulation::{Inventory, Item, TickResult};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "gildedrose", about = "Age the Gilded Rose inventory day by day")]
struct DriverArgs {
    /// Number of days to simulate
    #[arg(short, long, default_value_t = 2)]
    days: u32,

    /// Emit one JSON report per day instead of the text table
    #[arg(long)]
    json: bool,

    /// Age items on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Benchmark on this many random items instead of printing the stock
    #[arg(long, value_name = "COUNT")]
    bench: Option<usize>,

    /// Log every tick summary
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct DayReport<'a> {
    day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<TickResult>,
    items: &'a [Item],
}

fn main() -> anyhow::Result<()> {
    let args = DriverArgs::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.bench {
        Some(count) => bench(count, &args),
        None => report(&args),
    }
}

fn report(args: &DriverArgs) -> anyhow::Result<()> {
    let mut inventory = Inventory::standard_stock();
    inventory.parallel = args.parallel;

    let mut summary = None;
    for _ in 0..=args.days {
        if args.json {
            let day = DayReport {
                day: inventory.day(),
                summary,
                items: inventory.items(),
            };
            println!("{}", serde_json::to_string(&day)?);
        } else {
            println!("-------- day {} --------", inventory.day());
            println!("name, sellIn, quality");
            for item in inventory.items() {
                println!("{}", item);
            }
            println!();
        }

        if inventory.day() < args.days {
            summary = Some(inventory.tick());
        }
    }

    Ok(())
}

fn bench(count: usize, args: &DriverArgs) -> anyhow::Result<()> {
    info!("Seeding {} random items...", count);
    let mut inventory = Inventory::seed_random(count);
    inventory.parallel = args.parallel;

    info!("Running {} day benchmark (parallel: {})...", args.days, args.parallel);
    let start = std::time::Instant::now();
    let results = inventory.run(args.days);
    let elapsed = start.elapsed();

    let expired: usize = results.iter().map(|r| r.newly_expired).sum();
    info!(
        "Benchmark complete: {:?} total, {:?} per tick, {} items expired",
        elapsed,
        elapsed / args.days.max(1),
        expired
    );

    Ok(())
}
