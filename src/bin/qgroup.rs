//! qgroup: inspect the generalized quaternion group Q_{4n}
//!
//! Prints cardinality, exponent and element orders, and optionally the
//! Cayley table.

use clap::Parser;
use eyre::{ensure, Result};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use quaternion_group::{Exponent, Order, QuaternionGroup};

#[derive(Parser)]
#[command(name = "qgroup")]
#[command(about = "Inspect the generalized quaternion group Q_4n")]
#[command(version)]
struct Args {
    /// Group parameter n (the group has 4n elements; 0 selects the infinite group)
    #[arg(long)]
    n: i64,

    /// Print the Cayley table
    #[arg(long)]
    table: bool,

    /// Largest group order for which the Cayley table is printed
    #[arg(long, default_value = "64")]
    max_table_order: u64,

    /// Emit the summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Serialize)]
struct ElementSummary {
    element: String,
    order: Order,
    inverse: String,
}

#[derive(Serialize)]
struct GroupSummary {
    n: u64,
    cardinality: Option<u64>,
    exponent: Exponent,
    cyclic: bool,
    elements: Vec<ElementSummary>,
}

fn summarize(group: &QuaternionGroup) -> GroupSummary {
    let elements = match group.elements() {
        Ok(iter) => iter
            .map(|x| ElementSummary {
                element: x.to_string(),
                order: group.order_of(&x),
                inverse: x.inverse().to_string(),
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    GroupSummary {
        n: group.n(),
        cardinality: group.cardinality().ok(),
        exponent: group.exponent(),
        cyclic: group.is_cyclic(),
        elements,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let group = QuaternionGroup::new(args.n)?;
    let summary = summarize(&group);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!("Q_{} (n = {})", 4 * summary.n, summary.n);
        match summary.cardinality {
            Some(card) => info!("Cardinality: {}", card),
            None => info!("Cardinality: infinite"),
        }
        info!("Exponent: {}", summary.exponent);
        info!("Cyclic: {}", summary.cyclic);
        for e in &summary.elements {
            println!("{:>8}  order {:>4}  inverse {}", e.element, e.order, e.inverse);
        }
    }

    if args.table {
        let card = group.cardinality()?;
        ensure!(
            card <= args.max_table_order,
            "Group order {} exceeds --max-table-order {}",
            card,
            args.max_table_order
        );
        let header: Vec<String> = group.elements()?.map(|x| x.to_string()).collect();
        println!("{:>6} | {}", "*", header.join(" "));
        for (label, row) in header.iter().zip(group.cayley_table()?) {
            let cells: Vec<String> = row.iter().map(|x| x.to_string()).collect();
            println!("{:>6} | {}", label, cells.join(" "));
        }
    }

    Ok(())
}
