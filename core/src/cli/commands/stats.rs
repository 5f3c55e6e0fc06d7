use super::{fail, print_json};
use crate::cli::OutputFormat;
use crate::tickets::stats::{Bucket, StatsReport};
use crate::tickets::storage::TicketStore;
use colored::Colorize;

const BAR_WIDTH: usize = 30;

pub fn run(store: &dyn TicketStore, format: OutputFormat) -> Result<(), String> {
    let tickets = store.list_tickets().map_err(fail)?;
    let report = StatsReport::from_tickets(&tickets);

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    let stats = &report.stats;
    println!("{}", "Tickets".bold());
    println!("  {} {}", "Total:".dimmed(), stats.total);
    println!("  {} {}", "Abiertos:".dimmed(), stats.open.to_string().cyan());
    println!(
        "  {} {}",
        "En progreso:".dimmed(),
        stats.in_progress.to_string().yellow()
    );
    println!(
        "  {} {}",
        "Resueltos:".dimmed(),
        stats.resolved.to_string().green()
    );
    if stats.critical_active > 0 {
        println!(
            "  {} {}",
            "Críticos activos:".dimmed(),
            stats.critical_active.to_string().red().bold()
        );
    }

    print_distribution("Por prioridad", &report.distribution.by_priority, stats.total);
    print_distribution("Por tipo", &report.distribution.by_type, stats.total);
    Ok(())
}

fn print_distribution(title: &str, buckets: &[Bucket], total: usize) {
    if buckets.is_empty() {
        return;
    }
    println!();
    println!("{}", title.bold());
    for bucket in buckets {
        let width = bucket.count * BAR_WIDTH / total.max(1);
        println!(
            "  {:<12} {:>4} {}",
            bucket.label,
            bucket.count,
            "█".repeat(width).blue()
        );
    }
}
