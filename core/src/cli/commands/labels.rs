use super::print_json;
use crate::cli::OutputFormat;
use crate::labels::{LabelEntry, LabelSet};
use colored::Colorize;

pub fn run(format: OutputFormat) -> Result<(), String> {
    let labels = LabelSet::snapshot();

    if format == OutputFormat::Json {
        return print_json(&labels);
    }

    print_table("Tipos", &labels.types);
    print_table("Prioridades", &labels.priorities);
    print_table("Estados", &labels.statuses);
    Ok(())
}

fn print_table(title: &str, entries: &[LabelEntry]) {
    println!("{}", title.bold());
    for entry in entries {
        println!("  {:<12} {}", entry.code.dimmed(), entry.label);
    }
}
