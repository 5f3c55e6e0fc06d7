use super::{print_json, priority_badge};
use crate::classify::{explain, triage};
use crate::cli::OutputFormat;
use colored::Colorize;

pub fn run(text: &str, show_trace: bool, format: OutputFormat) -> Result<(), String> {
    let result = triage(text);

    if format == OutputFormat::Json {
        if show_trace {
            let output = serde_json::json!({
                "type": result.classification.ticket_type,
                "priority": result.classification.priority,
                "response": result.response,
                "trace": explain(text),
            });
            return print_json(&output);
        }
        return print_json(&result);
    }

    let classification = result.classification;
    println!(
        "{} {}",
        classification.ticket_type.label().magenta().bold(),
        priority_badge(classification.priority)
    );
    println!("{}", result.response);

    if show_trace {
        let trace = explain(text);
        println!();
        println!("{}", "Evidence".bold());
        for score in &trace.type_scores {
            let matched = if score.matched.is_empty() {
                "-".dimmed().to_string()
            } else {
                score.matched.join(", ")
            };
            println!(
                "  {:<10} {} {}",
                score.ticket_type.as_str(),
                score.score,
                matched
            );
        }
        match trace.priority_keyword {
            Some(keyword) => println!("  {} {}", "priority:".dimmed(), keyword.yellow()),
            None => println!("  {} {}", "priority:".dimmed(), "default".dimmed()),
        }
    }

    Ok(())
}
