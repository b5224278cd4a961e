use std::{
    fs::File,
    io::{self, BufWriter, Write}
};

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    args::{Args, Command},
    model::{
        export::graph_export,
        loader::{load_csv, LoadError},
        rating_graph::RatingGraph,
        structures::what_if_outcome::WhatIfOutcome
    }
};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize graph: {0}")]
    Serialization(#[from] serde_json::Error)
}

pub fn run(args: &Args) -> Result<(), CommandError> {
    let mut graph = load_csv(&args.data_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Ratings { limit, constructors } => print_ratings(&graph, *limit, *constructors, &mut out)?,
        Command::WhatIf {
            driver,
            constructor,
            more
        } => {
            let pairs = std::iter::once((driver.clone(), constructor.clone()))
                .chain(more.iter().cloned())
                .collect::<Vec<_>>();
            let outcomes = simulate_all(&mut graph, &pairs, &mut out)?;
            print_outcomes(&outcomes, &mut out)?;
        }
        Command::Export { output, what_if } => {
            let outcomes = simulate_all(&mut graph, what_if, &mut io::stderr())?;
            let export = graph_export(&graph, outcomes);

            match output {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(path)?);
                    serde_json::to_writer_pretty(&mut writer, &export)?;
                    writer.flush()?;
                    info!("Wrote {} graph elements to {}", export.elements.len(), path.display());
                }
                None => {
                    serde_json::to_writer_pretty(&mut out, &export)?;
                    writeln!(out)?;
                }
            }
        }
    }

    Ok(())
}

/// Runs each simulation in order. A name that is not in the graph skips that
/// simulation with a message; the rest still run.
pub fn simulate_all<W: Write>(
    graph: &mut RatingGraph,
    pairs: &[(String, String)],
    messages: &mut W
) -> Result<Vec<WhatIfOutcome>, CommandError> {
    let mut outcomes = Vec::with_capacity(pairs.len());

    for (driver, constructor) in pairs {
        match graph.simulate(driver, constructor) {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                warn!("Skipping simulation {} @ {}: {}", driver, constructor, e);
                writeln!(messages, "Simulation failed: {}", e)?;
            }
        }
    }

    Ok(outcomes)
}

pub fn print_ratings<W: Write>(
    graph: &RatingGraph,
    limit: Option<usize>,
    constructors: bool,
    out: &mut W
) -> io::Result<()> {
    let entries: Vec<(&str, i64)> = if constructors {
        graph
            .constructors_by_rating()
            .into_iter()
            .map(|c| (c.name.as_str(), c.overall_rating))
            .collect()
    } else {
        graph
            .drivers_by_rating()
            .into_iter()
            .map(|d| (d.name.as_str(), d.overall_rating))
            .collect()
    };

    let heading = if constructors { "Constructor" } else { "Driver" };
    writeln!(out, "{:>4}  {:<28} {:>6}", "Rank", heading, "ELO")?;

    for (rank, (name, rating)) in entries.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
        writeln!(out, "{:>4}  {:<28} {:>6}", rank + 1, name, rating)?;
    }

    Ok(())
}

pub fn print_outcomes<W: Write>(outcomes: &[WhatIfOutcome], out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} {:<20} {:>9} {:>12} {:>13}",
        "Driver", "Constructor", "Prev. ELO", "What-If ELO", "New Final ELO"
    )?;

    for outcome in outcomes {
        writeln!(
            out,
            "{:<24} {:<20} {:>9} {:>12} {:>13}",
            outcome.driver, outcome.constructor, outcome.previous, outcome.hypothetical, outcome.new
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        commands::{print_outcomes, print_ratings, simulate_all},
        model::loader::load,
        utils::test_utils::generate_row
    };

    fn graph() -> crate::model::rating_graph::RatingGraph {
        let rows = vec![
            generate_row("Sebastian Vettel", "Red Bull", 25.0, 25, Some(1.0)),
            generate_row("Mark Webber", "Red Bull", 18.0, 18, Some(0.0)),
            generate_row("Fernando Alonso", "Ferrari", 15.0, 15, None),
        ];

        load(rows.into_iter().map(Ok)).unwrap()
    }

    #[test]
    fn test_print_driver_ratings() {
        let graph = graph();
        let mut out = Vec::new();

        print_ratings(&graph, Some(2), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Sebastian Vettel"));
        assert!(lines[1].trim_end().ends_with("23"));
        assert!(lines[2].contains("Mark Webber"));
    }

    #[test]
    fn test_print_constructor_ratings() {
        let graph = graph();
        let mut out = Vec::new();

        print_ratings(&graph, None, true, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert!(lines[0].contains("Constructor"));
        // Red Bull 20, Ferrari 14
        assert!(lines[1].contains("Red Bull"));
        assert!(lines[2].contains("Ferrari"));
    }

    #[test]
    fn test_simulate_all_skips_unknown_names() {
        let mut graph = graph();
        let mut messages = Vec::new();
        let pairs = vec![
            ("Fernando Alonso".to_string(), "Red Bull".to_string()),
            ("Nobody".to_string(), "Red Bull".to_string()),
            ("Mark Webber".to_string(), "Ferrari".to_string()),
        ];

        let outcomes = simulate_all(&mut graph, &pairs, &mut messages).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].driver, "Fernando Alonso");
        assert_eq!(outcomes[1].driver, "Mark Webber");
        assert_eq!(
            String::from_utf8(messages).unwrap(),
            "Simulation failed: Driver 'Nobody' not found\n"
        );
    }

    #[test]
    fn test_print_outcomes() {
        let mut graph = graph();
        let outcomes = simulate_all(
            &mut graph,
            &[("Fernando Alonso".to_string(), "Red Bull".to_string())],
            &mut Vec::<u8>::new()
        )
        .unwrap();
        let mut out = Vec::new();

        print_outcomes(&outcomes, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        // Alonso 14, Red Bull 20: what-if 17, new ceil((14 + 17) / 2) = 16
        assert_eq!(
            row.split_whitespace().rev().take(3).collect::<Vec<_>>(),
            vec!["16", "17", "14"]
        );
    }
}
