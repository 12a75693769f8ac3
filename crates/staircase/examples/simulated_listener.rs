//! Run both task variants against a simulated listener and print the results.
//!
//! ```bash
//! RUST_LOG=staircase=debug cargo run --example simulated_listener
//! ```

use std::path::PathBuf;

use staircase::export::write_csv;
use staircase::helpers::SimulatedListener;
use staircase::output::{format_summary, to_json_pretty};
use staircase::{
    ComparisonSelector, Config, DigitSelector, ListeningSession, Next, StimulusSelector, Summary,
};
use tracing_subscriber::EnvFilter;

fn run<S: StimulusSelector>(
    config: Config,
    selector: S,
    listener: &mut SimulatedListener,
) -> Result<Summary, Box<dyn std::error::Error>> {
    let mut session = ListeningSession::new(config, selector)?;
    loop {
        let Some(trial) = session.current_trial() else {
            return Ok(session.summary()?);
        };
        let response = listener.respond(&trial.stimulus);
        if let Next::Finished(summary) = session.submit(response)? {
            return Ok(summary);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_dir = std::env::temp_dir();

    // Digit identification: listener halfway correct at level 12 (-6 dB).
    let config = Config::digit_identification().seed(2024);
    let selector = DigitSelector::for_config(&config);
    let mut listener = SimulatedListener::new(12.0, 0.8, config.staircase.polarity, 1);
    let db = config.db_mapping;
    let summary = run(config, selector, &mut listener)?;
    println!("Digit identification");
    println!("{}", format_summary(&summary, Some(&db)));
    let path: PathBuf = out_dir.join("digits_export.csv");
    write_csv(&summary, Some(&db), &path)?;
    println!("Wrote {}\n", path.display());

    // Quality comparison: differences vanish above about 44 dB.
    let config = Config::quality_comparison().seed(2024);
    let selector = ComparisonSelector::for_config(&config);
    let mut listener = SimulatedListener::new(44.0, 0.6, config.staircase.polarity, 2);
    let summary = run(config, selector, &mut listener)?;
    println!("Quality comparison");
    println!("{}", format_summary(&summary, None));
    let path = out_dir.join("comparison_export.csv");
    write_csv(&summary, None, &path)?;
    println!("Wrote {}\n", path.display());

    println!("{}", to_json_pretty(&summary)?);
    Ok(())
}
