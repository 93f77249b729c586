//! Run snapshot protocol on the scenario.

use std::process::ExitCode;

use snapsim::{
    process_lib::{lai_young::LaiYoung, weighted::WeightedMarker},
    Error, Network, Protocol, Result, Scenario,
};

/// Runs the protocol to the end and prints results feed, final state and trace.
fn simulate<P: Protocol>(scenario: &Scenario, protocol: P, print_trace: bool) -> Result<()> {
    let mut config = scenario.network.clone();
    config.trace |= print_trace;

    let mut network = Network::new(&scenario.topology, protocol, config)?;
    let report = network.run()?;

    println!("== results");
    for line in network.results() {
        println!("{}", line);
    }

    println!("== processes");
    for process in network.processes() {
        println!("{}", process);
    }

    println!("== channels");
    for channel in network.channels() {
        println!("{}", channel);
    }

    if print_trace {
        println!("== trace");
        for delivery in network.trace() {
            println!("{}", delivery);
        }
    }

    println!(
        "== {} steps, terminated={}, pending={}",
        report.steps, report.terminated, report.pending
    );
    Ok(())
}

/// Accepts arguments from the command line.
/// * protocol: `weighted` or `lai-young`
/// * path to the scenario file
/// * optional `--trace`
fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Parse command line arguments.
    let args = std::env::args().collect::<Vec<String>>();
    if args.len() < 3 {
        println!("Usage: {} <weighted|lai-young> <scenario.json> [--trace]", args[0]);
        return ExitCode::FAILURE;
    }
    let print_trace = args[3..].iter().any(|arg| arg == "--trace");

    let result = Scenario::from_file(&args[2]).and_then(|scenario| match args[1].as_str() {
        "weighted" => simulate(
            &scenario,
            WeightedMarker::new(scenario.max_rounds, scenario.workload),
            print_trace,
        ),
        "lai-young" => simulate(&scenario, LaiYoung::new(scenario.workload), print_trace),
        other => Err(Error::InvalidConfig(format!("unknown protocol `{}`", other))),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("simulation failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
