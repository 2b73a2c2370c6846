use std::{path::PathBuf, time::Duration};

use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use u_kmove::io::{read_instance, read_moves, save_moves};
use u_kmove::search::{SearchConfig, Strategy};
use u_kmove::{combine_moves, KmoveError};

fn cli() -> Command {
    Command::new("kmove-combine")
        .about("Combines disjoint k-moves into gainful larger k-moves")
        .arg(
            arg!(<INSTANCE> "TSPLIB instance file with a NODE_COORD_SECTION")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(<MOVES> "JSON file of disjoint base moves")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(<KMIN> "Minimum combined move size")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            arg!(<OUTPUT> "Where to write the combined moves as JSON")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"max-calls" [MAX_CALLS] "Abort after this many search calls")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--"time-limit" [SECS] "Abort after this many seconds of search")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--iterative "Use the explicit-stack search instead of recursion")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let instance = required::<PathBuf>(matches, "INSTANCE")?;
    let moves_path = required::<PathBuf>(matches, "MOVES")?;
    let output = required::<PathBuf>(matches, "OUTPUT")?;
    let config = search_config(matches)?;

    let points = read_instance(&instance)
        .with_context(|| format!("reading instance {}", instance.display()))?;
    let base_moves = read_moves(&moves_path)
        .with_context(|| format!("reading moves {}", moves_path.display()))?;

    let outcome = combine_moves(&points, &base_moves, &config)?;
    info!("got {} move combinations.", outcome.moves.len());
    info!("function calls: {}", outcome.stats.calls);

    save_moves(&output, &outcome.moves)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn search_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let kmin = required::<i64>(matches, "KMIN")?;
    let kmin = usize::try_from(kmin).map_err(|_| KmoveError::InvalidKmin(kmin))?;

    let mut config = SearchConfig::new(kmin);
    if matches.get_flag("iterative") {
        config = config.with_strategy(Strategy::ExplicitStack);
    }
    if let Some(&max_calls) = matches.get_one::<u64>("max-calls") {
        config = config.with_max_calls(max_calls);
    }
    if let Some(&secs) = matches.get_one::<f64>("time-limit") {
        let limit = Duration::try_from_secs_f64(secs)
            .map_err(|_| anyhow!("invalid time limit: {secs}"))?;
        config = config.with_time_limit(limit);
    }
    config.validate()?;
    Ok(config)
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| anyhow!("missing argument {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        cli()
            .try_get_matches_from(std::iter::once("kmove-combine").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_config_defaults() {
        let m = parse(&["a.tsp", "m.json", "4", "out.json"]);
        let config = search_config(&m).expect("valid");
        assert_eq!(config, SearchConfig::new(4));
    }

    #[test]
    fn test_config_flags() {
        let m = parse(&[
            "a.tsp",
            "m.json",
            "3",
            "out.json",
            "--max-calls",
            "100",
            "--time-limit",
            "1.5",
            "--iterative",
        ]);
        let config = search_config(&m).expect("valid");
        assert_eq!(config.strategy, Strategy::ExplicitStack);
        assert_eq!(config.max_calls, Some(100));
        assert_eq!(config.time_limit, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_negative_kmin_rejected() {
        let m = parse(&["a.tsp", "m.json", "-2", "out.json"]);
        let err = search_config(&m).expect_err("negative kmin");
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_zero_kmin_rejected() {
        let m = parse(&["a.tsp", "m.json", "0", "out.json"]);
        assert!(search_config(&m).is_err());
    }

    #[test]
    fn test_run_missing_instance_fails() {
        let instance = std::env::temp_dir().join("u-kmove-no-such-instance.tsp");
        let instance = instance.to_str().expect("utf-8 temp path");
        let m = parse(&[instance, "m.json", "2", "out.json"]);
        let err = run(&m).expect_err("instance does not exist");
        assert_eq!(err.to_string(), format!("reading instance {instance}"));
        assert!(format!("{err:#}").contains("IO error"));
    }

    #[test]
    fn test_missing_positional() {
        assert!(cli()
            .try_get_matches_from(["kmove-combine", "a.tsp", "m.json"])
            .is_err());
    }
}
