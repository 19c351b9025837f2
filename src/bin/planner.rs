use clap::Parser;
use gridtour::search::{
    validate, ConfigError, Grid, GridProblem, HeuristicName, SearchConfig, SearchEngine,
    SearchEngineName, SearchProblem, SearchResult, Verbosity,
};
use std::{path::PathBuf, process::ExitCode, sync::Arc};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Find a shortest tour through every residence of a grid.
struct Cli {
    #[arg(help = "The grid description file")]
    grid: PathBuf,
    #[arg(
        help = "A TOML file with search settings, overridden by the flags below",
        short = 'c',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "The output plan file, no file is written if omitted",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: astar]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use, only used by A* [default: zero]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(
        help = "Give up after this long, e.g. \"30s\" or \"5m\"",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<String>,
    #[arg(
        help = "Give up once resident memory exceeds this many megabytes",
        short = 'm',
        long = "memory-limit",
        id = "MEMORY_LIMIT_MB"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "Give up after expanding this many nodes",
        short = 'x',
        long = "expansion-limit",
        id = "EXPANSION_LIMIT"
    )]
    expansion_limit: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level [default: normal]",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

impl Cli {
    /// Settings from the config file, if any, with command line flags taking
    /// precedence.
    fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_path(path)?,
            None => SearchConfig::default(),
        };
        if let Some(engine) = self.search_engine_name {
            config.engine = engine;
        }
        if let Some(heuristic) = self.heuristic_name {
            config.heuristic = heuristic;
        }
        if let Some(time_limit) = &self.time_limit {
            config.time_limit = Some(time_limit.clone());
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            config.memory_limit_mb = Some(memory_limit_mb);
        }
        if let Some(expansion_limit) = self.expansion_limit {
            config.expansion_limit = Some(expansion_limit);
        }
        if let Some(verbosity) = self.verbosity {
            config.verbosity = verbosity;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.search_config();
    let verbosity = match &config {
        Ok(config) => config.verbosity,
        Err(_) => cli.verbosity.unwrap_or_default(),
    };

    let level: tracing::Level = verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let grid = match Grid::from_path(&cli.grid) {
        Ok(grid) => Arc::new(grid),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        rows = grid.rows(),
        columns = grid.columns(),
        residences = grid.num_residences(),
        obstacles = grid.num_obstacles(),
        "loaded grid"
    );

    plan(&cli, &config, grid)
}

fn plan(cli: &Cli, config: &SearchConfig, grid: Arc<Grid>) -> ExitCode {
    let termination_condition = match config.termination_condition() {
        Ok(condition) => condition,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let problem = GridProblem::new(grid.clone());
    let mut engine = config.engine.create(config.heuristic.create());
    let (result, _statistics) = engine.search(&problem, termination_condition);

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            if let Err(e) = validate(&plan, &grid) {
                error!("plan is invalid: {}", e);
                return ExitCode::FAILURE;
            }
            info!("plan is valid");
            info!(plan_length = plan.len());

            println!("Plan found:");
            if !plan.is_empty() {
                println!("{}", plan);
            }
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", problem.cost_of_actions(&plan));

            if let Some(plan_path) = &cli.plan {
                if let Err(e) = std::fs::write(plan_path, format!("{}\n", plan)) {
                    error!("failed to write plan file: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        _ => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "engine = \"dfs\"\nverbosity = \"debug\"").unwrap();
        let config_path = file.path().to_str().unwrap();

        let cli = Cli::parse_from(["planner", "grid.txt", "-c", config_path, "-v", "silent"]);
        let config = cli.search_config().unwrap();
        assert_eq!(config.engine, SearchEngineName::Dfs);
        assert_eq!(config.verbosity, Verbosity::Silent);
    }

    #[test]
    fn config_errors_keep_their_kind() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "engine = \"gbfs\"").unwrap();
        let config_path = file.path().to_str().unwrap();

        let cli = Cli::parse_from(["planner", "grid.txt", "-c", config_path]);
        assert!(matches!(cli.search_config(), Err(ConfigError::Parse(_))));

        let cli = Cli::parse_from(["planner", "grid.txt", "-c", "/nonexistent/config.toml"]);
        assert!(matches!(cli.search_config(), Err(ConfigError::Io(_))));
    }
}
