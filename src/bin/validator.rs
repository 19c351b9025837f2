use clap::Parser;
use gridtour::search::{validate, Grid, GridProblem, Plan, SearchProblem};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Check that a plan is a legal tour of every residence of a grid.
struct Cli {
    #[arg(help = "The grid description file")]
    grid: PathBuf,
    #[arg(help = "The plan file, one action per line")]
    plan: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let grid = match Grid::from_path(&cli.grid) {
        Ok(grid) => grid,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let plan = match Plan::from_path(&cli.plan) {
        Ok(plan) => plan,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("validating plan");
    match validate(&plan, &grid) {
        Ok(()) => {
            let cost = GridProblem::from(grid).cost_of_actions(&plan);
            println!("Plan is valid, cost: {}", cost);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Plan is invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}
