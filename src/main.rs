use clap::Parser;
use gridtour::search::Grid;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(value_name = "GRID")]
    grid: PathBuf,
}

fn main() {
    let args = Args::parse();
    match Grid::from_path(&args.grid) {
        Ok(grid) => println!("{}", grid),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
