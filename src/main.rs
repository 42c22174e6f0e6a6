use std::path::Path;
use std::process::ExitCode;

use log::{error, info};

use cloud_grid::error::GridResult;
use cloud_grid::grid::bucket_points;
use cloud_grid::model::bounds::find_bounds;
use cloud_grid::ply_reader;
use cloud_grid::summary::write_summary;

fn main() -> ExitCode {
	env_logger::init();

	let args: Vec<String> = std::env::args().collect();
	if args.len() < 3 {
		eprintln!("usage: {} <input.ply> <grid-size> [summary.json]", args[0]);
		return ExitCode::FAILURE;
	}
	let Ok(grid_size) = args[2].parse::<u32>() else {
		eprintln!("grid size must be a non-negative integer, got {:?}", args[2]);
		return ExitCode::FAILURE;
	};

	match run(Path::new(&args[1]), grid_size, args.get(3).map(Path::new)) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}

fn run(input: &Path, grid_size: u32, summary_path: Option<&Path>) -> GridResult<()> {
	let points = ply_reader::load(input)?;
	info!("loaded {} points from {}", points.len(), input.display());

	let bounds = find_bounds(&points)?;
	info!("bounds {:?} to {:?}", bounds.min.to_array(), bounds.max.to_array());

	let grid = bucket_points(&points, &bounds, grid_size)?;
	info!(
		"bucketed {} points into {} non-empty cells",
		grid.num_points(),
		grid.num_cells()
	);

	if let Some(path) = summary_path {
		write_summary(&grid, path)?;
		info!("wrote summary to {}", path.display());
	}
	Ok(())
}
