use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::grid::Grid;

#[derive(Serialize, Deserialize)]
pub struct CellSummary {
	pub index: [i64; 3],
	pub num_points: usize,
}

#[derive(Serialize, Deserialize)]
pub struct GridSummary {
	pub min: [f64; 3],
	pub max: [f64; 3],
	pub grid_size: u32,
	pub cell_size: [f64; 3],
	pub num_points: usize,
	pub cells: Vec<CellSummary>,
}

impl GridSummary {
	pub fn from_grid(grid: &Grid) -> GridSummary {
		GridSummary {
			min: grid.bounds.min.to_array(),
			max: grid.bounds.max.to_array(),
			grid_size: grid.grid_size,
			cell_size: grid.cell_size.to_array(),
			num_points: grid.num_points(),
			cells: grid
				.sorted_cells()
				.into_iter()
				.map(|(index, points)| CellSummary {
					index: [index.0, index.1, index.2],
					num_points: points.len(),
				})
				.collect(),
		}
	}
}

pub fn write_summary(grid: &Grid, path: &Path) -> GridResult<()> {
	let file = File::create(path).map_err(|source| GridError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::to_writer_pretty(file, &GridSummary::from_grid(grid)).map_err(|source| {
		GridError::Io {
			path: path.to_path_buf(),
			source: source.into(),
		}
	})?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::grid::bucket_points;
	use crate::model::bounds::find_bounds;
	use crate::model::vector3::Vector3;
	use std::env;
	use std::fs;

	fn setup_grid() -> Grid {
		let points = vec![
			Vector3::new(0.0, 0.0, 0.0),
			Vector3::new(1.0, 1.0, 1.0),
			Vector3::new(2.0, 2.0, 2.0),
		];
		let bounds = find_bounds(&points).unwrap();
		bucket_points(&points, &bounds, 2).unwrap()
	}

	#[test]
	fn test_summary_matches_grid() {
		let grid = setup_grid();
		let summary = GridSummary::from_grid(&grid);

		assert_eq!(summary.min, [0.0, 0.0, 0.0]);
		assert_eq!(summary.max, [2.0, 2.0, 2.0]);
		assert_eq!(summary.grid_size, 2);
		assert_eq!(summary.cells.len(), 2);
		assert_eq!(summary.cells[0].index, [0, 0, 0]);
		assert_eq!(summary.cells[1].index, [1, 1, 1]);

		let counted: usize = summary.cells.iter().map(|c| c.num_points).sum();
		assert_eq!(counted, summary.num_points);
	}

	#[test]
	fn test_write_summary_round_trip() -> GridResult<()> {
		let grid = setup_grid();
		let path = env::temp_dir().join("cloud_grid_summary_test.json");
		write_summary(&grid, &path)?;

		let contents = fs::read_to_string(&path).unwrap();
		let summary: GridSummary = serde_json::from_str(&contents).unwrap();
		assert_eq!(summary.num_points, 3);
		assert_eq!(summary.cells[1].num_points, 2);

		fs::remove_file(&path).unwrap();
		Ok(())
	}
}
