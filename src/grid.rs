use std::collections::HashMap;

use crate::error::{GridError, GridResult};
use crate::model::bounds::Bounds;
use crate::model::vector3::Vector3;

pub type CellIndex = (i64, i64, i64);

pub struct Grid {
	pub bounds: Bounds,
	pub grid_size: u32,
	pub cell_size: Vector3,
	cells: HashMap<CellIndex, Vec<Vector3>>,
}

impl Grid {
	pub fn num_cells(&self) -> usize {
		self.cells.len()
	}

	pub fn num_points(&self) -> usize {
		self.cells.values().map(Vec::len).sum()
	}

	pub fn cell(&self, index: CellIndex) -> Option<&[Vector3]> {
		self.cells.get(&index).map(Vec::as_slice)
	}

	/// Cells ordered by index triple, the canonical enumeration order.
	pub fn sorted_cells(&self) -> Vec<(CellIndex, &[Vector3])> {
		let mut cells: Vec<(CellIndex, &[Vector3])> = self
			.cells
			.iter()
			.map(|(index, points)| (*index, points.as_slice()))
			.collect();
		cells.sort_by_key(|(index, _points)| *index);
		cells
	}
}

pub fn bucket_points(points: &[Vector3], bounds: &Bounds, grid_size: u32) -> GridResult<Grid> {
	if grid_size == 0 {
		return Err(GridError::InvalidGridSize(grid_size));
	}

	let cell_size = bounds.size() * (1.0 / f64::from(grid_size));
	let mut cells: HashMap<CellIndex, Vec<Vector3>> = HashMap::new();
	for point in points {
		let index = (
			axis_index(point.x, bounds.min.x, cell_size.x, grid_size),
			axis_index(point.y, bounds.min.y, cell_size.y, grid_size),
			axis_index(point.z, bounds.min.z, cell_size.z, grid_size),
		);
		cells.entry(index).or_default().push(*point);
	}

	Ok(Grid {
		bounds: bounds.clone(),
		grid_size,
		cell_size,
		cells,
	})
}

fn axis_index(coord: f64, min: f64, cell_size: f64, grid_size: u32) -> i64 {
	if cell_size == 0.0 {
		// Flat axis: the whole bounds collapse into a single cell.
		return 0;
	}
	let index = ((coord - min) / cell_size).floor() as i64;
	// A point exactly on the max face belongs to the last cell.
	index.clamp(0, i64::from(grid_size) - 1)
}
