use crate::error::{GridError, GridResult};
use crate::model::vector3::Vector3;
use ord_subset::OrdSubsetIterExt;

#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
	pub min: Vector3,
	pub max: Vector3,
}

impl Bounds {
	pub fn new(min: Vector3, max: Vector3) -> Bounds {
		Bounds { min, max }
	}

	pub fn size(&self) -> Vector3 {
		self.max - self.min
	}

	pub fn contains(&self, point: &Vector3) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}
}

pub fn find_bounds(points: &[Vector3]) -> GridResult<Bounds> {
	if points.is_empty() {
		return Err(GridError::EmptyCloud);
	}

	let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
	let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
	let zs: Vec<f64> = points.iter().map(|p| p.z).collect();

	// The unwraps cannot fire: the slices are non-empty by the check above.
	Ok(Bounds::new(
		Vector3::new(
			*xs.iter().ord_subset_min().unwrap(),
			*ys.iter().ord_subset_min().unwrap(),
			*zs.iter().ord_subset_min().unwrap(),
		),
		Vector3::new(
			*xs.iter().ord_subset_max().unwrap(),
			*ys.iter().ord_subset_max().unwrap(),
			*zs.iter().ord_subset_max().unwrap(),
		),
	))
}
