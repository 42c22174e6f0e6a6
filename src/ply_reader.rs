use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{GridError, GridResult};
use crate::model::vector3::Vector3;

const COUNT_DECLARATION: &str = "element vertex";
const HEADER_SENTINEL: &str = "end_header";

pub fn load(path: &Path) -> GridResult<Vec<Vector3>> {
	let buffer = fs::read(path).map_err(|source| GridError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	from_ply(&buffer)
}

pub fn from_ply(buf: &[u8]) -> GridResult<Vec<Vector3>> {
	let text = String::from_utf8_lossy(buf);
	let mut points: Vec<Vector3> = Vec::new();
	let mut declared_count = 0;
	let mut in_data = false;

	for (index, line) in text.lines().enumerate() {
		let line_number = index + 1;
		if !in_data {
			if line.starts_with(COUNT_DECLARATION) {
				declared_count = parse_declared_count(line, line_number)?;
			} else if line.starts_with(HEADER_SENTINEL) {
				in_data = true;
			}
			continue;
		}

		if points.len() >= declared_count {
			break;
		}

		let fields: Vec<&str> = line.split_whitespace().collect();
		if fields.len() < 3 {
			// Short records are skipped rather than failing the whole parse.
			debug!("skipping line {line_number}: fewer than three fields");
			continue;
		}

		points.push(Vector3 {
			x: parse_coordinate(fields[0], line_number)?,
			y: parse_coordinate(fields[1], line_number)?,
			z: parse_coordinate(fields[2], line_number)?,
		});
	}

	debug!("parsed {} of {} declared points", points.len(), declared_count);
	Ok(points)
}

fn parse_declared_count(line: &str, line_number: usize) -> GridResult<usize> {
	let field = line.split_whitespace().nth(2).ok_or(GridError::Parse {
		line: line_number,
		message: "count declaration is missing its count field".to_string(),
	})?;
	field.parse().map_err(|_| GridError::Parse {
		line: line_number,
		message: format!("invalid vertex count {field:?}"),
	})
}

fn parse_coordinate(field: &str, line_number: usize) -> GridResult<f64> {
	field.parse().map_err(|_| GridError::Parse {
		line: line_number,
		message: format!("invalid coordinate {field:?}"),
	})
}
