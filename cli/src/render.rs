//! Drawing a cube from its 54 character string.
//!
//! The renderers only know the string, never the cube itself.

use ::facecube::prelude::*;

/// Size of one sticker in the SVG drawing, in pixels.
const SQUARE: usize = 30;

/// Where each face of the net is drawn, in units of one face.
/// The faces are listed in the order of the cube string.
const NET_OFFSETS: [(Face, usize, usize); NUM_SIDES] = [
	(Face::Up, 1, 0),
	(Face::Right, 2, 1),
	(Face::Front, 1, 1),
	(Face::Down, 1, 2),
	(Face::Left, 0, 1),
	(Face::Back, 3, 1),
];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RenderError {
	#[error("Invalid cube string: expected {} stickers, got {0}", CUBE_STRING_LEN)]
	Length(usize),
	#[error("Invalid cube string: unknown color '{0}'")]
	Color(char),
}

fn colors(cube: &str) -> Result<Vec<Color>, RenderError> {
	let len = cube.chars().count();
	if len != CUBE_STRING_LEN {
		return Err(RenderError::Length(len));
	}
	cube.chars()
		.map(|c| Color::from_code(c).ok_or(RenderError::Color(c)))
		.collect()
}

fn svg_fill(color: Color) -> &'static str {
	match color {
		Color::White => "white",
		Color::Yellow => "yellow",
		Color::Green => "green",
		Color::Blue => "blue",
		Color::Orange => "orange",
		Color::Red => "red",
	}
}

/// Draw the net as an SVG image.
pub fn svg(cube: &str) -> Result<String, RenderError> {
	let stickers = colors(cube)?;
	let face_px = SQUARE * CUBE_DIM;

	let mut out = String::from("<svg width=\"400\" height=\"300\">");
	for (f, (_, fx, fy)) in NET_OFFSETS.iter().enumerate() {
		for i in 0..CUBE_AREA {
			let x = (i % CUBE_DIM) * SQUARE + fx * face_px;
			let y = (i / CUBE_DIM) * SQUARE + fy * face_px;
			let fill = svg_fill(stickers[f * CUBE_AREA + i]);
			out.push_str(&format!(
				"<rect x=\"{x}\" y=\"{y}\" width=\"{SQUARE}\" height=\"{SQUARE}\" fill=\"{fill}\" stroke=\"#000\" />"
			));
		}
	}
	out.push_str("</svg>");

	Ok(out)
}

/// Draw the net with ANSI colors, one text line per sticker row.
pub fn ansi(cube: &str) -> Result<String, RenderError> {
	let stickers = colors(cube)?;
	let width = 4 * CUBE_DIM;
	let height = 3 * CUBE_DIM;

	let mut grid: Vec<Vec<Option<Color>>> = vec![vec![None; width]; height];
	for (f, (_, fx, fy)) in NET_OFFSETS.iter().enumerate() {
		for i in 0..CUBE_AREA {
			let x = fx * CUBE_DIM + i % CUBE_DIM;
			let y = fy * CUBE_DIM + i / CUBE_DIM;
			grid[y][x] = Some(stickers[f * CUBE_AREA + i]);
		}
	}

	let mut out = String::new();
	for row in grid {
		let line: String = row
			.into_iter()
			.map(|c| match c {
				Some(c) => format!("{}■ ", get_ansii_color(c)),
				None => "  ".to_string(),
			})
			.collect();
		out.push_str(line.trim_end());
		// Reset ansii color
		out.push_str("\x1b[00m\n");
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	/// The offset table follows the cube string order
	fn offsets_follow_string_order() {
		for (i, (face, _, _)) in NET_OFFSETS.iter().enumerate() {
			assert_eq!(*face, STRING_ORDER[i]);
		}
	}

	#[test]
	/// The SVG has one square per sticker at the expected places
	fn svg_of_solved_cube() {
		let s = svg(&Session::new().cube_string()).unwrap();
		assert!(s.starts_with("<svg width=\"400\" height=\"300\">"));
		assert!(s.ends_with("</svg>"));
		assert_eq!(s.matches("<rect").count(), CUBE_STRING_LEN);
		// First Up sticker and last Back sticker
		assert!(s.contains("<rect x=\"90\" y=\"0\" width=\"30\" height=\"30\" fill=\"white\""));
		assert!(s.contains("<rect x=\"330\" y=\"150\" width=\"30\" height=\"30\" fill=\"blue\""));
		assert_eq!(s.matches("fill=\"orange\"").count(), CUBE_AREA);
	}

	#[test]
	/// Strings of the wrong size or with unknown codes are not drawn
	fn invalid_strings() {
		assert_eq!(svg("wwww"), Err(RenderError::Length(4)));
		assert_eq!(ansi(""), Err(RenderError::Length(0)));
		let bad = "z".repeat(CUBE_STRING_LEN);
		assert_eq!(ansi(&bad), Err(RenderError::Color('z')));
	}

	#[test]
	/// The terminal net has nine rows with the Up face indented
	fn ansi_net_layout() {
		let s = ansi(&Session::new().cube_string()).unwrap();
		let lines: Vec<&str> = s.lines().collect();
		assert_eq!(lines.len(), 3 * CUBE_DIM);
		assert!(lines[0].starts_with("      "));
		assert_eq!(lines[4].matches('■').count(), 4 * CUBE_DIM);
		assert_eq!(lines[8].matches('■').count(), CUBE_DIM);
	}
}
