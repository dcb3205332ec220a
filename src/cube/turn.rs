use std::str::FromStr;

use crate::cube::Face;

/// The way a face is turned, as seen when looking straight at it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[derive(strum::EnumIter, strum::Display)]
pub enum Direction {
	#[default]
	Clockwise,
	CounterClockwise,
}

impl Direction {
	/// The direction that undoes this one.
	pub const fn inverse(self) -> Self {
		match self {
			Direction::Clockwise => Direction::CounterClockwise,
			Direction::CounterClockwise => Direction::Clockwise,
		}
	}

	/// How many ring slots a triple moves forward.
	pub(crate) const fn ring_shift(self) -> usize {
		match self {
			Direction::Clockwise => 1,
			Direction::CounterClockwise => 3,
		}
	}
}

/// A quarter turn of one face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub face: Face,
	pub direction: Direction,
}

impl Turn {
	pub const fn new(face: Face, direction: Direction) -> Self {
		Self { face, direction }
	}

	pub const fn clockwise(face: Face) -> Self {
		Self::new(face, Direction::Clockwise)
	}

	pub const fn counter_clockwise(face: Face) -> Self {
		Self::new(face, Direction::CounterClockwise)
	}

	/// The turn which negates this one.
	pub const fn inverse(self) -> Self {
		Self::new(self.face, self.direction.inverse())
	}

	/// The human readable move log line, e.g. `Rotate Front Clockwise`.
	pub fn log_entry(&self) -> String {
		format!("Rotate {} {}", self.face, self.direction)
	}
}

/// Singmaster notation: `F` or `F'`.
impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.face.letter())?;
		match self.direction {
			Direction::Clockwise => Ok(()),
			Direction::CounterClockwise => write!(f, "'"),
		}
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TurnParseError {
	#[error("Empty turn")]
	Empty,
	#[error("Unknown face '{0}' in turn \"{1}\"")]
	Face(char, String),
	#[error("Unknown suffix in turn \"{0}\"")]
	Suffix(String),
}

/// Split a token into its face and the rest.
fn split_token(item: &str) -> Result<(Face, &str), TurnParseError> {
	let mut chars = item.chars();
	let c = chars.next().ok_or(TurnParseError::Empty)?;
	let face = Face::from_letter(c).ok_or_else(|| TurnParseError::Face(c, item.to_string()))?;
	Ok((face, chars.as_str()))
}

impl FromStr for Turn {
	type Err = TurnParseError;

	fn from_str(item: &str) -> Result<Self, Self::Err> {
		let (face, suffix) = split_token(item)?;
		let direction = match suffix {
			"" => Direction::Clockwise,
			"'" => Direction::CounterClockwise,
			_ => return Err(TurnParseError::Suffix(item.to_string())),
		};
		Ok(Self::new(face, direction))
	}
}

/// Parse a whitespace separated sequence of turns.
/// A half turn like `R2` becomes two clockwise quarter turns.
pub fn parse_turns<T>(string: T) -> Result<Vec<Turn>, TurnParseError>
where
	T: AsRef<str>,
{
	let mut out = Vec::new();
	for item in string.as_ref().split_whitespace() {
		if let Some(half) = item.strip_suffix('2') {
			let (face, rest) = split_token(half)?;
			if !rest.is_empty() {
				return Err(TurnParseError::Suffix(item.to_string()));
			}
			out.extend([Turn::clockwise(face); 2]);
		} else {
			out.push(Turn::from_str(item)?);
		}
	}
	Ok(out)
}
