use std::str::FromStr;

use crate::cube::{
	face::{rotate_face_ccw, rotate_face_cw},
	ring::{ring, Triple},
	turn::*,
	*,
};

/// The length of a cube string.
pub const CUBE_STRING_LEN: usize = CUBE_AREA * NUM_SIDES;

/// A Rubiks Cube representation, using one color array per face.
///
/// Every face always holds exactly nine stickers. The state can only be
/// changed through [`RubiksCube::apply_turn`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FaceCube {
	faces: [FaceArray; NUM_SIDES],
}

impl Default for FaceCube {
	/// Creates a *solved* rubiks cube!
	fn default() -> Self {
		let mut faces = [[Color::White; CUBE_AREA]; NUM_SIDES];
		for face in FACES {
			faces[face as usize] = [face.home_color(); CUBE_AREA];
		}
		Self { faces }
	}
}

impl FaceCube {
	pub fn new() -> Self {
		Self::default()
	}

	/// The stickers of the given face.
	pub fn face(&self, face: Face) -> &FaceArray {
		&self.faces[face as usize]
	}

	/// Whether every face carries only its home color.
	pub fn is_solved(&self) -> bool {
		*self == Self::default()
	}

	fn read_triple(&self, face: Face, triple: Triple) -> [Color; 3] {
		triple.map(|idx| self.faces[face as usize][idx])
	}
}

impl RubiksCube for FaceCube {
	fn apply_turn(&mut self, turn: Turn) {
		let idx = turn.face as usize;
		self.faces[idx] = match turn.direction {
			Direction::Clockwise => rotate_face_cw(&self.faces[idx]),
			Direction::CounterClockwise => rotate_face_ccw(&self.faces[idx]),
		};

		// Read all four triples before writing any of them
		let sides = ring(turn.face);
		let before = sides.map(|(face, triple)| self.read_triple(face, triple));

		let shift = turn.direction.ring_shift();
		for (i, colors) in before.into_iter().enumerate() {
			let (face, triple) = sides[(i + shift) % sides.len()];
			log::trace!("{turn}: {:?} -> {face} {triple:?}", sides[i]);
			for (idx, color) in triple.into_iter().zip(colors) {
				self.faces[face as usize][idx] = color;
			}
		}
	}
}

/// The 54 sticker codes, face by face in [`STRING_ORDER`].
impl std::fmt::Display for FaceCube {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for face in STRING_ORDER {
			for color in self.face(face) {
				write!(f, "{}", color.code())?;
			}
		}
		Ok(())
	}
}

impl From<&FaceCube> for String {
	fn from(val: &FaceCube) -> Self {
		val.to_string()
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FromStrError {
	#[error("The given string does not have length {}", CUBE_STRING_LEN)]
	Length,
	#[error("Unknown color code '{1}' at position {0}")]
	Color(usize, char),
}

/// Parses a cube string. Only the length and the alphabet are checked,
/// the stickers do not have to form a reachable cube.
impl FromStr for FaceCube {
	type Err = FromStrError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.chars().count() != CUBE_STRING_LEN {
			return Err(FromStrError::Length);
		}

		let mut cube = FaceCube::new();
		for (i, c) in s.chars().enumerate() {
			let color = Color::from_code(c).ok_or(FromStrError::Color(i, c))?;
			let face = STRING_ORDER[i / CUBE_AREA];
			cube.faces[face as usize][i % CUBE_AREA] = color;
		}

		Ok(cube)
	}
}

// ===== Tests =====
