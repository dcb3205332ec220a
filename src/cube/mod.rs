pub mod face;
pub mod facecube;
pub mod ring;
pub mod turn;

use rand::{
	distributions::{Distribution, Standard},
	Rng,
};
use strum::EnumCount;
use turn::*;

/// The dimension of the cube
pub const CUBE_DIM: usize = 3;

/// The number of facelets per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = Face::COUNT;

/// The stickers of one face, row-major as seen when looking straight at it.
pub type FaceArray = [Color; CUBE_AREA];

/// The six faces of the cube.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::Display,
)]
#[repr(usize)]
pub enum Face {
	Up,
	Down,
	Front,
	Back,
	Left,
	Right,
}

/// All faces, in declaration order.
pub const FACES: [Face; NUM_SIDES] =
	[Face::Up, Face::Down, Face::Front, Face::Back, Face::Left, Face::Right];

/// The order in which the faces are written into a cube string.
pub const STRING_ORDER: [Face; NUM_SIDES] =
	[Face::Up, Face::Right, Face::Front, Face::Down, Face::Left, Face::Back];

impl Face {
	/// The color this face carries on a solved cube.
	pub const fn home_color(self) -> Color {
		match self {
			Face::Up => Color::White,
			Face::Down => Color::Yellow,
			Face::Front => Color::Green,
			Face::Back => Color::Blue,
			Face::Left => Color::Orange,
			Face::Right => Color::Red,
		}
	}

	/// The letter used for this face in turn notation.
	pub const fn letter(self) -> char {
		match self {
			Face::Up => 'U',
			Face::Down => 'D',
			Face::Front => 'F',
			Face::Back => 'B',
			Face::Left => 'L',
			Face::Right => 'R',
		}
	}

	pub fn from_letter(c: char) -> Option<Self> {
		FACES.into_iter().find(|f| f.letter() == c)
	}
}

impl Distribution<Face> for Standard {
	/// Every face is equally likely.
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Face {
		FACES[rng.gen_range(0..NUM_SIDES)]
	}
}

/// The color of a single sticker.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum Color {
	White,
	Yellow,
	Green,
	Blue,
	Orange,
	Red,
}

impl Color {
	/// The single character code used in cube strings.
	pub const fn code(self) -> char {
		match self {
			Color::White => 'w',
			Color::Yellow => 'y',
			Color::Green => 'g',
			Color::Blue => 'b',
			Color::Orange => 'o',
			Color::Red => 'r',
		}
	}

	/// Parse a color from its code. Returns None for anything outside `wygbor`.
	pub const fn from_code(c: char) -> Option<Self> {
		let col = match c {
			'w' => Color::White,
			'y' => Color::Yellow,
			'g' => Color::Green,
			'b' => Color::Blue,
			'o' => Color::Orange,
			'r' => Color::Red,
			_ => return None,
		};
		Some(col)
	}
}

/// Returns the ANSI-colorcode for the given color.
pub fn get_ansii_color(color: Color) -> &'static str {
	match color {
		Color::White => "\x1b[97m",
		Color::Yellow => "\x1b[93m",
		Color::Green => "\x1b[32m",
		Color::Blue => "\x1b[34m",
		Color::Orange => "\x1b[38;5;208m",
		Color::Red => "\x1b[31m",
	}
}

/// The RubiksCube trait.
pub trait RubiksCube {
	fn apply_turn(&mut self, turn: Turn);

	/// Apply the given sequence of turns.
	fn apply_turns<I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = Turn>,
	{
		for turn in turns {
			self.apply_turn(turn);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};
	use strum::IntoEnumIterator;

	#[test]
	/// Every face has its own home color
	fn home_colors_are_distinct() {
		let mut seen = Vec::new();
		for face in Face::iter() {
			let c = face.home_color();
			assert!(!seen.contains(&c), "{face} shares its color");
			seen.push(c);
		}
		assert_eq!(seen.len(), Color::COUNT);
	}

	#[test]
	/// Color codes and face letters parse back
	fn codes_and_letters() {
		for color in Color::iter() {
			assert_eq!(Color::from_code(color.code()), Some(color));
		}
		for face in Face::iter() {
			assert_eq!(Face::from_letter(face.letter()), Some(face));
		}
		assert_eq!(Color::from_code('x'), None);
		assert_eq!(Face::from_letter('M'), None);
	}

	#[test]
	/// Every face gets picked by the random source
	fn random_faces_cover_all_sides() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut hits = [0usize; NUM_SIDES];
		for _ in 0..600 {
			let face: Face = rng.gen();
			hits[face as usize] += 1;
		}
		assert!(hits.iter().all(|&h| h > 0));
	}

	#[test]
	/// The string order is a permutation of all faces
	fn string_order_covers_all_faces() {
		for face in Face::iter() {
			assert_eq!(STRING_ORDER.iter().filter(|&&f| f == face).count(), 1);
		}
	}
}
