//! The ring of edge stickers around each face.
//!
//! When a face turns, three stickers on each of its four neighbors move
//! along with it. Each ring lists those neighbors in the order a clockwise
//! turn pushes stickers: the triple of entry `i` ends up in entry `i + 1`.
//! The triples are matched element by element, so index `k` of one triple
//! lands on index `k` of the next.

use crate::cube::Face;

/// Three sticker indices on one neighboring face.
pub type Triple = [usize; 3];

/// The four neighbor triples of a rotating face.
pub type Ring = [(Face, Triple); 4];

/// Returns the ring of stickers that moves together with `face`.
pub const fn ring(face: Face) -> Ring {
	use Face::*;

	match face {
		Up => [(Front, [0, 1, 2]), (Left, [0, 1, 2]), (Back, [0, 1, 2]), (Right, [0, 1, 2])],
		Down => [(Front, [6, 7, 8]), (Right, [6, 7, 8]), (Back, [6, 7, 8]), (Left, [6, 7, 8])],
		Front => [(Up, [6, 7, 8]), (Right, [0, 3, 6]), (Down, [2, 1, 0]), (Left, [8, 5, 2])],
		Back => [(Up, [2, 1, 0]), (Left, [0, 3, 6]), (Down, [6, 7, 8]), (Right, [8, 5, 2])],
		Left => [(Up, [0, 3, 6]), (Front, [0, 3, 6]), (Down, [0, 3, 6]), (Back, [8, 5, 2])],
		Right => [(Up, [8, 5, 2]), (Back, [0, 3, 6]), (Down, [8, 5, 2]), (Front, [8, 5, 2])],
	}
}
