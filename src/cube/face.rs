//! Quarter turns of a single face.
//!
//! A face is indexed row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! A permutation `p` maps the old face `s` to the new face `n` with
//! `n[i] = s[ p[i] ]`.

use const_for::const_for;

use crate::cube::{FaceArray, CUBE_AREA, CUBE_DIM};

type Permutation = [usize; CUBE_AREA];

/// Build the clockwise permutation from the grid geometry:
/// the cell at (row, col) receives the cell at (2 - col, row).
const fn generate_clockwise() -> Permutation {
	let mut out = [0; CUBE_AREA];

	const_for!(row in 0..CUBE_DIM => {
		const_for!(col in 0..CUBE_DIM => {
			out[row * CUBE_DIM + col] = (CUBE_DIM - 1 - col) * CUBE_DIM + row;
		});
	});

	out
}

const fn invert(p: Permutation) -> Permutation {
	let mut out = [0; CUBE_AREA];

	const_for!(i in 0..CUBE_AREA => {
		out[p[i]] = i;
	});

	out
}

/// `[6, 3, 0, 7, 4, 1, 8, 5, 2]`
const P_CLOCKWISE: Permutation = generate_clockwise();

/// `[2, 5, 8, 1, 4, 7, 0, 3, 6]`
const P_COUNTER_CLOCKWISE: Permutation = invert(P_CLOCKWISE);

fn permute(face: &FaceArray, p: &Permutation) -> FaceArray {
	let mut out = *face;
	for (i, &src) in p.iter().enumerate() {
		out[i] = face[src];
	}
	out
}

/// Rotate the stickers of a face a quarter turn clockwise.
/// The center stays where it is.
pub fn rotate_face_cw(face: &FaceArray) -> FaceArray {
	permute(face, &P_CLOCKWISE)
}

/// Rotate the stickers of a face a quarter turn counter-clockwise.
pub fn rotate_face_ccw(face: &FaceArray) -> FaceArray {
	permute(face, &P_COUNTER_CLOCKWISE)
}
