//! This is a simple example how to turn the cube.
//!
//! ```
//! use ::facecube::prelude::*;
//!
//! let mut session = Session::new();
//!
//! for turn in parse_turns("R U R' U'").unwrap() {
//! 	session.rotate(turn);
//! }
//! assert_eq!(session.step_count(), 4);
//!
//! session.scramble();
//! session.solve();
//!
//! // The scramble is undone, the four turns before it are not
//! assert!(!session.cube().is_solved());
//! session.reset();
//! assert_eq!(session.cube_string().len(), 54);
//! ```
//!
//! Faces are stored as nine stickers each, row-major as seen when looking
//! straight at the face. Cube strings list the faces in the order
//! Up, Right, Front, Down, Left, Back.

pub mod cube;
pub mod session;

pub mod prelude {
	pub use crate::cube::{facecube::*, face::*, ring::*, turn::*, *};
	pub use crate::session::*;
}
