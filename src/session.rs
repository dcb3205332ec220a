//! The cube state machine.
//!
//! A [`Session`] owns a [`FaceCube`] together with everything that happens
//! to it: the step counter, the move log and the record of the most recent
//! scramble. Front ends subscribe to [`Event`]s instead of being called
//! directly by the cube.

use rand::Rng;

use crate::cube::{facecube::FaceCube, turn::Turn, Face, RubiksCube};

/// The number of turns in a scramble.
pub const SCRAMBLE_LENGTH: usize = 10;

/// One line of the move log.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogEntry {
	Rotate(Turn),
	ScrambleComplete,
	Solving,
	Solved,
}

impl std::fmt::Display for LogEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			LogEntry::Rotate(turn) => write!(f, "{}", turn.log_entry()),
			LogEntry::ScrambleComplete => write!(f, "--- Scramble Complete ---"),
			LogEntry::Solving => write!(f, "Solving..."),
			LogEntry::Solved => write!(f, "--- Solved ---"),
		}
	}
}

/// Sent to every subscriber after the session changed.
#[derive(Debug)]
pub enum Event<'a> {
	/// A face was turned.
	Rotated {
		turn: Turn,
		cube: &'a FaceCube,
		step_count: usize,
	},
	/// A marker was written to the move log.
	Logged(&'a LogEntry),
	/// The session went back to the solved cube.
	Reset { cube: &'a FaceCube },
}

/// Handle returned by [`Session::subscribe`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(&Event<'_>)>;

/// A cube with its history.
#[derive(Default)]
pub struct Session {
	cube: FaceCube,
	step_count: usize,
	log: Vec<LogEntry>,
	scramble: Vec<Turn>,
	observers: Vec<(SubscriptionId, Observer)>,
	next_id: usize,
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("cube", &self.cube.to_string())
			.field("step_count", &self.step_count)
			.field("log", &self.log)
			.field("scramble", &self.scramble)
			.field("observers", &self.observers.len())
			.finish()
	}
}

impl Session {
	/// A session on a solved cube.
	pub fn new() -> Self {
		Self::default()
	}

	/// A session starting from the given cube, with no history.
	/// [`Session::reset`] still goes back to the solved cube.
	pub fn from_cube(cube: FaceCube) -> Self {
		Self {
			cube,
			..Self::default()
		}
	}

	pub fn cube(&self) -> &FaceCube {
		&self.cube
	}

	/// The 54 character cube string.
	pub fn cube_string(&self) -> String {
		String::from(&self.cube)
	}

	/// Turns applied since the last reset, whatever caused them.
	pub fn step_count(&self) -> usize {
		self.step_count
	}

	pub fn steps_label(&self) -> String {
		format!("Steps to solve: {}", self.step_count)
	}

	pub fn log(&self) -> &[LogEntry] {
		&self.log
	}

	/// The turns [`Session::solve`] would undo.
	pub fn scramble_record(&self) -> &[Turn] {
		&self.scramble
	}

	pub fn has_pending_scramble(&self) -> bool {
		!self.scramble.is_empty()
	}

	/// Register a callback that is run after every change.
	pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
	where
		F: FnMut(&Event<'_>) + 'static,
	{
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.observers.push((id, Box::new(observer)));
		id
	}

	/// Remove a callback. Returns false if it was not registered.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let len = self.observers.len();
		self.observers.retain(|(i, _)| *i != id);
		self.observers.len() != len
	}

	fn notify(observers: &mut [(SubscriptionId, Observer)], event: &Event<'_>) {
		for (_, observer) in observers.iter_mut() {
			observer(event);
		}
	}

	fn push_marker(&mut self, entry: LogEntry) {
		self.log.push(entry);
		let Self { log, observers, .. } = self;
		if let Some(entry) = log.last() {
			Self::notify(observers, &Event::Logged(entry));
		}
	}

	/// Turn one face and record it everywhere.
	pub fn rotate(&mut self, turn: Turn) -> &FaceCube {
		self.step_count += 1;
		self.log.push(LogEntry::Rotate(turn));
		self.scramble.push(turn);
		self.cube.apply_turn(turn);
		log::debug!("step {}: {}", self.step_count, turn);

		let event = Event::Rotated {
			turn,
			cube: &self.cube,
			step_count: self.step_count,
		};
		Self::notify(&mut self.observers, &event);

		&self.cube
	}

	/// Scramble with the thread local random generator.
	pub fn scramble(&mut self) {
		self.scramble_with(&mut rand::thread_rng());
	}

	/// Scramble with the given random generator.
	/// A seeded generator always gives the same scramble.
	pub fn scramble_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		let faces: Vec<Face> = (0..SCRAMBLE_LENGTH).map(|_| rng.gen()).collect();
		self.scramble_from(faces);
	}

	/// Scramble by turning the given faces clockwise.
	/// At most [`SCRAMBLE_LENGTH`] faces are taken.
	pub fn scramble_from<I>(&mut self, faces: I)
	where
		I: IntoIterator<Item = Face>,
	{
		self.scramble.clear();
		for face in faces.into_iter().take(SCRAMBLE_LENGTH) {
			self.rotate(Turn::clockwise(face));
		}
		log::info!("scrambled: {}", self.cube);
		self.push_marker(LogEntry::ScrambleComplete);
	}

	/// Undo the recorded scramble by replaying it backwards with every turn
	/// inverted. The record is empty afterwards, so a second call only
	/// writes the log markers.
	pub fn solve(&mut self) {
		self.push_marker(LogEntry::Solving);

		let record = std::mem::take(&mut self.scramble);
		log::info!("undoing {} turns", record.len());
		for turn in record.iter().rev() {
			self.rotate(turn.inverse());
		}
		self.scramble.clear();

		self.push_marker(LogEntry::Solved);
	}

	/// Go back to the solved cube and forget all history.
	pub fn reset(&mut self) {
		self.cube = FaceCube::new();
		self.step_count = 0;
		self.log.clear();
		self.scramble.clear();
		log::info!("reset");

		let event = Event::Reset { cube: &self.cube };
		Self::notify(&mut self.observers, &event);
	}
}
