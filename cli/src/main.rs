use std::{error::Error, io::Write};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use ::facecube::prelude::*;

mod render;

/// Turn, scramble and unscramble a 3x3x3 cube
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Apply a sequence of turns on the cube (e.g. "R U R' U'")
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Start from a cube string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Scramble the cube after the sequence
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Seed for the scramble, for reproducible scrambles
	#[arg(long)]
	seed: Option<u64>,

	/// Undo every turn made since the last scramble started (all turns if there was none)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Output the cube as an SVG image
	#[arg(long, default_value_t = false, conflicts_with = "char_print")]
	svg: bool,

	/// Print the move log and the step count
	#[arg(short, long, default_value_t = false)]
	log: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::builder()
		.filter_module(
			"facecube",
			if cfg!(debug_assertions) {
				log::LevelFilter::Debug
			} else {
				log::LevelFilter::Warn
			},
		)
		.parse_default_env()
		.init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	// Parses a cube out of the cube string
	let mut session = if args.set.is_empty() {
		Session::new()
	} else {
		Session::from_cube(args.set.parse::<FaceCube>()?)
	};

	for turn in parse_turns(&args.sequence)? {
		session.rotate(turn);
	}

	if args.random {
		match args.seed {
			Some(seed) => session.scramble_with(&mut StdRng::seed_from_u64(seed)),
			None => session.scramble(),
		}
	}

	if args.solve {
		if !session.has_pending_scramble() {
			log::warn!("nothing to undo");
		}
		session.solve();
	}

	if args.log {
		for entry in session.log() {
			writeln!(out, "{}", entry)?;
		}
		writeln!(out, "{}", session.steps_label())?;
	}

	// Print the resulting cube (either as a string, an image or with colors)
	let cube = session.cube_string();
	if args.char_print {
		writeln!(out, "{}", cube)?;
	} else if args.svg {
		writeln!(out, "{}", render::svg(&cube)?)?;
	} else {
		write!(out, "{}", render::ansi(&cube)?)?;
	}

	Ok(())
}
