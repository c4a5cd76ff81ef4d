use vergen_gitcl::{CargoBuilder, Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Default values are emitted when git metadata is unavailable (e.g. a
	// source tarball build), so downstream `env!` lookups never fail.
	Emitter::default()
		.add_instructions(&CargoBuilder::all_cargo()?)?
		.add_instructions(&GitclBuilder::all_git()?)?
		.emit()?;

	Ok(())
}
