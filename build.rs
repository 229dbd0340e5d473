use std::error::Error;
use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};


fn main() -> Result<(), Box<dyn Error>> {
    // Emit the instructions
    let build = BuildBuilder::default().build_timestamp(true).build()?;
    let cargo = CargoBuilder::default().opt_level(true).build()?;
    let rustc = RustcBuilder::default().semver(true).build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    Ok(())
}
