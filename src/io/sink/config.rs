use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum DestinationMode {
  /// Replace the destination with the chunk.
  #[default]
  Truncate,
  /// Overwrite the bytes starting at the offset, keep everything else.
  OverwriteAt(u64),
  /// Write after the current end of the destination.
  Append,
}

#[derive(derivative::Derivative, Clone)]
#[derivative(Default, Debug)]
pub struct SinkConfig {
  pub output_file: PathBuf,
  pub mode: DestinationMode,
}

impl SinkConfig {
  pub fn new() -> Self {
    SinkConfig::default()
  }
}

impl From<&crate::config::Args> for SinkConfig {
  fn from(args: &crate::config::Args) -> Self {
    let mode = match (args.append, args.dest_offset) {
      (true, _) => DestinationMode::Append,
      (false, Some(offset)) => DestinationMode::OverwriteAt(offset),
      (false, None) => DestinationMode::Truncate,
    };
    SinkConfig {
      output_file: args.dest.clone(),
      mode,
    }
  }
}
