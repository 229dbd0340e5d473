use std::path::PathBuf;

#[derive(derivative::Derivative, Clone)]
#[derivative(Default, Debug)]
pub struct SourceConfig {
  pub input_file: PathBuf,
  #[derivative(Default(value = "0"))]
  pub offset: u64,
  // None reads through to the end of the file
  pub length: Option<u64>,
}

impl SourceConfig {
  pub fn new() -> Self {
    SourceConfig::default()
  }
}

impl From<&crate::config::Args> for SourceConfig {
  fn from(args: &crate::config::Args) -> Self {
    SourceConfig {
      input_file: args.src.clone(),
      offset: args.src_offset,
      length: args.length(),
    }
  }
}
