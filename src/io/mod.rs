pub mod error;
pub mod sink;
pub mod source;

use crate::environment::statistics::CopyStatistics;
use crate::io::error::CopyError;
use crate::io::sink::config::SinkConfig;
use crate::io::sink::core::DataSink;
use crate::io::source::config::SourceConfig;
use crate::io::source::core::DataSource;

/// Copies the configured range of the source into the sink.
///
/// The source is fully read and closed before the destination is opened, so
/// a read failure never touches the destination. A write failure may leave
/// the destination partially written.
#[tracing::instrument(level = "debug", err(Display))]
pub async fn copy_chunk(source: &SourceConfig, sink: &SinkConfig) -> Result<CopyStatistics, CopyError> {
  let mut statistics = CopyStatistics::new();
  statistics.init();

  tracing::info!("Preparing reader");
  let chunk = DataSource::read_range(source).await.map_err(|cause| CopyError::SourceRead {
    path: source.input_file.clone(),
    cause,
  })?;
  statistics.add_read(chunk.len() as u64);

  tracing::info!("Preparing to write data");
  let written = DataSink::write_range(sink, &chunk).await.map_err(|cause| CopyError::DestinationWrite {
    path: sink.output_file.clone(),
    cause,
  })?;
  statistics.add_write(written);

  Ok(statistics)
}
