use std::io::SeekFrom;

use tokio::io::{AsyncSeekExt, AsyncWriteExt};

use crate::io::error::{IoError, IoStage};
use crate::io::sink::config::{DestinationMode, SinkConfig};

#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct DataSink {
  #[derivative(Debug = "ignore")]
  pub sink: tokio::fs::File,
  pub mode: DestinationMode,
  pub position: u64,
}



impl DataSink {
  #[tracing::instrument(level = "debug", err)]
  pub async fn new(args: &SinkConfig) -> Result<Self, IoError> {
    let mut options = tokio::fs::OpenOptions::new();
    match args.mode {
      DestinationMode::Truncate => options.write(true).create(true).truncate(true),
      DestinationMode::OverwriteAt(_) => options.read(true).write(true).create(true),
      DestinationMode::Append => options.append(true).create(true),
    };
    let sink = options.open(&args.output_file).await.map_err(IoError::at(IoStage::Open))?;

    Ok(DataSink {
      sink,
      mode: args.mode,
      position: 0,
    })
  }

  /// Moves the write cursor for `OverwriteAt`; append and truncate never seek.
  pub async fn position_cursor(&mut self) -> Result<(), IoError> {
    if let DestinationMode::OverwriteAt(offset) = self.mode {
      self.position = self.sink.seek(SeekFrom::Start(offset)).await.map_err(IoError::at(IoStage::Seek))?;
    }
    Ok(())
  }

  pub async fn write_chunk(&mut self, data: &[u8]) -> Result<(), IoError> {
    tracing::debug!("Writing packet of {} bytes", data.len());
    self.sink.write_all(data).await.map_err(IoError::at(IoStage::Write))?;
    // tokio hands writes to a blocking pool, flush waits for them to land
    self.sink.flush().await.map_err(IoError::at(IoStage::Flush))?;
    self.position += data.len() as u64;
    Ok(())
  }

  /// Opens the destination per its mode, writes `data` once and closes it.
  #[tracing::instrument(skip(data), level = "debug", err)]
  pub async fn write_range(config: &SinkConfig, data: &[u8]) -> Result<u64, IoError> {
    let mut data_sink = DataSink::new(config).await?;
    data_sink.position_cursor().await?;
    data_sink.write_chunk(data).await?;
    Ok(data.len() as u64)
  }
}
