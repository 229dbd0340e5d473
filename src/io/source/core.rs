use std::io::SeekFrom;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::io::error::{IoError, IoStage};
use crate::io::source::config::SourceConfig;

#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct DataSource {
  #[derivative(Debug = "ignore")]
  pub source: tokio::fs::File,
  pub file_size: u64,
  pub position: u64,
}



impl DataSource {
  #[tracing::instrument(level = "debug", err)]
  pub async fn new(args: &SourceConfig) -> Result<Self, IoError> {
    let source = tokio::fs::File::open(&args.input_file).await.map_err(IoError::at(IoStage::Open))?;
    let metadata = source.metadata().await.map_err(IoError::at(IoStage::Metadata))?;

    Ok(Self {
      source,
      file_size: metadata.len(),
      position: 0,
    })
  }

  /// Number of bytes a read of `length` starting at `offset` can actually return.
  pub fn available(&self, offset: u64, length: Option<u64>) -> u64 {
    let remaining = self.file_size.saturating_sub(offset);
    match length {
      Some(length) => remaining.min(length),
      None => remaining,
    }
  }

  pub async fn seek(&mut self, offset: u64) -> Result<(), IoError> {
    self.position = self.source.seek(SeekFrom::Start(offset)).await.map_err(IoError::at(IoStage::Seek))?;
    Ok(())
  }

  /// Reads up to `length` bytes from the current position, or everything up
  /// to EOF. A short read is not an error.
  pub async fn read_chunk(&mut self, length: Option<u64>) -> Result<BytesMut, IoError> {
    let expected = self.available(self.position, length);
    let mut buf = BytesMut::with_capacity(usize::try_from(expected).unwrap_or(0));
    let limit = length.unwrap_or(u64::MAX);
    let mut reader = (&mut self.source).take(limit);

    loop {
      let bytes = reader.read_buf(&mut buf).await.map_err(IoError::at(IoStage::Read))?;
      tracing::trace!("read {} bytes", bytes);
      if bytes == 0 {
        break;
      }
      self.position += bytes as u64;
    }
    Ok(buf)
  }

  /// Opens the source, reads the configured range and closes it again.
  #[tracing::instrument(level = "debug", err)]
  pub async fn read_range(config: &SourceConfig) -> Result<BytesMut, IoError> {
    let mut source = DataSource::new(config).await?;
    tracing::debug!("source is {} bytes", source.file_size);
    source.seek(config.offset).await?;
    let chunk = source.read_chunk(config.length).await?;
    tracing::debug!("read {} bytes ending at {}", chunk.len(), source.position);
    Ok(chunk)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;
  use tempfile::tempdir;

  fn write_source(dir: &tempfile::TempDir, data: &[u8]) -> PathBuf {
    let path = dir.path().join("source.bin");
    std::fs::write(&path, data).unwrap();
    path
  }

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
  }

  #[tokio::test]
  async fn test_data_source_new() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, &pattern(100));
    let config = SourceConfig { input_file: path, ..SourceConfig::new() };

    let source = DataSource::new(&config).await.unwrap();
    assert_eq!(source.file_size, 100);
    assert_eq!(source.position, 0);
    assert_eq!(source.available(10, Some(20)), 20);
    assert_eq!(source.available(90, Some(20)), 10);
    assert_eq!(source.available(200, None), 0);
  }

  #[tokio::test]
  async fn test_data_source_missing_file() {
    let dir = tempdir().unwrap();
    let config = SourceConfig { input_file: dir.path().join("nope.bin"), ..SourceConfig::new() };

    let err = DataSource::new(&config).await.unwrap_err();
    assert_eq!(err.stage, IoStage::Open);
    assert_eq!(err.error.kind(), std::io::ErrorKind::NotFound);
  }

  #[tokio::test]
  async fn test_read_range_slice() {
    let dir = tempdir().unwrap();
    let data = pattern(100);
    let path = write_source(&dir, &data);
    let config = SourceConfig { input_file: path, offset: 10, length: Some(20) };

    let chunk = DataSource::read_range(&config).await.unwrap();
    assert_eq!(&chunk[..], &data[10..30]);
  }

  #[tokio::test]
  async fn test_read_range_rest_of_file() {
    let dir = tempdir().unwrap();
    let data = pattern(100);
    let path = write_source(&dir, &data);
    let config = SourceConfig { input_file: path, offset: 37, length: None };

    let chunk = DataSource::read_range(&config).await.unwrap();
    assert_eq!(&chunk[..], &data[37..]);
  }

  #[tokio::test]
  async fn test_read_range_short_read() {
    let dir = tempdir().unwrap();
    let data = pattern(100);
    let path = write_source(&dir, &data);
    let config = SourceConfig { input_file: path, offset: 90, length: Some(1 << 40) };

    let chunk = DataSource::read_range(&config).await.unwrap();
    assert_eq!(&chunk[..], &data[90..]);
  }

  #[tokio::test]
  async fn test_read_range_past_end() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, &pattern(100));
    let config = SourceConfig { input_file: path, offset: 1000, length: Some(20) };

    let chunk = DataSource::read_range(&config).await.unwrap();
    assert!(chunk.is_empty());
  }

  #[tokio::test]
  async fn test_read_range_zero_length() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, &pattern(100));
    let config = SourceConfig { input_file: path, offset: 5, length: Some(0) };

    let chunk = DataSource::read_range(&config).await.unwrap();
    assert!(chunk.is_empty());
  }
}
