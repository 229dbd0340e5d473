use hifitime::prelude::*;

#[derive(Debug, Clone, PartialEq, derivative::Derivative)]
#[derivative(Default(new = "true"))]
pub struct CopyStatistics {
  pub total_bytes_read: u64,
  pub total_bytes_written: u64,
  pub started_at: Option<hifitime::Epoch>,
  pub read_at: Option<hifitime::Epoch>,
  pub completed_at: Option<hifitime::Epoch>,
}

impl CopyStatistics {
  pub fn init(&mut self) {
    self.total_bytes_read = 0;
    self.total_bytes_written = 0;
    self.started_at = Epoch::now().ok();
    self.read_at = None;
    self.completed_at = None;
  }

  pub fn add_read(&mut self, bytes_read: u64) {
    self.total_bytes_read += bytes_read;
    self.read_at = Epoch::now().ok();
  }

  pub fn add_write(&mut self, bytes_written: u64) {
    self.total_bytes_written += bytes_written;
    self.completed_at = Epoch::now().ok();
  }

  /// Wall time from `init` to the last write, if both clocks were readable.
  pub fn worktime(&self) -> Option<hifitime::Duration> {
    match (self.started_at, self.completed_at) {
      (Some(started), Some(completed)) => Some(completed - started),
      _ => None,
    }
  }

  /// Time spent opening and reading the source.
  pub fn readtime(&self) -> Option<hifitime::Duration> {
    match (self.started_at, self.read_at) {
      (Some(started), Some(read)) => Some(read - started),
      _ => None,
    }
  }

  pub fn display(&self) {
    match (self.readtime(), self.worktime()) {
      (Some(readtime), Some(worktime)) => tracing::info!(
        read = self.total_bytes_read,
        written = self.total_bytes_written,
        "copied chunk in {} (read took {})", worktime, readtime
      ),
      _ => tracing::info!(read = self.total_bytes_read, written = self.total_bytes_written, "copied chunk"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_statistics_counters() {
    let mut statistics = CopyStatistics::new();
    assert_eq!(statistics.worktime(), None);
    assert_eq!(statistics.readtime(), None);

    statistics.init();
    statistics.add_read(20);
    let readtime = statistics.readtime().unwrap();
    assert!(readtime >= 0.nanoseconds());
    statistics.add_write(20);
    assert_eq!(statistics.total_bytes_read, 20);
    assert_eq!(statistics.total_bytes_written, 20);
    assert!(statistics.started_at.is_some());
    assert!(statistics.worktime().unwrap() >= readtime);
    statistics.display();
  }
}
