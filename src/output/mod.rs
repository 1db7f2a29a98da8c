pub mod file;

#[cfg(feature = "cpal")]
pub mod cpal;

use std::{sync::mpsc, time::{Duration, Instant}};

use crate::input::Matrix;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
	#[error("{0}")]
	Io(#[from] std::io::Error),

	#[error("expected {expected} channels, got {found}")]
	ChannelMismatch {
		expected: usize,
		found: usize,
	},

	#[error("output stream failed: {0}")]
	Stream(String),

	#[error("output stopped consuming samples, gave up after {0:?}")]
	Stalled(Duration),
}

pub trait DataSink<T> {
	fn send(&mut self, data: &Matrix<T>) -> Result<(), SinkError>;

	/// flush whatever is still buffered, blocking if needed
	fn finish(&mut self) -> Result<(), SinkError> { Ok(()) }
}

/// Poll until `busy` turns false. Errors reported on `errors` and passing
/// `deadline` both end the wait early.
#[cfg_attr(not(feature = "cpal"), allow(dead_code))]
pub(crate) fn wait_while(
	mut busy: impl FnMut() -> bool,
	errors: &mpsc::Receiver<String>,
	deadline: Duration,
	poll: Duration,
) -> Result<(), SinkError> {
	let start = Instant::now();
	loop {
		if let Ok(e) = errors.try_recv() {
			return Err(SinkError::Stream(e));
		}
		if !busy() {
			return Ok(());
		}
		if start.elapsed() >= deadline {
			return Err(SinkError::Stalled(start.elapsed()));
		}
		std::thread::sleep(poll);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const POLL: Duration = Duration::from_millis(1);

	#[test]
	fn wait_returns_once_drained() {
		let (_tx, rx) = mpsc::channel::<String>();
		let mut left = 3;
		let res = wait_while(|| { left -= 1; left > 0 }, &rx, Duration::from_secs(5), POLL);
		assert!(res.is_ok());
		assert_eq!(left, 0);
	}

	#[test]
	fn wait_stops_on_stream_error() {
		let (tx, rx) = mpsc::channel();
		tx.send("device unplugged".to_string()).unwrap();
		let res = wait_while(|| true, &rx, Duration::from_secs(5), POLL);
		assert!(matches!(res, Err(SinkError::Stream(e)) if e == "device unplugged"));
	}

	#[test]
	fn wait_gives_up_when_nothing_drains() {
		let (_tx, rx) = mpsc::channel::<String>();
		let res = wait_while(|| true, &rx, Duration::from_millis(20), POLL);
		assert!(matches!(res, Err(SinkError::Stalled(d)) if d >= Duration::from_millis(20)));
	}

	#[test]
	fn wait_ignores_a_closed_error_channel() {
		let (tx, rx) = mpsc::channel::<String>();
		drop(tx);
		assert!(wait_while(|| false, &rx, Duration::ZERO, POLL).is_ok());
	}
}
