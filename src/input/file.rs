use std::{fs::File, io::{ErrorKind, Read}, path::Path};

use super::{format::{PcmFormat, SampleParser}, stream_to_matrix, DataSource, Matrix, SourceError};

/// Raw PCM read from a file or named pipe, `frames` at a time
pub struct FileSource<R = File> {
	reader: R,
	buffer: Vec<u8>,
	format: PcmFormat,
	done: bool,
}

impl FileSource<File> {
	pub fn open(path: impl AsRef<Path>, format: PcmFormat, frames: usize) -> Result<Self, SourceError> {
		FileSource::from_reader(File::open(path)?, format, frames)
	}
}

impl<R: Read> FileSource<R> {
	pub fn from_reader(reader: R, format: PcmFormat, frames: usize) -> Result<Self, SourceError> {
		if format.channels == 0 {
			return Err(SourceError::NoChannels);
		}
		Ok(FileSource {
			reader,
			format,
			done: false,
			buffer: vec![0u8; frames.max(1) * format.frame_size()],
		})
	}

	pub fn format(&self) -> &PcmFormat {
		&self.format
	}

	// like read_exact, but a short read at the end of the stream is not an error
	fn fill(&mut self) -> Result<usize, SourceError> {
		let mut filled = 0;
		while filled < self.buffer.len() {
			match self.reader.read(&mut self.buffer[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => return Err(e.into()),
			}
		}
		Ok(filled)
	}
}

impl<R: Read> DataSource<f64> for FileSource<R> {
	fn recv(&mut self) -> Result<Option<Matrix<f64>>, SourceError> {
		if self.done {
			return Ok(None);
		}
		let filled = self.fill()?;
		if filled < self.buffer.len() {
			self.done = true;
		}
		let usable = self.format.frames(filled) * self.format.frame_size();
		if usable < filled {
			tracing::warn!("dropping {} trailing bytes, not enough for a whole frame", filled - usable);
		}
		if usable == 0 {
			return Ok(None);
		}
		let depth = self.format.depth;
		Ok(Some(
			stream_to_matrix(
				self.buffer[..usable].chunks(depth.bytes()).map(|c| depth.parse(c)),
				self.format.channels as usize,
				1.0,
			)
		))
	}
}
