use std::{fs::File, io::{BufWriter, Write}, path::Path};

use crate::input::{format::{PcmFormat, SampleParser}, matrix_to_stream, Matrix};

use super::{DataSink, SinkError};

/// Encodes normalized samples as raw PCM, clipping anything out of range
pub struct FileSink<W: Write = BufWriter<File>> {
	writer: W,
	format: PcmFormat,
	scratch: Vec<u8>,
}

impl FileSink<BufWriter<File>> {
	pub fn create(path: impl AsRef<Path>, format: PcmFormat) -> Result<Self, SinkError> {
		Ok(FileSink::from_writer(BufWriter::new(File::create(path)?), format))
	}
}

impl<W: Write> FileSink<W> {
	pub fn from_writer(writer: W, format: PcmFormat) -> Self {
		FileSink { writer, format, scratch: vec![] }
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: Write> DataSink<f64> for FileSink<W> {
	fn send(&mut self, data: &Matrix<f64>) -> Result<(), SinkError> {
		if data.len() != self.format.channels as usize {
			return Err(SinkError::ChannelMismatch { expected: self.format.channels as usize, found: data.len() });
		}
		let depth = self.format.depth;
		let max = depth.max_normalized();
		let stream = matrix_to_stream(data);
		self.scratch.resize(stream.len() * depth.bytes(), 0);
		for (sample, chunk) in stream.iter().zip(self.scratch.chunks_mut(depth.bytes())) {
			depth.encode(chunk, sample.clamp(-1.0, max));
		}
		self.writer.write_all(&self.scratch)?;
		Ok(())
	}

	fn finish(&mut self) -> Result<(), SinkError> {
		Ok(self.writer.flush()?)
	}
}
