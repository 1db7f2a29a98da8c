use std::{fs, time::Duration};

use pretty_assertions::assert_eq;

use pcmkit::{
	codec::{self, ByteDepth},
	ears::Ears,
	entity::{BaseSolid, Point, Vector},
	filter::{Chain, Fade, Filter, Volume},
	input::{file::FileSource, DataSource, Matrix},
	output::{file::FileSink, DataSink},
	PcmFormat,
};

fn stereo(depth: ByteDepth) -> PcmFormat {
	PcmFormat { channels: 2, depth, sample_rate: 1000 }
}

fn read_all(path: &std::path::Path, format: PcmFormat) -> Matrix<f64> {
	let mut source = FileSource::open(path, format, 3).unwrap();
	let mut out: Matrix<f64> = vec![vec![]; format.channels as usize];
	while let Some(block) = source.recv().unwrap() {
		for (all, chunk) in out.iter_mut().zip(block) {
			all.extend(chunk);
		}
	}
	out
}

#[test]
fn sink_then_source_preserves_samples() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tone.raw");
	let data = vec![
		vec![0.0, 0.25, 0.5, 0.75, -0.25, -1.0, 0.125],
		vec![-0.5, 0.5, 0.0, -0.75, 0.25, 0.0625, -0.125],
	];

	let mut sink = FileSink::create(&path, stereo(ByteDepth::Two)).unwrap();
	sink.send(&data).unwrap();
	sink.finish().unwrap();
	drop(sink);

	assert_eq!(fs::metadata(&path).unwrap().len(), 7 * 4);
	assert_eq!(read_all(&path, stereo(ByteDepth::Two)), data);
}

#[test]
fn depth_conversion_through_files() {
	let dir = tempfile::tempdir().unwrap();
	let wide = dir.path().join("wide.raw");
	let narrow = dir.path().join("narrow.raw");

	// 0.5 + 1/32768 has no exact 8 bit counterpart
	let data = vec![vec![0.5 + 1.0 / 32768.0, -0.5], vec![0.25, 1.0]];
	let mut sink = FileSink::create(&wide, stereo(ByteDepth::Two)).unwrap();
	sink.send(&data).unwrap();
	sink.finish().unwrap();
	drop(sink);

	let decoded = read_all(&wide, stereo(ByteDepth::Two));
	let mut sink = FileSink::create(&narrow, stereo(ByteDepth::One)).unwrap();
	sink.send(&decoded).unwrap();
	sink.finish().unwrap();
	drop(sink);

	let bytes = fs::read(&narrow).unwrap();
	assert_eq!(bytes.len(), 4);
	assert_eq!(
		read_all(&narrow, stereo(ByteDepth::One)),
		vec![vec![0.5, -0.5], vec![0.25, 127.0 / 128.0]],
	);
}

#[test]
fn positional_chain_on_raw_buffer() {
	let format = stereo(ByteDepth::Two);
	let mut data = vec![0u8; 8 * format.frame_size()];
	for i in 0..16 {
		codec::write_i16_from_float(&mut data, i * 2, 0.5);
	}

	let ears = Ears::new(Vector::new(0.0, 0.0), 100.0, 400.0);
	let mut crate_box = BaseSolid::new(0.0, 0.0, 16.0, 16.0);
	crate_box.set_pos(-100.0, 0.0);
	let (volume, pan) = ears.filters_for(&crate_box).unwrap();
	assert_eq!(volume, Volume::new(0.75).unwrap());
	assert_eq!(pan.value(), -1.0);

	let chain = Chain::new()
		.with(volume)
		.with(pan)
		.with(Fade::fade_in(Duration::from_millis(4)));
	chain.apply(&mut data, &format).unwrap();

	let left: Vec<f64> = (0..8).map(|f| codec::read_normalized(&data, f * 4, 2)).collect();
	let right: Vec<f64> = (0..8).map(|f| codec::read_normalized(&data, f * 4 + 2, 2)).collect();
	let full = codec::round(0.375 * 32768.0) as f64 / 32768.0;
	assert_eq!(left[4..].to_vec(), vec![full; 4]);
	assert_eq!(left[0], 0.0);
	assert!(left.windows(2).all(|w| w[0] <= w[1]));
	assert_eq!(right, vec![0.0; 8]);
}
