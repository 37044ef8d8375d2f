use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rggb_debayer::image_pipeline::{
    CpuDebayer, DebayerPipeline, ImageFormat, PipelineConfig, PixelBuffer, StandardImageWriter,
    ImageWriter, TiffCompression,
};
use std::io::Cursor;

fn generate_mock_mosaic(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| [((x + y) % 256) as u8, 0, 0])
}

fn encode_mock_png(width: usize, height: usize) -> Vec<u8> {
    let mut encoded = Vec::new();
    StandardImageWriter
        .write_image(
            &generate_mock_mosaic(width, height),
            ImageFormat::Png,
            &mut encoded,
            &PipelineConfig::default(),
        )
        .expect("encode mock mosaic");
    encoded
}

fn benchmark_debayer_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("debayer_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let mosaic = generate_mock_mosaic(width, height);

        for (parallel, mode) in [(false, "serial"), (true, "parallel")] {
            let engine = CpuDebayer::with_parallel(parallel);
            group.bench_with_input(
                BenchmarkId::new(mode, label),
                &mosaic,
                |b, mosaic| b.iter(|| engine.process(black_box(mosaic))),
            );
        }
    }

    group.finish();
}

fn benchmark_output_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_formats");
    let input = encode_mock_png(500, 500);

    let outputs = vec![
        (ImageFormat::Png, TiffCompression::None, "png"),
        (ImageFormat::Tiff, TiffCompression::None, "tiff_none"),
        (ImageFormat::Tiff, TiffCompression::Lzw, "tiff_lzw"),
        (ImageFormat::Tiff, TiffCompression::DeflateFast, "tiff_deflate_fast"),
    ];

    for (format, compression, label) in outputs {
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, data| {
            let config = PipelineConfig::builder()
                .tiff_compression(compression)
                .build();
            let pipeline = DebayerPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), format, &mut output);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_debayer_sizes, benchmark_output_formats);
criterion_main!(benches);
