use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rggb_debayer::image_pipeline::{DebayerPipeline, PipelineConfig};
use rggb_debayer::logger;

use tracing::info;

const INPUT_DIR: &str = "input";
const OUTPUT_DIR: &str = "output";

/// Debayer an RGGB mosaic image into full RGB.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Image file name, read from `input/` and written to `output/`
    #[arg(default_value = "bayer_rggb.png")]
    image: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    let input_path = PathBuf::from(INPUT_DIR).join(&cli.image);
    let output_path = PathBuf::from(OUTPUT_DIR).join(&cli.image);

    let pipeline = DebayerPipeline::new(PipelineConfig::default());
    info!("Debayer pipeline initialized (RGGB, parallel={})", pipeline.config().parallel);

    match pipeline.convert_file_with_timings(&input_path, &output_path) {
        Ok(timings) => {
            timings.log_summary();
            info!("Wrote {}", output_path.display());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("debayering {}", input_path.display())),
    }
}
