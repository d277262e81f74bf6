//! Read a .ppm file and print what the decoder recovered

use ppmview::{DecodeOptions, ImageSummary, PpmFile, ViewerState};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gradient.ppm".to_string());

    if !std::path::Path::new(&filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_gradient' first");
        return Ok(());
    }

    println!("Reading '{filename}'...");
    let start = Instant::now();
    let decoded = PpmFile::new(&filename).decode(&DecodeOptions::default())?;
    println!(
        "Decoded in {:.3}ms\n",
        start.elapsed().as_secs_f64() * 1000.0
    );

    println!("{}", ImageSummary::new(&decoded));

    let viewer = ViewerState::default();
    let frame = viewer.compose_frame(&decoded.record);
    println!(
        "\nViewer '{}' would display {} bytes",
        viewer.window_title(&decoded.record),
        frame.len()
    );

    Ok(())
}
