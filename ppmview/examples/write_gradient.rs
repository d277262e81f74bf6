//! Write a small RGB gradient to a .ppm file

use ppmview::{ImageRecord, PpmFile};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "gradient.ppm";
    let (width, height) = (256u32, 256u32);

    println!("Building {width} x {height} gradient...");
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, y as u8, (255 - x) as u8]);
        }
    }
    let record = ImageRecord::new(width, height, pixels)?;

    let start = Instant::now();
    let report = PpmFile::new(filename).encode(&record)?;
    println!(
        "Wrote {} bytes to '{filename}' in {:.3}ms",
        report.bytes_written,
        start.elapsed().as_secs_f64() * 1000.0
    );

    for warning in &report.warnings {
        println!("   Warning: {warning}");
    }

    Ok(())
}
