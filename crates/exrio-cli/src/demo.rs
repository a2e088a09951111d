//! Read with every layout, write with every layout.
//!
//! Every step runs even when an earlier one failed, so one bad variant does
//! not hide the others. A write whose source read failed is skipped and
//! counted as failed.

use anyhow::{Context, Result, bail};
use exrio_io::Compression;
use exrio_io::exr::{self, ExrWriter};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Output file names, one per write variant.
pub const RGBA_NAME: &str = "original_rgba.exr";
pub const FLOAT_INTERLEAVED_NAME: &str = "original_float1.exr";
pub const FLOAT_PLANAR_NAME: &str = "original_float2.exr";
pub const HALF_NAME: &str = "original_half.exr";
pub const DOUBLE_NAME: &str = "original_double.exr";

/// Tallies step outcomes.
#[derive(Debug, Default)]
struct Steps {
    failed: Vec<&'static str>,
}

impl Steps {
    fn check<T, E: Display>(&mut self, step: &'static str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => {
                debug!(step, "ok");
                Some(value)
            }
            Err(e) => {
                warn!(step, error = %e, "step failed");
                self.failed.push(step);
                None
            }
        }
    }

    fn skip(&mut self, step: &'static str) {
        warn!(step, "skipped, source read failed");
        self.failed.push(step);
    }
}

/// Runs every read and write variant on `input`, writing into `out_dir`.
pub fn run(input: &Path, out_dir: &Path, compression: Compression) -> Result<()> {
    trace!(input = %input.display(), out_dir = %out_dir.display(), "demo::run");

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let writer = ExrWriter::new().with_compression(compression);
    let mut steps = Steps::default();

    println!("Reading {}", input.display());
    let rgba = steps.check("read packed rgba", exr::read_rgba(input));
    let float1 = steps.check("read interleaved float", exr::read_interleaved_f32(input));
    let float2 = steps.check("read planar float", exr::read_planar_f32(input));
    let half = steps.check("read interleaved half", exr::read_interleaved_f16(input));

    if let Some(image) = &float1 {
        info!(
            width = image.width,
            height = image.height,
            has_alpha = image.has_alpha,
            "Read input"
        );
    }

    println!("Writing");
    let out = |name: &str| -> PathBuf { out_dir.join(name) };

    match &rgba {
        Some(image) => {
            let result = writer.write_rgba(out(RGBA_NAME), &image.pixels, image.width, image.height);
            steps.check("write packed rgba", result);
        }
        None => steps.skip("write packed rgba"),
    }

    match &float1 {
        Some(image) => {
            let result = writer.write_interleaved_f32(
                out(FLOAT_INTERLEAVED_NAME),
                &image.data,
                image.width,
                image.height,
            );
            steps.check("write interleaved float", result);
        }
        None => steps.skip("write interleaved float"),
    }

    match &float2 {
        Some(image) => {
            let result = writer.write_planar_f32(
                out(FLOAT_PLANAR_NAME),
                &image.r,
                &image.g,
                &image.b,
                &image.a,
                image.width,
                image.height,
            );
            steps.check("write planar float", result);

            let widen = |c: &[f32]| -> Vec<f64> { c.iter().map(|&v| f64::from(v)).collect() };
            let result = writer.write_planar_f64(
                out(DOUBLE_NAME),
                &widen(&image.r),
                &widen(&image.g),
                &widen(&image.b),
                image.width,
                image.height,
            );
            steps.check("write planar double", result);
        }
        None => {
            steps.skip("write planar float");
            steps.skip("write planar double");
        }
    }

    match &half {
        Some(image) => {
            let result =
                writer.write_interleaved_f16(out(HALF_NAME), &image.data, image.width, image.height);
            steps.check("write interleaved half", result);
        }
        None => steps.skip("write interleaved half"),
    }

    if !steps.failed.is_empty() {
        bail!(
            "{} step(s) failed: {}",
            steps.failed.len(),
            steps.failed.join(", ")
        );
    }

    println!("Complete");
    Ok(())
}
