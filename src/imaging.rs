//! Image pipeline: resize, mask and write PNG assets, many at a time.
//!
//! Every asset is rendered independently. A failing asset is recorded and
//! never stops its siblings; callers decide what to do with the failure list
//! once the whole batch has settled.

use crate::cli::output::Console;
use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage, ImageOutputFormat};
use rayon::prelude::*;
use std::{
    fmt,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Alpha mask applied after resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// Rounded square, corner radius 10% of the side.
    RoundedCorners,
    Circle,
}

/// How an asset is derived from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Scale to cover `width`x`height`, cropping the overflow around the centre.
    Cover { width: u32, height: u32 },
    /// Cover a `size`x`size` square, then apply `mask`.
    Masked { size: u32, mask: Mask },
}

/// One output file to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTask {
    pub output: PathBuf,
    pub transform: Transform,
}

impl AssetTask {
    pub fn new(output: PathBuf, transform: Transform) -> Self {
        Self { output, transform }
    }
}

/// An asset that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFailure {
    pub output: PathBuf,
    pub reason: String,
}

impl fmt::Display for AssetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.output.display(), self.reason)
    }
}

pub fn load_source(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("Failed to load image {}", path.display()))
}

/// Applies `transform` to `source`.
pub fn render(source: &DynamicImage, transform: Transform) -> DynamicImage {
    match transform {
        Transform::Cover { width, height } => {
            source.resize_to_fill(width, height, FilterType::Lanczos3)
        }
        Transform::Masked { size, mask } => {
            let resized = source.resize_to_fill(size, size, FilterType::Lanczos3);
            apply_mask(&resized, mask)
        }
    }
}

/// Renders one task and writes it, creating parent directories as needed.
pub fn render_to_file(source: &DynamicImage, task: &AssetTask) -> Result<()> {
    if let Some(parent) = task.output.parent() {
        create_dir_all(parent)
            .with_context(|| format!("Can't create directory {}", parent.display()))?;
    }

    let image = render(source, task.transform);
    save_png(&image, &task.output)
}

/// Renders all `tasks` in parallel and returns the failures, in task order.
///
/// `source` is the already-decoded input; when decoding failed, every task
/// fails with that reason. `noun` names the asset kind in verbose logs.
pub fn render_batch(
    source: &Result<DynamicImage>,
    tasks: &[AssetTask],
    console: &Console,
    noun: &str,
) -> Vec<AssetFailure> {
    tasks
        .par_iter()
        .filter_map(|task| {
            let output = task.output.display();
            console.log_verbose(format!("Generating {noun} '{output}'..."));

            let outcome = match source {
                Ok(image) => render_to_file(image, task),
                Err(err) => Err(anyhow::anyhow!("{err:#}")),
            };

            match outcome {
                Ok(()) => {
                    console.log_verbose(format!("{} '{output}' generated.", capitalize(noun)));
                    None
                }
                Err(err) => Some(AssetFailure {
                    output: task.output.clone(),
                    reason: format!("{err:#}"),
                }),
            }
        })
        .collect()
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    writer.flush().context("Failed to write PNG")?;
    Ok(())
}

/// Multiplies each pixel's alpha by the mask coverage, anti-aliasing the edge.
pub fn apply_mask(img: &DynamicImage, mask: Mask) -> DynamicImage {
    let width = img.width() as f32;
    let height = img.height() as f32;
    let mut rgba_img = img.to_rgba8();

    for (x, y, pixel) in rgba_img.enumerate_pixels_mut() {
        let coverage = mask_coverage(mask, x as f32 + 0.5, y as f32 + 0.5, width, height);
        if coverage < 1.0 {
            pixel[3] = (pixel[3] as f32 * coverage).round() as u8;
        }
    }

    DynamicImage::ImageRgba8(rgba_img)
}

/// Fraction of the pixel centred at (`x`, `y`) that lies inside the mask.
fn mask_coverage(mask: Mask, x: f32, y: f32, width: f32, height: f32) -> f32 {
    let (radius, centre_x, centre_y) = match mask {
        Mask::Circle => (width.min(height) / 2.0, width / 2.0, height / 2.0),
        Mask::RoundedCorners => {
            let radius = (width.min(height) * 0.1).floor();
            if radius <= 0.0 {
                return 1.0;
            }
            // Nearest point on the inner rectangle whose corners are the arc centres.
            (
                radius,
                x.clamp(radius, width - radius),
                y.clamp(radius, height - radius),
            )
        }
    };

    let dx = x - centre_x;
    let dy = y - centre_y;
    let distance = (dx * dx + dy * dy).sqrt();
    (radius - distance + 0.5).clamp(0.0, 1.0)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255])))
    }

    #[test]
    fn test_cover_produces_exact_dimensions() {
        let resized = render(&solid(40, 20), Transform::Cover { width: 10, height: 16 });
        assert_eq!((resized.width(), resized.height()), (10, 16));
    }

    #[test]
    fn test_circle_mask() {
        let masked = render(&solid(64, 64), Transform::Masked { size: 32, mask: Mask::Circle });
        let rgba = masked.to_rgba8();

        assert_eq!((masked.width(), masked.height()), (32, 32));
        assert_eq!(rgba.get_pixel(0, 0)[3], 0);
        assert_eq!(rgba.get_pixel(31, 31)[3], 0);
        assert_eq!(rgba.get_pixel(16, 16)[3], 255);
        assert_eq!(rgba.get_pixel(16, 2)[3], 255);
    }

    #[test]
    fn test_rounded_corners_mask() {
        let masked = apply_mask(&solid(100, 100), Mask::RoundedCorners);
        let rgba = masked.to_rgba8();

        assert_eq!(rgba.get_pixel(0, 0)[3], 0);
        assert_eq!(rgba.get_pixel(99, 0)[3], 0);
        assert_eq!(rgba.get_pixel(50, 0)[3], 255);
        assert_eq!(rgba.get_pixel(0, 50)[3], 255);
        assert_eq!(rgba.get_pixel(50, 50)[3], 255);
    }

    #[test]
    fn test_rounded_corners_tiny_image_untouched() {
        let masked = apply_mask(&solid(5, 5), Mask::RoundedCorners);
        assert!(masked.to_rgba8().pixels().all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_render_batch_writes_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let tasks = vec![
            AssetTask::new(
                temp_dir.path().join("a/one.png"),
                Transform::Cover { width: 8, height: 12 },
            ),
            AssetTask::new(
                temp_dir.path().join("b/c/two.png"),
                Transform::Masked { size: 16, mask: Mask::Circle },
            ),
        ];

        let failures = render_batch(&Ok(solid(32, 32)), &tasks, &Console::default(), "icon");
        assert!(failures.is_empty(), "{failures:?}");

        let one = image::open(&tasks[0].output).unwrap();
        assert_eq!((one.width(), one.height()), (8, 12));
        let two = image::open(&tasks[1].output).unwrap();
        assert_eq!((two.width(), two.height()), (16, 16));
    }

    #[test]
    fn test_render_batch_collects_every_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let corrupt = temp_dir.path().join("corrupt.png");
        std::fs::write(&corrupt, "not a valid image").unwrap();

        let tasks: Vec<_> = (1..=4)
            .map(|n| {
                AssetTask::new(
                    temp_dir.path().join(format!("out/{n}.png")),
                    Transform::Cover { width: n, height: n },
                )
            })
            .collect();

        let source = load_source(&corrupt);
        assert!(source.is_err());

        let failures = render_batch(&source, &tasks, &Console::default(), "icon");
        assert_eq!(failures.len(), 4);
        for (failure, task) in failures.iter().zip(&tasks) {
            assert_eq!(failure.output, task.output);
            assert!(failure.reason.contains("Failed to load image"));
            assert!(!task.output.exists());
        }
    }

    #[test]
    fn test_failure_display() {
        let failure = AssetFailure {
            output: PathBuf::from("ios/Icon-60@2x.png"),
            reason: "boom".to_string(),
        };
        assert_eq!(failure.to_string(), "ios/Icon-60@2x.png: boom");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("splashscreen"), "Splashscreen");
        assert_eq!(capitalize(""), "");
    }
}
