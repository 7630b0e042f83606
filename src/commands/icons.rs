use super::{app_name_flag, report_failures, resolve_inputs, Command};
use crate::cli::output::Console;
use crate::cli::parser::ParsedInvocation;
use crate::cli::schema::{help_flag, verbose_flag, CommandSchema, PositionalSpec};
use crate::contents_json::{write_contents_json, ImageEntry};
use crate::imaging::{self, AssetFailure, AssetTask, Mask, Transform};
use crate::sizes::{ANDROID_WEB_ICON_SIZE, ICON_SIZES_ANDROID, ICON_SIZES_IOS};
use anyhow::Result;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Generates iOS app icon sets and Android launcher icons.
pub struct Icons {
    schema: CommandSchema,
}

impl Icons {
    pub fn new() -> Self {
        let schema = CommandSchema::new(
            "icons",
            "Generate app icons\n\
             Generate app icons using FILE as base.\n\
             The base icon file should be at least 1024x1024px.",
        )
        .with_arg(PositionalSpec::optional("file", "input icon file").with_default("./assets/icon.png"))
        .with_flag(app_name_flag())
        .with_flag(help_flag())
        .with_flag(verbose_flag())
        .with_example("{bin} {command}")
        .with_example("{bin} {command} ./assets/my-icon.png --appName MyApp");

        Self { schema }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for Icons {
    fn schema(&self) -> &CommandSchema {
        &self.schema
    }

    fn execute(&self, parsed: &ParsedInvocation, console: &Console) -> Result<()> {
        let (file, app_name) = resolve_inputs(parsed, console)?;

        console.log(format!("Generating icons for '{app_name}' app..."));

        let source = imaging::load_source(Path::new(file));
        let (mut failures, android_failures) = rayon::join(
            || generate_ios_icons(&source, &ios_output_dir(app_name), console),
            || generate_android_icons(&source, Path::new(ANDROID_OUTPUT_DIR), console),
        );
        failures.extend(android_failures);

        report_failures(&failures, console)?;

        console.log(format!("Generated icons for '{app_name}' app."));
        Ok(())
    }
}

const ANDROID_OUTPUT_DIR: &str = "./android/app/src/main";

fn ios_output_dir(app_name: &str) -> PathBuf {
    Path::new("./ios")
        .join(app_name)
        .join("Images.xcassets")
        .join("AppIcon.appiconset")
}

/// Every icon of the iOS app icon set, in manifest order.
pub(crate) fn ios_icon_tasks(ios_dir: &Path) -> Vec<(AssetTask, ImageEntry)> {
    ICON_SIZES_IOS
        .iter()
        .flat_map(|icon| {
            icon.scales.iter().map(move |&scale| {
                let filename = icon.filename(scale);
                let pixels = icon.base_size * scale;
                let task = AssetTask::new(
                    ios_dir.join(&filename),
                    Transform::Cover {
                        width: pixels,
                        height: pixels,
                    },
                );
                let entry = ImageEntry::new_app_icon(filename, icon.idiom(), icon.base_size, scale);
                (task, entry)
            })
        })
        .collect()
}

/// The Play Store web icon plus a square and a round launcher icon per density.
pub(crate) fn android_icon_tasks(android_dir: &Path) -> Vec<AssetTask> {
    let mut tasks = vec![AssetTask::new(
        android_dir.join("web_hi_res_512.png"),
        Transform::Masked {
            size: ANDROID_WEB_ICON_SIZE,
            mask: Mask::RoundedCorners,
        },
    )];

    for icon in ICON_SIZES_ANDROID {
        let density_dir = android_dir.join("res").join(format!("mipmap-{}", icon.density));
        tasks.push(AssetTask::new(
            density_dir.join("ic_launcher.png"),
            Transform::Masked {
                size: icon.size,
                mask: Mask::RoundedCorners,
            },
        ));
        tasks.push(AssetTask::new(
            density_dir.join("ic_launcher_round.png"),
            Transform::Masked {
                size: icon.size,
                mask: Mask::Circle,
            },
        ));
    }

    tasks
}

fn generate_ios_icons(
    source: &Result<DynamicImage>,
    ios_dir: &Path,
    console: &Console,
) -> Vec<AssetFailure> {
    let (tasks, images): (Vec<_>, Vec<_>) = ios_icon_tasks(ios_dir).into_iter().unzip();

    let mut failures = imaging::render_batch(source, &tasks, console, "icon");

    if let Err(err) = write_contents_json(ios_dir, images) {
        failures.push(AssetFailure {
            output: ios_dir.join("Contents.json"),
            reason: format!("{err:#}"),
        });
    }

    failures
}

fn generate_android_icons(
    source: &Result<DynamicImage>,
    android_dir: &Path,
    console: &Console,
) -> Vec<AssetFailure> {
    imaging::render_batch(source, &android_icon_tasks(android_dir), console, "icon")
}
