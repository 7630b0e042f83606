use super::{app_name_flag, report_failures, resolve_inputs, Command};
use crate::cli::output::Console;
use crate::cli::parser::ParsedInvocation;
use crate::cli::schema::{help_flag, verbose_flag, CommandSchema, PositionalSpec};
use crate::contents_json::{write_contents_json, ImageEntry};
use crate::imaging::{self, AssetFailure, AssetTask, Transform};
use crate::sizes::{SPLASHSCREEN_SIZES_ANDROID, SPLASHSCREEN_SIZES_IOS};
use anyhow::Result;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Generates splashscreen images for react-native-splash-screen.
pub struct Splash {
    schema: CommandSchema,
}

impl Splash {
    pub fn new() -> Self {
        let schema = CommandSchema::new(
            "splash",
            "Generate app splashscreen for react-native-splash-screen\n\
             Generate app splashscreens using FILE as base to be used with crazycodeboy/react-native-splash-screen module.\n\
             The base splashscreen file should be at least 1242x2208px.",
        )
        .with_arg(
            PositionalSpec::optional("file", "input splashscreen file")
                .with_default("./assets/splashscreen.png"),
        )
        .with_flag(app_name_flag())
        .with_flag(help_flag())
        .with_flag(verbose_flag())
        .with_example("{bin} {command}")
        .with_example("{bin} {command} ./assets/launch.png --appName MyApp");

        Self { schema }
    }
}

impl Default for Splash {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for Splash {
    fn schema(&self) -> &CommandSchema {
        &self.schema
    }

    fn execute(&self, parsed: &ParsedInvocation, console: &Console) -> Result<()> {
        let (file, app_name) = resolve_inputs(parsed, console)?;

        console.log(format!("Generating splashscreens for '{app_name}' app..."));

        let source = imaging::load_source(Path::new(file));
        let (mut failures, android_failures) = rayon::join(
            || generate_ios_splashscreens(&source, &ios_output_dir(app_name), console),
            || generate_android_splashscreens(&source, Path::new(ANDROID_OUTPUT_DIR), console),
        );
        failures.extend(android_failures);

        report_failures(&failures, console)?;

        console.log(format!("Generated splashscreens for '{app_name}' app."));
        Ok(())
    }
}

const ANDROID_OUTPUT_DIR: &str = "./android/app/src/main/res";

fn ios_output_dir(app_name: &str) -> PathBuf {
    Path::new("./ios")
        .join(app_name)
        .join("Images.xcassets")
        .join("Splashscreen.imageset")
}

pub(crate) fn ios_splash_tasks(ios_dir: &Path) -> Vec<(AssetTask, ImageEntry)> {
    SPLASHSCREEN_SIZES_IOS
        .iter()
        .map(|size| {
            let filename = size.ios_filename();
            let task = AssetTask::new(
                ios_dir.join(&filename),
                Transform::Cover {
                    width: size.width,
                    height: size.height,
                },
            );
            (task, ImageEntry::new(filename, "universal", size.ios_scale()))
        })
        .collect()
}

/// One `drawable-<density>/splashscreen.png` per density.
pub(crate) fn android_splash_tasks(res_dir: &Path) -> Vec<AssetTask> {
    SPLASHSCREEN_SIZES_ANDROID
        .iter()
        .map(|size| {
            AssetTask::new(
                res_dir
                    .join(format!("drawable-{}", size.density))
                    .join("splashscreen.png"),
                Transform::Cover {
                    width: size.width,
                    height: size.height,
                },
            )
        })
        .collect()
}

fn generate_ios_splashscreens(
    source: &Result<DynamicImage>,
    ios_dir: &Path,
    console: &Console,
) -> Vec<AssetFailure> {
    let (tasks, images): (Vec<_>, Vec<_>) = ios_splash_tasks(ios_dir).into_iter().unzip();

    let mut failures = imaging::render_batch(source, &tasks, console, "splashscreen");

    if let Err(err) = write_contents_json(ios_dir, images) {
        failures.push(AssetFailure {
            output: ios_dir.join("Contents.json"),
            reason: format!("{err:#}"),
        });
    }

    failures
}

fn generate_android_splashscreens(
    source: &Result<DynamicImage>,
    res_dir: &Path,
    console: &Console,
) -> Vec<AssetFailure> {
    imaging::render_batch(source, &android_splash_tasks(res_dir), console, "splashscreen")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ios_splash_tasks() {
        let dir = Path::new("ios/Test/Images.xcassets/Splashscreen.imageset");
        let pairs = ios_splash_tasks(dir);

        assert_eq!(pairs.len(), 3);
        let (task, entry) = &pairs[2];
        assert_eq!(task.output, dir.join("splashscreen@3x.png"));
        assert_eq!(task.transform, Transform::Cover { width: 1242, height: 2208 });
        assert_eq!(entry.idiom, "universal");
        assert_eq!(entry.scale, "3x");
        assert_eq!(entry.size, None);
    }

    #[test]
    fn test_android_splash_tasks() {
        let dir = Path::new("android/app/src/main/res");
        let tasks = android_splash_tasks(dir);

        assert_eq!(tasks.len(), 6);
        assert_eq!(tasks[0].output, dir.join("drawable-ldpi/splashscreen.png"));
        assert_eq!(tasks[0].transform, Transform::Cover { width: 200, height: 320 });
        assert_eq!(tasks[5].output, dir.join("drawable-xxxhdpi/splashscreen.png"));
    }
}
