//! Fixed output size tables for icons and splashscreens.

/// An Android launcher icon density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidIconSize {
    pub density: &'static str,
    pub size: u32,
}

/// An iOS app icon slot, rendered once per scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosIconSize {
    pub base_size: u32,
    pub name: &'static str,
    pub idiom: Option<&'static str>,
    pub scales: &'static [u32],
}

impl IosIconSize {
    /// `Icon-60@2x.png`, or `iTunesArtwork.png` for the 1x slot.
    pub fn filename(&self, scale: u32) -> String {
        if scale > 1 {
            format!("{}@{scale}x.png", self.name)
        } else {
            format!("{}.png", self.name)
        }
    }

    pub fn idiom(&self) -> &'static str {
        self.idiom.unwrap_or("iphone")
    }
}

/// An Android splashscreen density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidSplashscreenSize {
    pub density: &'static str,
    pub width: u32,
    pub height: u32,
}

/// An iOS splashscreen scale. `density` is absent for the 1x base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosSplashscreenSize {
    pub density: Option<&'static str>,
    pub width: u32,
    pub height: u32,
}

impl IosSplashscreenSize {
    /// `splashscreen.png`, `splashscreen@2x.png`, ...
    pub fn ios_filename(&self) -> String {
        match self.density {
            Some(density) => format!("splashscreen@{density}.png"),
            None => "splashscreen.png".to_string(),
        }
    }

    pub fn ios_scale(&self) -> &'static str {
        self.density.unwrap_or("1x")
    }
}

pub const ICON_SIZES_ANDROID: &[AndroidIconSize] = &[
    AndroidIconSize { density: "mdpi", size: 48 },
    AndroidIconSize { density: "hdpi", size: 72 },
    AndroidIconSize { density: "xhdpi", size: 96 },
    AndroidIconSize { density: "xxhdpi", size: 144 },
    AndroidIconSize { density: "xxxhdpi", size: 192 },
];

/// Size of the Play Store web icon.
pub const ANDROID_WEB_ICON_SIZE: u32 = 512;

pub const ICON_SIZES_IOS: &[IosIconSize] = &[
    IosIconSize { base_size: 20, name: "Icon-Notification", idiom: None, scales: &[2, 3] },
    IosIconSize { base_size: 29, name: "Icon-Small", idiom: None, scales: &[2, 3] },
    IosIconSize { base_size: 40, name: "Icon-Spotlight-40", idiom: None, scales: &[2, 3] },
    IosIconSize { base_size: 60, name: "Icon-60", idiom: None, scales: &[2, 3] },
    IosIconSize {
        base_size: 1024,
        name: "iTunesArtwork",
        idiom: Some("ios-marketing"),
        scales: &[1],
    },
];

pub const SPLASHSCREEN_SIZES_ANDROID: &[AndroidSplashscreenSize] = &[
    AndroidSplashscreenSize { density: "ldpi", width: 200, height: 320 },
    AndroidSplashscreenSize { density: "mdpi", width: 320, height: 480 },
    AndroidSplashscreenSize { density: "hdpi", width: 480, height: 800 },
    AndroidSplashscreenSize { density: "xhdpi", width: 720, height: 1280 },
    AndroidSplashscreenSize { density: "xxhdpi", width: 960, height: 1600 },
    AndroidSplashscreenSize { density: "xxxhdpi", width: 1280, height: 1920 },
];

pub const SPLASHSCREEN_SIZES_IOS: &[IosSplashscreenSize] = &[
    IosSplashscreenSize { density: None, width: 320, height: 480 },
    IosSplashscreenSize { density: Some("2x"), width: 750, height: 1334 },
    IosSplashscreenSize { density: Some("3x"), width: 1242, height: 2208 },
];
