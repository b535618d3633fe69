use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::styles::{FontSizes, Theme};

pub const LETTERHEAD_FILE: &str = "letterhead.jpg";
pub const STAMP_FILE: &str = "stamp.png";

/// Everything the renderer needs besides the request itself.
///
/// Built once at startup and shared read-only between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub assets: AssetPaths,
    pub theme: Theme,
    pub fonts: FontSizes,
    pub text: DocumentText,
}

impl RenderConfig {
    /// Default theme and text, with images looked up in `dir`.
    pub fn with_asset_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            assets: AssetPaths::in_dir(dir),
            theme: Theme::default(),
            fonts: FontSizes::default(),
            text: DocumentText::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPaths {
    pub letterhead: PathBuf,
    /// Drawn with its alpha channel, so a PNG with transparency is expected.
    pub stamp: PathBuf,
}

impl AssetPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            letterhead: dir.join(LETTERHEAD_FILE),
            stamp: dir.join(STAMP_FILE),
        }
    }
}

/// Fixed strings printed on every quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    pub title: String,
    pub date_label: String,
    pub recipient_prefix: String,
    pub bullet: String,
    pub footer_lines: Vec<String>,
}

impl Default for DocumentText {
    fn default() -> Self {
        Self {
            title: "Quotation For Employee Transport Service".to_string(),
            date_label: "Date : ".to_string(),
            recipient_prefix: "TO,".to_string(),
            bullet: "\u{2022} ".to_string(),
            footer_lines: vec![
                "JAGTAP TRAVELS GST NO - 27AKGPJ1825N1ZX".to_string(),
                "BANK - AXIS BANK | BRANCH - SASWAD".to_string(),
                "ACCOUNT NO - 916020073533410".to_string(),
                "IFS CODE - UTIB0002985".to_string(),
            ],
        }
    }
}
