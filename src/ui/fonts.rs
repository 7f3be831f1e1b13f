//! Font loading for the end-of-game text

use std::path::Path;
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};
use tracing::{info, warn};

use crate::error::FontError;

/// Read a font file and register it under its own family `name`
pub fn load_font(path: &Path, name: &str) -> Result<FontDefinitions, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), Arc::new(FontData::from_owned(bytes)));
    fonts
        .families
        .insert(FontFamily::Name(name.into()), vec![name.to_owned()]);
    Ok(fonts)
}

/// Install the font into the context.
///
/// Returns the family to draw with, or `None` when the font is unavailable.
/// A missing font is not fatal: the game keeps running without result text.
pub fn install_font(ctx: &egui::Context, path: &Path, name: &str) -> Option<FontFamily> {
    match load_font(path, name) {
        Ok(fonts) => {
            ctx.set_fonts(fonts);
            info!(path = %path.display(), "result font loaded");
            Some(FontFamily::Name(name.into()))
        }
        Err(err) => {
            warn!(error = %err, "result font unavailable, end-of-game text disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_is_read_error() {
        let path = Path::new("definitely/not/here.ttf");
        match load_font(path, "result") {
            Err(FontError::Read { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            Ok(_) => panic!("expected missing font to fail"),
        }
    }

    #[test]
    fn test_missing_font_install_degrades() {
        let ctx = egui::Context::default();
        assert_eq!(install_font(&ctx, Path::new("missing.ttf"), "result"), None);
    }

    #[test]
    fn test_font_registered_under_family() {
        let dir = std::env::temp_dir().join(format!("othello-font-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("font.ttf");
        std::fs::write(&path, b"not parsed until first use").unwrap();

        let fonts = load_font(&path, "result").unwrap();
        assert!(fonts.font_data.contains_key("result"));
        assert_eq!(
            fonts.families.get(&FontFamily::Name("result".into())),
            Some(&vec!["result".to_owned()])
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
