use std::path::PathBuf;

use anyhow::Context;
use forge::{GenerationRequest, ImageGenerator};
use image::RgbaImage;

/// Serves a fixed image from disk for every request.
#[derive(Debug, Clone)]
pub struct ArtworkFile {
    path: PathBuf,
}

impl ArtworkFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ImageGenerator for ArtworkFile {
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<RgbaImage> {
        tracing::debug!(path = %self.path.display(), %request, "loading artwork");
        let art = image::open(&self.path)
            .with_context(|| format!("Could not open artwork `{}`", self.path.display()))?;
        Ok(art.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge::{synthesize, CardForge};

    #[test]
    fn missing_file_is_an_error() {
        let card = CardForge::default().forge("un mago", &mut CardForge::create_rng(Some(1)));
        let generator = ArtworkFile::new(PathBuf::from("/nonexistent/art.png"));
        assert!(generator.generate(&synthesize(&card.descriptor)).is_err());
    }
}
