mod args;
mod artwork_file;
mod report;

use clap::Parser;
use forge::{compose, CardForge, ForgeConfig, ImageGenerator, PlaceholderArtwork};
use tracing_subscriber::EnvFilter;

use crate::{args::Cli, artwork_file::ArtworkFile, report::Report};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ForgeConfig::from_path(path)?,
        None => ForgeConfig::default(),
    };
    if let Some(variant) = cli.variant {
        config.parser.variant = variant;
    }
    if let Some(style) = cli.style {
        config.narrative.style = style;
    }
    let forge = CardForge::new(&config);
    let mut rng = CardForge::create_rng(cli.seed.or(config.seed));
    tracing::info!(description = %cli.description, "forging");
    if cli.art.is_some() && cli.out.is_none() {
        tracing::warn!("--art has no effect without --out");
    }

    let (card, composition) = match &cli.out {
        Some(out) => {
            let placeholder;
            let file;
            let generator: &dyn ImageGenerator = match &cli.art {
                Some(path) => {
                    file = ArtworkFile::new(path.clone());
                    &file
                }
                None => {
                    let first = forge.parser().classify(&cli.description).elements.iter().next();
                    placeholder = PlaceholderArtwork::new(first);
                    &placeholder
                }
            };
            let (card, art) = forge.forge_with_art(&cli.description, &mut rng, generator);
            let composition = compose(&card, art.as_ref());
            composition.save_png(out)?;
            tracing::info!(path = %out.display(), "card written");
            (card, Some(composition))
        }
        None => (forge.forge(&cli.description, &mut rng), None),
    };

    let report = Report::new(&card, composition.as_ref());
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
