//! sigil-forge CLI: deterministic sigil generation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use miette::Result;

use sigil_forge::alphabet::Script;
use sigil_forge::assemble::{Method, SigilRequest, forge};
use sigil_forge::config::SigilConfig;
use sigil_forge::export::{self, SigilExport};
use sigil_forge::geometry::WheelBase;
use sigil_forge::render::{self, RenderConfig};
use sigil_forge::seed::Seed;

#[derive(Parser)]
#[command(name = "sigil-forge", version, about = "A tool for the crystallization of Will")]
struct Cli {
    /// TOML file with geometry and appearance settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable ANSI colors in text reports.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forge a sigil from an intent, name, or desire.
    Forge {
        /// The intent to sigilize.
        intent: String,

        /// Magickal alphabet: Hebrew, Arabic, Latin, Egyptian.
        #[arg(long, default_value = "Latin")]
        script: String,

        /// Sigilization method: Wheel or Mantra.
        #[arg(long, default_value = "Wheel")]
        method: String,

        /// Wheel base: "9-Point Wheel" or a planet (Saturn, Jupiter, Mars,
        /// Sun, Venus, Mercury, Moon).
        #[arg(long, default_value = "9-Point Wheel")]
        base: String,

        /// Permute the 9-point wheel by the intent's seed.
        #[arg(long)]
        chaos: bool,

        /// Overlay every letter instead of removing vowels and duplicates.
        #[arg(long)]
        raw_mantra: bool,

        /// What to print.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Also write the JSON export to this file.
        #[arg(long, conflicts_with = "save")]
        output: Option<PathBuf>,

        /// Also write the JSON export to a file named after the intent.
        #[arg(long)]
        save: bool,

        /// Emit the bare circles instead of failing when the intent has no letters.
        #[arg(long)]
        allow_empty: bool,
    },

    /// Print the numeric seed of an intent.
    Seed {
        intent: String,
    },

    /// List every alphabet table and planetary kamea.
    Legend,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Full export: request, intermediate values, primitives.
    Json,
    /// Human-readable details report.
    Details,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SigilConfig::load(path)?,
        None => SigilConfig::default(),
    };
    let render_config = RenderConfig {
        color: !cli.no_color && RenderConfig::default().color,
    };

    match cli.command {
        Commands::Forge {
            intent,
            script,
            method,
            base,
            chaos,
            raw_mantra,
            format,
            output,
            save,
            allow_empty,
        } => {
            let request = SigilRequest {
                intent,
                script: script.parse::<Script>()?,
                method: method.parse::<Method>()?,
                wheel_base: base.parse::<WheelBase>()?,
                chaos_mode: chaos,
                mantra_condense: !raw_mantra,
            };

            let sigil = forge(&request, &config)?;
            let sigil = if allow_empty {
                sigil
            } else {
                sigil.into_non_empty()?
            };

            let exported = SigilExport::new(request, sigil);
            let target = output.or_else(|| {
                save.then(|| PathBuf::from(export::default_file_name(&exported.request.intent)))
            });
            if let Some(path) = &target {
                exported.write_json(path)?;
            }

            match format {
                Format::Json => println!("{}", exported.to_json()?),
                Format::Details => {
                    println!(
                        "{}",
                        render::render_details(&exported.request, &exported.sigil, &render_config)
                    );
                    if let Some(path) = &target {
                        println!("Saved to {}", path.display());
                    }
                }
            }
        }

        Commands::Seed { intent } => {
            println!("{}", Seed::from_intent(&intent));
        }

        Commands::Legend => {
            println!("{}", render::render_legend(&render_config));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn forge_defaults() {
        let cli = Cli::try_parse_from(["sigil-forge", "forge", "MY DESIRE"]).unwrap();
        let Commands::Forge {
            script,
            method,
            base,
            chaos,
            ..
        } = cli.command
        else {
            panic!("expected forge");
        };
        assert_eq!(script.parse::<Script>().unwrap(), Script::Latin);
        assert_eq!(method.parse::<Method>().unwrap(), Method::Wheel);
        assert_eq!(base.parse::<WheelBase>().unwrap(), WheelBase::NinePoint);
        assert!(!chaos);
    }

    #[test]
    fn output_and_save_conflict() {
        let parsed = Cli::try_parse_from([
            "sigil-forge",
            "forge",
            "x",
            "--output",
            "a.json",
            "--save",
        ]);
        assert!(parsed.is_err());
    }
}
