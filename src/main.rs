/// codesig: render signatures and external names from a code model file
///
/// The model is a JSON array of elements (see `codesig::model`). Options
/// come from a named preset in codesig.toml or from explicit flag lists.
///
/// Commands:
/// - render: print signatures for chosen elements, or all of them
/// - external-name: print the stable key of one element
/// - validate: check a model file for structural problems
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codesig::{
    CodeModel, ElementId, FormatOptions, FormatterConfig, SignatureFormatter, Substitution,
};

#[derive(Parser)]
#[command(name = "codesig")]
#[command(about = "Render code model elements as signature strings", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file with presets and phrases
    #[arg(short, long, global = true, default_value = "codesig.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render signatures
    Render {
        /// Code model JSON file
        #[arg(short, long)]
        model: PathBuf,

        /// Element ids to render
        #[arg(short, long, num_args = 1..)]
        element: Vec<usize>,

        /// Render every class, method and variable in the model
        #[arg(long, conflicts_with = "element")]
        all: bool,

        /// Preset name from the config file
        #[arg(short, long, default_value = "hover")]
        preset: String,

        /// Explicit element options (bits or flag names), overrides the preset
        #[arg(long)]
        options: Option<FormatOptions>,

        /// Explicit parameter options, overrides the preset
        #[arg(long)]
        param_options: Option<FormatOptions>,

        /// Parameters shown before the list is cut short
        #[arg(long)]
        max_params: Option<usize>,

        /// Emit JSON records instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Print the external name of an element
    ExternalName {
        #[arg(short, long)]
        model: PathBuf,

        #[arg(short, long)]
        element: usize,

        /// Identify parameters by position instead of name
        #[arg(long)]
        index: bool,
    },

    /// Check a code model file
    Validate {
        #[arg(short, long)]
        model: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct RenderedSignature {
    id: ElementId,
    kind: &'static str,
    signature: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("codesig=warn"))
        .map_err(|e| anyhow!("Invalid log filter: {}", e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(true),
        )
        .init();

    let cli = Cli::parse();
    let config = FormatterConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Render {
            model,
            element,
            all,
            preset,
            options,
            param_options,
            max_params,
            json,
        } => {
            let model = load_model(&model)?;
            let preset = config
                .preset(&preset)
                .ok_or_else(|| anyhow!("Unknown preset: {}", preset))?;
            let options = options.unwrap_or(preset.options);
            let param_options = param_options.unwrap_or(preset.parameter_options);

            let formatter = SignatureFormatter::new(&model)
                .with_messages(&config.messages)
                .with_max_params(max_params.unwrap_or(config.max_params));

            let ids: Vec<ElementId> = if all {
                model
                    .elements()
                    .filter(|e| is_renderable(&e.kind))
                    .map(|e| e.id)
                    .collect()
            } else {
                element.into_iter().map(ElementId).collect()
            };
            debug!("Rendering {} elements with options {:#x}", ids.len(), options.bits());

            // The formatter is stateless, so elements render independently
            let rendered: Vec<RenderedSignature> = ids
                .par_iter()
                .map(|&id| -> Result<RenderedSignature> {
                    let signature =
                        formatter.format_element(id, options, param_options, &Substitution::empty())?;
                    let kind = model.get(id).map(|e| e.kind_name()).unwrap_or("unknown");
                    Ok(RenderedSignature { id, kind, signature })
                })
                .collect::<Result<_>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                for record in &rendered {
                    println!("{}\t{}", record.id, record.signature);
                }
            }
        }

        Commands::ExternalName {
            model,
            element,
            index,
        } => {
            let model = load_model(&model)?;
            let formatter = SignatureFormatter::new(&model).with_messages(&config.messages);
            match formatter.external_name(ElementId(element), !index)? {
                Some(name) => println!("{}", name),
                None => return Err(anyhow!("Element #{} has no external name", element)),
            }
        }

        Commands::Validate { model } => {
            let model = load_model(&model)?;
            info!("Model is valid");
            println!("ok: {} elements", model.len());
        }
    }

    Ok(())
}

fn load_model(path: &Path) -> Result<CodeModel> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read model {}: {}", path.display(), e))?;
    let model = CodeModel::from_json(&content)
        .map_err(|e| anyhow!("Invalid model {}: {}", path.display(), e))?;
    debug!("Loaded {} elements from {}", model.len(), path.display());
    Ok(model)
}

fn is_renderable(kind: &codesig::ElementKind) -> bool {
    use codesig::ElementKind::*;
    matches!(
        kind,
        Class(_) | AnonymousClass(_) | Method(_) | Field(_) | Parameter(_) | LocalVariable(_)
    )
}
