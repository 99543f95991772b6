use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shacl2form::emitter::ntriples::NTriplesEmitter;
use shacl2form::emitter::turtle::TurtleEmitter;
use shacl2form::emitter::{emit_properties, TriplesEmitter};
use shacl2form::jsonld;
use shacl2form::loader::{load_json, load_vocabulary};
use shacl2form::projection::display::properties_to_show;
use shacl2form::{
    validate_property_values, ProjectionOptions, Projector, PropertyEntry, ShapeConflictPolicy,
};

/// Project JSON-LD metadata through a SHACL vocabulary into form properties.
#[derive(Parser)]
#[command(name = "shacl2form", version, about)]
struct Cli {
    /// Expanded JSON-LD vocabulary with the SHACL shapes.
    #[arg(long, value_name = "FILE")]
    vocabulary: PathBuf,

    /// Expanded JSON-LD metadata.
    #[arg(long, value_name = "FILE")]
    metadata: PathBuf,

    /// Subject to project [default: the only node in the metadata].
    #[arg(short, long, value_name = "IRI")]
    subject: Option<String>,

    /// Output format: json, ntriples, turtle.
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Host of the workspace, used to label local IRIs.
    #[arg(long, value_name = "HOST", default_value = "localhost")]
    host: String,

    /// Label external resources by their full IRI instead of their local name.
    #[arg(long)]
    full_iris: bool,

    /// Only output properties a metadata form shows.
    #[arg(long)]
    visible_only: bool,

    /// Check values against their shapes; fail if any property is invalid.
    #[arg(long)]
    validate: bool,

    /// Fail when two shapes target the same class instead of using the first.
    #[arg(long)]
    reject_ambiguous_shapes: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

enum OutputFormat {
    Json,
    NTriples,
    Turtle,
}

impl OutputFormat {
    fn parse(name: &str) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "ntriples" | "nt" => Ok(Self::NTriples),
            "turtle" | "ttl" => Ok(Self::Turtle),
            other => Err(format!(
                "Unknown format: {other}. Use 'json', 'ntriples' or 'turtle'."
            )),
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn emit<E: TriplesEmitter>(
    mut emitter: E,
    subject: &str,
    properties: &[PropertyEntry],
) -> io::Result<u64> {
    emit_properties(&mut emitter, subject, properties)?;
    emitter.flush()?;
    Ok(emitter.triple_count())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.verbose {
        eprintln!("Loading vocabulary from: {}", cli.vocabulary.display());
    }
    let policy = if cli.reject_ambiguous_shapes {
        ShapeConflictPolicy::Reject
    } else {
        ShapeConflictPolicy::FirstWins
    };
    let vocabulary = load_vocabulary(&cli.vocabulary, policy)?;

    if cli.verbose {
        eprintln!("Loading metadata from: {}", cli.metadata.display());
    }
    let graph = load_json(&cli.metadata)?;

    let options = ProjectionOptions {
        workspace_host: cli.host.clone(),
        shorten_external_iris: !cli.full_iris,
    };
    let projector = Projector::new(&vocabulary, options);
    let mut properties = projector.project(&graph, cli.subject.as_deref())?;
    if cli.visible_only {
        properties = properties_to_show(&properties)
            .into_iter()
            .cloned()
            .collect();
    }

    let subject = cli
        .subject
        .clone()
        .or_else(|| graph.first().and_then(jsonld::node_id).map(str::to_string))
        .unwrap_or_default();

    let format = OutputFormat::parse(&cli.format)?;
    let mut output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut output_writer, &properties)?;
            writeln!(output_writer)?;
            output_writer.flush()?;
        }
        OutputFormat::NTriples => {
            let count = emit(NTriplesEmitter::new(output_writer), &subject, &properties)?;
            if cli.verbose {
                eprintln!("Wrote {count} triples");
            }
        }
        OutputFormat::Turtle => {
            let count = emit(TurtleEmitter::new(output_writer), &subject, &properties)?;
            if cli.verbose {
                eprintln!("Wrote {count} triples");
            }
        }
    }

    if !cli.quiet {
        eprintln!("Projected {} properties for {subject}", properties.len());
    }

    if cli.validate {
        let mut error_count = 0;
        for property in &properties {
            for error in validate_property_values(property) {
                error_count += 1;
                let name = property.label.as_deref().unwrap_or(&property.key);
                eprintln!("{name}: {error}");
            }
        }
        if error_count > 0 {
            return Err(format!("{error_count} validation error(s)").into());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
