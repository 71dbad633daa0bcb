use futures::executor::block_on;
use mermaid_coords::{
    BottomRightY, CircleCenter, CoordinateCollection, ExtractOptions, MalformedPolicy,
    MissingTransform,
};
use mermaid_coords_render::{DiagramRenderer, HeadlessRenderer, MmdcRenderer, render_document};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_INPUT: &str = "index.html";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Input { path: String, err: std::io::Error },
    Config { path: String, message: String },
    Render(mermaid_coords_render::Error),
    Extract(mermaid_coords::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Input { path, err } => write!(f, "failed to read {path}: {err}"),
            CliError::Config { path, message } => write!(f, "invalid config {path}: {message}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Extract(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<mermaid_coords_render::Error> for CliError {
    fn from(value: mermaid_coords_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<mermaid_coords::Error> for CliError {
    fn from(value: mermaid_coords::Error) -> Self {
        Self::Extract(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RendererKind {
    #[default]
    Merman,
    Mmdc,
    None,
}

impl FromStr for RendererKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merman" | "headless" => Ok(Self::Merman),
            "mmdc" => Ok(Self::Mmdc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// Flag overrides applied on top of the config file.
#[derive(Debug, Default)]
struct OptionOverrides {
    missing_transform: Option<MissingTransform>,
    bottom_right_y: Option<BottomRightY>,
    malformed: Option<MalformedPolicy>,
    circle_center: Option<CircleCenter>,
    strict_markup: Option<bool>,
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    renderer: RendererKind,
    mmdc: Option<String>,
    config: Option<String>,
    overrides: OptionOverrides,
}

fn usage() -> &'static str {
    "mermaid-coords\n\
\n\
USAGE:\n\
  mermaid-coords [--renderer merman|mmdc|none] [--mmdc <path>] [--config <file>] [--identity-fallback] [--adjusted-bottom-right] [--skip-malformed] [--circle-center radii|center] [--strict-markup] [<path>|-]\n\
\n\
NOTES:\n\
  - <path> defaults to ./index.html; '-' reads from stdin.\n\
  - Mermaid blocks (pre.mermaid, div.mermaid, code.language-mermaid) are rendered to inline SVG first;\n\
    --renderer none expects the input to already contain rendered SVG.\n\
  - --config accepts JSON, or YAML for .yaml/.yml files; flags override it.\n\
  - Set RUST_LOG (e.g. RUST_LOG=mermaid_coords=debug) to see skipped shapes.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--renderer" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.renderer = kind
                    .parse::<RendererKind>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--mmdc" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.mmdc = Some(path.clone());
                args.renderer = RendererKind::Mmdc;
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--identity-fallback" => {
                args.overrides.missing_transform = Some(MissingTransform::Identity);
            }
            "--adjusted-bottom-right" => {
                args.overrides.bottom_right_y = Some(BottomRightY::Adjusted);
            }
            "--skip-malformed" => args.overrides.malformed = Some(MalformedPolicy::Skip),
            "--circle-center" => {
                let Some(src) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.overrides.circle_center = Some(match src.as_str() {
                    "radii" => CircleCenter::Radii,
                    "center" => CircleCenter::Center,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--strict-markup" => args.overrides.strict_markup = Some(true),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input.unwrap_or(DEFAULT_INPUT) {
        "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| CliError::Input {
                    path: "<stdin>".to_string(),
                    err,
                })?;
            Ok(buf)
        }
        path => std::fs::read_to_string(path).map_err(|err| CliError::Input {
            path: path.to_string(),
            err,
        }),
    }
}

fn load_options(args: &Args) -> Result<ExtractOptions, CliError> {
    let mut options = match args.config.as_deref() {
        None => ExtractOptions::default(),
        Some(path) => {
            let config_err = |message: String| CliError::Config {
                path: path.to_string(),
                message,
            };
            let text = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
            let is_yaml = Path::new(path)
                .extension()
                .is_some_and(|e| e == "yaml" || e == "yml");
            if is_yaml {
                serde_yaml::from_str(&text).map_err(|e| config_err(e.to_string()))?
            } else {
                ExtractOptions::from_json_str(&text).map_err(|e| config_err(e.to_string()))?
            }
        }
    };

    let o = &args.overrides;
    if let Some(v) = o.missing_transform {
        options.missing_transform = v;
    }
    if let Some(v) = o.bottom_right_y {
        options.bottom_right_y = v;
    }
    if let Some(v) = o.malformed {
        options.malformed = v;
    }
    if let Some(v) = o.circle_center {
        options.circle_center = v;
    }
    if let Some(v) = o.strict_markup {
        options.strict_markup = v;
    }
    Ok(options)
}

fn build_renderer(args: &Args) -> Option<Box<dyn DiagramRenderer>> {
    match args.renderer {
        RendererKind::Merman => Some(Box::new(HeadlessRenderer::new())),
        RendererKind::Mmdc => Some(Box::new(match args.mmdc.as_deref() {
            Some(path) => MmdcRenderer::new(path),
            None => MmdcRenderer::default(),
        })),
        RendererKind::None => None,
    }
}

fn write_output(coords: &CoordinateCollection) -> Result<(), CliError> {
    let json = coords.to_json()?;
    let pretty = coords.to_json_pretty()?;
    println!("Coordinates json:  {json}");
    println!("Coordinates Array: {pretty}");
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let options = load_options(&args)?;
    let text = read_input(args.input.as_deref())?;

    let markup = match build_renderer(&args) {
        Some(renderer) => block_on(render_document(&text, renderer.as_ref()))?,
        None => text,
    };
    tracing::debug!(
        renderer = ?args.renderer,
        bytes = markup.len(),
        "markup ready for extraction"
    );

    let coords = mermaid_coords::extract_coordinates(&markup, &options)?;
    write_output(&coords)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
