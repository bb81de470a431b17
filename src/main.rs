use clap::Parser;
use prodigy_lig::{
    extract_electrostatics, load_model, ContactDetector, DistanceContacts, ExternalContacts,
    PredictionSession,
};
use std::path::PathBuf;
use tracing::{error, info, warn, Level};

/// Predict the binding affinity of a biomolecular complex from its atomic
/// contacts using the PRODIGY-LIG model
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the PDB or mmCIF file for which the score will be calculated
    #[arg(short, long)]
    input: PathBuf,

    /// The two interactor groups, e.g. `-c A,B C`:
    /// contacts are counted between chains A+B on one side and C on the other
    #[arg(short, long, num_args = 2, required = true, value_names = ["GROUP1", "GROUP2"])]
    chains: Vec<String>,

    /// Electrostatics energy from the refinement stage; read from the input
    /// file's REMARK records when omitted
    #[arg(short, long)]
    electrostatics: Option<f64>,

    /// Distance cutoff for the atomic contacts in Ångströms
    #[arg(short, long, default_value_t = 10.5)]
    dist_cutoff: f64,

    /// Path to an external all-atom contact executable; the built-in
    /// distance scan is used when omitted
    #[arg(long)]
    contact_exe: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 't', long, value_enum, default_value_t = OutputFormat::Text)]
    output_format: OutputFormat,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Tab-separated report table
    Text,
    /// The full result record as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let input_file = args.input.to_string_lossy().into_owned();
    let job_name = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "complex".to_string());

    let (pdb, pdb_warnings) = load_model(&input_file)?;
    for e in &pdb_warnings {
        warn!("{e}");
    }

    // HADDOCK writes its energies as REMARK lines, which mmCIF files lack.
    let is_cif = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cif"));
    let electrostatics = match (args.electrostatics, is_cif) {
        (Some(energy), _) => Some(energy),
        (None, true) => None,
        (None, false) => extract_electrostatics(&args.input)?,
    };
    if electrostatics.is_none() {
        info!("No electrostatics energy available, reporting the low refinement affinity only");
    }

    let detector: Box<dyn ContactDetector> = match &args.contact_exe {
        Some(exe) => Box::new(ExternalContacts::new(exe.clone())),
        None => Box::new(DistanceContacts),
    };

    let session = PredictionSession::new(
        job_name,
        (&args.chains[0], &args.chains[1]),
        electrostatics,
        args.dist_cutoff,
        detector,
    )?;
    let result = session.predict(&pdb)?;

    let report = match args.output_format {
        OutputFormat::Text => result.tabular_report(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result)?;
            json.push('\n');
            json
        }
    };
    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)?;
            info!("Results saved to {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}
