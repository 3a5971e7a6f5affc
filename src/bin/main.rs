//! gpkernels Command Line Interface
//!
//! A command-line interface for initialising kernel hyperparameters and
//! building gram and cross-covariance matrices from CSV point sets.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use gpkernels::core::{Params, Result};
use gpkernels::data::write_matrix;
use gpkernels::kernel::{Kernel, KernelKind};
use gpkernels::persistence::SerializableParams;
use gpkernels::utils::{add_jitter, diagnostics};
use gpkernels::{cross_covariance, gram, initialise, PointSet};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "gpkernels")]
#[command(about = "Gaussian Process kernel and covariance matrix toolkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "gpkernels Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default hyperparameters for a kernel
    Init(InitArgs),
    /// Compute the gram matrix of a point set
    Gram(GramArgs),
    /// Compute the cross-covariance between two point sets
    Cross(CrossArgs),
    /// Display a saved parameter file
    Info(InfoArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliKernel {
    /// Radial basis function (squared exponential)
    #[value(name = "rbf")]
    Rbf,
    /// Matérn 1/2 (exponential)
    #[value(name = "matern12")]
    Matern12,
    /// Matérn 3/2
    #[value(name = "matern32")]
    Matern32,
    /// Matérn 5/2
    #[value(name = "matern52")]
    Matern52,
}

impl From<CliKernel> for KernelKind {
    fn from(cli_kernel: CliKernel) -> Self {
        match cli_kernel {
            CliKernel::Rbf => KernelKind::Rbf,
            CliKernel::Matern12 => KernelKind::Matern12,
            CliKernel::Matern32 => KernelKind::Matern32,
            CliKernel::Matern52 => KernelKind::Matern52,
        }
    }
}

#[derive(Args)]
struct InitArgs {
    /// Kernel type
    #[arg(short, long, default_value = "rbf")]
    kernel: CliKernel,

    /// Declared input dimensionality (enables ARD when > 1)
    #[arg(short, long)]
    ndims: Option<usize>,

    /// Output parameter file
    #[arg(short, long)]
    output: PathBuf,
}

/// Kernel selection shared by the matrix commands
#[derive(Args)]
struct KernelArgs {
    /// Saved parameter file (takes precedence over --kernel)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Kernel type used with default parameters when no file is given
    #[arg(short, long, default_value = "rbf")]
    kernel: CliKernel,
}

#[derive(Args)]
struct GramArgs {
    /// Point set (CSV, one point per row)
    #[arg(long)]
    data: PathBuf,

    #[command(flatten)]
    kernel: KernelArgs,

    /// Diagonal jitter added to the gram matrix
    #[arg(short, long)]
    jitter: Option<f64>,

    /// Report symmetry, positive definiteness and minimum eigenvalue
    #[arg(long)]
    check: bool,

    /// Output matrix file (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CrossArgs {
    /// Point set indexing the rows of the result
    #[arg(long)]
    x1: PathBuf,

    /// Point set indexing the columns of the result
    #[arg(long)]
    x2: PathBuf,

    #[command(flatten)]
    kernel: KernelArgs,

    /// Output matrix file (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InfoArgs {
    /// Parameter file
    params: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Init(args) => init_command(args),
        Commands::Gram(args) => gram_command(args),
        Commands::Cross(args) => cross_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn init_command(args: InitArgs) -> Result<()> {
    let kind = KernelKind::from(args.kernel);
    let kernel = kind.build(args.ndims)?;
    let (params, _, _) = initialise(kernel.as_ref());

    info!(
        "Initialised {kind} kernel (ard={}) with {} lengthscale(s)",
        kernel.ard(),
        params.n_lengthscales()
    );

    SerializableParams::new(kind, args.ndims, &params).save_to_file(&args.output)?;
    info!("Parameters saved to: {:?}", args.output);
    Ok(())
}

fn gram_command(args: GramArgs) -> Result<()> {
    let (kernel, params) = resolve_kernel(&args.kernel)?;
    let points = PointSet::from_file(&args.data)?;
    info!(
        "Loaded {} points with {} dimensions",
        points.len(),
        points.dim()
    );

    let mut matrix = gram(kernel.as_ref(), points.points(), &params)?;
    if let Some(eps) = args.jitter {
        info!("Adding diagonal jitter {eps}");
        add_jitter(&mut matrix, eps)?;
    }

    if args.check {
        let report = diagnostics::report(&matrix)?;
        println!("Size: {}", report.size);
        println!("Symmetric: {}", report.symmetric);
        println!("Positive definite: {}", report.positive_definite);
        println!("Minimum eigenvalue: {:e}", report.min_eigenvalue);
    }

    output_matrix(&matrix, args.output.as_deref())
}

fn cross_command(args: CrossArgs) -> Result<()> {
    let (kernel, params) = resolve_kernel(&args.kernel)?;
    let x1 = PointSet::from_file(&args.x1)?;
    let x2 = PointSet::from_file(&args.x2)?;
    info!("Cross-covariance of {} x {} points", x1.len(), x2.len());

    let matrix = cross_covariance(kernel.as_ref(), x2.points(), x1.points(), &params)?;
    output_matrix(&matrix, args.output.as_deref())
}

fn info_command(args: InfoArgs) -> Result<()> {
    let saved = SerializableParams::load_from_file(&args.params)?;
    saved.to_params()?;
    saved.print_summary();
    Ok(())
}

/// Kernel and parameters from a saved file, or defaults for `--kernel`
fn resolve_kernel(args: &KernelArgs) -> Result<(Box<dyn Kernel>, Params)> {
    match &args.params {
        Some(path) => {
            let saved = SerializableParams::load_from_file(path)?;
            info!("Using {} kernel from {:?}", saved.kernel, path);
            let params = saved.to_params()?;
            Ok((saved.build_kernel()?, params))
        }
        None => {
            let kernel = KernelKind::from(args.kernel).build(None)?;
            let (params, _, _) = initialise(kernel.as_ref());
            Ok((kernel, params))
        }
    }
}

fn output_matrix(matrix: &ndarray::Array2<f64>, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_matrix(&mut writer, matrix)?;
            writer.flush()?;
            info!("Matrix {:?} written to: {:?}", matrix.dim(), path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_matrix(&mut handle, matrix)?;
        }
    }
    Ok(())
}
