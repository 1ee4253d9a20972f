use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use nalgebra::{UnitQuaternion, Vector3};
use std::fs;

use crystal_texture::harmonics::basis_size;
use crystal_texture::odf::{HarmonicOdf, Odf, ProjectionMethod};
use crystal_texture::rotations::from_euler_zyz;
use crystal_texture::Result;

#[derive(Parser)]
#[command(name = "crystal-texture")]
#[command(about = "Orientation distribution reconstruction from discrete textures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a harmonic expansion to a file of orientations
    Fit {
        /// Input file with one "alpha beta gamma [weight]" row per orientation (ZYZ Euler angles, radians)
        #[arg(short, long)]
        input: String,

        /// Expansion order
        #[arg(short, long, default_value = "4")]
        order: usize,

        /// Projection method: series, ls or nnls
        #[arg(short, long, default_value = "series")]
        method: String,

        /// Write the fitted expansion to this path as JSON
        #[arg(long)]
        output: Option<String>,
    },
    /// Report the pole density of a fitted expansion
    PoleDensity {
        /// Fitted expansion JSON written by the fit command
        #[arg(short, long)]
        input: String,

        /// Crystal pole direction, as "x,y,z"
        #[arg(short, long, default_value = "0,0,1")]
        pole: String,

        /// Sample direction, as "x,y,z"
        #[arg(short, long, default_value = "0,0,1")]
        direction: String,

        /// Number of fiber integration steps
        #[arg(short, long, default_value = "10")]
        steps: usize,
    },
    /// Print the basis size for an expansion order
    Basis {
        /// Expansion order
        #[arg(short, long)]
        order: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Fit {
            input,
            order,
            method,
            output,
        } => fit_expansion(input, order, method, output),
        Commands::PoleDensity {
            input,
            pole,
            direction,
            steps,
        } => report_pole_density(input, pole, direction, steps),
        Commands::Basis { order } => {
            println!("Basis size for order {}: {}", order, basis_size(order));
            Ok(())
        }
    }
}

fn fit_expansion(
    input: String,
    order: usize,
    method: String,
    output: Option<String>,
) -> Result<()> {
    let method: ProjectionMethod = method.parse()?;
    let (pts, wts) = read_orientations(&input)?;
    info!(
        "Fitting order-{} expansion to {} orientations from {}",
        order,
        pts.len(),
        input
    );

    let mut odf = HarmonicOdf::new(order);
    odf.project(&pts, Some(&wts), method)?;
    println!(
        "Fitted {} coefficients at order {}",
        odf.coefficient_count(),
        odf.order()
    );

    if let Some(path) = output {
        fs::write(&path, serde_json::to_string_pretty(&odf)?)?;
        info!("Wrote fitted expansion to {}", path);
    }
    Ok(())
}

fn report_pole_density(input: String, pole: String, direction: String, steps: usize) -> Result<()> {
    let odf: HarmonicOdf = serde_json::from_str(&fs::read_to_string(&input)?)?;
    let pole = parse_direction(&pole)?;
    let direction = parse_direction(&direction)?;

    let density = odf.pole_density_with_steps(&direction, &pole, steps)?;
    let mrd = density * 2.0 * std::f64::consts::PI * odf.pdf_to_mrd();
    println!("Pole density: {:.6e}", density);
    println!("Multiples of random density: {:.6}", mrd);
    Ok(())
}

fn read_orientations(path: &str) -> Result<(Vec<UnitQuaternion<f64>>, Vec<f64>)> {
    let content = fs::read_to_string(path)?;
    let mut pts = Vec::new();
    let mut wts = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<f64> = trimmed
            .split_whitespace()
            .map(|field| field.parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|parse_error| format!("Line {}: {}", number + 1, parse_error))?;
        match fields.len() {
            3 => {
                pts.push(from_euler_zyz(fields[0], fields[1], fields[2]));
                wts.push(1.0);
            }
            4 => {
                pts.push(from_euler_zyz(fields[0], fields[1], fields[2]));
                wts.push(fields[3]);
            }
            found => {
                return Err(format!(
                    "Line {}: expected 3 or 4 fields, found {}",
                    number + 1,
                    found
                )
                .into())
            }
        }
    }
    Ok((pts, wts))
}

fn parse_direction(text: &str) -> Result<Vector3<f64>> {
    let parts: Vec<f64> = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|parse_error| format!("Invalid direction {:?}: {}", text, parse_error))?;
    if parts.len() != 3 {
        return Err(format!(
            "Expected 3 components in direction {:?}, found {}",
            text,
            parts.len()
        )
        .into());
    }
    Ok(Vector3::new(parts[0], parts[1], parts[2]))
}
