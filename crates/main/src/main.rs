use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use log::info;
use showroom_reports::config::{self, RenderOptions};
use showroom_reports::registry;
use showroom_reports::{
    PaperSize, RenderedReport, ReportBuilder, ReportConfig, ReportError, ReportType,
};

mod samples;

/// Renders showroom reports to PDF.
///
/// `REPORT_PAPER_SIZE` and `REPORT_GENERATED_AT` set defaults for the
/// matching flags. Log output is controlled through `RUST_LOG`.
#[derive(Parser)]
#[command(author, version, about = "Render showroom metric reports to PDF")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report configuration JSON file.
    Render {
        /// Path to a `ReportConfig` JSON document.
        #[arg(short, long)]
        config: PathBuf,

        /// Output file; defaults to `{type}-{YYYY-MM-DD}.pdf`.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Paper size: `letter` or `a4`.
        #[arg(long, value_parser = parse_paper)]
        paper: Option<PaperSize>,

        /// Footer timestamp (RFC 3339 or `YYYY-MM-DD HH:MM:SS`).
        #[arg(long, value_parser = parse_generated_at)]
        generated_at: Option<NaiveDateTime>,

        /// Embed an outline entry per section.
        #[cfg(feature = "bookmarks")]
        #[arg(long)]
        bookmarks: bool,
    },

    /// List every report type with its title.
    Types {
        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Render every report type from built-in sample data.
    #[command(name = "run-all", aliases = ["run_all", "all"])]
    RunAll {
        #[arg(long, default_value = "target/report_samples")]
        output_dir: PathBuf,

        #[arg(long, value_parser = parse_paper)]
        paper: Option<PaperSize>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Render {
            config,
            output,
            paper,
            generated_at,
            #[cfg(feature = "bookmarks")]
            bookmarks,
        } => render(RenderArgs {
            config,
            output,
            paper,
            generated_at,
            #[cfg(feature = "bookmarks")]
            bookmarks,
        }),
        Commands::Types { json } => list_types(json),
        Commands::RunAll { output_dir, paper } => run_all(&output_dir, paper),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn parse_paper(value: &str) -> Result<PaperSize, String> {
    value.parse().map_err(|err: ReportError| err.to_string())
}

fn parse_generated_at(value: &str) -> Result<NaiveDateTime, String> {
    config::parse_timestamp(value).map_err(|err| err.to_string())
}

struct RenderArgs {
    config: PathBuf,
    output: Option<PathBuf>,
    paper: Option<PaperSize>,
    generated_at: Option<NaiveDateTime>,
    #[cfg(feature = "bookmarks")]
    bookmarks: bool,
}

fn builder_from_env(
    paper: Option<PaperSize>,
    generated_at: Option<NaiveDateTime>,
) -> Result<ReportBuilder, Box<dyn Error>> {
    let mut options = RenderOptions::from_env()?;
    if let Some(paper) = paper {
        options.paper_size = paper;
    }
    if generated_at.is_some() {
        options.generated_at = generated_at;
    }

    #[allow(unused_mut)]
    let mut builder = ReportBuilder::from_options(options);
    #[cfg(feature = "remote-images")]
    {
        let source = showroom_reports::HttpPhotoSource::new(std::time::Duration::from_secs(10))?;
        builder = builder.with_photo_source(source);
    }
    Ok(builder)
}

fn render(args: RenderArgs) -> Result<(), Box<dyn Error>> {
    let json = fs::read_to_string(&args.config)?;
    let config = ReportConfig::from_json(&json)?;
    let builder = builder_from_env(args.paper, args.generated_at)?;

    #[cfg(feature = "bookmarks")]
    let report = if args.bookmarks {
        builder.render_with_bookmarks(&config)?
    } else {
        builder.render(&config)?
    };
    #[cfg(not(feature = "bookmarks"))]
    let report = builder.render(&config)?;

    let output = args
        .output
        .unwrap_or_else(|| default_file_name(config.report_type));
    write_report(&output, &report)
}

fn default_file_name(report_type: ReportType) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}.pdf",
        report_type,
        Local::now().date_naive().format("%Y-%m-%d")
    ))
}

fn write_report(path: &Path, report: &RenderedReport) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &report.bytes)?;
    println!(
        "Generated {} ({} page(s), {} bytes)",
        path.display(),
        report.page_count,
        report.bytes.len()
    );
    Ok(())
}

fn list_types(json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let entries: Vec<serde_json::Value> = registry::templates()
            .map(|template| {
                serde_json::json!({
                    "type": template.report_type.tag(),
                    "title": template.title,
                    "description": template.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for template in registry::templates() {
        println!(
            "{:<22} {:<28} {}",
            template.report_type.tag(),
            template.title,
            template.description
        );
    }
    Ok(())
}

fn run_all(output_dir: &Path, paper: Option<PaperSize>) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(output_dir)?;
    let builder = builder_from_env(paper, None)?;

    for report_type in ReportType::ALL {
        let config = samples::sample_config(report_type);
        #[cfg(feature = "bookmarks")]
        let report = builder.render_with_bookmarks(&config)?;
        #[cfg(not(feature = "bookmarks"))]
        let report = builder.render(&config)?;

        let path = output_dir.join(format!("{report_type}.pdf"));
        write_report(&path, &report)?;
    }

    info!(
        "rendered {} report types into {}",
        ReportType::ALL.len(),
        output_dir.display()
    );
    println!("All renders completed successfully.");
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
