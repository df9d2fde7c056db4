use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use poster_layout::{PageFormat, PhysicalSize, PosterConfig, Unit};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poster", about = "Tile an image across printable pages", version)]
struct Cli {
    /// JSON configuration file (DPI, background, preview settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page grid for a poster without writing anything
    Plan {
        #[command(flatten)]
        poster: PosterArgs,
    },

    /// Write a low-resolution JPEG preview with cut lines
    Preview {
        #[command(flatten)]
        poster: PosterArgs,

        /// Output JPEG file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write the print-ready PDF, one tile per page
    Export {
        #[command(flatten)]
        poster: PosterArgs,

        /// Output PDF file (defaults to poster_<format>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct PosterArgs {
    /// Input image
    #[arg(short, long)]
    input: PathBuf,

    /// Target poster width
    #[arg(long)]
    width: f64,

    /// Target poster height
    #[arg(long)]
    height: f64,

    /// Unit of width and height (mm, cm, inch, ft); unknown units mean mm
    #[arg(long, default_value = "mm")]
    unit: String,

    /// Page format to tile onto (a4, a3, a2, a1, letter, legal); unknown
    /// formats mean a4
    #[arg(long, default_value = "a4")]
    format: String,
}

impl PosterArgs {
    fn unit(&self) -> Unit {
        let unit = Unit::resolve(&self.unit);
        if Unit::lookup(&self.unit).is_none() {
            log::debug!("Unit {:?} not recognized, using {}", self.unit, unit.name());
        }
        unit
    }

    fn page_format(&self) -> PageFormat {
        let format = PageFormat::resolve(&self.format);
        if PageFormat::lookup(&self.format).is_none() {
            log::debug!(
                "Page format {:?} not recognized, using {}",
                self.format,
                format.name()
            );
        }
        format
    }

    fn target(&self) -> PhysicalSize {
        PhysicalSize::new(self.width, self.height, self.unit())
    }
}

async fn load_config(path: Option<&PathBuf>) -> Result<PosterConfig> {
    match path {
        Some(path) => {
            let config = PosterConfig::load(path).await?;
            log::info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(PosterConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref()).await?;

    match cli.command {
        Commands::Plan { poster } => {
            let image = poster_layout::load_image(&poster.input).await?;
            let layout = poster_layout::compute_layout(
                image.width(),
                image.height(),
                &poster.target(),
                poster.page_format(),
                &config,
            )?;
            let stats = poster_layout::calculate_statistics(&layout, &config);

            println!("Poster Statistics:");
            println!("  Page format: {}", stats.page_format.name());
            println!("  Grid: {} x {}", stats.columns, stats.rows);
            println!("  Pages: {}", stats.pages);
            println!(
                "  Page size: {} x {} px",
                stats.page_size_px.0, stats.page_size_px.1
            );
            println!(
                "  Poster size: {:.1} x {:.1} mm ({} x {} px)",
                stats.canvas_size_mm.0,
                stats.canvas_size_mm.1,
                stats.canvas_size_px.0,
                stats.canvas_size_px.1
            );
            println!(
                "  Printed image: {:.1} x {:.1} mm (scale {:.4})",
                stats.image_size_mm.0, stats.image_size_mm.1, stats.scale
            );
        }

        Commands::Preview { poster, output } => {
            let image = poster_layout::load_image(&poster.input).await?;
            let preview = poster_layout::generate_preview(
                image,
                poster.target(),
                poster.page_format(),
                &config,
            )
            .await?;
            poster_layout::save_preview(&preview, &output).await?;
            println!(
                "Preview of {} pages ({} x {}) → {}",
                preview.pages,
                preview.columns,
                preview.rows,
                output.display()
            );
        }

        Commands::Export { poster, output } => {
            let format = poster.page_format();
            let output =
                output.unwrap_or_else(|| PathBuf::from(poster_layout::download_filename(format)));

            let image = poster_layout::load_image(&poster.input).await?;
            let bytes =
                poster_layout::generate_pdf(image, poster.target(), format, &config).await?;
            poster_layout::save_pdf(&bytes, &output).await?;
            println!("Exported → {}", output.display());
        }
    }

    Ok(())
}
