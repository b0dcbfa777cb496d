use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use folio::{
    AssetRef, CurateOptions, JsonEditionFile, OutputFormat, PipelineBuilder, PipelineError,
    Section, SnapshotStore,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Lays out a magazine edition as a paged document.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render an edition JSON file.
    Build {
        #[arg(long)]
        edition: PathBuf,
        #[arg(long)]
        style_map: Option<PathBuf>,
        /// Layout geometry as JSON; missing keys keep their defaults.
        #[arg(long)]
        layout: Option<PathBuf>,
        #[arg(long, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Directory that local image locators are relative to.
        #[arg(long)]
        asset_root: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Build the next edition out of exported content snapshots.
    Curate {
        #[arg(long)]
        data_dir: PathBuf,
        /// Date printed on the cover, YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        cover_image: String,
        #[arg(long)]
        back_cover_image: String,
        #[arg(long)]
        logo: Option<String>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the page furniture of an edition.
    Pages {
        #[arg(long)]
        edition: PathBuf,
        #[arg(long)]
        style_map: Option<PathBuf>,
        #[arg(long)]
        layout: Option<PathBuf>,
    },
}

fn builder(
    style_map: Option<PathBuf>,
    layout: Option<PathBuf>,
) -> Result<PipelineBuilder, PipelineError> {
    let mut builder = PipelineBuilder::new();
    if let Some(path) = style_map {
        builder = builder.with_style_map_file(path)?;
    }
    if let Some(path) = layout {
        builder = builder.with_layout_config_file(path)?;
    }
    Ok(builder)
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    match cli.command {
        Command::Build {
            edition,
            style_map,
            layout,
            format,
            asset_root,
            out,
        } => {
            let edition = JsonEditionFile::new(edition).load()?;
            let mut builder = builder(style_map, layout)?.with_output_format(format);
            if let Some(root) = asset_root {
                builder = builder.with_asset_root(root);
            }
            builder.build()?.generate_to_file(&edition, &out)?;
            println!("Wrote {}", out.display());
        }
        Command::Curate {
            data_dir,
            date,
            cover_image,
            back_cover_image,
            logo,
            out,
        } => {
            let options = CurateOptions {
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                cover_image: AssetRef::new(cover_image),
                back_cover_image: AssetRef::new(back_cover_image),
                logo: logo.map(AssetRef::new),
            };
            let edition = SnapshotStore::new(&data_dir).curate(&options)?;
            let mut writer = BufWriter::new(File::create(&out)?);
            serde_json::to_writer_pretty(&mut writer, &edition)?;
            writer.flush()?;
            println!(
                "Edition {} with {} article(s) written to {}",
                edition.number,
                edition.articles.len(),
                out.display()
            );
        }
        Command::Pages {
            edition,
            style_map,
            layout,
        } => {
            let edition = JsonEditionFile::new(edition).load()?;
            let document = builder(style_map, layout)?.build()?.assemble(&edition)?;
            let sections = &document.document().sections;

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{:>5}  {:>4}  {:<12}  {:<24}  label", "sheet", "page", "section", "title")?;
            for page in document.pages() {
                let section = &sections[page.block];
                let title = match section {
                    Section::Article(article) => article.title.as_str(),
                    _ => "",
                };
                let (number, label) = match &page.state {
                    Some(state) => (state.page_number.to_string(), state.label.as_deref().unwrap_or("")),
                    None => ("-".to_string(), ""),
                };
                writeln!(
                    out,
                    "{:>5}  {:>4}  {:<12}  {:<24}  {}",
                    page.sheet + 1,
                    number,
                    section.kind(),
                    title.chars().take(24).collect::<String>(),
                    label
                )?;
            }
            writeln!(
                out,
                "{} sheet(s), {} numbered page(s)",
                document.furniture().page_count(),
                document.furniture().main_page_count()
            )?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
