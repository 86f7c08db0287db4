//! quizlay CLI - quiz document layout and export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use quizlay::{
    all_templates, find_template, import, layout_document, load_snapshot, save_snapshot, style,
    AnswerKeyMode, Document, ExportFormat, ExportPipeline, ExportStage, RenderOptions, Snapshot,
};

#[derive(Parser)]
#[command(name = "quizlay")]
#[command(version)]
#[command(about = "Lay out quiz documents and export paginated text and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a saved document to paginated output
    Export {
        /// Input snapshot JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Mark correct answers inline
        #[arg(long)]
        reveal_answers: bool,

        /// Override the document's style preset
        #[arg(long, value_name = "ID")]
        preset: Option<String>,
    },

    /// Import questions from a plain-text file into a snapshot
    Import {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output snapshot JSON file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Document title (defaults to the input file name)
        #[arg(long)]
        title: Option<String>,
    },

    /// Show document statistics and page counts per preset
    Info {
        /// Input snapshot JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// List available style presets
    Presets,

    /// List templates or create a document from one
    Template {
        /// Template id to instantiate
        #[arg(value_name = "ID")]
        id: Option<String>,

        /// Output snapshot JSON file (required with an id)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ExportFormat::Text,
            Format::Json => ExportFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            format,
            reveal_answers,
            preset,
        } => cmd_export(&input, output.as_deref(), format, reveal_answers, preset),
        Commands::Import {
            input,
            output,
            title,
        } => cmd_import(&input, &output, title),
        Commands::Info { input } => cmd_info(&input),
        Commands::Presets => cmd_presets(),
        Commands::Template { id, output } => cmd_template(id, output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    format: Format,
    reveal_answers: bool,
    preset: Option<String>,
) -> quizlay::Result<()> {
    let mut snapshot = load_snapshot(input)?;
    if let Some(preset_id) = preset {
        snapshot.document.settings.selected_preset_id = preset_id;
    }

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .expect("valid progress template"),
    );
    bar.enable_steady_tick(std::time::Duration::from_millis(80));
    let progress_bar = bar.clone();

    let pipeline = ExportPipeline::new(format.into())
        .with_render_options(RenderOptions::new().with_reveal_answers(reveal_answers))
        .on_progress(move |stage| {
            progress_bar.set_message(stage.label());
            if matches!(stage, ExportStage::Done | ExportStage::Error) {
                progress_bar.finish_and_clear();
            }
        });

    let result = pipeline.run(&snapshot.document)?;

    match output {
        Some(path) => {
            fs::write(path, &result.content)?;
            println!(
                "{} {} pages written to {}",
                "done:".green().bold(),
                result.pages.len(),
                path.display()
            );
        }
        None => println!("{}", result.content),
    }

    if let Some(answer_key) = result.answer_key {
        let key_path = match output {
            Some(path) => path.with_extension("answers.txt"),
            None => PathBuf::from("answers.txt"),
        };
        fs::write(&key_path, answer_key)?;
        println!(
            "{} separate answer key written to {}",
            "done:".green().bold(),
            key_path.display()
        );
    }

    Ok(())
}

fn cmd_import(input: &Path, output: &Path, title: Option<String>) -> quizlay::Result<()> {
    let text = fs::read_to_string(input)?;
    let parsed = import::parse_txt(&text);

    let default_title = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Imported Quiz".to_string());
    let mut doc = Document::new(title.unwrap_or(default_title));

    if !parsed.body_lines.is_empty() {
        doc.body_content = parsed
            .body_lines
            .iter()
            .map(|line| format!("<p>{}</p>", line))
            .collect();
    }

    let imported = parsed.question_count();
    if let Some(section) = parsed.section {
        doc.add_section(section);
    }
    doc.renumber();

    save_snapshot(&doc, output)?;
    println!(
        "{} imported {} questions into {}",
        "done:".green().bold(),
        imported,
        output.display()
    );
    if imported == 0 {
        println!(
            "{} no question blocks recognized; snapshot contains body text only",
            "note:".yellow()
        );
    }
    Ok(())
}

fn cmd_info(input: &Path) -> quizlay::Result<()> {
    let Snapshot { document, saved_at } = load_snapshot(input)?;

    println!("{}", "Document".bold());
    println!("  Title:     {}", document.title);
    println!("  Saved:     {}", saved_at.format("%Y-%m-%d %H:%M UTC"));
    println!("  Sections:  {}", document.sections.len());
    println!("  Questions: {}", document.question_count());
    println!(
        "  Preset:    {}",
        style::resolve(&document.settings.selected_preset_id).id
    );
    println!(
        "  Answer key: {}",
        match document.settings.answer_key_mode {
            AnswerKeyMode::Hidden => "hidden",
            AnswerKeyMode::Appended => "appended",
            AnswerKeyMode::Separate => "separate",
        }
    );

    println!("\n{}", "Page count by preset".bold());
    for preset in style::all_presets() {
        let mut probe = document.clone();
        probe.settings.selected_preset_id = preset.id.to_string();
        let pages = layout_document(&probe);
        println!("  {:<10} {} pages", preset.id, pages.len());
    }
    Ok(())
}

fn cmd_presets() -> quizlay::Result<()> {
    for preset in style::all_presets() {
        println!(
            "{} {}",
            preset.id.cyan().bold(),
            if preset.id == style::DEFAULT_PRESET_ID {
                "(default)".dimmed().to_string()
            } else {
                String::new()
            }
        );
        println!("  {}", preset.display_name);
        println!("  {}", preset.description.dimmed());
        println!(
            "  {}pt font, {:.1} line height, {}pt padding, {}pt question spacing",
            preset.base_font_size,
            preset.line_height_multiplier,
            preset.page_padding,
            preset.question_spacing
        );
    }
    Ok(())
}

fn cmd_template(id: Option<String>, output: Option<&Path>) -> quizlay::Result<()> {
    match id {
        None => {
            for template in all_templates() {
                println!(
                    "{} - {} ({} questions)",
                    template.id.cyan().bold(),
                    template.name,
                    template.question_count
                );
                println!("  {}", template.description.dimmed());
            }
            Ok(())
        }
        Some(id) => {
            let template = find_template(&id)?;
            let output = output.ok_or_else(|| {
                quizlay::Error::Other("--output is required when instantiating a template".into())
            })?;
            let doc = template.instantiate();
            save_snapshot(&doc, output)?;
            println!(
                "{} created {:?} document at {}",
                "done:".green().bold(),
                template.name,
                output.display()
            );
            Ok(())
        }
    }
}
