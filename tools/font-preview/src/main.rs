//! font-preview - Nethercore bitmap font preview tool
//!
//! Lays out text with a font descriptor and prints glyph placements and the
//! resulting draw list, so wrapping and atlas batching can be checked without
//! running a game.

mod font_io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nether_font::command::slot_count;
use nether_font::immediate;
use nether_font::{DrawCommand, Font, TextConfig, TextLayout, measure};

#[derive(Parser)]
#[command(name = "font-preview")]
#[command(about = "Nethercore bitmap font preview tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Word-wrap text and print placements plus the batched draw list
    Layout {
        /// Font descriptor (.json, .toml or packed .bin)
        #[arg(short, long)]
        font: PathBuf,

        /// Text to lay out (`\n` starts a new line)
        text: String,

        /// Text config (.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum line width (overrides config)
        #[arg(short, long)]
        max_width: Option<i32>,

        /// Glyph buffer capacity (overrides config)
        #[arg(long)]
        capacity: Option<usize>,
    },

    /// Print immediate-mode draw commands (single-byte, no wrapping)
    Immediate {
        /// Font descriptor (.json, .toml or packed .bin)
        #[arg(short, long)]
        font: PathBuf,

        /// Text to draw (`\n` starts a new line)
        text: String,

        /// Start x
        #[arg(short, default_value_t = 0)]
        x: i32,

        /// Start y
        #[arg(short, default_value_t = 0)]
        y: i32,
    },

    /// Measure text without wrapping
    Measure {
        /// Font descriptor (.json, .toml or packed .bin)
        #[arg(short, long)]
        font: PathBuf,

        /// Text to measure (`\n` starts a new line)
        text: String,
    },

    /// Validate a font descriptor and pack it with bitcode
    Pack {
        /// Input descriptor (.json or .toml)
        input: PathBuf,

        /// Output .bin file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            font,
            text,
            config,
            max_width,
            capacity,
        } => {
            let mut config = match config {
                Some(path) => TextConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => TextConfig::default(),
            };
            if let Some(max_width) = max_width {
                config.layout.max_width = max_width;
            }
            if let Some(capacity) = capacity {
                config.layout.capacity = capacity;
            }

            let font = load_font(&font)?;
            preview_layout(&font, &unescape(&text), &config)?;
        }

        Commands::Immediate { font, text, x, y } => {
            let font = load_font(&font)?;
            let text = unescape(&text);

            let mut commands: Vec<DrawCommand<()>> = Vec::new();
            immediate::render(&font, text.as_bytes(), x, y, &mut commands);
            for command in &commands {
                print_command(command);
            }
            println!(
                "{} commands, {} display-list slots (expected {})",
                commands.len(),
                slot_count(&commands),
                immediate::count_commands(&font, text.as_bytes())
            );
        }

        Commands::Measure { font, text } => {
            let font = load_font(&font)?;
            let size = measure(&font, unescape(&text).as_bytes());
            println!("{} x {}", size.width, size.height);
        }

        Commands::Pack { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("bin"));
            tracing::info!("Packing {:?} -> {:?}", input, output);
            font_io::pack_descriptor(&input, &output)?;
            tracing::info!("Done!");
        }
    }

    Ok(())
}

fn load_font(path: &Path) -> Result<Font> {
    let descriptor = font_io::load_descriptor(path)?;
    descriptor
        .build()
        .with_context(|| format!("Invalid font {}", path.display()))
}

/// Turn the two-character sequence `\n` into a newline
fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn preview_layout(font: &Font, text: &str, config: &TextConfig) -> Result<()> {
    let mut layout = config.layout.new_layout();
    let status = layout.layout(font, text.as_bytes(), config.layout.max_width);
    if status.is_truncated() {
        tracing::warn!("Layout truncated: {:?}", status);
    }

    print_layout(&layout);

    // Preview binds atlases by index
    let atlases: Vec<u8> = match layout.atlases().max() {
        Some(max) => (0..=max).collect(),
        None => Vec::new(),
    };
    let mut commands: Vec<DrawCommand<u8>> = Vec::new();
    let emitted = config.draw.builder(&atlases).build(&layout, &mut commands)?;

    println!();
    for command in &commands {
        print_command(command);
    }
    println!(
        "{} commands, {} display-list slots",
        emitted,
        slot_count(&commands)
    );
    Ok(())
}

fn print_layout(layout: &TextLayout) {
    println!(
        "{} glyphs, {} x {}, atlases {:?}",
        layout.len(),
        layout.width(),
        layout.height(),
        layout.atlases().iter().collect::<Vec<_>>()
    );
    for (i, glyph) in layout.glyphs().iter().enumerate() {
        println!(
            "  [{:3}] ({:4}, {:4}) {:2}x{:<2} atlas {} src ({}, {}){}",
            i,
            glyph.x,
            glyph.y,
            glyph.width,
            glyph.height,
            glyph.atlas,
            glyph.source_x,
            glyph.source_y,
            if glyph.can_break { " break" } else { "" }
        );
    }
}

fn print_command<R: std::fmt::Debug>(command: &DrawCommand<R>) {
    match command {
        DrawCommand::BindAtlas(atlas) => println!("bind   {:?}", atlas),
        DrawCommand::SetTint(tint) => println!("tint   #{:08X}", tint.to_rgba32()),
        DrawCommand::TextureRect(rect) => println!(
            "rect   ({}, {})-({}, {}) tile {} st ({}, {}) step ({:#x}, {:#x})",
            rect.x0, rect.y0, rect.x1, rect.y1, rect.tile, rect.s, rect.t, rect.dsdx, rect.dtdy
        ),
    }
}
