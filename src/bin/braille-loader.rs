use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use braille_loader::{
    ChangeProfile, DEFAULT_VARIANT, Engine, Frame, GridShape, LoaderConfig, Speed, Variant,
    encode_masks, glyph, glyph_dims, to_glyphs,
};
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "braille-loader", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every variant with its loop length and frame interval.
    List(ListArgs),
    /// Dump every frame of a variant as a dot grid, braille masks, code points and glyphs.
    Dump(DumpArgs),
    /// Print frame-to-frame change statistics for a variant.
    Inspect(InspectArgs),
    /// Resolve a loader config file and print the result as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct GridArgs {
    /// Grid rows (clamped to 2..=12).
    #[arg(long, default_value_t = 4)]
    rows: u8,

    /// Grid columns (clamped to 2..=12).
    #[arg(long, default_value_t = 4)]
    cols: u8,
}

impl GridArgs {
    fn shape(&self) -> GridShape {
        GridShape::new(self.rows, self.cols)
    }
}

#[derive(Parser, Debug)]
struct ListArgs {
    #[command(flatten)]
    grid: GridArgs,

    /// Speed preset used for the interval column.
    #[arg(long, value_enum, default_value_t = SpeedChoice::Normal)]
    speed: SpeedChoice,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Variant name (unknown names fall back to the default variant).
    #[arg(long)]
    variant: String,

    #[command(flatten)]
    grid: GridArgs,

    /// Write the dump here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Variant name; omit to inspect every variant.
    #[arg(long)]
    variant: Option<String>,

    #[command(flatten)]
    grid: GridArgs,

    /// Also print every per-step change count.
    #[arg(long)]
    steps: bool,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Input loader config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SpeedChoice {
    Slow,
    Normal,
    Fast,
}

impl From<SpeedChoice> for Speed {
    fn from(choice: SpeedChoice) -> Self {
        match choice {
            SpeedChoice::Slow => Speed::Slow,
            SpeedChoice::Normal => Speed::Normal,
            SpeedChoice::Fast => Speed::Fast,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let engine = Engine::new();
    let shape = args.grid.shape();
    let speed = Speed::from(args.speed);
    println!("{:<16} {:<16} {:>6} {:>8}", "variant", "archetype", "frames", "interval");
    for v in Variant::ALL {
        let seq = engine.generate_frames(v, shape);
        println!(
            "{:<16} {:<16} {:>6} {:>6}ms",
            v.name(),
            v.archetype().as_str(),
            seq.len(),
            seq.interval_for(speed)
        );
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let variant = pick_variant(&args.variant);
    let shape = args.grid.shape();
    let seq = Engine::new().generate_frames(variant, shape);

    let mut text = String::new();
    writeln!(
        text,
        "variant: {variant}\ngrid: {shape}\nframes: {}\ninterval: {}ms",
        seq.len(),
        seq.interval_ms()
    )?;
    for (i, frame) in seq.frames().iter().enumerate() {
        writeln!(text, "\n--- frame {i} ({} active) ---", frame.len())?;
        write_frame(&mut text, frame, shape)?;
    }

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, &text)
                .with_context(|| format!("write dump '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    eprintln!("sha256: {}", sha256_hex(text.as_bytes()));
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let engine = Engine::new();
    let shape = args.grid.shape();
    let variants: Vec<Variant> = match &args.variant {
        Some(name) => vec![pick_variant(name)],
        None => Variant::ALL.to_vec(),
    };

    for v in variants {
        let seq = engine.generate_frames(v, shape);
        let p = ChangeProfile::of(&seq);
        println!("{v} on {shape}: {} frames", seq.len());
        println!("  total changes:         {}", p.total_changes);
        println!("  average per step:      {:.2}", p.average_change());
        println!("  max interior change:   {}", p.max_interior_change);
        println!("  loop seam change:      {}", p.seam_change);
        println!("  longest static streak: {}", p.longest_static_streak);
        if args.steps {
            println!("  steps: {:?}", p.steps);
        }
        if !p.is_seamless() {
            eprintln!("warning: {v} on {shape} jumps at the loop seam");
        }
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = LoaderConfig::from_json_path(&args.in_path)?;
    let resolved = cfg.resolve();
    println!("{}", resolved.to_json_pretty()?);
    Ok(())
}

fn pick_variant(name: &str) -> Variant {
    name.parse().unwrap_or_else(|e| {
        eprintln!("{e}; using '{DEFAULT_VARIANT}'");
        DEFAULT_VARIANT
    })
}

fn write_frame(out: &mut String, frame: &Frame, shape: GridShape) -> std::fmt::Result {
    for row in 0..shape.rows() {
        let line: String = (0..shape.cols())
            .map(|col| {
                if frame.contains(shape.index(row, col)) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        writeln!(out, "{line}")?;
    }

    let masks = encode_masks(frame, shape);
    let (width, _) = glyph_dims(shape);
    let hex: Vec<String> = masks.iter().map(|m| format!("0x{m:02x}")).collect();
    let points: Vec<String> = masks
        .iter()
        .map(|&m| format!("U+{:04X}", u32::from(glyph(m))))
        .collect();
    writeln!(out, "masks: {}", hex.join(" "))?;
    writeln!(out, "codepoints: {}", points.join(" "))?;
    writeln!(out, "glyphs:\n{}", to_glyphs(&masks, width))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
