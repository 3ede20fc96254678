use clap::{Parser, Subcommand};
use jbcd_isa::Opcode;
use jbcd_jvms::{DescriptionStore, LocalJvms};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jbcd", about = "JVM bytecode listing toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a `javap -c` listing and print the decoded instructions
    Parse {
        /// Path to the listing
        input: PathBuf,
    },
    /// Print the JVM specification section describing an opcode
    Describe {
        /// Opcode mnemonic, e.g. `ifge`
        mnemonic: String,
        /// Directory holding JVMS.html
        #[arg(long, default_value = ".")]
        jvms_dir: PathBuf,
    },
    /// Find the method header that denotes a signature
    Match {
        /// Signature to look for
        target: String,
        /// Candidate method header (repeatable)
        #[arg(long = "candidate")]
        candidates: Vec<String>,
        /// File with one candidate per line
        #[arg(long)]
        candidates_file: Option<PathBuf>,
    },
    /// List the opcode table
    Opcodes,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input } => cmd_parse(&input),
        Commands::Describe { mnemonic, jvms_dir } => cmd_describe(&mnemonic, &jvms_dir),
        Commands::Match {
            target,
            candidates,
            candidates_file,
        } => cmd_match(&target, candidates, candidates_file.as_deref()),
        Commands::Opcodes => cmd_opcodes(),
    }
}

fn read_or_exit(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn cmd_parse(path: &Path) {
    let text = read_or_exit(path);
    let listing = jbcd_listing::parse(&text);

    for insn in &listing.instructions {
        println!("{insn}");
    }
    for diag in &listing.diagnostics {
        eprintln!("# skipped {diag}");
    }
    println!(
        "# {} instructions, {} lines skipped",
        listing.instructions.len(),
        listing.diagnostics.len()
    );
}

fn cmd_describe(mnemonic: &str, jvms_dir: &Path) {
    let opcode: Opcode = match mnemonic.parse() {
        Ok(op) => op,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let local = LocalJvms::new(jvms_dir);
    if !local.has_document() {
        eprintln!(
            "Error: no JVM specification at {}",
            local.html_path().display()
        );
        std::process::exit(1);
    }

    let mut store = DescriptionStore::new();
    match local.load_into(&mut store) {
        Ok(n) => log::info!("Loaded {n} sections from {}", local.html_path().display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    if !store.is_loaded() {
        eprintln!("Error: {} has no instruction sections", local.html_path().display());
        std::process::exit(1);
    }

    match store.lookup(opcode) {
        Some(desc) => println!("{desc}"),
        None => {
            eprintln!("No description for {opcode}");
            std::process::exit(1);
        }
    }
}

fn cmd_match(target: &str, mut candidates: Vec<String>, candidates_file: Option<&Path>) {
    if let Some(path) = candidates_file {
        candidates.extend(
            read_or_exit(path)
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    match jbcd_signature::best_match(target, candidates.iter().map(String::as_str)) {
        Some(m) => println!("{} ({})", m.candidate, m.tier),
        None => {
            eprintln!("No match for '{target}' among {} candidates", candidates.len());
            std::process::exit(1);
        }
    }
}

fn cmd_opcodes() {
    for &op in jbcd_isa::opcode_table() {
        println!("{:#04x}  {:<16} {:?}", op.byte(), op.mnemonic(), op.flags());
    }
    println!("# {} opcodes", jbcd_isa::opcode_count());
}
