use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use lex_makedict::dict::{Lexicon, WeightedString};
use lex_makedict::trace_init::init_tracing;
use lex_makedict::xml::{
    format, parse_format_toml, read_dictionary_xml, write_dictionary_xml_to_path,
    DictionarySources, XmlFormat,
};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "dictool", about = "XML dictionary build tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Relation documents and tag configuration shared by the reading commands.
#[derive(Args)]
struct Inputs {
    /// Shortcut XML document
    #[arg(long)]
    shortcuts: Option<PathBuf>,
    /// Bigram XML document
    #[arg(long)]
    bigrams: Option<PathBuf>,
    /// TOML file overriding tag and attribute names
    #[arg(long)]
    format: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Combine unigram, shortcut and bigram documents into one document
    Compile {
        /// Unigram XML document
        #[arg(long)]
        unigrams: PathBuf,
        #[command(flatten)]
        inputs: Inputs,
        /// Output file
        output_file: PathBuf,
    },
    /// Show word, shortcut and bigram counts
    Info {
        /// Unigram or combined XML document
        file: PathBuf,
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Show one word with its shortcuts and bigrams
    Lookup {
        /// Unigram or combined XML document
        file: PathBuf,
        /// Word to look up (exact match)
        word: String,
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Export the default tag configuration as TOML
    FormatExport,
    /// Validate a tag configuration TOML file
    FormatValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            unigrams,
            inputs,
            output_file,
        } => compile(&unigrams, &inputs, &output_file),
        Command::Info { file, inputs } => info(&file, &inputs),
        Command::Lookup { file, word, inputs } => lookup(&file, &word, &inputs),
        Command::FormatExport => print!("{}", format::default_toml()),
        Command::FormatValidate { file } => format_validate(&file),
    }
}

fn load_format(path: Option<&Path>) -> XmlFormat {
    let Some(path) = path else {
        return XmlFormat::new();
    };
    let content = die!(
        fs::read_to_string(path),
        "Error reading {}: {}",
        path.display()
    );
    die!(parse_format_toml(&content), "Error in format file: {}")
}

fn load(unigrams: &Path, inputs: &Inputs, format: &XmlFormat) -> Lexicon {
    eprintln!("Reading {}...", unigrams.display());
    let sources = DictionarySources::from_paths(
        Some(unigrams),
        inputs.shortcuts.as_deref(),
        inputs.bigrams.as_deref(),
    );
    die!(
        read_dictionary_xml(sources, format),
        "Error reading dictionary: {}"
    )
}

fn compile(unigrams: &Path, inputs: &Inputs, output_file: &Path) {
    let format = load_format(inputs.format.as_deref());
    let lexicon = load(unigrams, inputs, &format);
    let stats = lexicon.stats();
    eprintln!(
        "Writing {} words ({} shortcuts, {} bigrams)...",
        stats.words, stats.shortcuts, stats.bigrams
    );
    die!(
        write_dictionary_xml_to_path(output_file, &lexicon, &format),
        "Error writing dictionary: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {} ({:.1} KB)",
        output_file.display(),
        file_size as f64 / 1024.0
    );
}

fn info(file: &Path, inputs: &Inputs) {
    let format = load_format(inputs.format.as_deref());
    let lexicon = load(file, inputs, &format);
    let stats = lexicon.stats();

    println!("Dictionary: {}", file.display());
    println!("Words:      {}", stats.words);
    println!("Shortcuts:  {}", stats.shortcuts);
    println!("Bigrams:    {}", stats.bigrams);

    let sample: Vec<&str> = lexicon
        .sorted_words()
        .into_iter()
        .take(10)
        .map(|w| w.word.as_str())
        .collect();
    if !sample.is_empty() {
        println!();
        println!("First words: {}", sample.join(", "));
    }
}

fn lookup(file: &Path, word: &str, inputs: &Inputs) {
    let format = load_format(inputs.format.as_deref());
    let lexicon = load(file, inputs, &format);
    let Some(entry) = lexicon.get(word) else {
        println!("{word} → (not found)");
        return;
    };

    println!("{} (f={})", entry.word, entry.frequency);
    print_relations("shortcuts", entry.shortcut_targets.as_deref());
    print_relations("bigrams", entry.bigrams.as_deref());
}

fn print_relations(label: &str, list: Option<&[WeightedString]>) {
    match list {
        None => println!("  {label}: (none)"),
        Some(list) => {
            let items: Vec<String> = list
                .iter()
                .map(|t| format!("{} (f={})", t.word, t.frequency))
                .collect();
            println!("  {label}: {}", items.join(", "));
        }
    }
}

fn format_validate(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    let format = die!(parse_format_toml(&content), "Error: {}");
    println!(
        "OK: word <{}>, bigram <{}>/<{}>, shortcut <{}>/<{}>",
        format.wordlist.word_tag,
        format.bigram.source_tag,
        format.bigram.destination_tag,
        format.shortcut.source_tag,
        format.shortcut.destination_tag
    );
}
