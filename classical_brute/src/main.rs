use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rusty_classics::attack::{AttackOptions, DictionaryAttack, DEFAULT_MAX_CANDIDATES};
use rusty_classics::cipher::caesar::{caesar_brute_force, Caesar};
use rusty_classics::cipher::playfair::Playfair;
use rusty_classics::cipher::vigenere::Vigenere;
use rusty_classics::cipher::Cipher;
use rusty_classics::dictionary::Dictionary;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum CipherKind {
    Caesar,
    Vigenere,
    Playfair,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// which cipher the ciphertext was made with
    #[arg(short, long, value_enum, default_value_t = CipherKind::Vigenere)]
    cipher: CipherKind,

    /// ciphertext to brute force
    #[arg(short, long)]
    input: Option<String>,

    /// the file to read the ciphertext from
    ///
    /// the program will read from stdin if neither input-file or input are set
    #[arg(long, conflicts_with = "input")]
    input_file: Option<PathBuf>,

    /// word list, one word per line, used to judge decryptions
    ///
    /// also used as the candidate keys unless --keys is set.
    /// required for everything except caesar
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// separate word list of candidate keys
    #[arg(long, requires = "dictionary")]
    keys: Option<PathBuf>,

    /// only try this many candidate keys
    #[arg(short, long, default_value_t = DEFAULT_MAX_CANDIDATES)]
    max_candidates: usize,

    /// the letter left out of the playfair key square
    #[arg(long, default_value_t = 'Q')]
    omit: char,

    /// file to write the candidates to, -o=- => stdout
    #[arg(short, long, default_value_t = String::from("-"))]
    output: String,

    /// force writing to the output file, even if it already exists
    #[arg(short, long, default_value_t = false)]
    force: bool,

    /// log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn load_words(path: &Path) -> Result<Dictionary> {
    let file = File::open(path).with_context(|| format!("Opening word list {path:?}."))?;
    let dict = Dictionary::from_reader(BufReader::new(file))
        .with_context(|| format!("Reading word list {path:?}."))?;
    info!(words = dict.len(), "loaded {path:?}");
    Ok(dict)
}

fn run_attack<C: Cipher>(
    cipher: C,
    ciphertext: &str,
    keys: &Dictionary,
    language: &Dictionary,
    options: AttackOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let attack = DictionaryAttack::new(cipher, ciphertext, keys.words(), language)?
        .with_options(options);
    let total = attack.total();

    let mut attempts = attack.iter();
    let mut found = 0;
    for candidate in attempts.by_ref() {
        writeln!(out, "{candidate}")?;
        found += 1;
    }

    info!(tried = attempts.tried(), total, found, "attack finished");
    if found == 0 {
        eprintln!("No candidate keys passed after trying {total} keys.");
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Args = Args::try_parse()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // read in the ciphertext
    let ciphertext = if let Some(input_str) = args.input {
        input_str
    } else if let Some(ref input_file) = args.input_file {
        std::fs::read_to_string(input_file)
            .with_context(|| format!("Reading from {input_file:?} to get the ciphertext."))?
    } else {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        data
    };
    let ciphertext = ciphertext.split_whitespace().collect::<Vec<_>>().join(" ");

    // choose whether to write to stdout or to a file
    let mut out: Box<dyn Write> = match args.output.as_str() {
        "-" => Box::new(std::io::stdout()),
        fname => Box::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .create_new(!args.force)
                .open(fname)
                .with_context(|| format!("Opening {fname:?} for writing output."))?,
        ),
    };

    let Some(ref dictionary) = args.dictionary else {
        if args.cipher != CipherKind::Caesar {
            anyhow::bail!("A word list is needed to attack {:?}.\nTry setting --dictionary", args.cipher);
        }

        // no word list, so show every shift and let the reader pick
        for (shift, text) in caesar_brute_force(&ciphertext)? {
            writeln!(out, "Shift: {shift:2} Output: {text}")?;
        }
        return Ok(());
    };

    let language = load_words(dictionary)?;
    let keys = match args.keys {
        Some(ref path) => load_words(path)?,
        None => language.clone(),
    };
    let options = AttackOptions {
        max_candidates: args.max_candidates,
    };

    match args.cipher {
        CipherKind::Caesar => {
            // single letter keys, the word list only judges the output
            let letters = Dictionary::new(('A'..='Z').map(String::from));
            run_attack(Caesar, &ciphertext, &letters, &language, options, &mut out)
        }
        CipherKind::Vigenere => run_attack(Vigenere, &ciphertext, &keys, &language, options, &mut out),
        CipherKind::Playfair => {
            let playfair = Playfair::with_omitted(args.omit).context("Invalid omitted letter.")?;
            run_attack(playfair, &ciphertext, &keys, &language, options, &mut out)
        }
    }
}
