use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rusty_classics::cipher::caesar::{caesar_shift, Caesar};
use rusty_classics::cipher::playfair::{OmittedLetterPolicy, Playfair};
use rusty_classics::cipher::vigenere::Vigenere;
use rusty_classics::cipher::Cipher;
use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
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
    /// which cipher to run
    #[arg(short, long, value_enum, default_value_t = CipherKind::Vigenere)]
    cipher: CipherKind,

    /// text to encrypt (or decrypt with --decrypt)
    #[arg(short, long)]
    input: Option<String>,

    /// the file to read input from
    ///
    /// the program will read from stdin if neither input-file or input are set
    #[arg(long, conflicts_with = "input")]
    input_file: Option<PathBuf>,

    /// file to write the output to, -o=- => stdout
    #[arg(short, long, default_value_t = String::from("-"))]
    output: String,

    /// force writing to the output file, even if it already exists
    #[arg(short, long, default_value_t = false)]
    force: bool,

    /// key for vigenere / playfair, a single letter for caesar
    #[arg(short, long)]
    key: Option<String>,

    /// numeric caesar shift, encrypting moves letters forward by this many places
    #[arg(long, conflicts_with = "key")]
    shift: Option<u8>,

    /// the letter left out of the playfair key square
    #[arg(long, default_value_t = 'Q')]
    omit: char,

    /// letter used to pad odd length playfair input, Z by default (X when Z is omitted)
    #[arg(long)]
    filler: Option<char>,

    /// replace the omitted letter with this one instead of rejecting the input
    #[arg(long)]
    replace_omitted: Option<char>,

    /// decrypt instead of encrypting
    #[arg(short, long, default_value_t = false)]
    decrypt: bool,

    /// log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args: Args = Args::try_parse()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // read in the input text
    let input = if let Some(ref input_str) = args.input {
        input_str.clone()
    } else if let Some(ref input_file) = args.input_file {
        fs::read_to_string(input_file)
            .with_context(|| format!("Reading from {input_file:?} to get input text."))?
    } else {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        data
    };
    // multi-line input is treated as one stream of words
    let input = input.split_whitespace().collect::<Vec<_>>().join(" ");
    debug!(cipher = ?args.cipher, decrypt = args.decrypt, len = input.len(), "running cipher");

    let output = run(&args, &input)?;

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

    out.write_all(output.as_bytes())?;
    out.write_all(b"\n")?;

    Ok(())
}

fn run(args: &Args, input: &str) -> Result<String> {
    if let (CipherKind::Caesar, Some(shift)) = (args.cipher, args.shift) {
        let shift = if args.decrypt { shift } else { 26 - shift % 26 };
        return Ok(caesar_shift(input, shift)?);
    }

    let Some(ref key) = args.key else {
        bail!("No key was specified.\nTry setting --key (or --shift for caesar)")
    };

    let cipher: Box<dyn Cipher> = match args.cipher {
        CipherKind::Caesar => Box::new(Caesar),
        CipherKind::Vigenere => Box::new(Vigenere),
        CipherKind::Playfair => Box::new(playfair(args)?),
    };

    let output = if args.decrypt {
        cipher.decrypt(input, key)?
    } else {
        cipher.encrypt(input, key)?
    };

    Ok(output)
}

fn playfair(args: &Args) -> Result<Playfair> {
    let mut playfair = match args.filler {
        Some(filler) => Playfair::new(args.omit, filler),
        None => Playfair::with_omitted(args.omit),
    }
    .context("Invalid playfair settings.")?;

    if let Some(replacement) = args.replace_omitted {
        playfair = playfair.with_policy(OmittedLetterPolicy::Replace(replacement))?;
    }

    Ok(playfair)
}
