//! Note Renderer — batch WAV renderer for the built-in instrument voices.
//!
//! For each selected sound, renders the selected notes back to back and
//! writes one `sound_<name>.wav` (16-bit mono PCM).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use audiosynth_dsp::config::DEFAULT_SAMPLE_RATE;
use audiosynth_dsp::wav::{peak, write_wav};
use audiosynth_dsp::{Instrument, NoteName, SynthConfig, Synthesizer};

struct Options {
    sounds: Vec<Instrument>,
    notes: Vec<String>,
    octave: i32,
    duration: f64,
    sample_rate: u32,
    seed: Option<u64>,
    output_file: Option<PathBuf>,
    output_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sounds: Instrument::ALL.to_vec(),
            notes: vec!["C".into(), "D".into(), "E".into()],
            octave: 4,
            duration: 3.0,
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: None,
            output_file: None,
            output_dir: PathBuf::from("."),
        }
    }
}

enum Command {
    Render(Options),
    Help,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Render(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e:#}");
            print_usage();
            std::process::exit(1);
        }
    };

    render(&options)
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--sound" | "-s" => {
                opts.sounds = value(args, &mut i, flag)?
                    .split(',')
                    .map(|s| s.trim().parse::<Instrument>())
                    .collect::<Result<_, _>>()?;
            }
            "--note" | "-n" => {
                opts.notes = value(args, &mut i, flag)?.split(',').map(|s| s.trim().to_string()).collect();
            }
            "--octave" => {
                opts.octave = value(args, &mut i, flag)?.parse().context("invalid octave")?;
            }
            "--duration" | "-d" => {
                opts.duration = value(args, &mut i, flag)?.parse().context("invalid duration")?;
            }
            "--sample-rate" | "-r" => {
                opts.sample_rate = value(args, &mut i, flag)?.parse().context("invalid sample rate")?;
            }
            "--seed" => {
                opts.seed = Some(value(args, &mut i, flag)?.parse().context("invalid seed")?);
            }
            "--output" | "-o" => {
                opts.output_file = Some(PathBuf::from(value(args, &mut i, flag)?));
            }
            "--output-dir" => {
                opts.output_dir = PathBuf::from(value(args, &mut i, flag)?);
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => bail!("Unknown argument: {other}"),
        }
        i += 1;
    }

    if opts.sounds.is_empty() || opts.notes.is_empty() {
        bail!("at least one sound and one note are required");
    }
    // Reject bad names before any file is written.
    for n in &opts.notes {
        n.parse::<NoteName>()?;
    }
    if !(opts.duration > 0.0) {
        bail!("duration must be positive, got {}", opts.duration);
    }
    if opts.sample_rate == 0 {
        bail!("sample rate must be positive");
    }

    Ok(Command::Render(opts))
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .with_context(|| format!("missing value for {flag}"))
}

fn render(opts: &Options) -> Result<()> {
    let synth = Synthesizer::new(SynthConfig::default().with_sample_rate(opts.sample_rate));
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for &sound in &opts.sounds {
        let filename = match &opts.output_file {
            Some(f) if opts.sounds.len() == 1 => f.clone(),
            _ => opts.output_dir.join(format!("sound_{sound}.wav")),
        };

        info!(
            "Rendering {sound} [{}] octave={} dur={}s -> {}",
            opts.notes.join(" "),
            opts.octave,
            opts.duration,
            filename.display()
        );

        let samples = synth.render_sequence(sound, opts.notes.as_slice(), opts.octave, opts.duration, &mut rng)?;

        let peak = peak(&samples);
        info!("  Peak amplitude: {peak:.1} ({:.1} dBFS)", 20.0 * (peak / 32768.0).log10());

        write_wav(&filename, &samples, opts.sample_rate)
            .with_context(|| format!("failed to write {}", filename.display()))?;
        info!("  Written: {}", filename.display());
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        r#"Note Renderer — piano / organ / acoustic / edm WAV renderer

USAGE:
    note-renderer [OPTIONS]

OPTIONS:
    -s, --sound <NAME[,NAME,...]>    Voice(s): piano, organ, acoustic, edm (default: all)
    -n, --note <NAME[,NAME,...]>     Notes rendered back to back (default: C,D,E)
        --octave <N>                 Octave, clamped to 1-8 (default: 4)
    -d, --duration <SECS>            Seconds per note (default: 3.0)
    -r, --sample-rate <HZ>           Sample rate (default: 44100)
        --seed <N>                   Seed the acoustic pluck for repeatable output
    -o, --output <PATH>              Output WAV file (single sound only)
        --output-dir <DIR>           Output directory for sound_<name>.wav (default: .)
    -h, --help                       Print this help

EXAMPLES:
    note-renderer                                   # all voices, C D E, 3 s each
    note-renderer -s piano -n A --octave 5 -o a5.wav
    note-renderer -s acoustic -n C,G -d 1.5 --seed 7"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn parse(s: &str) -> Options {
        match parse_args(&args(s)) {
            Ok(Command::Render(o)) => o,
            Ok(Command::Help) => panic!("unexpected help"),
            Err(e) => panic!("parse failed: {e:#}"),
        }
    }

    #[test]
    fn test_defaults_match_reference_batch() {
        let o = parse("");
        assert_eq!(o.sounds, Instrument::ALL.to_vec());
        assert_eq!(o.notes, vec!["C", "D", "E"]);
        assert_eq!(o.octave, 4);
        assert_eq!(o.duration, 3.0);
        assert_eq!(o.sample_rate, 44100);
    }

    #[test]
    fn test_flags() {
        let o = parse("-s Piano,edm -n A,C# --octave 9 -d 0.5 -r 22050 --seed 3 -o x.wav");
        assert_eq!(o.sounds, vec![Instrument::Piano, Instrument::Edm]);
        assert_eq!(o.notes, vec!["A", "C#"]);
        assert_eq!(o.octave, 9);
        assert_eq!(o.duration, 0.5);
        assert_eq!(o.sample_rate, 22050);
        assert_eq!(o.seed, Some(3));
        assert_eq!(o.output_file, Some(PathBuf::from("x.wav")));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(&args("-s banjo")).is_err());
        assert!(parse_args(&args("-n H")).is_err());
        assert!(parse_args(&args("-d 0")).is_err());
        assert!(parse_args(&args("-d")).is_err());
        assert!(parse_args(&args("--bogus")).is_err());
    }

    #[test]
    fn test_help() {
        assert!(matches!(parse_args(&args("-h")), Ok(Command::Help)));
    }
}
