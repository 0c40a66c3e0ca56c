use ::std::{
    fs,
    path::{Path, PathBuf},
};
use anyhow::{Context, Result};
use clap::Parser;
use speakerid::{SpeakerIdentifier, TableBackend};
use tracing_subscriber::EnvFilter;

/// Which of two speakers more likely produced the unknown text
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Speaker A sample
    file_a: PathBuf,

    /// Speaker B sample
    file_b: PathBuf,

    /// Unknown speaker text
    file_c: PathBuf,

    /// Markov model order, >= 1
    k: usize,

    /// `hashtable` or `dict`
    backend: TableBackend,
}

fn read_speech(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    tracing::info!(?args, "identifying speaker");

    let speech_a = read_speech(&args.file_a)?;
    let speech_b = read_speech(&args.file_b)?;
    let speech_c = read_speech(&args.file_c)?;

    let res = SpeakerIdentifier::new(args.k)
        .backend(args.backend)
        .identify(&speech_a, &speech_b, &speech_c)?;

    println!("Speaker A: {}", res.score_a);
    println!("Speaker B: {}", res.score_b);
    println!("\nConclusion: Speaker {} is most likely", res.verdict);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["speakerid", "a.txt", "b.txt", "c.txt", "2", "dict"])
            .unwrap();
        assert_eq!(args.k, 2);
        assert_eq!(args.backend, TableBackend::Dict);
        assert_eq!(args.file_c, PathBuf::from("c.txt"));
    }

    #[test]
    fn test_args_invalid_backend() {
        assert!(
            Args::try_parse_from(["speakerid", "a.txt", "b.txt", "c.txt", "2", "list"]).is_err()
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_speech(Path::new("/nonexistent/speech.txt")).unwrap_err();
        assert!(err.to_string().contains("speech.txt"));
    }
}
