use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tkupgrade::rules::upgrade_session;
use tkupgrade::DEFAULT_MAX_PASSES;

#[derive(Parser)]
#[command(name = "tkupgrade")]
#[command(about = "Upgrade tkinter apps to tukaan", long_about = None)]
#[command(version)]
struct Cli {
    /// Python source file to upgrade in place
    filename: PathBuf,

    /// Skip running black on the source before rewriting
    #[arg(long)]
    skip_format: bool,

    /// Show a unified diff of the changes
    #[arg(short, long)]
    diff: bool,

    /// Report what would change without writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Ceiling on rewrite passes before giving up on convergence
    #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
    max_passes: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let original = fs::read_to_string(&cli.filename)
        .with_context(|| format!("failed to read {}", cli.filename.display()))?;

    let text = if cli.skip_format {
        original.clone()
    } else {
        match blacken(&original) {
            Ok(formatted) => formatted,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Warning: black unavailable, continuing unformatted: {e}").yellow()
                );
                original.clone()
            }
        }
    };

    let mut session = upgrade_session()?.with_max_passes(cli.max_passes);
    let outcome = session
        .run(&text)
        .with_context(|| format!("failed to rewrite {}", cli.filename.display()))?;

    for dropped in &outcome.dropped {
        eprintln!(
            "{}",
            format!(
                "Warning: dropped conflicting edit from rule '{}' at bytes {} (overlaps {})",
                dropped.rule, dropped.span, dropped.conflicts_with
            )
            .yellow()
        );
    }
    if !outcome.converged {
        eprintln!(
            "{}",
            format!(
                "Warning: no fixpoint after {} passes; writing best-effort output",
                outcome.passes
            )
            .yellow()
        );
    }

    if cli.diff && outcome.text != original {
        display_diff(&cli.filename, &original, &outcome.text);
    }

    if outcome.text == original {
        println!(
            "{} {}: nothing to change",
            "⊙".yellow(),
            cli.filename.display()
        );
        return Ok(());
    }

    if cli.dry_run {
        println!(
            "{} {}: would rewrite ({} passes)",
            "✓".green(),
            cli.filename.display(),
            outcome.passes
        );
        return Ok(());
    }

    atomic_write(&cli.filename, outcome.text.as_bytes())?;
    println!(
        "{} {}: rewritten in {} passes",
        "✓".green(),
        cli.filename.display(),
        outcome.passes
    );

    Ok(())
}

/// Pipe source text through black, matching the upstream tool's habit of
/// normalizing formatting before rewriting.
fn blacken(source: &str) -> Result<String> {
    let mut child = Command::new("black")
        .args(["--quiet", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to spawn black")?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(source.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        anyhow::bail!("black exited with {}", output.status);
    }
    Ok(String::from_utf8(output.stdout)?)
}

/// Show a unified diff between original and rewritten content.
fn display_diff(file: &Path, original: &str, modified: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (upgraded)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, modified);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}

/// Atomic file write: tempfile + fsync + rename, so a failed run never
/// leaves a partially written file behind.
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
