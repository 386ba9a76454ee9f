use std::path::PathBuf;

use anyhow::Result;

use profix_core::motion::FrameSequence;
use profix_core::placeholder::generate_placeholders;
use profix_core::AppConfig;

pub fn list(config: &AppConfig) -> Result<()> {
    let sequence = FrameSequence::from_config(&config.sequence);

    println!(
        "Sequence: {} frames in {}\n",
        sequence.total_frames,
        sequence.directory().display()
    );
    for (index, name) in sequence.filenames().enumerate() {
        let exists = if sequence.path(index as u32).exists() {
            ""
        } else {
            "  (missing)"
        };
        println!("  {:>4}  {}{}", index, name, exists);
    }

    Ok(())
}

pub fn generate(config: &AppConfig, out: Option<PathBuf>) -> Result<()> {
    let mut sequence = FrameSequence::from_config(&config.sequence);
    if let Some(out) = out {
        sequence.directory = out;
    }

    let written = generate_placeholders(&sequence)?;
    println!(
        "Wrote {} placeholder files to {}",
        written,
        sequence.directory().display()
    );
    println!("These are SVG stand-ins; replace them with the exported WebP frames for production.");

    Ok(())
}
