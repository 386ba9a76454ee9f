use anyhow::{bail, Result};

use profix_core::{AppConfig, SequenceConfig, SequencePlayer};

/// Drive a player from `from` toward `to`, one line per tick
pub fn run(
    config: &AppConfig,
    from: f64,
    to: f64,
    ticks: usize,
    smoothing: Option<f64>,
) -> Result<()> {
    let smoothing = smoothing.unwrap_or(config.sequence.smoothing);
    if !(smoothing > 0.0 && smoothing <= 1.0) {
        bail!("smoothing must be in (0, 1], got {}", smoothing);
    }

    let mut player = SequencePlayer::new(SequenceConfig {
        smoothing,
        ..config.sequence.clone()
    });
    player.set_frame(player.target_frame(from));

    println!(
        "Scrubbing {} -> {} over {} frames (smoothing {})",
        from,
        to,
        player.sequence().total_frames,
        smoothing
    );
    println!("  tick  frame  file");
    println!("  {:>4}  {:>5}  {}", 0, player.current_frame(), player.current_filename());

    for tick in 1..=ticks {
        if player.is_settled(to) {
            println!("Settled on frame {} after {} ticks", player.current_frame(), tick - 1);
            return Ok(());
        }
        let frame = player.update(to);
        println!("  {:>4}  {:>5}  {}", tick, frame, player.current_filename());
    }

    if !player.is_settled(to) {
        println!(
            "Not settled after {} ticks (at frame {}, target {})",
            ticks,
            player.current_frame(),
            player.target_frame(to)
        );
    }
    Ok(())
}
