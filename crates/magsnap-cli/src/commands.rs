use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use magsnap_snap::{
    DragSession, Point, SnapTuning, active_snap_zones, generate_candidates, guide_overlay,
    resolve_position,
};
use serde_json::json;

use crate::error::Result;
use crate::scene::{load_scene, load_trace};

#[derive(Debug, Clone, Args)]
pub struct SceneArgs {
    /// Scene JSON: canvas, dragged element and siblings.
    #[arg(long)]
    pub scene: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Raw origin x; overrides the scene's `raw` field.
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<f64>,

    /// Raw origin y; overrides the scene's `raw` field.
    #[arg(long, allow_hyphen_values = true)]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// JSON array of pointer samples; the first one is the press point.
    #[arg(long)]
    pub trace: PathBuf,
}

pub fn run_candidates(args: &SceneArgs, tuning: &SnapTuning, out: &mut impl Write) -> Result<()> {
    let scene = load_scene(&args.scene)?;
    let candidates = generate_candidates(&scene.dragged, &scene.siblings, &scene.canvas, tuning);
    tracing::info!(count = candidates.len(), "candidates generated");
    serde_json::to_writer_pretty(&mut *out, &candidates)?;
    writeln!(out)?;
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs, tuning: &SnapTuning, out: &mut impl Write) -> Result<()> {
    let scene = load_scene(&args.scene.scene)?;
    let fallback = scene.raw_or_origin();
    let raw = Point::new(args.x.unwrap_or(fallback.x), args.y.unwrap_or(fallback.y));

    let candidates = generate_candidates(&scene.dragged, &scene.siblings, &scene.canvas, tuning);
    let resolved = resolve_position(raw, &candidates, &scene.dragged, &scene.canvas, tuning);
    let overlay = guide_overlay(
        resolved.point(),
        &scene.dragged,
        &scene.siblings,
        &candidates,
        &scene.canvas,
        tuning,
    );
    let zones = active_snap_zones(raw, &candidates, tuning);
    tracing::info!(
        raw_x = raw.x,
        raw_y = raw.y,
        x = resolved.x,
        y = resolved.y,
        in_zone = resolved.in_snap_zone,
        "position resolved"
    );

    let outcome: magsnap_snap::SnapOutcome = resolved.into();
    let report = json!({
        "raw": raw,
        "candidates": candidates.len(),
        "resolved": resolved,
        "outcome": outcome,
        "overlay": overlay,
        "zones": zones,
    });
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Replay a recorded gesture, one JSON line per pointer sample.
pub fn run_replay(args: &ReplayArgs, tuning: &SnapTuning, out: &mut impl Write) -> Result<()> {
    let scene = load_scene(&args.scene.scene)?;
    let samples = load_trace(&args.trace)?;
    let (press, moves) = match samples.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };

    let mut session = DragSession::begin(scene.dragged, *press);
    for (step, pointer) in moves.iter().enumerate() {
        let line = match session.update(*pointer, &scene.siblings, &scene.canvas, tuning) {
            Some(frame) => json!({ "step": step + 1, "pointer": pointer, "frame": frame }),
            None => json!({ "step": step + 1, "pointer": pointer, "pending": true }),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }

    let outcome = session.end();
    tracing::info!(
        samples = samples.len(),
        activated = outcome.activated,
        "replay finished"
    );
    serde_json::to_writer(&mut *out, &json!({ "outcome": outcome }))?;
    writeln!(out)?;
    Ok(())
}

pub fn run_defaults(out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &SnapTuning::default())?;
    writeln!(out)?;
    Ok(())
}
