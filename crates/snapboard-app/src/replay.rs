//! Replaying scripted drags and collecting what happened.

use crate::error::{AppError, AppResult};
use crate::scenario::{DragScript, Scenario};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use snapboard_core::{DragCoordinator, GuideId, ObjectId, Surface, live_guides};

/// State after one movement tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub pointer: Point,
    /// Shape top-left after both engines ran.
    pub position: Point,
    /// Live guide markers, boundary first.
    pub guides: Vec<GuideId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragReport {
    pub shape: ObjectId,
    pub ticks: Vec<TickReport>,
    pub final_position: Point,
    /// Always empty unless a host hook misbehaves.
    pub guides_after_release: Vec<GuideId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub drags: Vec<DragReport>,
}

fn guide_ids(surface: &mut Surface) -> Vec<GuideId> {
    live_guides(surface).into_iter().map(|marker| marker.id).collect()
}

fn replay_drag(surface: &mut Surface, coordinator: &mut DragCoordinator, script: &DragScript) -> AppResult<DragReport> {
    let mut points = script.points();
    let start = points
        .next()
        .ok_or_else(|| AppError::Usage(format!("drag of {} has an empty path", script.shape)))?;
    coordinator.begin_drag(surface, &script.shape, start)?;

    let mut ticks = Vec::new();
    for pointer in points {
        let Some(outcome) = coordinator.drag_to(surface, pointer) else {
            log::warn!("drag of {} stopped early", script.shape);
            break;
        };
        ticks.push(TickReport {
            pointer,
            position: outcome.position,
            guides: guide_ids(surface),
        });
    }

    coordinator.end_drag(surface);
    let final_position = surface
        .shape(&script.shape)
        .map(|shape| shape.geometry.position())
        .ok_or_else(|| AppError::Usage(format!("shape {} vanished during its drag", script.shape)))?;

    log::info!(
        "drag of {} finished at ({}, {}) after {} tick(s)",
        script.shape,
        final_position.x,
        final_position.y,
        ticks.len()
    );

    Ok(DragReport {
        shape: script.shape.clone(),
        ticks,
        final_position,
        guides_after_release: guide_ids(surface),
    })
}

/// Replay every drag of `scenario` in order on one shared surface.
pub fn replay(scenario: &Scenario) -> AppResult<Report> {
    let mut surface = scenario.surface()?;
    let mut coordinator = DragCoordinator::new(&scenario.config.snap);

    let drags = scenario
        .drags
        .iter()
        .map(|script| replay_drag(&mut surface, &mut coordinator, script))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(Report { drags })
}
