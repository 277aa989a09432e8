//! NeuroWeave Play entry point
//!
//! The browser build is driven from JS through `NeuroPlay`. Natively this runs
//! a short headless session with an auto-tapper and logs the summary.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let variant = std::env::args().nth(1).unwrap_or_else(|| "bubble-pop".to_string());
    if let Err(e) = headless::run(&variant) {
        log::error!("Session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start function
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use neuroweave_play::consts::{SCENE_HEIGHT, SCENE_WIDTH};
    use neuroweave_play::engine::{
        FrameOutcome, Game, GameVariant, ScoreEvent, Scene, SessionController,
    };
    use neuroweave_play::history::SessionRecord;
    use neuroweave_play::platform::native::FixedRateClock;
    use neuroweave_play::render::RecordingSurface;
    use neuroweave_play::settings::VariantKind;
    use neuroweave_play::{EngineError, SessionHistory, SessionSettings};

    const DEMO_DURATION_MS: f64 = 5000.0;
    /// Frames between auto-taps (roughly a 350 ms reaction)
    const TAP_EVERY: u64 = 21;

    /// Where an idle player would tap: the newest bubble or the lit slot
    fn auto_tap(scene: Scene<'_>) -> Option<Vec2> {
        match scene {
            Scene::Bubbles(arena) => arena.newest().map(|b| b.pos),
            Scene::Slots { layout, active, .. } => {
                active.and_then(|slot| layout.rect(slot)).map(|r| r.center())
            }
        }
    }

    pub fn run(variant: &str) -> Result<(), EngineError> {
        let kind = VariantKind::from_str(variant)
            .ok_or_else(|| EngineError::UnknownVariant(variant.to_string()))?;
        let settings = SessionSettings {
            duration_ms: Some(DEMO_DURATION_MS),
            ..SessionSettings::default()
        };
        settings.validate()?;

        let mut surface = RecordingSurface::new(SCENE_WIDTH, SCENE_HEIGHT);
        let mut controller = SessionController::new(
            Game::new(kind, &settings),
            Vec::<ScoreEvent>::new(),
            settings.duration_ms,
            settings.seed.unwrap_or(1),
        );
        controller.start(&surface, 0.0)?;
        log::info!("Headless {} session for {} ms", kind.as_str(), DEMO_DURATION_MS);

        let mut history = SessionHistory::new();
        let mut frame_no = 0;
        FixedRateClock::default().run(|now_ms| {
            frame_no += 1;
            if frame_no % TAP_EVERY == 0 {
                if let Some(point) = auto_tap(controller.variant().scene()) {
                    let outcome = controller.pointer(point, now_ms);
                    log::debug!("Tap at {:?}: {:?}", point, outcome);
                }
            }

            let outcome = controller.frame(&mut surface, now_ms);
            for event in controller.sink_mut().drain(..) {
                match event {
                    ScoreEvent::ScoreUpdated(score) => log::info!("Score: {}", score),
                    ScoreEvent::GameOver(score) => log::info!("Game over: {}", score),
                }
            }

            match outcome {
                FrameOutcome::Continue => true,
                FrameOutcome::Ended(summary) => {
                    match summary.to_json() {
                        Ok(json) => log::info!("Summary: {}", json),
                        Err(e) => log::warn!("Summary not serializable: {}", e),
                    }
                    history.push(SessionRecord::from_summary(&summary, now_ms));
                    false
                }
                FrameOutcome::Inactive => false,
            }
        });

        log::info!(
            "Rendered {} frames at ~{} fps",
            surface.frames(),
            controller.clock().fps()
        );
        if let Some(best) = history.best_score(kind) {
            log::info!("Best {} score: {}", kind.as_str(), best);
        }
        Ok(())
    }
}
