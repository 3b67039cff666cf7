//! Main Application
//!
//! The App struct manages the TUI lifecycle of the clap control:
//! - Event loop (keyboard, mouse, resize)
//! - Clap state machine plus element registry
//! - After-mount scheduler that replays the animation on real count changes
//!
//! Each frame runs three phases in order: the build phase registers the
//! rendered elements and constructs the animation timeline once all three
//! exist, the tick phase advances the timeline playhead, and the react
//! phase compares the clap count against the scheduler and replays on a
//! genuine change.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use crate::accessibility::MotionPreference;
use crate::config::Config;
use crate::effects::TrackSample;
use crate::orchestrator::{track_index, AnimationOrchestrator};
use crate::registry::{ElementHandle, ElementRegistry, ElementRole};
use crate::scheduler::AfterMountScheduler;
use crate::state::ClapStateMachine;
use crate::widgets::ClapButton;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Clamped clap counter
    machine: ClapStateMachine,
    /// Handles for the three animated elements
    registry: ElementRegistry,
    /// Replays only on count changes after the first render
    scheduler: AfterMountScheduler<u32>,
    /// Owns the five-track timeline
    orchestrator: AnimationOrchestrator,
    /// Reduced-motion rendering mode
    motion: MotionPreference,
    /// Last frame time (for animations)
    last_frame: Instant,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Self {
        Self {
            running: true,
            machine: ClapStateMachine::new(config.initial),
            registry: ElementRegistry::new(),
            scheduler: AfterMountScheduler::new(),
            orchestrator: AnimationOrchestrator::with_base_duration(config.base_duration_ms),
            motion: config.motion,
            last_frame: Instant::now(),
        }
    }

    /// Run the main event loop until quit
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~30 FPS keeps the burst motion smooth without busy-spinning
        let frame_duration = Duration::from_millis(33);

        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.update();
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only handle Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key)
                            }
                            Event::Mouse(mouse) => self.handle_mouse(mouse),
                            _ => {}
                        }
                    }
                }

                // Frame tick
                _ = tokio::time::sleep(frame_duration) => {}
            }

            self.update();
            self.render(terminal)?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.running = false;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.clap();
            }
            _ => {}
        }
    }

    /// Handle mouse input - any left click counts as a clap
    fn handle_mouse(&mut self, mouse: event::MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(event::MouseButton::Left)) {
            self.clap();
        }
    }

    fn clap(&mut self) {
        let mut log = |state: &crate::state::ClapState| {
            debug!(
                count = state.count,
                count_total = state.count_total,
                "clap registered"
            );
        };
        self.machine.clap_then(Some(&mut log));
    }

    /// Per-frame work: build, tick, react.
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Build phase: register elements, then construct the timeline once.
        self.ensure_elements();
        if self.orchestrator.build(&self.registry) {
            if let Some(timeline) = self.orchestrator.timeline_mut() {
                timeline.set_speed(self.motion.speed_multiplier());
            }
        }

        // Tick phase
        if let Some(timeline) = self.orchestrator.timeline_mut() {
            timeline.update(delta);
        }

        // React phase: replay only on a real count change after first render.
        let count = self.machine.state().count;
        let orchestrator = &mut self.orchestrator;
        let replay_allowed = self.motion.allows_replay();
        self.scheduler.evaluate(count, || {
            if replay_allowed {
                orchestrator.replay();
            }
        });
    }

    /// Register handles for the three rendered elements. Idempotent.
    fn ensure_elements(&mut self) {
        if !self.registry.is_empty() {
            return;
        }
        self.registry = std::mem::take(&mut self.registry)
            .with(ElementRole::Trigger, ElementHandle::new(1))
            .with(ElementRole::Counter, ElementHandle::new(2))
            .with(ElementRole::Total, ElementHandle::new(3));
    }

    /// Snapshot the current animation state for the widget.
    fn frame(&self) -> ClapButton {
        let state = self.machine.state();
        let timeline = self.orchestrator.timeline();
        let playing = timeline.is_some_and(|t| t.is_playing());
        let sample = |index: usize| {
            timeline
                .filter(|t| t.is_playing())
                .and_then(|t| t.sample(index))
        };

        let scale = match sample(track_index::SCALE_PULSE) {
            Some(TrackSample::Scale(pulse)) => {
                pulse * self.orchestrator.trigger_scale_override().unwrap_or(1.0)
            }
            _ => 1.0,
        };

        ClapButton {
            pressed: self.machine.toggler_props().pressed || playing,
            counter: self.machine.counter_props(),
            count_total: state.count_total,
            scale,
            burst_polygon: sample(track_index::BURST_POLYGON),
            burst_circle: sample(track_index::BURST_CIRCLE),
            counter_fade: sample(track_index::COUNTER_FADE),
            total_fade: sample(track_index::TOTAL_FADE),
            static_counter: !self.motion.allows_replay() && state.count > 0,
        }
    }

    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let button = self.frame();
        terminal.draw(|frame| {
            frame.render_widget(&button, frame.area());
        })?;
        Ok(())
    }
}
