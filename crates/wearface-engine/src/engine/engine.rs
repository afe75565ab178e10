use crate::coords::Viewport;
use crate::error::FaceError;
use crate::face::{FaceRenderer, FaceResources, FaceVariant, PaintSet};
use crate::scene::DrawList;
use crate::schedule::{TaskToken, TickScheduler};
use crate::time::Clock;

use super::{EngineState, Event, Host, InterruptionFilter};

/// One on-screen watch face.
///
/// Owns the state flags, the paints derived from them, the renderer with its
/// background cache, and the interactive tick. Every host callback goes
/// through [`Engine::handle`].
pub struct Engine<C: Clock> {
    state: EngineState,
    paints: PaintSet,
    face: FaceRenderer,
    scheduler: TickScheduler,
    clock: C,
    timezone_registered: bool,
    surface: Option<Viewport>,
}

impl<C: Clock> Engine<C> {
    /// Builds a face, failing fast when a required raster is missing.
    pub fn new(variant: FaceVariant, resources: FaceResources, clock: C) -> Result<Self, FaceError> {
        let face = FaceRenderer::new(variant, resources)?;
        let state = EngineState::default();
        Ok(Self {
            state,
            paints: PaintSet::derive(&state),
            face,
            scheduler: TickScheduler::new(),
            clock,
            timezone_registered: false,
            surface: None,
        })
    }

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    pub fn paints(&self) -> &PaintSet {
        &self.paints
    }

    #[inline]
    pub fn variant(&self) -> FaceVariant {
        self.face.variant()
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Surface size reported at creation.
    #[inline]
    pub fn surface(&self) -> Option<Viewport> {
        self.surface
    }

    #[inline]
    pub fn pending_tick(&self) -> Option<TaskToken> {
        self.scheduler.pending()
    }

    #[inline]
    pub fn timezone_registered(&self) -> bool {
        self.timezone_registered
    }

    #[inline]
    pub fn background_rescales(&self) -> u64 {
        self.face.background_rescales()
    }

    /// Applies one host callback.
    ///
    /// Returns the recorded frame for [`Event::Draw`], `None` otherwise.
    pub fn handle<H: Host + ?Sized>(&mut self, event: Event, host: &mut H) -> Option<&DrawList> {
        match event {
            Event::Create { surface } => {
                log::info!(
                    "creating `{}` face on {}x{} surface",
                    self.face.variant(),
                    surface.width,
                    surface.height
                );
                self.scheduler.cancel(host);
                self.unregister_timezone(host);
                self.set_state(EngineState::default());
                self.surface = Some(surface);
            }
            Event::Destroy => {
                log::info!("destroying `{}` face", self.face.variant());
                self.scheduler.cancel(host);
                self.unregister_timezone(host);
            }
            Event::PropertiesChanged { low_bit_ambient } => {
                log::debug!("properties: low_bit_ambient={low_bit_ambient}");
                self.set_state(EngineState { low_bit_ambient, ..self.state });
            }
            Event::TimeTick => host.invalidate(),
            Event::AmbientModeChanged(ambient_mode) => {
                log::debug!("ambient mode: {ambient_mode}");
                self.set_state(EngineState { ambient_mode, ..self.state });
                host.invalidate();
                self.scheduler.update_timer(&self.state, host);
            }
            Event::InterruptionFilterChanged(filter) => self.on_interruption_filter(filter, host),
            Event::VisibilityChanged(visible) => {
                log::debug!("visible: {visible}");
                self.state.visible = visible;
                if visible {
                    self.register_timezone(host);
                } else {
                    self.unregister_timezone(host);
                }
                self.scheduler.update_timer(&self.state, host);
            }
            Event::TimezoneChanged => {
                log::info!("time zone changed");
                host.invalidate();
            }
            Event::TickFired(token) => {
                let now = self.clock.now_millis();
                self.scheduler.on_tick(token, now, &self.state, host);
            }
            Event::Draw(viewport) => return Some(self.draw(viewport)),
        }
        None
    }

    /// Records a frame for the current time without going through `handle`.
    pub fn draw(&mut self, viewport: Viewport) -> &DrawList {
        let sample = self.clock.sample();
        self.face.render(viewport, &sample, &self.state, &self.paints)
    }

    fn on_interruption_filter<H: Host + ?Sized>(&mut self, filter: InterruptionFilter, host: &mut H) {
        let muted = filter.mutes();
        if muted == self.state.muted {
            return;
        }
        log::debug!("interruption filter {filter:?}: muted={muted}");
        self.set_state(EngineState { muted, ..self.state });
        host.invalidate();
    }

    fn set_state(&mut self, state: EngineState) {
        self.state = state;
        self.paints = PaintSet::derive(&state);
    }

    fn register_timezone<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.timezone_registered {
            return;
        }
        self.timezone_registered = true;
        host.register_timezone_receiver();
    }

    fn unregister_timezone<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.timezone_registered {
            return;
        }
        self.timezone_registered = false;
        host.unregister_timezone_receiver();
    }
}
