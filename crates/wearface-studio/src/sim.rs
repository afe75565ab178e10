use std::time::Duration;

use anyhow::{Context, Result};

use wearface_engine::coords::Viewport;
use wearface_engine::scene::{DrawCmd, DrawList, ZIndex};
use wearface_engine::time::{AMBIENT_UPDATE_RATE, Clock};
use wearface_engine::{Engine, Event, FaceResources, FaceVariant};

use crate::host::StudioHost;

const MINUTE_MS: i64 = AMBIENT_UPDATE_RATE.as_millis() as i64;

/// A scripted host callback, `after` the start of the run.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Cue {
    after_ms: i64,
    event: Event,
}

/// What a run did, for the closing log line and tests.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RunReport {
    pub frames: u64,
    pub ticks: u64,
    pub time_ticks: u64,
    /// Frames that carried a second hand.
    pub second_hand_frames: u64,
    pub background_rescales: u64,
}

/// Headless simulator builder.
///
/// Configure the surface, the face and a timeline of host callbacks, then
/// drive an engine against a clock with [`Simulator::run`]. The face is
/// created and made visible at the start; everything else comes from the
/// timeline.
///
/// ```rust,ignore
/// Simulator::new()
///     .size(400, 400)
///     .variant(FaceVariant::Bitmap)
///     .duration(Duration::from_secs(30))
///     .at(Duration::from_secs(10), Event::AmbientModeChanged(true))
///     .run(resources, SystemClock, std::thread::sleep)?;
/// ```
#[derive(Debug)]
pub struct Simulator {
    width: u32,
    height: u32,
    variant: FaceVariant,
    low_bit_ambient: bool,
    duration: Duration,
    cues: Vec<Cue>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            width: 400,
            height: 400,
            variant: FaceVariant::Classic,
            low_bit_ambient: false,
            duration: Duration::from_secs(10),
            cues: Vec::new(),
        }
    }

    /// Surface size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn variant(mut self, variant: FaceVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Reported through `PropertiesChanged` right after creation.
    pub fn low_bit_ambient(mut self, low_bit: bool) -> Self {
        self.low_bit_ambient = low_bit;
        self
    }

    /// How long to run before destroying the face.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Delivers `event` once `after` has elapsed. Cues at the same instant
    /// run in the order they were added.
    pub fn at(mut self, after: Duration, event: Event) -> Self {
        let after_ms = i64::try_from(after.as_millis()).unwrap_or(i64::MAX);
        self.cues.push(Cue { after_ms, event });
        self
    }

    /// Runs the face until the duration elapses.
    ///
    /// `sleep` is called whenever nothing is due; with a real clock it should
    /// block, with a test clock it should advance the clock.
    pub fn run<C, S>(self, resources: FaceResources, clock: C, mut sleep: S) -> Result<RunReport>
    where
        C: Clock,
        S: FnMut(Duration),
    {
        let surface = Viewport::from_pixels(self.width, self.height);
        let mut engine = Engine::new(self.variant, resources, clock)
            .with_context(|| format!("failed to build the `{}` face", self.variant))?;

        let start = engine.clock().now_millis();
        let end = start.saturating_add(i64::try_from(self.duration.as_millis()).unwrap_or(i64::MAX));
        let mut host = StudioHost::new(start);
        let mut report = RunReport::default();

        let mut cues = self.cues;
        cues.sort_by_key(|c| c.after_ms);
        let mut cues = cues.into_iter().peekable();
        let mut next_minute = start - start.rem_euclid(MINUTE_MS) + MINUTE_MS;

        engine.handle(Event::Create { surface }, &mut host);
        engine.handle(Event::PropertiesChanged { low_bit_ambient: self.low_bit_ambient }, &mut host);
        engine.handle(Event::VisibilityChanged(true), &mut host);

        loop {
            let now = engine.clock().now_millis();
            host.set_now(now);

            while let Some(cue) = cues.next_if(|c| start.saturating_add(c.after_ms) <= now) {
                log::info!("+{}ms: {:?}", now - start, cue.event);
                engine.handle(cue.event, &mut host);
            }

            while let Some(token) = host.pop_due() {
                report.ticks += 1;
                engine.handle(Event::TickFired(token), &mut host);
            }

            if now >= next_minute {
                next_minute += MINUTE_MS;
                if engine.state().ambient_mode {
                    report.time_ticks += 1;
                    engine.handle(Event::TimeTick, &mut host);
                }
            }

            if host.take_redraw() {
                let sample = engine.clock().sample();
                if let Some(frame) = engine.handle(Event::Draw(surface), &mut host) {
                    report.frames += 1;
                    if frame.has_layer(ZIndex::SECOND_HAND) {
                        report.second_hand_frames += 1;
                    }
                    log::info!(
                        "{:02}:{:02}:{:02} {} {}",
                        sample.hour,
                        sample.minute,
                        sample.second,
                        sample.day_label(),
                        frame_summary(frame)
                    );
                }
            }

            if now >= end {
                break;
            }

            let wake = [host.next_due(), cues.peek().map(|c| start.saturating_add(c.after_ms))]
                .into_iter()
                .flatten()
                .fold(next_minute.min(end), i64::min);
            let wait = u64::try_from(wake - now).unwrap_or(0);
            sleep(Duration::from_millis(wait));
        }

        engine.handle(Event::Destroy, &mut host);
        report.background_rescales = engine.background_rescales();
        Ok(report)
    }
}

/// One-line description of a frame: command counts in paint order.
pub fn frame_summary(list: &DrawList) -> String {
    let mut parts: Vec<(&'static str, usize)> = Vec::new();
    for item in list.items() {
        let kind = item.cmd.kind();
        match parts.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, n)) => *n += 1,
            None => parts.push((kind, 1)),
        }
    }

    // Bitmap hands carry no paint.
    let minute_alpha = list.layer(ZIndex::MINUTE_HAND).find_map(|cmd| match cmd {
        DrawCmd::Line(l) => Some(l.paint.color.a),
        _ => None,
    });

    let mut out = parts
        .iter()
        .map(|(kind, n)| if *n == 1 { kind.to_string() } else { format!("{kind}x{n}") })
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(a) = minute_alpha {
        out.push_str(&format!(" (minute alpha {a})"));
    }
    out
}
