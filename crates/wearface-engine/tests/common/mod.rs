#![allow(dead_code)]

use std::time::Duration;

use image::{Rgba, RgbaImage};
use wearface_engine::coords::Viewport;
use wearface_engine::raster::Raster;
use wearface_engine::schedule::{TaskQueue, TaskToken};
use wearface_engine::time::{Clock, FixedClock};
use wearface_engine::{Engine, Event, FaceResources, FaceVariant, Host};

/// 2024-03-05 15:42:09.250 UTC, a Tuesday.
pub const T0: i64 = 1_709_653_329_250;

pub const SURFACE: Viewport = Viewport::new(400.0, 400.0);

pub fn raster(w: u32, h: u32) -> Raster {
    Raster::from_image("test", RgbaImage::from_pixel(w, h, Rgba([40, 40, 40, 255]))).unwrap()
}

pub fn resources() -> FaceResources {
    FaceResources::new()
        .background(raster(64, 64))
        .minute_hand(raster(262, 8))
        .hour_hand(raster(168, 16))
}

pub fn engine(variant: FaceVariant, clock: &FixedClock) -> Engine<FixedClock> {
    Engine::new(variant, resources(), clock.clone()).unwrap()
}

/// Single-threaded host: ticks go through a `TaskQueue`, redraw requests are
/// coalesced into one pending flag, and every request is counted.
#[derive(Debug, Default)]
pub struct QueueHost {
    pub queue: TaskQueue<()>,
    pub now: i64,
    pub invalidated: bool,
    pub invalidations: usize,
    pub cancels: usize,
    pub timezone_registered: bool,
    pub timezone_registrations: usize,
}

impl QueueHost {
    pub fn at(now: i64) -> Self {
        Self { now, ..Self::default() }
    }
}

impl Host for QueueHost {
    fn invalidate(&mut self) {
        self.invalidated = true;
        self.invalidations += 1;
    }

    fn schedule_delayed(&mut self, token: TaskToken, delay: Duration) {
        self.queue.post_delayed(self.now, delay, token, ());
    }

    fn cancel(&mut self, token: TaskToken) {
        self.cancels += 1;
        self.queue.cancel(token);
    }

    fn register_timezone_receiver(&mut self) {
        self.timezone_registered = true;
        self.timezone_registrations += 1;
    }

    fn unregister_timezone_receiver(&mut self) {
        self.timezone_registered = false;
    }
}

/// Runs the host loop until `until` (clock millis), returning the clock
/// times at which frames were drawn.
pub fn run_until(
    engine: &mut Engine<FixedClock>,
    host: &mut QueueHost,
    clock: &FixedClock,
    until: i64,
) -> Vec<i64> {
    let mut frames = Vec::new();
    loop {
        if host.invalidated {
            host.invalidated = false;
            engine.handle(Event::Draw(SURFACE), host);
            frames.push(clock.now_millis());
            continue;
        }
        match host.queue.next_due() {
            Some(due) if due <= until => {
                let due = due.max(host.now);
                clock.set_millis(due);
                host.now = due;
                if let Some((token, ())) = host.queue.pop_due(due) {
                    engine.handle(Event::TickFired(token), host);
                }
            }
            _ => break,
        }
    }
    clock.set_millis(until);
    host.now = until;
    frames
}
