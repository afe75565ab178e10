mod common;

use core::f32::consts::FRAC_PI_2;

use chrono::NaiveDate;
use common::{engine, resources, QueueHost, SURFACE, T0};
use wearface_engine::coords::{Vec2, Viewport};
use wearface_engine::face::{geometry, style, FaceRenderer, HourDial, PaintSet};
use wearface_engine::scene::{DrawCmd, DrawList, ZIndex};
use wearface_engine::time::{ClockSample, FixedClock};
use wearface_engine::{EngineState, Event, FaceVariant, InterruptionFilter};

fn interactive() -> EngineState {
    EngineState { visible: true, ..EngineState::default() }
}

fn ambient() -> EngineState {
    EngineState { visible: true, ambient_mode: true, ..EngineState::default() }
}

fn render(variant: FaceVariant, sample: &ClockSample, state: EngineState) -> DrawList {
    let mut face = FaceRenderer::new(variant, resources()).unwrap();
    let paints = PaintSet::derive(&state);
    let list = face.render(SURFACE, sample, &state, &paints);
    let mut out = DrawList::new();
    for item in list.items() {
        out.push(item.key.z, item.cmd.clone());
    }
    out
}

fn line_on(list: &DrawList, z: ZIndex) -> (Vec2, Vec2) {
    match list.layer(z).next() {
        Some(DrawCmd::Line(l)) => (l.from, l.to),
        other => panic!("expected a line on {z:?}, got {other:?}"),
    }
}

fn near(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

// ── ambient ───────────────────────────────────────────────────────────────

#[test]
fn ambient_frames_never_draw_a_second_hand() {
    for variant in FaceVariant::ALL {
        for second in 0..60 {
            let list = render(variant, &ClockSample::at(10, 8, second), ambient());
            assert!(!list.has_layer(ZIndex::SECOND_HAND), "{variant} at :{second}");
            assert!(list.has_layer(ZIndex::MINUTE_HAND));
            assert!(list.has_layer(ZIndex::HOUR_HAND));
        }
    }
}

#[test]
fn interactive_frames_draw_a_second_hand() {
    for variant in FaceVariant::ALL {
        let list = render(variant, &ClockSample::at(10, 8, 42), interactive());
        assert_eq!(list.layer(ZIndex::SECOND_HAND).count(), 1, "{variant}");
    }
}

// ── background cache ──────────────────────────────────────────────────────

#[test]
fn background_rescaled_once_per_viewport_size() {
    let clock = FixedClock::at_millis(T0);
    let mut engine = engine(FaceVariant::Classic, &clock);
    let mut host = QueueHost::at(T0);

    for _ in 0..25 {
        engine.handle(Event::Draw(SURFACE), &mut host);
    }
    assert_eq!(engine.background_rescales(), 1);

    let wide = Viewport::from_pixels(480, 400);
    for _ in 0..25 {
        engine.handle(Event::Draw(wide), &mut host);
    }
    assert_eq!(engine.background_rescales(), 2);
}

// ── line hands ────────────────────────────────────────────────────────────

#[test]
fn classic_hands_point_from_centre() {
    let list = render(FaceVariant::Classic, &ClockSample::at(3, 0, 0), interactive());
    let c = SURFACE.center();

    let (from, to) = line_on(&list, ZIndex::SECOND_HAND);
    assert_eq!(from, c);
    assert!(near(to, Vec2::new(c.x, c.y - (c.x - style::SECOND_INSET))), "{to:?}");

    let (from, to) = line_on(&list, ZIndex::MINUTE_HAND);
    assert_eq!(from, c);
    assert!(near(to, Vec2::new(c.x, c.y - (c.x - style::MINUTE_INSET))), "{to:?}");

    let (_, to) = line_on(&list, ZIndex::HOUR_HAND);
    assert!(near(to, Vec2::new(c.x + (c.x - style::HOUR_INSET), c.y)), "{to:?}");
}

#[test]
fn day_dial_hour_hand_turns_half_as_fast() {
    let at = ClockSample::at(15, 0, 0);
    let c = SURFACE.center();
    let len = c.x - style::HOUR_INSET;

    let (_, classic) = line_on(&render(FaceVariant::Classic, &at, interactive()), ZIndex::HOUR_HAND);
    let (_, day) = line_on(&render(FaceVariant::DayDial, &at, interactive()), ZIndex::HOUR_HAND);

    assert!(near(classic, c.along_clock_angle(FRAC_PI_2, len)), "{classic:?}");
    let expected = c.along_clock_angle(geometry::hour_angle(HourDial::TwentyFour, &at), len);
    assert!(near(day, expected), "{day:?}");
    assert!(!near(classic, day));
}

// ── bitmap hands ──────────────────────────────────────────────────────────

#[test]
fn bitmap_face_rotates_prescaled_rasters() {
    let list = render(FaceVariant::Bitmap, &ClockSample::at(6, 10, 0), interactive());
    let c = SURFACE.center();

    let minute = match list.layer(ZIndex::MINUTE_HAND).next() {
        Some(DrawCmd::RotatedBitmap(b)) => b.clone(),
        other => panic!("expected rotated minute bitmap, got {other:?}"),
    };
    assert_eq!(minute.raster.dimensions(), style::MINUTE_HAND_SIZE);
    // Ten past: 60 degrees clockwise from twelve, pivot end at the centre.
    assert!((minute.degrees + 30.0).abs() < 1e-3, "{}", minute.degrees);
    assert_eq!(minute.bounds.size, Vec2::new(115.0, 69.0));
    assert_eq!(
        minute.bounds.origin,
        Vec2::new(c.x - style::MINUTE_PIVOT_INSET, c.y - 69.0 + style::MINUTE_PIVOT_INSET)
    );

    let hour = match list.layer(ZIndex::HOUR_HAND).next() {
        Some(DrawCmd::RotatedBitmap(b)) => b.clone(),
        other => panic!("expected rotated hour bitmap, got {other:?}"),
    };
    assert_eq!(hour.raster.dimensions(), style::HOUR_HAND_SIZE);
    assert!(hour.bounds.contains(c));
    assert!(!list.layer(ZIndex::MINUTE_HAND).any(|cmd| matches!(cmd, DrawCmd::Line(_))));
}

#[test]
fn bitmap_face_second_hand_sits_on_sub_dial() {
    let list = render(FaceVariant::Bitmap, &ClockSample::at(6, 15, 0), interactive());
    let pivot = SURFACE.center() + style::SUB_DIAL_OFFSET;
    let (from, to) = line_on(&list, ZIndex::SECOND_HAND);
    assert_eq!(from, pivot);
    let len = SURFACE.center().x - style::SUB_DIAL_SECOND_INSET;
    assert!(near(to, Vec2::new(pivot.x, pivot.y - len)), "{to:?}");
}

// ── date text ─────────────────────────────────────────────────────────────

#[test]
fn date_labels_at_fixed_offsets() {
    let dt = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(15, 42, 9).unwrap();
    let list = render(FaceVariant::Classic, &ClockSample::from_naive(&dt), interactive());
    let c = SURFACE.center();

    let texts: Vec<(String, Vec2, f32)> = list
        .layer(ZIndex::DATE)
        .filter_map(|cmd| match cmd {
            DrawCmd::Text(t) => Some((t.text.clone(), t.origin, t.paint.text_size)),
            _ => None,
        })
        .collect();

    assert_eq!(
        texts,
        vec![
            ("05".to_string(), c + style::DAY_OFFSET, style::DAY_TEXT_SIZE),
            ("Tue".to_string(), c + style::WEEKDAY_OFFSET, style::WEEKDAY_TEXT_SIZE),
            ("Mar".to_string(), c + style::MONTH_OFFSET, style::MONTH_TEXT_SIZE),
        ]
    );
}

// ── paints in the frame ───────────────────────────────────────────────────

#[test]
fn muted_frame_uses_dimmed_paints() {
    let clock = FixedClock::at_millis(T0);
    let mut engine = engine(FaceVariant::Classic, &clock);
    let mut host = QueueHost::at(T0);
    engine.handle(Event::InterruptionFilterChanged(InterruptionFilter::NoInterruptions), &mut host);

    let list = engine.handle(Event::Draw(SURFACE), &mut host).unwrap();
    let dimmed = list.count(|cmd| match cmd {
        DrawCmd::Line(l) => !l.paint.is_opaque(),
        DrawCmd::Text(t) => !t.paint.is_opaque(),
        _ => false,
    });
    assert_eq!(dimmed, 6);
}

#[test]
fn paint_order_is_background_date_second_minute_hour() {
    let mut list = render(FaceVariant::Classic, &ClockSample::at(1, 2, 3), interactive());
    let kinds: Vec<&str> = list.iter_in_paint_order().map(|item| item.cmd.kind()).collect();
    assert_eq!(kinds, vec!["bitmap", "text", "text", "text", "line", "line", "line"]);
}
