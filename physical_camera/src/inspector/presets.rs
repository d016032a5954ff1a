/// Standard photographic steppings offered as one-click presets.

use std::ops::RangeInclusive;

/// A preset value with its button label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset<T> {
    pub label: &'static str,
    pub value: T,
}

const fn preset<T>(label: &'static str, value: T) -> Preset<T> {
    Preset { label, value }
}

pub const ISO_PRESETS: [Preset<u32>; 7] = [
    preset("100", 100),
    preset("200", 200),
    preset("400", 400),
    preset("800", 800),
    preset("1600", 1600),
    preset("3200", 3200),
    preset("6400", 6400),
];

/// Shutter speeds in seconds, fastest first.
pub const SHUTTER_SPEED_PRESETS: [Preset<f32>; 14] = [
    preset("1/1000", 1.0 / 1000.0),
    preset("1/500", 1.0 / 500.0),
    preset("1/250", 1.0 / 250.0),
    preset("1/125", 1.0 / 125.0),
    preset("1/60", 1.0 / 60.0),
    preset("1/30", 1.0 / 30.0),
    preset("1/15", 1.0 / 15.0),
    preset("1/8", 1.0 / 8.0),
    preset("1/4", 1.0 / 4.0),
    preset("1/2", 1.0 / 2.0),
    preset("1", 1.0),
    preset("2", 2.0),
    preset("4", 4.0),
    preset("8", 8.0),
];

pub const F_STOP_PRESETS: [Preset<f32>; 10] = [
    preset("1.0", 1.0),
    preset("1.4", 1.4),
    preset("2.0", 2.0),
    preset("2.8", 2.8),
    preset("4", 4.0),
    preset("5.6", 5.6),
    preset("8", 8.0),
    preset("11", 11.0),
    preset("16", 16.0),
    preset("22", 22.0),
];

/// Focal lengths in millimeters.
pub const FOCAL_LENGTH_PRESETS: [Preset<f32>; 9] = [
    preset("18", 18.0),
    preset("24", 24.0),
    preset("35", 35.0),
    preset("55", 55.0),
    preset("85", 85.0),
    preset("105", 105.0),
    preset("135", 135.0),
    preset("200", 200.0),
    preset("300", 300.0),
];

pub const F_STOP_SLIDER_RANGE: RangeInclusive<f32> = 1.0..=32.0;

pub const FOCAL_LENGTH_SLIDER_RANGE: RangeInclusive<f32> = 2.0..=500.0;
