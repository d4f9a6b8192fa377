// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archi-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archi and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Reads a numeric knob from the environment, clamped to `[min, max]`.
fn knob<T>(name: &str, default: T, min: T, max: T) -> T
where
    T: FromStr + Ord,
{
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion with a flamegraph profiler attached (only active under `--profile-time`).
pub fn criterion() -> Criterion {
    let frequency = knob("ARCHI_PROFILE_FREQ", 100, 1, 1000);
    let samples = knob("ARCHI_BENCH_SAMPLES", 50usize, 10, 200);
    let warm_up = knob("ARCHI_BENCH_WARMUP_SECS", 2u64, 1, 60);
    let measurement = knob("ARCHI_BENCH_MEASUREMENT_SECS", 5u64, 1, 120);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warm_up))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
