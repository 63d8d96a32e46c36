// SPDX-License-Identifier: AGPL-3.0-only

use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colour palette used for stderr diagnostics. The fields hold the SGR sequences for each role.
#[derive(Clone, Copy)]
pub struct ColourPalette {
    pub reset: &'static str,
    pub file: &'static str,
    pub error: &'static str,
}

const COLOURED: ColourPalette = ColourPalette {
    reset: "\u{001b}[0m",
    file: "\u{001b}[95m",
    error: "\u{001b}[31m",
};

const PLAIN: ColourPalette = ColourPalette {
    reset: "",
    file: "",
    error: "",
};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Return the current colour palette, respecting the global enable/disable flag.
pub fn palette() -> ColourPalette {
    if ENABLED.load(Ordering::Relaxed) {
        COLOURED
    } else {
        PLAIN
    }
}

/// Disable ANSI colour output globally (used when stderr is piped or when explicitly requested).
pub fn disable_colours() {
    ENABLED.store(false, Ordering::Relaxed);
}
