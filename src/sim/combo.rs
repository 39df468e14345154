//! Combo tracking over a trailing time window

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// "Combo xN! +B" popup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComboBanner {
    /// Simulation time the combo fired (ms)
    pub time_ms: f64,
    pub count: usize,
    pub bonus: u64,
    pub pos: Vec2,
}

impl ComboBanner {
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.time_ms >= BANNER_LIFETIME_MS
    }

    /// Display opacity, fading out over the banner's life
    pub fn alpha(&self, now_ms: f64) -> u8 {
        (255.0 - (now_ms - self.time_ms)).clamp(0.0, 255.0) as u8
    }
}

/// Slice timestamps inside the trailing window
#[derive(Debug, Clone, Default)]
pub struct ComboTracker {
    hits: VecDeque<f64>,
}

impl ComboTracker {
    /// Drop timestamps that have aged out of the window
    pub fn evict(&mut self, now_ms: f64) {
        while let Some(&oldest) = self.hits.front() {
            if now_ms - oldest >= COMBO_WINDOW_MS {
                self.hits.pop_front();
            } else {
                break;
            }
        }
    }

    /// Evict stale hits, append this tick's slices, and fire if the window
    /// reached the threshold. Firing empties the window.
    pub fn update(&mut self, now_ms: f64, slices: &[f64], pos: Vec2) -> Option<ComboBanner> {
        self.evict(now_ms);
        self.hits.extend(slices.iter().copied());

        if self.hits.len() < COMBO_THRESHOLD {
            return None;
        }
        let banner = ComboBanner {
            time_ms: now_ms,
            count: self.hits.len(),
            bonus: COMBO_BONUS,
            pos,
        };
        self.hits.clear();
        Some(banner)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn clear(&mut self) {
        self.hits.clear();
    }
}
