//! Ship energy: the regenerating gauge and the shield pulse that drains it.
//!
//! Both are ECS components attached to the ship entity. Unlike the plain-data
//! components they carry their own small rules, since the clamping
//! invariants must hold no matter which system touches them.

use serde::{Deserialize, Serialize};

use crate::config::{GaugeConfig, ShieldConfig};

/// Bounded, regenerating resource. Invariant: `0 <= current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    max: f64,
    current: f64,
    /// Units regained per second.
    recharge_rate: f64,
}

impl Gauge {
    /// A gauge starting full.
    pub fn new(max: f64, recharge_rate: f64) -> Self {
        Self {
            max,
            current: max,
            recharge_rate,
        }
    }

    pub fn from_config(config: &GaugeConfig) -> Self {
        let mut gauge = Self::new(config.max, config.recharge_rate);
        if let Some(current) = config.current {
            gauge.current = current.clamp(0.0, config.max);
        }
        gauge
    }

    pub fn available(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True iff the gauge holds strictly more than `amount`.
    pub fn can_use(&self, amount: f64) -> bool {
        self.current > amount
    }

    /// Debit `amount` without an affordability check; the floor clamps at 0.
    pub fn spend(&mut self, amount: f64) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Passive recharge over `dt` seconds; the ceiling clamps at `max`.
    pub fn update(&mut self, dt: f64) {
        self.current = (self.current + self.recharge_rate * dt).min(self.max);
    }

    /// Fill level of each display segment, bottom segment first.
    ///
    /// Segments below the current level are full (1.0), the segment holding
    /// the fractional part is partially lit, the rest are empty.
    pub fn segment_fill(&self, count: usize) -> Vec<f64> {
        if count == 0 || self.max <= 0.0 {
            return Vec::new();
        }
        let level = (self.current / self.max) * count as f64;
        let whole = level.floor();
        (0..count)
            .map(|i| {
                let i = i as f64;
                if i < whole {
                    1.0
                } else if i == whole {
                    level - whole
                } else {
                    0.0
                }
            })
            .collect()
    }
}

/// Short invulnerability/reflect pulse paid for with gauge energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    drain_cost: f64,
    /// Pulse length (seconds).
    duration: f64,
    active: bool,
    activated_at: f64,
}

impl Shield {
    pub fn new(drain_cost: f64, duration: f64) -> Self {
        Self {
            drain_cost,
            duration,
            active: false,
            activated_at: 0.0,
        }
    }

    pub fn from_config(config: &ShieldConfig) -> Self {
        Self::new(config.drain, config.duration)
    }

    pub fn drain_cost(&self) -> f64 {
        self.drain_cost
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// False while a pulse is running, otherwise whether the gauge can pay.
    pub fn can_activate(&self, gauge: &Gauge) -> bool {
        !self.active && gauge.can_use(self.drain_cost)
    }

    /// Start a pulse and debit the gauge. Callers check `can_activate` first.
    pub fn activate(&mut self, gauge: &mut Gauge, now: f64) {
        self.active = true;
        self.activated_at = now;
        gauge.spend(self.drain_cost);
    }

    /// Deactivate once the pulse has outlived its duration.
    pub fn update(&mut self, now: f64) {
        if self.active && now - self.activated_at > self.duration {
            self.active = false;
        }
    }

    /// Drop any running pulse (relaunch, transit).
    pub fn reset(&mut self) {
        self.active = false;
    }
}
