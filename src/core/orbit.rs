use crate::constants::*;
use crate::core::geometry::{ellipse_point, OrbitCenter};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;
use std::fmt;

/// Identity of one spawned item. A respawn keeps the slot and bumps the
/// generation, so the renderer can tell a replaced item from a moved one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub slot: usize,
    pub generation: u64,
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "paw-{}-{}", self.slot, self.generation)
    }
}

/// Immutable motion record for one orbiting item.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitItem {
    pub key: ItemKey,
    pub size: f32,
    pub orbit_radius: f32,
    pub angular_speed: f32, // rad/s, sign is the direction
    pub phase: f32,
    pub color: &'static str,
    /// Animator time (seconds) after which the item is replaced.
    pub respawn_at: f64,
}

impl OrbitItem {
    #[inline]
    pub fn angle(&self, now_sec: f64) -> f32 {
        (now_sec * self.angular_speed as f64 + self.phase as f64) as f32
    }

    /// Top-left of the item's box at `now_sec`, for a translate transform.
    pub fn position(&self, orbit: &OrbitCenter, now_sec: f64) -> Vec2 {
        let r = orbit.base_radius + self.orbit_radius;
        ellipse_point(
            orbit.center,
            r,
            ORBIT_ELLIPTICITY,
            self.angle(now_sec),
            Vec2::splat(self.size),
        )
    }
}

/// Per-frame output for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub key: ItemKey,
    pub offset: Vec2,
    pub size: f32,
    pub color: &'static str,
    pub opacity: f32,
}

#[inline]
pub fn item_opacity(slot: usize) -> f32 {
    (ITEM_OPACITY_BASE - slot as f32 * ITEM_OPACITY_STEP).clamp(0.0, 1.0)
}

/// Draw a fresh parameter set for `slot`. Initial creation and respawn share
/// this, so both follow the same distributions.
pub fn spawn_item<R: Rng + ?Sized>(
    rng: &mut R,
    slot: usize,
    generation: u64,
    now_sec: f64,
) -> OrbitItem {
    let size = rng.gen_range(ITEM_SIZE_MIN..ITEM_SIZE_MAX);
    let orbit_radius =
        rng.gen_range(ORBIT_RADIUS_MIN..ORBIT_RADIUS_MAX) + slot as f32 * ORBIT_RADIUS_PER_INDEX;
    // Half the items spin the other way
    let mut angular_speed = rng.gen_range(ANGULAR_SPEED_MIN..ANGULAR_SPEED_MAX)
        + slot as f32 * ANGULAR_SPEED_PER_INDEX;
    if rng.gen_bool(0.5) {
        angular_speed = -angular_speed;
    }
    let phase = rng.gen_range(0.0..TAU);
    let color = *ORBIT_PALETTE.choose(rng).unwrap_or(&ORBIT_PALETTE[0]);
    let dwell = rng.gen_range(RESPAWN_DWELL_MIN_SEC..=RESPAWN_DWELL_MAX_SEC);
    OrbitItem {
        key: ItemKey { slot, generation },
        size,
        orbit_radius,
        angular_speed,
        phase,
        color,
        respawn_at: now_sec + dwell,
    }
}

/// Keeps N orbit items alive and computes their placements each frame.
///
/// Respawns are driven by [`OrbitAnimator::tick`]: every item carries its own
/// deadline, and a tick replaces only the items whose deadline has passed.
pub struct OrbitAnimator {
    items: Vec<OrbitItem>,
    rng: StdRng,
    next_generation: u64,
}

impl OrbitAnimator {
    pub fn new(count: usize, rng: StdRng, now_sec: f64) -> Self {
        let mut animator = Self {
            items: Vec::with_capacity(count),
            rng,
            next_generation: 0,
        };
        animator.regenerate(count, now_sec);
        animator
    }

    pub fn from_seed(count: usize, seed: u64, now_sec: f64) -> Self {
        Self::new(count, StdRng::seed_from_u64(seed), now_sec)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[OrbitItem] {
        &self.items
    }

    /// Rebuild the whole set when the requested count changes. Returns whether
    /// anything was rebuilt.
    pub fn set_count(&mut self, count: usize, now_sec: f64) -> bool {
        if count == self.items.len() {
            return false;
        }
        self.regenerate(count, now_sec);
        log::info!("[orbit] item count -> {}", count);
        true
    }

    fn regenerate(&mut self, count: usize, now_sec: f64) {
        self.items.clear();
        for slot in 0..count {
            let generation = self.bump_generation();
            let item = spawn_item(&mut self.rng, slot, generation, now_sec);
            self.items.push(item);
        }
    }

    fn bump_generation(&mut self) -> u64 {
        let g = self.next_generation;
        self.next_generation += 1;
        g
    }

    /// Replace every item whose deadline has elapsed; siblings keep their
    /// parameters and deadlines. Returns the number of respawned items.
    pub fn tick(&mut self, now_sec: f64) -> usize {
        let mut respawned = 0;
        for slot in 0..self.items.len() {
            if self.items[slot].respawn_at > now_sec {
                continue;
            }
            let generation = self.bump_generation();
            self.items[slot] = spawn_item(&mut self.rng, slot, generation, now_sec);
            respawned += 1;
        }
        if respawned > 0 {
            log::debug!("[orbit] respawned {} item(s) at t={:.2}", respawned, now_sec);
        }
        respawned
    }

    /// Run the respawn tick and write one placement per item into `out`.
    pub fn frame(&mut self, orbit: &OrbitCenter, now_sec: f64, out: &mut Vec<Placement>) {
        out.clear();
        if self.items.is_empty() {
            return;
        }
        self.tick(now_sec);
        out.extend(self.items.iter().map(|item| Placement {
            key: item.key,
            offset: item.position(orbit, now_sec),
            size: item.size,
            color: item.color,
            opacity: item_opacity(item.key.slot),
        }));
    }
}
