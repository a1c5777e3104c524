//! Fixed-capacity circular particle pool
//!
//! Slots are allocated once and recycled forever. Live particles occupy the
//! circular range `[first_active, first_free)`; `first_active == first_free`
//! means empty. One slot always stays free so that "empty" and "full" never
//! look the same, hence `capacity + 1` slots.
//!
//! Particles are added in time order and all age at the same rate, so the
//! oldest one is always at `first_active` and retirement only has to look at
//! the front of the range.

use crate::domain::settings::{validate_pool, SettingsError};

use super::particle::Particle;
use super::surface::DrawSurface;

pub struct ParticlePool {
    slots: Vec<Particle>,
    first_active: usize,
    first_free: usize,
    duration: f64,
    effect: f64,
}

impl ParticlePool {
    /// Pool holding up to `capacity` live particles of lifetime `duration`
    /// seconds. `effect` is forwarded to every `Particle::initialize`.
    pub fn new(capacity: usize, duration: f64, effect: f64) -> Result<Self, SettingsError> {
        validate_pool(capacity, duration)?;
        Ok(Self {
            slots: vec![Particle::default(); capacity + 1],
            first_active: 0,
            first_free: 0,
            duration,
            effect,
        })
    }

    /// Max live particles
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Live particle count
    #[inline]
    pub fn len(&self) -> usize {
        if self.first_free >= self.first_active {
            self.first_free - self.first_active
        } else {
            self.slots.len() - self.first_active + self.first_free
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first_active == self.first_free
    }

    #[inline]
    fn next(&self, idx: usize) -> usize {
        let idx = idx + 1;
        if idx == self.slots.len() { 0 } else { idx }
    }

    /// Spawn a particle, overwriting the oldest one when the pool is full.
    pub fn add(&mut self, x: f64, y: f64, dx: f64, dy: f64) {
        self.slots[self.first_free].initialize(x, y, dx, dy, self.effect);

        self.first_free = self.next(self.first_free);
        if self.first_active == self.first_free {
            self.first_active = self.next(self.first_active);
        }
    }

    /// Age every live particle by `dt`, then retire expired ones from the front.
    pub fn update(&mut self, dt: f64) {
        let (head, tail) = self.active_ranges();
        for p in &mut self.slots[head] {
            p.update(dt);
        }
        for p in &mut self.slots[tail] {
            p.update(dt);
        }

        while self.first_active != self.first_free && self.slots[self.first_active].age >= self.duration {
            self.first_active = self.next(self.first_active);
        }
    }

    /// Draw live particles oldest first.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S, sprite: &S::Image) {
        for p in self.iter() {
            p.draw(surface, sprite, self.duration);
        }
    }

    /// Live particles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        let (head, tail) = self.active_ranges();
        self.slots[head].iter().chain(self.slots[tail].iter())
    }

    /// Drop every live particle without touching the slots.
    pub fn clear(&mut self) {
        self.first_active = self.first_free;
    }

    /// The active range as up to two linear slot ranges, in order.
    fn active_ranges(&self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        if self.first_active <= self.first_free {
            (self.first_active..self.first_free, 0..0)
        } else {
            (self.first_active..self.slots.len(), 0..self.first_free)
        }
    }
}
