//! Heart effect - per-frame orchestration
//!
//! `HeartCore` owns the particle pool, the RNG and the frame clock. Each
//! `render` call measures the frame time, tops the pool up along the heart
//! curve, ages everything and draws it. Scheduling the next frame is the
//! caller's business (see `api::canvas`).

use crate::domain::{ParticleSettings, SettingsError, Sprite};
use crate::systems::{DrawSurface, ParticlePool};

#[path = "perf/timing.rs"]
mod timing;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/random.rs"]
mod random;
#[path = "step/clock.rs"]
mod clock;
#[path = "step/spawn.rs"]
mod spawn;
mod facade;

pub use clock::FrameClock;
pub use facade::HeartEffect;
pub use frame_stats::FrameStats;
pub use spawn::spawn_count;

pub(crate) use timing::now_secs;
use timing::elapsed_ms;

pub struct HeartCore {
    settings: ParticleSettings,
    pool: ParticlePool,
    spawn_rate: f64,
    fill: u32,
    clock: FrameClock,
    rng_state: u32,
    stats: FrameStats,
}

impl HeartCore {
    pub fn new(settings: ParticleSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let fill = settings.fill_rgba()?;
        let pool = ParticlePool::new(settings.length, settings.duration, settings.effect)?;

        log::debug!(
            "heart core: {} particles, {}s lifetime, {} spawns/s",
            settings.length,
            settings.duration,
            settings.spawn_rate()
        );

        Ok(Self {
            spawn_rate: settings.spawn_rate(),
            fill,
            rng_state: random::seed_or_clock(settings.seed),
            settings,
            pool,
            clock: FrameClock::new(),
            stats: FrameStats::default(),
        })
    }

    /// Rasterize the sprite these settings describe
    pub fn rasterize_sprite(&self) -> Sprite {
        Sprite::rasterize(self.settings.size, self.fill)
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Particles per second
    pub fn spawn_rate(&self) -> f64 {
        self.spawn_rate
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Render one frame at wall-clock time `now` (seconds).
    pub fn render<S: DrawSurface>(&mut self, now: f64, surface: &mut S, sprite: &S::Image) {
        let dt = self.clock.tick(now);
        self.step(dt, surface, sprite);
    }

    /// Render one frame `dt` seconds after the previous one.
    pub fn step<S: DrawSurface>(&mut self, dt: f64, surface: &mut S, sprite: &S::Image) {
        let started = now_secs();

        surface.clear();

        let spawned = spawn::spawn_particles(self, dt, surface.width(), surface.height());

        self.pool.update(dt);
        self.pool.draw(surface, sprite);

        self.stats = FrameStats {
            frame_ms: elapsed_ms(started),
            delta_time: dt,
            spawned: spawned as u32,
            active: self.pool.len() as u32,
            frame: self.stats.frame + 1,
        };
    }

    /// Resume after a pause: the next frame starts from dt = 0.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    pub fn clear(&mut self) {
        self.pool.clear();
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
