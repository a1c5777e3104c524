use super::*;
use crate::systems::PixelSurface;

fn seeded(length: usize, duration: f64) -> HeartCore {
    HeartCore::new(ParticleSettings {
        length,
        duration,
        seed: 7,
        ..ParticleSettings::default()
    })
    .unwrap()
}

#[test]
fn spawn_count_truncates_fractional_particles() {
    let rate = ParticleSettings::default().spawn_rate();
    assert_eq!(rate, 250.0);
    assert_eq!(spawn_count(rate, 0.004), 1);
    assert_eq!(spawn_count(rate, 0.003), 0);
    assert_eq!(spawn_count(rate, 0.0), 0);
    assert_eq!(spawn_count(rate, 0.1), 25);
}

#[test]
fn spawn_count_ignores_negative_and_nan_steps() {
    assert_eq!(spawn_count(250.0, -1.0), 0);
    assert_eq!(spawn_count(250.0, f64::NAN), 0);
    assert_eq!(spawn_count(250.0, f64::INFINITY), 0);
}

#[test]
fn step_spawns_by_rate_and_counts_frames() {
    let mut core = seeded(500, 2.0);
    let sprite = core.rasterize_sprite();
    let mut surface = PixelSurface::new(800, 600);

    core.step(0.004, &mut surface, &sprite);
    assert_eq!(core.stats().spawned(), 1);
    assert_eq!(core.stats().active(), 1);

    core.step(0.003, &mut surface, &sprite);
    assert_eq!(core.stats().spawned(), 0);
    assert_eq!(core.stats().active(), 1);
    assert_eq!(core.stats().frame(), 2);
}

#[test]
fn first_render_has_zero_delta() {
    let mut core = seeded(500, 2.0);
    let sprite = core.rasterize_sprite();
    let mut surface = PixelSurface::new(400, 400);

    core.render(100.0, &mut surface, &sprite);
    assert_eq!(core.stats().delta_time(), 0.0);
    assert_eq!(core.stats().spawned(), 0);

    core.render(100.5, &mut surface, &sprite);
    assert_eq!(core.stats().delta_time(), 0.5);
    assert_eq!(core.stats().spawned(), 125);
}

#[test]
fn reset_clock_swallows_the_pause() {
    let mut core = seeded(500, 2.0);
    let sprite = core.rasterize_sprite();
    let mut surface = PixelSurface::new(400, 400);

    core.render(1.0, &mut surface, &sprite);
    core.render(1.5, &mut surface, &sprite);
    core.reset_clock();
    core.render(60.0, &mut surface, &sprite);
    assert_eq!(core.stats().delta_time(), 0.0);
    assert_eq!(core.pool().len(), 125);
}

#[test]
fn pool_settles_near_capacity() {
    let mut core = seeded(500, 2.0);
    let sprite = core.rasterize_sprite();
    let mut surface = PixelSurface::new(800, 600);

    for _ in 0..60 {
        core.step(0.1, &mut surface, &sprite);
        assert!(core.pool().len() <= 500);
    }
    let active = core.pool().len();
    assert!((450..=500).contains(&active), "active = {active}");
}

#[test]
fn spawn_origin_and_velocity_point_outward() {
    let (origin, velocity) = super::spawn::heart_spawn(0.0, 800.0, 600.0, 100.0);
    assert_eq!(origin.x, 400.0);
    assert_eq!(origin.y, 225.0);
    assert_eq!(velocity.x, 0.0);
    assert_eq!(velocity.y, -100.0);

    let (origin, velocity) = super::spawn::heart_spawn(std::f64::consts::FRAC_PI_2, 800.0, 600.0, 100.0);
    assert!(origin.x > 400.0);
    assert!(velocity.x > 0.0);
    assert!((velocity.length() - 100.0).abs() < 1e-9);
}

#[test]
fn fresh_particles_brake_at_the_configured_rate() {
    let mut core = seeded(64, 2.0);
    let sprite = core.rasterize_sprite();
    let mut surface = PixelSurface::new(800, 600);

    // 100 px/s launch, -0.75 effect: |a| = 75, |v| after 0.1s = 92.5
    core.step(0.1, &mut surface, &sprite);
    assert!(core.pool().len() > 0);
    for p in core.pool().iter() {
        let speed = p.velocity.length();
        assert!((speed - 92.5).abs() < 1e-9, "speed = {speed}");
        assert!((p.acceleration.length() - 75.0).abs() < 1e-9);
    }
}

#[test]
fn same_seed_gives_same_frames() {
    let mut a = seeded(100, 1.0);
    let mut b = seeded(100, 1.0);
    let sprite = a.rasterize_sprite();
    let mut sa = PixelSurface::new(500, 500);
    let mut sb = PixelSurface::new(500, 500);

    for _ in 0..5 {
        a.step(0.05, &mut sa, &sprite);
        b.step(0.05, &mut sb, &sprite);
    }
    let pa: Vec<_> = a.pool().iter().map(|p| p.position).collect();
    let pb: Vec<_> = b.pool().iter().map(|p| p.position).collect();
    assert_eq!(pa, pb);
    assert_eq!(sa.pixels(), sb.pixels());
}

#[test]
fn frame_draws_pixels_and_clears_between_frames() {
    let mut core = seeded(500, 2.0);
    let sprite = core.rasterize_sprite();
    let mut surface = PixelSurface::new(800, 600);

    core.step(0.5, &mut surface, &sprite);
    assert!(surface.pixels().iter().any(|&p| p != 0));

    core.clear();
    core.step(0.0, &mut surface, &sprite);
    assert!(surface.pixels().iter().all(|&p| p == 0));
}

#[test]
fn invalid_settings_are_rejected() {
    let err = HeartCore::new(ParticleSettings { length: 0, ..ParticleSettings::default() });
    assert!(matches!(err, Err(SettingsError::ZeroCapacity)));

    let err = HeartCore::new(ParticleSettings { duration: -2.0, ..ParticleSettings::default() });
    assert!(matches!(err, Err(SettingsError::InvalidDuration(_))));
}

#[test]
fn clock_measures_between_ticks() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(5.0), 0.0);
    assert_eq!(clock.tick(5.25), 0.25);
    assert_eq!(clock.tick(5.0), 0.0);
    clock.reset();
    assert_eq!(clock.tick(9.0), 0.0);
}

#[test]
fn facade_renders_into_its_buffer() {
    let settings = ParticleSettings { seed: 3, ..ParticleSettings::default() };
    let mut effect = HeartEffect::with_settings(320, 240, settings).unwrap();
    assert_eq!(effect.frame_len_bytes(), 320 * 240 * 4);
    assert_eq!(effect.sprite_size(), 30);

    effect.step(0.2);
    assert_eq!(effect.particle_count(), 50);
    assert!(effect.surface().pixels().iter().any(|&p| p != 0));

    effect.resize(100, 50);
    assert_eq!((effect.width(), effect.height()), (100, 50));
    effect.clear();
    assert_eq!(effect.particle_count(), 0);
}

#[test]
fn long_frame_spawns_at_most_one_pool() {
    let mut core = seeded(500, 2.0);
    let sprite = core.rasterize_sprite();
    let mut surface = PixelSurface::new(200, 200);

    core.step(3600.0, &mut surface, &sprite);
    assert_eq!(core.stats().spawned(), 500);
    assert!(core.pool().len() <= core.pool().capacity());

    core.step(1e300, &mut surface, &sprite);
    assert_eq!(core.stats().spawned(), 500);
    assert_eq!(core.stats().frame(), 2);
}

#[test]
fn clearing_the_effect_blanks_the_frame() {
    let settings = ParticleSettings { seed: 5, ..ParticleSettings::default() };
    let mut effect = HeartEffect::with_settings(400, 300, settings).unwrap();
    effect.step(0.1);
    assert!(effect.surface().pixels().iter().any(|&p| p != 0));

    effect.clear();
    assert_eq!(effect.particle_count(), 0);
    assert!(effect.surface().pixels().iter().all(|&p| p == 0));
}

#[test]
fn frame_time_is_never_negative() {
    assert_eq!(super::timing::elapsed_ms(now_secs() + 60.0), 0.0);
    assert!(super::timing::elapsed_ms(now_secs() - 1.0) >= 1000.0);
}
