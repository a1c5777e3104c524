use pinkboard_engine::{DrawSurface, ParticlePool, SpriteImage};

struct Dot;

impl SpriteImage for Dot {
    fn width(&self) -> f64 {
        10.0
    }
}

/// Records the x of every draw, which the tests use as an insertion tag
#[derive(Default)]
struct TagRecorder {
    drawn: Vec<usize>,
    alphas: Vec<f64>,
}

impl DrawSurface for TagRecorder {
    type Image = Dot;

    fn width(&self) -> f64 {
        100.0
    }

    fn height(&self) -> f64 {
        100.0
    }

    fn clear(&mut self) {
        self.drawn.clear();
        self.alphas.clear();
    }

    fn draw_image(&mut self, _: &Dot, x: f64, _: f64, w: f64, _: f64, alpha: f64) {
        self.drawn.push((x + w / 2.0).round() as usize);
        self.alphas.push(alpha);
    }
}

fn drawn(pool: &ParticlePool) -> Vec<usize> {
    let mut rec = TagRecorder::default();
    pool.draw(&mut rec, &Dot);
    rec.drawn
}

#[test]
fn below_capacity_nothing_is_evicted() {
    for n in 1..=10 {
        let mut pool = ParticlePool::new(10, 2.0, -0.75).unwrap();
        for i in 0..n {
            pool.add(i as f64, 0.0, 0.0, 0.0);
        }
        assert_eq!(pool.len(), n);
        assert_eq!(drawn(&pool), (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn overflow_evicts_fifo() {
    let mut pool = ParticlePool::new(10, 2.0, -0.75).unwrap();
    for i in 0..11 {
        pool.add(i as f64, 0.0, 0.0, 0.0);
    }
    assert_eq!(pool.len(), 10);
    assert_eq!(drawn(&pool), (1..11).collect::<Vec<_>>());
}

#[test]
fn aging_past_duration_empties_any_fill_level() {
    for n in [1, 5, 10, 25] {
        let mut pool = ParticlePool::new(10, 2.0, -0.75).unwrap();
        for i in 0..n {
            pool.add(i as f64, 0.0, 0.0, 0.0);
        }
        pool.update(2.5);
        assert!(pool.is_empty(), "n = {n}");
        assert!(drawn(&pool).is_empty());
    }
}

#[test]
fn draw_visits_wrapped_range_in_insertion_order() {
    let mut pool = ParticlePool::new(5, 1.0, -0.75).unwrap();
    pool.add(1.0, 0.0, 0.0, 0.0);
    pool.add(2.0, 0.0, 0.0, 0.0);
    pool.update(0.6);
    pool.add(3.0, 0.0, 0.0, 0.0);
    pool.add(4.0, 0.0, 0.0, 0.0);
    pool.update(0.5);
    for tag in 5..8 {
        pool.add(tag as f64, 0.0, 0.0, 0.0);
    }

    assert_eq!(pool.len(), 5);
    assert_eq!(drawn(&pool), vec![3, 4, 5, 6, 7]);
}

#[test]
fn opacity_fades_with_age() {
    let mut pool = ParticlePool::new(4, 2.0, -0.75).unwrap();
    pool.add(50.0, 50.0, 0.0, 0.0);
    pool.update(0.5);
    pool.add(60.0, 50.0, 0.0, 0.0);

    let mut rec = TagRecorder::default();
    pool.draw(&mut rec, &Dot);
    assert_eq!(rec.alphas, vec![0.75, 1.0]);
}
