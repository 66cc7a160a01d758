use rand::{rngs::StdRng, Rng, SeedableRng};

/// One decorative background particle. Positions are viewport percentages,
/// sizes and drift are pixels, timings are seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub dx: f64,
    pub dy: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    /// Inline style consumed by the `particle-drift` keyframes.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; --dx: {:.2}px; --dy: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.y, self.size, self.size, self.dx, self.dy, self.duration, self.delay
        )
    }
}

/// Builds the particle field. The same seed always yields the same field, so
/// server-rendered markup matches what the client hydrates.
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(5.0..15.0),
            dx: rng.gen_range(-50.0..50.0),
            dy: rng.gen_range(-50.0..50.0),
            duration: rng.gen_range(10.0..30.0),
            delay: rng.gen_range(0.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(particle_field(30, 42), particle_field(30, 42));
        assert_ne!(particle_field(30, 42), particle_field(30, 43));
    }

    #[test]
    fn test_values_in_range() {
        let field = particle_field(200, 9);
        assert_eq!(field.len(), 200);
        for (i, p) in field.iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((5.0..15.0).contains(&p.size));
            assert!((-50.0..50.0).contains(&p.dx));
            assert!((-50.0..50.0).contains(&p.dy));
            assert!((10.0..30.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_style() {
        let p = Particle {
            id: 0,
            x: 12.5,
            y: 50.0,
            size: 8.0,
            dx: -3.0,
            dy: 4.25,
            duration: 12.0,
            delay: 0.5,
        };
        let style = p.style();
        assert!(style.starts_with("left: 12.50%; top: 50.00%; width: 8.00px; height: 8.00px;"));
        assert!(style.contains("--dx: -3.00px; --dy: 4.25px;"));
        assert!(style.ends_with("animation-delay: 0.50s;"));
    }
}
