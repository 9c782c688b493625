//! Bouncing-dot simulation behind the page content.
//!
//! The field owns its particle list outright; nothing here touches the DOM,
//! and the random source is injected so hosts can drive it deterministically.

/// Canvas area, in px², that one particle accounts for.
pub const AREA_PER_PARTICLE: f64 = 15_000.0;

/// Particle count for a surface of the given dimensions.
pub fn population(width: f64, height: f64) -> usize {
    ((width * height) / AREA_PER_PARTICLE).floor() as usize
}

/// One simulated dot.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Particle {
            x: rng() * width,
            y: rng() * height,
            radius: rng() * 2.0 + 1.0,
            vx: rng() * 0.5 - 0.25,
            vy: rng() * 0.5 - 0.25,
        }
    }

    /// Advance one frame. Crossing a boundary inverts that axis' velocity
    /// component; magnitude is preserved. Axes reflect independently.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x > width || self.x < 0.0 {
            self.vx = -self.vx;
        }
        if self.y > height || self.y < 0.0 {
            self.vy = -self.vy;
        }
    }
}

/// Simulation context: the particle population for one drawing surface.
#[derive(Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let mut field = ParticleField {
            width,
            height,
            particles: Vec::new(),
        };
        field.repopulate(rng);
        field
    }

    /// Adopt new surface dimensions, discarding every particle and drawing a
    /// fresh population sized for the new area.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        self.repopulate(rng);
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn repopulate(&mut self, rng: &mut impl FnMut() -> f64) {
        let count = population(self.width, self.height);
        self.particles = (0..count)
            .map(|_| Particle::spawn(self.width, self.height, rng))
            .collect();
    }
}
