pub const PARTICLE_COUNT: usize = 60;
/// Particles closer than this (in pixels) are joined by a line.
pub const LINK_DISTANCE: f64 = 150.0;
const MAX_SPEED: f64 = 0.25;

/// Small deterministic generator; good enough for decoration and stable under test.
#[derive(Clone, Debug)]
pub struct SeededRng {
	state: u64,
}

impl SeededRng {
	const MODULUS: u64 = 233_280;

	pub fn new(seed: u64) -> Self {
		Self {
			state: seed % Self::MODULUS,
		}
	}

	/// Next value in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		self.state = (self.state * 9301 + 49297) % Self::MODULUS;
		self.state as f64 / Self::MODULUS as f64
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

impl Particle {
	fn random(rng: &mut SeededRng, width: f64, height: f64) -> Self {
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			vx: (rng.next_f64() - 0.5) * 2.0 * MAX_SPEED,
			vy: (rng.next_f64() - 0.5) * 2.0 * MAX_SPEED,
			radius: rng.next_f64() * 2.0 + 1.0,
		}
	}

	fn update(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;
		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
			self.x = self.x.clamp(0.0, width);
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
			self.y = self.y.clamp(0.0, height);
		}
	}
}

/// Line opacity for two particles `dist` apart, or `None` when too far to link.
pub fn link_alpha(dist: f64) -> Option<f64> {
	(dist < LINK_DISTANCE).then(|| 0.1 * (1.0 - dist / LINK_DISTANCE))
}

pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	rng: SeededRng,
}

impl ParticleField {
	pub fn new(count: usize, width: f64, height: f64, seed: u64) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(count),
			width,
			height,
			rng: SeededRng::new(seed),
		};
		field.reset(count, width, height);
		field
	}

	/// Scatter a fresh set of particles over a canvas of the given size.
	pub fn reset(&mut self, count: usize, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		let rng = &mut self.rng;
		self.particles = (0..count)
			.map(|_| Particle::random(rng, width, height))
			.collect();
	}

	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.update(w, h);
		}
	}

	/// Every linked pair with its line opacity.
	pub fn links(&self) -> Vec<(usize, usize, f64)> {
		let mut links = Vec::new();
		for (i, a) in self.particles.iter().enumerate() {
			for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				if let Some(alpha) = link_alpha((dx * dx + dy * dy).sqrt()) {
					links.push((i, j, alpha));
				}
			}
		}
		links
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rng_stays_in_unit_interval() {
		let mut rng = SeededRng::new(42);
		for _ in 0..1000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn same_seed_same_field() {
		let a = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 7);
		let b = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 7);
		assert_eq!(a.particles, b.particles);
		assert_eq!(a.particles.len(), PARTICLE_COUNT);
	}

	#[test]
	fn particles_start_with_bounded_size_and_speed() {
		let field = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, 3);
		for p in &field.particles {
			assert!((1.0..3.0).contains(&p.radius));
			assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
		}
	}

	#[test]
	fn particles_stay_inside_the_canvas() {
		let mut field = ParticleField::new(PARTICLE_COUNT, 200.0, 100.0, 11);
		for _ in 0..5000 {
			field.step();
		}
		for p in &field.particles {
			assert!((0.0..=200.0).contains(&p.x));
			assert!((0.0..=100.0).contains(&p.y));
		}
	}

	#[test]
	fn link_alpha_fades_with_distance() {
		assert_eq!(link_alpha(0.0), Some(0.1));
		assert!(link_alpha(75.0).unwrap() < 0.1);
		assert_eq!(link_alpha(150.0), None);
		assert_eq!(link_alpha(400.0), None);
	}

	#[test]
	fn links_only_join_close_pairs() {
		let mut field = ParticleField::new(0, 1000.0, 1000.0, 1);
		field.particles = vec![
			Particle {
				x: 0.0,
				y: 0.0,
				vx: 0.0,
				vy: 0.0,
				radius: 1.0,
			},
			Particle {
				x: 100.0,
				y: 0.0,
				vx: 0.0,
				vy: 0.0,
				radius: 1.0,
			},
			Particle {
				x: 900.0,
				y: 900.0,
				vx: 0.0,
				vy: 0.0,
				radius: 1.0,
			},
		];
		let links = field.links();
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].0, links[0].1), (0, 1));
	}
}
