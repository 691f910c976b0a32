/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Temperatures: 25 °C → 525 °C, step 10
    let t0 = 25.0;
    let temperatures: Vec<f64> = (0..51).map(|i| t0 + i as f64 * 10.0).collect();

    // Linear volumetric expansion around 100 cc, alpha ≈ 3.5e-5 1/°C,
    // with mild Gaussian measurement noise.
    let v0 = 100.0;
    let alpha = 3.5e-5;

    let output_path = "sample_expansion.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["temperature_c", "volume_cc"])
        .expect("Failed to write header");

    for &t in &temperatures {
        let volume = v0 * (1.0 + alpha * (t - t0)) + rng.gauss(0.0, 0.002);
        writer
            .write_record([format!("{t:.1}"), format!("{volume:.5}")])
            .expect("Failed to write record");
    }
    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {} temperature/volume samples to {output_path}",
        temperatures.len()
    );
}
