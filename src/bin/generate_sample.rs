//! Generates a synthetic `prime_probe_results.csv` for demos and fixtures.
//!
//! Stands in for the actual Prime+Probe measurement tool: baseline L1 access
//! times with periodic contention bursts on the sets the victim's working
//! set conflicts with (0, 16, 32).

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

const MONITOR_SETS: usize = 64;
const SAMPLES: usize = 1000;

/// Sets the simulated victim evicts, matching the real tool's victim thread.
const VICTIM_SETS: [usize; 3] = [0, 16, 32];

/// Victim activity pattern: bursts of this many samples...
const BURST_LEN: usize = 6;
/// ...starting every this many samples.
const BURST_PERIOD: usize = 40;

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "prime_probe_results.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut header = vec!["Sample".to_string()];
    header.extend((0..MONITOR_SETS).map(|i| format!("Set{i}")));
    writer.write_record(&header).expect("Failed to write header");

    for sample in 0..SAMPLES {
        let victim_active = sample % BURST_PERIOD < BURST_LEN;

        let mut record = vec![sample.to_string()];
        for set in 0..MONITOR_SETS {
            // Baseline probe time: everything still resident in L1.
            let mut cycles = rng.gauss(65.0, 10.0);

            if victim_active && VICTIM_SETS.contains(&set) {
                // Victim evicted our line: reload from L2 or beyond.
                cycles = rng.gauss(290.0, 25.0);
            }

            record.push(format!("{:.0}", cycles.max(20.0)));
        }
        writer.write_record(&record).expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {SAMPLES} samples across {MONITOR_SETS} sets to {output_path}");
}
