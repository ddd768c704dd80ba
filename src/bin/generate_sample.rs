//! Writes a deterministic sample launch-records CSV for trying out the
//! dashboard without a real dataset:
//!
//! ```text
//! cargo run --bin generate_sample
//! cargo run -- sample_launches.csv
//! ```

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

    /// Uniform value in `[low, high)`.
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

struct SiteProfile {
    name: &'static str,
    launches: usize,
    /// Payload mass range flown from this site, kg.
    payload_range: (f64, f64),
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = [
        SiteProfile {
            name: "CCAFS LC-40",
            launches: 26,
            payload_range: (300.0, 7000.0),
        },
        SiteProfile {
            name: "CCAFS SLC-40",
            launches: 7,
            payload_range: (2000.0, 6500.0),
        },
        SiteProfile {
            name: "KSC LC-39A",
            launches: 13,
            payload_range: (2500.0, 9600.0),
        },
        SiteProfile {
            name: "VAFB SLC-4E",
            launches: 10,
            payload_range: (500.0, 9600.0),
        },
    ];

    // Booster era and its rough success rate; early boosters failed more.
    let eras: [(&str, f64); 5] = [
        ("v1.0", 0.40),
        ("v1.1", 0.47),
        ("FT", 0.66),
        ("B4", 0.54),
        ("B5", 1.00),
    ];

    let output_path = "sample_launches.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "Payload Mass (kg)",
            "class",
            "Booster Version Category",
        ])
        .expect("Failed to write header");

    let mut flight_no = 0usize;
    for site in &sites {
        for _ in 0..site.launches {
            flight_no += 1;
            let (era, success_rate) = eras[flight_no % eras.len()];
            let payload = rng.range(site.payload_range.0, site.payload_range.1);
            let class = if rng.chance(success_rate) { 1 } else { 0 };

            writer
                .write_record([
                    flight_no.to_string(),
                    site.name.to_string(),
                    format!("{payload:.1}"),
                    class.to_string(),
                    era.to_string(),
                ])
                .expect("Failed to write row");
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {flight_no} launches to {output_path}");
}
