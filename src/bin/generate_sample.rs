use std::path::Path;

use anyhow::{Context, Result};

use curvy_interface::data::loader::save_binary;
use curvy_interface::data::model::Matrix;

const N_COLS: usize = 200;
const N_ROWS: usize = 120;
const UPPER_VELOCITY: f32 = 1500.0;
const LOWER_VELOCITY: f32 = 3000.0;
/// Keeps neighbouring samples of one layer well under the interface tolerance.
const JITTER: f64 = 0.2;

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

    /// Uniform in `[-amplitude, amplitude)`.
    fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * amplitude
    }
}

/// Interface row for a column: slopes from row 50 down to row 70.
fn interface_row(col: usize) -> usize {
    50 + col * 20 / N_COLS
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let matrix = Matrix::from_fn(N_ROWS, N_COLS, |row, col| {
        let base = if row <= interface_row(col) {
            UPPER_VELOCITY
        } else {
            LOWER_VELOCITY
        };
        base + rng.jitter(JITTER) as f32
    })
    .context("building sample matrix")?;

    let output_path = Path::new("sample_model.bin");
    save_binary(output_path, &matrix).context("writing sample model")?;

    println!(
        "Wrote {N_ROWS} x {N_COLS} model to {} (run: curvy-interface {} {N_COLS} 20 4)",
        output_path.display(),
        output_path.display()
    );
    Ok(())
}
