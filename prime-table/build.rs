use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LIMIT: u32 = 1 << 16;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("table.rs");
    let mut file = BufWriter::new(File::create(dest_path)?);

    // trial division only, so the table stays independent of any sieve
    let mut primes: Vec<u32> = vec![];
    let mut pi_of_2k = vec![];

    'outer: for i in 0..LIMIT {
        if i.is_power_of_two() {
            pi_of_2k.push(primes.len());
        }
        if i < 2 {
            continue;
        }
        for &p in primes.iter().take_while(|&&p| p * p <= i) {
            if i % p == 0 {
                continue 'outer;
            }
        }
        primes.push(i);
    }
    pi_of_2k.push(primes.len());

    writeln!(
        file,
        "/// Every prime below 2<sup>16</sup>, ascending, found by trial division in \
         `build.rs`."
    )?;
    writeln!(file, "pub static PRIMES: [u32; {}] = [", primes.len())?;
    for prime in &primes {
        writeln!(file, "    {prime},")?;
    }
    writeln!(file, "];")?;

    writeln!(
        file,
        "/// `PI_OF_2K[k]` is the number of primes below 2<sup>k</sup>, for `k` in `0..=16`."
    )?;
    writeln!(file, "pub static PI_OF_2K: [usize; {}] = [", pi_of_2k.len())?;
    for count in &pi_of_2k {
        writeln!(file, "    {count},")?;
    }
    writeln!(file, "];")?;

    file.flush()
}
