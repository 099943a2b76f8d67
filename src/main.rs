use std::fs::File;
use std::hint::black_box;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use prime_sieve::{bytes_for, li_asym, sieve_primes_below_in, BoundedArena, PrimeCount};
use rand::{thread_rng, Rng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Times the arena-backed sieve on random bounds, or prints how well li(x)
/// tracks π(x).
#[derive(Parser, Debug)]
#[command(name = "prime-sieve")]
struct Args {
    /// Largest sieve bound
    #[arg(long, default_value_t = 1_000_000)]
    max_bound: usize,
    /// Stop after this many runs; runs until Ctrl-C when absent
    #[arg(long)]
    runs: Option<u64>,
    /// Per-run timings, tab separated
    #[arg(long, default_value = "stats.tsv")]
    stats: PathBuf,
    /// Print the π(x) vs li(x) table and exit
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    ensure!(args.max_bound >= 10, "--max-bound must be at least 10");

    if args.report {
        report(args.max_bound)
    } else {
        bench(&args)
    }
}

/// One row per power of ten up to `max_bound`.
fn report(max_bound: usize) -> Result<()> {
    let decades: Vec<u32> = (1..)
        .take_while(|&k| 10usize.checked_pow(k).is_some_and(|x| x <= max_bound))
        .collect();

    let rows = decades
        .into_par_iter()
        .map(|k| -> Result<(usize, usize, f32)> {
            let x = 10usize.pow(k);
            let mut arena = BoundedArena::with_capacity(bytes_for(x + 1));
            let mut count = PrimeCount::default();
            // primes below x + 1, i.e. π(x)
            sieve_primes_below_in(&mut arena, x + 1, &mut count)?;
            Ok((x, count.0, li_asym(x as f32)))
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{:>12}\t{:>10}\t{:>14}\t{:>9}", "x", "pi(x)", "li_asym(x)", "rel err");
    for (x, pi, li) in rows {
        let err = (f64::from(li) - pi as f64) / pi as f64;
        println!("{x:>12}\t{pi:>10}\t{li:>14.2}\t{err:>9.5}");
    }
    Ok(())
}

fn bench(args: &Args) -> Result<()> {
    let mut stats = BufWriter::new(
        File::create(&args.stats)
            .with_context(|| format!("creating {}", args.stats.display()))?,
    );

    let last_ctrlc = Arc::new(Mutex::new(Instant::now()));
    ctrlc::set_handler(move || {
        let _ = stdout().flush();

        let now = Instant::now();
        let Ok(mut lock) = last_ctrlc.lock() else {
            return;
        };
        let last = *lock;
        *lock = now;

        if now - last < Duration::from_secs(2) {
            println!();
            std::process::exit(0);
        }
    })
    .context("setting Ctrl-C handler")?;

    info!("Ctrl-C twice within two seconds to stop");

    let mut arena = BoundedArena::with_capacity(bytes_for(args.max_bound));
    let mut rng = thread_rng();
    let mut total_elapsed = Duration::ZERO;
    let mut total_primes = 0usize;

    for i in 1..=args.runs.unwrap_or(u64::MAX) {
        let bound = rng.gen_range(args.max_bound / 2..=args.max_bound);
        let mut count = PrimeCount::default();

        let start = Instant::now();
        black_box(sieve_primes_below_in(&mut arena, bound, &mut count))?;
        let e = start.elapsed();

        total_elapsed += e;
        total_primes += count.0;
        debug!(bound, primes = count.0, elapsed = ?e, "sieved");
        writeln!(stats, "{bound}\t{}\t{e:?}", count.0)?;

        print!(
            "Average elapsed: {:.2?}  (runs: {i}, primes/run: {})                \r",
            total_elapsed / i.min(u64::from(u32::MAX)) as u32,
            total_primes as u64 / i
        );
        stdout().flush()?;
    }

    println!();
    stats.flush()?;
    Ok(())
}
