use std::io;

use crate::{
    rng::{AnsiRng, Generator, Rng},
    stream::{BiasedStream, StreamConfig},
};

#[test]
#[ignore]
fn bench() {
    // Benchmark stream throughput per generator, biased every block and 1 in 10 blocks.
    // Run with `cargo test bench --release -- --ignored --nocapture`
    use std::time::Instant;

    const CHUNKS: u64 = 100_000;

    fn throughput<G: Generator>(generator: G, zero_chance: u32) -> f64 {
        let config = StreamConfig {
            zero_chance,
            ..StreamConfig::default()
        };
        let mut stream = BiasedStream::new(generator, config).unwrap();
        let start = Instant::now();
        stream.run(&mut io::sink(), Some(CHUNKS)).unwrap();
        let secs = start.elapsed().as_secs_f64();
        let megs = (CHUNKS * config.buf_size as u64) as f64 / (1 << 20) as f64;
        megs / secs
    }

    println!("\nThroughputs:");
    println!("     rng: {:.1} MB/s", throughput(Rng::new(0), 1));
    println!("  rng/10: {:.1} MB/s", throughput(Rng::new(0), 10));
    println!("    ansi: {:.1} MB/s", throughput(AnsiRng::new(0), 1));
    println!(" ansi/10: {:.1} MB/s", throughput(AnsiRng::new(0), 10));
}
