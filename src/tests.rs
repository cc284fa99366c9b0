use crate as biasgen;

#[test]
fn default_scenario() {
    use biasgen::{parse_seed, BiasedStream, Rng, StreamConfig, BUFSIZE};

    // No seed argument means seed 0, as does an unparsable one.
    let seed = parse_seed("none");
    let mut stream = BiasedStream::new(Rng::new(seed), StreamConfig::default()).unwrap();
    let mut output = Vec::new();
    stream.emit(&mut output).unwrap();

    assert_eq!(output.len(), BUFSIZE);
    for offset in (0..=1008).step_by(16) {
        assert!(output[offset] <= 0x7F, "byte {offset} is {}", output[offset]);
    }

    // Reproducible from the same seed.
    let mut again = BiasedStream::new(Rng::new(0), StreamConfig::default()).unwrap();
    assert_eq!(again.fill(), &output[..]);
}

#[test]
fn first_chunks_are_deterministic() {
    use biasgen::{AnsiRng, BiasedStream, StreamConfig};

    const K: u64 = 16;
    let run = |seed| {
        let config = StreamConfig {
            zero_chance: 10,
            ..StreamConfig::default()
        };
        let mut output = Vec::new();
        BiasedStream::new(AnsiRng::new(seed), config)
            .unwrap()
            .run(&mut output, Some(K))
            .unwrap();
        output
    };
    assert_eq!(run(31337), run(31337));
    assert_eq!(run(31337).len(), K as usize * biasgen::BUFSIZE);
}

#[test]
fn shared_generator_by_reference() {
    use biasgen::{sample, BiasedStream, Rng, StreamConfig};

    // A stream can borrow the generator, leaving it usable afterwards.
    let rng = Rng::new(9);
    let config = StreamConfig {
        buf_size: 32,
        ..StreamConfig::default()
    };
    let mut stream = BiasedStream::new(&rng, config).unwrap();
    stream.fill();
    drop(stream);

    let reference = Rng::new(9);
    for _ in 0..32 {
        sample(&reference, 256);
    }
    assert_eq!(rng.u64(), reference.u64());
}

#[cfg(feature = "rand")]
#[test]
fn rand_core() {
    use biasgen::Rng;
    use rand::{RngCore, SeedableRng};

    let mut rng = &Rng::from_seed([0; 8]);
    let mut buffer = [0; 32];
    rng.fill_bytes(&mut buffer);
    assert_ne!(buffer, [0; 32]);
}

#[cfg(feature = "rand")]
#[test]
fn stream_from_rand_generator() {
    use biasgen::{BiasedStream, RandSource, StreamConfig};
    use rand::{rngs::StdRng, SeedableRng};

    let source = RandSource::new(StdRng::seed_from_u64(2024));
    let mut stream = BiasedStream::new(source, StreamConfig::default()).unwrap();
    let chunk = stream.fill();
    assert!(chunk.iter().step_by(16).all(|&byte| byte & 0x80 == 0));
}
