use std::io::{self, Write};

use tracing::{debug, info, trace};

use crate::{
    error::{Error, Result},
    rng::Generator,
    sampler::{check_bound, sample},
};

/// Bytes emitted per chunk.
pub const BUFSIZE: usize = 1024;

/// Denominator of the bias probability. Values of 0 or 1 bias every block.
pub const ZERO_CHANCE: u32 = 1;

/// Bytes per block. Each block carries one biased bit.
pub const BLOCKLEN: usize = 16;

/// Index of the biased bit within a block, counting from the high bit of the first byte.
pub const BIASBIT: usize = 0;

/// Layout of the biased stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    pub buf_size: usize,
    pub zero_chance: u32,
    pub block_len: usize,
    pub bias_bit: usize,
}

impl StreamConfig {
    pub const DEFAULT: Self = Self {
        buf_size: BUFSIZE,
        zero_chance: ZERO_CHANCE,
        block_len: BLOCKLEN,
        bias_bit: BIASBIT,
    };

    /// Checks that the layout is usable with generators of type `G`.
    pub fn validate<G>(&self) -> Result<()>
    where
        G: Generator + ?Sized,
    {
        if self.buf_size == 0 {
            return Err(Error::ZeroBufferSize);
        }
        if self.block_len == 0 {
            return Err(Error::ZeroBlockLength);
        }
        check_bound::<G>(256)?;
        if self.zero_chance > 1 && check_bound::<G>(self.zero_chance).is_err() {
            return Err(Error::ZeroChance {
                zero_chance: self.zero_chance,
                max: G::RANGE as u64 + 1,
            });
        }
        Ok(())
    }

    /// Byte offset of the biased bit, relative to the start of a block.
    pub fn bit_pos(&self) -> usize {
        self.bias_bit / 8
    }

    /// The single bit cleared in a biased byte. Bit 0 of `bias_bit` is the high bit.
    pub fn bias_mask(&self) -> u8 {
        1 << (7 - self.bias_bit % 8)
    }

    /// Whether the byte at `index` is subject to a bias trial, i.e. `index - bit_pos` is a
    /// multiple of the block length. This also holds for indices before `bit_pos`.
    pub fn is_bias_position(&self, index: usize) -> bool {
        index % self.block_len == self.bit_pos() % self.block_len
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why [`BiasedStream::run`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// The requested number of chunks was written.
    Limit,
    /// The consumer closed its end of the output.
    Disconnected,
}

/// Produces uniformly random bytes with one bit per block cleared.
///
/// Every cycle overwrites the whole buffer: each byte is drawn with `sample(256)`, and at bias
/// positions a trial decides whether to clear the configured bit. The trial draw, when there is
/// one, follows the byte's own draw.
#[derive(Debug)]
pub struct BiasedStream<G> {
    generator: G,
    config: StreamConfig,
    buffer: Vec<u8>,
    chunks: u64,
}

impl<G> BiasedStream<G>
where
    G: Generator,
{
    /// Returns a stream drawing from `generator`, or an error if `config` cannot be served by
    /// generators of type `G`.
    pub fn new(generator: G, config: StreamConfig) -> Result<Self> {
        config.validate::<G>()?;
        Ok(Self {
            generator,
            config,
            buffer: vec![0; config.buf_size],
            chunks: 0,
        })
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Number of chunks emitted so far.
    pub fn chunks(&self) -> u64 {
        self.chunks
    }

    /// Runs one fill cycle and returns the freshly written buffer.
    pub fn fill(&mut self) -> &[u8] {
        let Self {
            generator,
            config,
            buffer,
            ..
        } = self;
        let generator: &G = generator;
        let mask = config.bias_mask();

        for (index, byte) in buffer.iter_mut().enumerate() {
            *byte = sample(generator, 256) as u8;
            if config.is_bias_position(index) && bias_trial(generator, config.zero_chance) {
                *byte &= !mask;
            }
        }
        &self.buffer
    }

    /// Fills the buffer, writes it to `out` and flushes.
    pub fn emit<W>(&mut self, out: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        self.fill();
        out.write_all(&self.buffer)?;
        out.flush()?;
        self.chunks += 1;
        trace!(chunk = self.chunks, "emitted chunk");
        Ok(())
    }

    /// Emits chunks until `limit` chunks have been written, or forever when `limit` is `None`.
    ///
    /// A broken pipe ends the run cleanly with [`Shutdown::Disconnected`]. Any other write
    /// failure is returned as an error and nothing more is written.
    pub fn run<W>(&mut self, out: &mut W, limit: Option<u64>) -> Result<Shutdown>
    where
        W: Write + ?Sized,
    {
        debug!(config = ?self.config, ?limit, "starting stream");
        let mut emitted = 0;
        while limit.map_or(true, |limit| emitted < limit) {
            match self.emit(out) {
                Ok(()) => emitted += 1,
                Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
                    info!(chunks = emitted, "output closed, stopping");
                    return Ok(Shutdown::Disconnected);
                }
                Err(err) => return Err(err),
            }
        }
        info!(chunks = emitted, "chunk limit reached");
        Ok(Shutdown::Limit)
    }
}

fn bias_trial<G>(generator: &G, zero_chance: u32) -> bool
where
    G: Generator + ?Sized,
{
    zero_chance <= 1 || sample(generator, zero_chance) == 0
}
