//! Range-partitioned parallel-for over a disjoint output slice.
//!
//! [`ParallelFor::run`] splits the flattened index range `[0, out.len())` into
//! contiguous chunks and hands each chunk to the loop body together with the
//! matching `&mut` sub-slice of `out`. Chunks never overlap, so the body can
//! write its cells without synchronisation. The call returns once every chunk
//! has completed.
//!
//! Chunks run on the rayon global pool (one worker per hardware thread) unless
//! a dedicated pool was requested with [`ParallelFor::with_threads`].
use crate::error::{ConvError, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;
use std::ops::Range;

/// Chunks per worker thread used by [`Partition::Auto`].
pub const AUTO_CHUNKS_PER_THREAD: usize = 4;

/// How the flattened range is cut into chunks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// About [`AUTO_CHUNKS_PER_THREAD`] chunks per worker thread.
    #[default]
    Auto,
    /// `n` chunks whose lengths differ by at most one (`0` behaves like `1`).
    /// Never more chunks than indices.
    Stripes(usize),
    /// Chunks of exactly `n` indices, the last one possibly shorter.
    ChunkLen(usize),
    /// One chunk covering the whole range, run on the calling thread.
    Single,
}

impl Partition {
    /// Length of the longest chunk when partitioning `total` indices over
    /// `threads` workers. Always at least 1.
    pub fn chunk_len(&self, total: usize, threads: usize) -> usize {
        let len = match *self {
            Partition::Auto => total.div_ceil(threads.max(1) * AUTO_CHUNKS_PER_THREAD),
            Partition::Stripes(n) => total.div_ceil(n.max(1)),
            Partition::ChunkLen(n) => n,
            Partition::Single => total,
        };
        len.max(1)
    }
}

/// Parallel-for executor: a partition policy plus an optional dedicated pool.
#[derive(Debug, Default)]
pub struct ParallelFor {
    partition: Partition,
    pool: Option<ThreadPool>,
}

impl ParallelFor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    /// Run chunks on a dedicated pool of `threads` workers instead of the
    /// global one.
    pub fn with_threads(mut self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(ConvError::invalid("thread count must be positive"));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("stencil-worker-{idx}"))
            .build()?;
        self.pool = Some(pool);
        Ok(self)
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Number of workers chunks are spread over.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub fn chunk_len(&self, total: usize) -> usize {
        self.partition.chunk_len(total, self.threads())
    }

    /// Invoke `body(range, &mut out[range])` for every chunk of `[0, out.len())`.
    ///
    /// An empty `out` never invokes the body.
    pub fn run<T, F>(&self, out: &mut [T], body: F)
    where
        T: Send,
        F: Fn(Range<usize>, &mut [T]) + Sync,
    {
        let total = out.len();
        if total == 0 {
            return;
        }
        match self.partition {
            Partition::Single => {
                log::debug!("parallel_for: {total} items in a single chunk");
                body(0..total, out);
            }
            Partition::Stripes(n) => {
                let stripes = split_stripes(out, n);
                log::debug!(
                    "parallel_for: {total} items, stripes={}, threads={}",
                    stripes.len(),
                    self.threads()
                );
                self.install(|| {
                    stripes
                        .into_par_iter()
                        .for_each(|(start, chunk)| body(start..start + chunk.len(), chunk));
                });
            }
            Partition::Auto | Partition::ChunkLen(_) => {
                let chunk_len = self.chunk_len(total);
                log::debug!(
                    "parallel_for: {total} items, chunk_len={chunk_len}, chunks={}, threads={}",
                    total.div_ceil(chunk_len),
                    self.threads()
                );
                self.install(|| run_chunks(out, chunk_len, &body));
            }
        }
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

/// Cut `out` at `i * total / n` for `i in 0..=n`, with `n` clamped to
/// `[1, total]`. Returns each piece with its start offset.
fn split_stripes<T>(out: &mut [T], stripes: usize) -> Vec<(usize, &mut [T])> {
    let total = out.len();
    let n = stripes.clamp(1, total.max(1));
    let mut pieces = Vec::with_capacity(n);
    let mut rest = out;
    let mut start = 0;
    for i in 1..=n {
        let end = i * total / n;
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(end - start);
        pieces.push((start, head));
        rest = tail;
        start = end;
    }
    pieces
}

fn run_chunks<T, F>(out: &mut [T], chunk_len: usize, body: &F)
where
    T: Send,
    F: Fn(Range<usize>, &mut [T]) + Sync,
{
    out.par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(idx, chunk)| {
            let start = idx * chunk_len;
            body(start..start + chunk.len(), chunk);
        });
}
