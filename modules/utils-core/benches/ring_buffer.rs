use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use simlink_utils_core_rs::{RingBuffer, SpinSyncMutex, SyncMutexLike};

fn bench_ring_buffer_write_read(c: &mut Criterion) {
  let mut group = c.benchmark_group("ring_buffer_write_read");
  let batch = 128_u32;

  group.bench_function("bounded", |b| {
    b.iter_batched(
      || RingBuffer::bounded(batch as usize),
      |mut buffer: RingBuffer<u32>| {
        for value in 0..batch {
          buffer.write(value);
        }
        for _ in 0..batch {
          let _ = buffer.read();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.bench_function("growable_from_one", |b| {
    b.iter_batched(
      || RingBuffer::growable(1),
      |mut buffer: RingBuffer<u32>| {
        for value in 0..batch {
          if buffer.is_full() {
            buffer.grow();
          }
          buffer.write(value);
        }
        for _ in 0..batch {
          let _ = buffer.read();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.bench_function("spin_locked", |b| {
    b.iter_batched(
      || SpinSyncMutex::new(RingBuffer::bounded(batch as usize)),
      |mutex: SpinSyncMutex<RingBuffer<u32>>| {
        for value in 0..batch {
          mutex.with_lock(|buffer| buffer.write(value));
        }
        for _ in 0..batch {
          let _ = mutex.with_lock(RingBuffer::read);
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.finish();
}

criterion_group!(benches, bench_ring_buffer_write_read);
criterion_main!(benches);
