#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

use std::hint;
use std::time::Instant;
use intlist::List;

fn warmup() {
  let mut s = 1u64;
  for i in 0 .. 200_000_000 { s = s.wrapping_mul(i); }
  let _: u64 = hint::black_box(s);
}

fn timeit<F: FnOnce()>(f: F) -> f64 {
  let start = Instant::now();
  f();
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F: FnOnce(usize, &[i32])>(iters: usize, data: &[i32], name: &str, f: F) {
  let iters = hint::black_box(iters);
  let duration = timeit(|| f(iters, data));
  let duration = duration / ((iters * data.len()) as f64);
  print!("{:25} {:.3} ns\n", name, duration);
}

#[inline(never)]
fn bench_from_array_global(iters: usize, data: &[i32]) {
  for _ in 0 .. iters {
    let _: List = hint::black_box(List::from_array(data));
  }
}

#[inline(never)]
fn bench_from_array_bumpalo(iters: usize, data: &[i32]) {
  let mut arena = bumpalo::Bump::new();

  for _ in 0 .. iters {
    let _: List<_> = hint::black_box(List::from_array_in(data, &arena));
    arena.reset();
  }
}

#[inline(never)]
fn bench_append_global(iters: usize, data: &[i32]) {
  for _ in 0 .. iters {
    let mut list = List::create(0);
    for &x in data {
      let _: bool = list.append(x);
    }
    let _: List = hint::black_box(list);
  }
}

#[inline(never)]
fn bench_remove_global(iters: usize, data: &[i32]) {
  for _ in 0 .. iters {
    let mut list = List::from_array(data);
    for &x in data {
      let _: bool = list.remove(x);
    }
    let _: List = hint::black_box(list);
  }
}

#[inline(never)]
fn bench_to_array_global(iters: usize, data: &[i32]) {
  let list = List::from_array(data);

  for _ in 0 .. iters {
    let _: _ = hint::black_box(list.to_array());
  }
}

fn main() {
  warmup();

  let data: Vec<i32> = (0 .. 5_000).collect();

  run_bench(2_000, &data, "from_array-global", bench_from_array_global);
  run_bench(2_000, &data, "from_array-bumpalo", bench_from_array_bumpalo);
  // Append walks to the tail every time, so keep these lists short.
  run_bench(2_000, &data[.. 100], "append-global", bench_append_global);
  run_bench(2_000, &data, "remove-global", bench_remove_global);
  run_bench(2_000, &data, "to_array-global", bench_to_array_global);

  println!("{:?}", List::from_array(&data[.. 20]));
}
