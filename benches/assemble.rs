use archmage::SimdToken;
use criterion::{BenchmarkGroup, Criterion, Throughput, measurement::WallTime};
use rebit::{Channel, ChannelPlane, ChannelSampler, Planes};

// === SIMD tier detection ===

fn probe<T: SimdToken>() -> &'static str {
    if T::summon().is_some() {
        "available"
    } else {
        "not available"
    }
}

fn print_simd_info() {
    eprintln!("=== SIMD Tier Detection ===");
    #[cfg(target_arch = "x86_64")]
    {
        eprintln!(
            "  AVX2+FMA (x86-64-v3):    {}",
            probe::<archmage::X64V3Token>()
        );
    }
    eprintln!("  Scalar:                  always available");
    eprintln!("===========================");
}

// === Scalar disable/enable via archmage ===

fn disable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(true);
}

fn enable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(false);
}

// === Naive per-pixel baselines ===

fn naive_assemble(planes: &Planes, out: &mut [u8]) {
    let sampler = ChannelSampler::new(W, H, planes);
    for (i, px) in out.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % W, i / W);
        for ch in Channel::ALL {
            px[ch.index()] = sampler.sample(x, y, ch).unwrap();
        }
    }
}

fn naive_split(words: &[u32], planes: &mut [Vec<u8>; 4]) {
    for (i, &w) in words.iter().enumerate() {
        for (plane, byte) in planes.iter_mut().zip(w.to_le_bytes()) {
            plane[i] = byte;
        }
    }
}

// === Benchmark helpers ===

const W: usize = 1920;
const H: usize = 1080;

fn plane(precision: u8, seed: usize) -> ChannelPlane {
    let mask = ((1u32 << precision) - 1) as usize;
    let samples = (0..W * H).map(|i| ((i * 7 + seed * 61) & mask) as u8).collect();
    ChannelPlane::new(precision, samples).unwrap()
}

/// Whole-image assembly with 3 variants: rebit (best SIMD), rebit_scalar, naive.
fn bench_assembly(group: &mut BenchmarkGroup<WallTime>, planes: &Planes) {
    group.bench_function("rebit", |b| {
        b.iter(|| rebit::assemble(W, H, planes).unwrap());
    });

    disable_all_simd();
    group.bench_function("rebit_scalar", |b| {
        b.iter(|| rebit::assemble(W, H, planes).unwrap());
    });
    enable_all_simd();

    group.bench_function("naive", |b| {
        let mut out = vec![0u8; W * H * 4];
        b.iter(|| naive_assemble(planes, &mut out));
    });
}

// === Benchmark groups ===

fn bench_assemble_8bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_rgba8");
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    let planes = Planes::new(plane(8, 0), plane(8, 1), plane(8, 2), plane(8, 3));
    bench_assembly(&mut group, &planes);
    group.finish();
}

fn bench_assemble_565(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_rgb565");
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    let planes = Planes::new(plane(5, 0), plane(6, 1), plane(5, 2), ChannelPlane::absent());
    bench_assembly(&mut group, &planes);
    group.finish();
}

fn bench_assemble_gray4(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_gray4");
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    let planes = Planes::luma(plane(4, 0));
    bench_assembly(&mut group, &planes);
    group.finish();
}

fn bench_ingest_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_words");
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    let words: Vec<u32> = (0..(W * H) as u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();

    group.bench_function("rebit", |b| {
        b.iter(|| rebit::ingest_words(&words, W, H, false).unwrap());
    });

    disable_all_simd();
    group.bench_function("rebit_scalar", |b| {
        b.iter(|| rebit::ingest_words(&words, W, H, false).unwrap());
    });
    enable_all_simd();

    group.bench_function("naive", |b| {
        let mut planes = [vec![0u8; W * H], vec![0u8; W * H], vec![0u8; W * H], vec![0u8; W * H]];
        b.iter(|| naive_split(&words, &mut planes));
    });
    group.finish();
}

// === Custom main for tier detection before criterion runs ===

fn main() {
    print_simd_info();

    let mut criterion = Criterion::default().configure_from_args();
    bench_assemble_8bit(&mut criterion);
    bench_assemble_565(&mut criterion);
    bench_assemble_gray4(&mut criterion);
    bench_ingest_words(&mut criterion);
    criterion.final_summary();
}
