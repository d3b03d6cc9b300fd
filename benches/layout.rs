//! Criterion benchmarks for bed layout and planning.
//!
//! Benchmarks:
//!   - positions for each planting method in a 4 x 8 and a 20 x 50 bed
//!   - planning a batch of beds, sequential vs. rayon
//!
//! Run with: cargo bench --bench layout

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use garden_planner::{
    AreaSpec, BedPlanner, BedRequest, PlantCatalog, PlantProfile, PlantingMethod, RotationEntry, Season,
    SpacingPlanner,
};

// ---------------------------------------------------------------------------
// Benchmark: coordinate generation
// ---------------------------------------------------------------------------

fn bench_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_positions");
    let spacing = SpacingPlanner::new();
    let lettuce = PlantProfile::new("Lettuce", "Lettuce", 6.0);

    for (label, area) in [("4x8", AreaSpec::new(4.0, 8.0)), ("20x50", AreaSpec::new(20.0, 50.0))] {
        for &method in PlantingMethod::all() {
            group.bench_with_input(BenchmarkId::new(method.display_name(), label), &area, |b, &area| {
                b.iter(|| black_box(spacing.positions(black_box(&lettuce), area, method, None)));
            });
        }
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: batch planning
// ---------------------------------------------------------------------------

fn bench_plan_beds(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_beds");

    let families = ["Tomato", "Carrot", "Kale", "Bean", "Squash", "Onion", "Lettuce", "Basil"];
    let plants: Vec<PlantProfile> = (0..200)
        .map(|i| {
            let kind = families[i % families.len()];
            PlantProfile::new(format!("{} {}", kind, i), kind, 6.0 + (i % 5) as f64 * 6.0)
                .with_companions([format!("{} {}", families[(i + 1) % families.len()], i + 1)])
                .with_adversaries([format!("{} {}", families[(i + 3) % families.len()], i + 3)])
                .with_seasons(&[Season::Spring, Season::Fall])
        })
        .collect();
    let catalog = PlantCatalog::from_plants(plants).unwrap();

    let requests: Vec<BedRequest> = (0..64)
        .map(|i| BedRequest {
            name: format!("Bed {}", i),
            area: AreaSpec::new(4.0, 8.0 + (i % 4) as f64 * 2.0),
            zone: format!("{}b", 3 + i % 8),
            existing: vec![format!("Tomato {}", (i * 8) % 200), format!("Carrot {}", (i * 8 + 1) % 200)],
            history: vec![
                RotationEntry::new(2024, Season::Summer, "Solanaceae"),
                RotationEntry::new(2023, Season::Spring, "Brassicaceae"),
            ],
        })
        .collect();

    let planner = BedPlanner::default();
    let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();

    group.bench_function("sequential_64", |b| {
        b.iter(|| {
            let plans: Vec<_> = requests
                .iter()
                .map(|r| planner.plan_bed(r, &catalog, today))
                .collect();
            black_box(plans)
        });
    });

    group.bench_function("parallel_64", |b| {
        b.iter(|| black_box(planner.plan_beds(&requests, &catalog, today)));
    });

    group.finish();
}

criterion_group!(benches, bench_positions, bench_plan_beds);
criterion_main!(benches);
