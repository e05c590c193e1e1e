use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lmplot::{plot_regression, Figure, PlotOptions, SamplePair, SamplerOptions};
use ndarray::Array2;
use posterior::Posterior;

fn data(n: usize) -> SamplePair {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
    let y = x.iter().enumerate().map(|(i, &xi)| 0.5 + 1.5 * xi + (i as f64 * 0.77).sin()).collect::<Vec<_>>();
    SamplePair::new(x, y).expect("valid data")
}

fn bench_plot(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_regression");
    let pair = data(200);

    group.bench_function("supplied_posterior_4x1000", |b| {
        let a = Array2::from_shape_fn((4, 1000), |(c, d)| 0.5 + ((c * 1000 + d) as f64 * 0.37).sin() * 0.1);
        let s = Array2::from_shape_fn((4, 1000), |(c, d)| 1.5 + ((c * 1000 + d) as f64 * 0.91).cos() * 0.02);
        let post = Posterior::default().with_param("Intercept", a).unwrap().with_param("x", s).unwrap();
        b.iter(|| -> Result<()> {
            let mut fig = Figure::new();
            let plot = plot_regression(&mut fig, &pair, Some(post.clone()), &PlotOptions::default())?;
            black_box(plot);
            Ok(())
        });
    });

    group.bench_function("gibbs_2x500", |b| {
        let opts = PlotOptions::default()
            .with_sampler(SamplerOptions::default().with_chains(2).with_draws(500).with_tune(200).with_seed(3));
        b.iter(|| -> Result<()> {
            let mut fig = Figure::new();
            let plot = plot_regression(&mut fig, &pair, None, &opts)?;
            black_box(plot);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_plot);
criterion_main!(benches);
