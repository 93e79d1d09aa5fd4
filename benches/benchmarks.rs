use advances::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        counting_phase_hits,
        mixing_probabilistic_break,
        convolving_random_distributions,
        reporting_full_catalog,
}

fn counting_phase_hits(c: &mut criterion::Criterion) {
    let cycle = Cycle::try_from(72).expect("positive");
    let phases = Phases::broken(cycle, LONG_BREAK);
    c.bench_function("count phase hits over a 75-step window", |b| {
        b.iter(|| Counter::count(75, &phases))
    });
}

fn mixing_probabilistic_break(c: &mut criterion::Criterion) {
    let cooldowns = Cooldowns::default();
    let mixer = Mixer::new(&cooldowns);
    let behavior = Behavior::ProbabilisticBreak(0.3333);
    c.bench_function("mix a probabilistic-break entity over 75 steps", |b| {
        b.iter(|| mixer.mix(&behavior, 75))
    });
}

fn convolving_random_distributions(c: &mut criterion::Criterion) {
    let x = Distribution::random();
    let y = Distribution::random();
    c.bench_function("convolve two random distributions", |b| b.iter(|| &x * &y));
}

fn reporting_full_catalog(c: &mut criterion::Criterion) {
    let calculator = Calculator::default();
    let behaviors = calculator
        .entities(&[1, 2, 3, 11, 15, 21])
        .expect("known codes");
    c.bench_function("report six entities over every catalog window", |b| {
        b.iter(|| calculator.reports(&behaviors))
    });
}
