use criterion::{criterion_group, criterion_main, Criterion};
use lemmastat::{Analyzer, AnalyzerConfig, PipelineRegistry};
use std::{sync::Arc, time::Duration};

const RUSSIAN: &str = "Мороз и солнце; день чудесный! Еще ты дремлешь, друг прелестный — пора, красавица, проснись: \
    открой сомкнуты негой взоры навстречу северной Авроры, звездою севера явись!";
const ENGLISH: &str = "It was the best of times, it was the worst of times, it was the age of wisdom, it was the \
    age of foolishness, it was the epoch of belief, it was the epoch of incredulity.";

fn analyze(c: &mut Criterion) {
    let analyzer = Analyzer::new(AnalyzerConfig::default(), Arc::new(PipelineRegistry::blank()));
    let long_text = RUSSIAN.repeat(200);

    c.bench_function("analyze russian", |b| b.iter(|| analyzer.analyze(RUSSIAN)));
    c.bench_function("analyze english", |b| b.iter(|| analyzer.analyze(ENGLISH)));
    c.bench_function("analyze long text", |b| b.iter(|| analyzer.analyze(&long_text)));
}

fn short_warmup_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(100))
}

criterion_group!(
name = analysis;
config = short_warmup_criterion();
targets =
    analyze,
);

criterion_main!(analysis);
