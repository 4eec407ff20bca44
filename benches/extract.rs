//! Benchmarks for the extraction pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use factweave::annotate::RuleAnnotator;
use factweave::model::{Model, ModelConfig};

const DOCUMENT: &str = "Apple acquired Beats in 2014. Google launched Android. \
    Mary founded Acme Corp. the big dog chased the small cat. \
    Amazon acquired Twitch in 2014. Microsoft released Windows.";

fn bench_fit(c: &mut Criterion) {
    c.bench_function("fit_six_sentences", |bench| {
        bench.iter(|| {
            let mut model = Model::new(RuleAnnotator::new(), ModelConfig::default());
            model.fit(black_box(DOCUMENT)).unwrap();
            black_box(model.pairs().len())
        })
    });
}

fn bench_fit_with_coreference(c: &mut Criterion) {
    let text = "Mary founded Acme Corp. She launched Teleport. It employs forty people.";
    c.bench_function("fit_with_coref", |bench| {
        bench.iter(|| {
            let mut model = Model::new(RuleAnnotator::new(), ModelConfig { coreference: true });
            model.fit(black_box(text)).unwrap();
            black_box(model.pairs().len())
        })
    });
}

criterion_group!(benches, bench_fit, bench_fit_with_coreference);
criterion_main!(benches);
