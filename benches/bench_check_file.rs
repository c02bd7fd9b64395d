use checker::{CheckerConfig, SpellChecker};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_check_file(c: &mut Criterion) {
    let dict_file = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/words.txt");
    let text_file = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.txt");

    let checker = SpellChecker::from_word_list_file(dict_file, CheckerConfig::default())
        .expect("Unable to read dictionary file");

    c.bench_function("check_file", |b| {
        b.iter(|| checker.check_file(text_file).expect("Unable to read text file"))
    });

    let strict = SpellChecker::new(
        checker.dictionary().clone(),
        CheckerConfig::default().with_threshold(2),
    );
    c.bench_function("check_file_threshold_2", |b| {
        b.iter(|| strict.check_file(text_file).expect("Unable to read text file"))
    });
}

criterion_group!(benches, bench_check_file);
criterion_main!(benches);
