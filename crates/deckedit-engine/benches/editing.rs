use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deckedit_engine::NewSlide;
use deckedit_engine::editing;
use deckedit_engine::parsing::{locate, split};

fn generate_deck(slides: usize) -> String {
    (1..=slides)
        .map(|n| {
            format!(
                "# Slide {n}\n\n<p id=\"text-{n}\">Body of slide {n}</p>\n\n<style>\n#text-{n} {{\n  font-size: 20px;\n}}\n</style>\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}

fn bench_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenter");
    group.sample_size(20);

    for size in [10, 100, 1000] {
        let deck = generate_deck(size);
        group.bench_with_input(BenchmarkId::new("split", size), &deck, |b, deck| {
            b.iter(|| std::hint::black_box(split(deck)));
        });
        group.bench_with_input(BenchmarkId::new("locate_last", size), &deck, |b, deck| {
            b.iter(|| std::hint::black_box(locate(deck, size)));
        });
    }

    group.finish();
}

fn bench_rewrites(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrites");
    group.sample_size(20);

    let deck = generate_deck(200);

    group.bench_function("update_element_content", |b| {
        b.iter(|| {
            let patch = editing::update_element_content(
                std::hint::black_box(&deck),
                150,
                "text-150",
                "New body",
            );
            std::hint::black_box(patch)
        });
    });

    group.bench_function("update_element_color", |b| {
        b.iter(|| {
            let patch =
                editing::update_element_color(std::hint::black_box(&deck), 150, "text-150", "red");
            std::hint::black_box(patch)
        });
    });

    group.bench_function("update_slide_background", |b| {
        b.iter(|| {
            let patch =
                editing::update_slide_background(std::hint::black_box(&deck), 150, "#000");
            std::hint::black_box(patch)
        });
    });

    group.bench_function("create_new_slide_middle", |b| {
        let slide = NewSlide::new().with_title("Inserted");
        b.iter(|| {
            let patch = editing::create_new_slide(std::hint::black_box(&deck), Some(100), &slide);
            std::hint::black_box(patch)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_segmenter, bench_rewrites);
criterion_main!(benches);
