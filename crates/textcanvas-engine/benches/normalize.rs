use criterion::{Criterion, criterion_group, criterion_main};
use textcanvas_engine::{Canvas, Line, LineContent, WhiteSpace};

fn generate_fragments(size: usize) -> Vec<(WhiteSpace, String)> {
    (0..size)
        .map(|i| {
            if i % 5 == 4 {
                (WhiteSpace::Pre, format!("  code {i}\n    indented  "))
            } else {
                (WhiteSpace::Normal, format!("  some   inline\ttext {i}  "))
            }
        })
        .collect()
}

fn bench_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas");
    group.sample_size(10);

    let fragments = generate_fragments(1000);
    group.bench_function("write_and_flush", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new();
            for (i, (white_space, text)) in fragments.iter().enumerate() {
                canvas.write_inline(white_space, std::hint::black_box(text));
                if i % 50 == 49 {
                    canvas.flush_inline();
                }
            }
            std::hint::black_box(canvas.get_text());
        });
    });

    group.finish();
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    group.sample_size(10);

    let marked = "word   word\tword \0  pre\n  text \0 more   words ".repeat(100);
    group.bench_function("marked_content", |b| {
        b.iter(|| {
            let mut line = Line::indented(6, "- ").unwrap();
            line.content = LineContent::from_marked(std::hint::black_box(&marked));
            std::hint::black_box(line.get_text());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_canvas, bench_line);
criterion_main!(benches);
