//! Assembly and pagination benchmarks
//!
//! Measures how document assembly and page furniture scale with the number
//! of articles in an edition.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio::{Article, Author, DocumentAssembler, Edition, OutputFormat, PipelineBuilder, StyleMap};
use folio_executor::ExecutorImpl;
use std::hint::black_box;
use std::sync::Arc;

const TYPES: &[&str] = &["Opinião", "Fatos", "Humor", "Poesia", "Filosofia", "Ensaio"];

fn edition(articles: usize) -> Edition {
    let paragraph = format!("<p>{}</p>", "a razão não se curva diante de dogmas ".repeat(20));
    let body = vec![paragraph; 8].join("\n");
    (0..articles).fold(Edition::new(1, "capa.jpg", "contracapa.png"), |e, i| {
        e.with_article(
            Article::new(format!("Artigo {i}"), TYPES[i % TYPES.len()], body.clone())
                .with_author(Author::new("Redação")),
        )
    })
}

fn benchmark_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let assembler = DocumentAssembler::new(Arc::new(StyleMap::builtin()));

    for count in [5, 20, 100] {
        let input = edition(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("articles", count), &input, |b, input| {
            b.iter(|| assembler.assemble(black_box(input)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_and_paginate");
    let pipeline = PipelineBuilder::new()
        .with_output_format(OutputFormat::Json)
        .with_executor(ExecutorImpl::sequential())
        .build()
        .unwrap();

    for count in [5, 20, 100] {
        let input = edition(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("articles", count), &input, |b, input| {
            b.iter(|| pipeline.assemble(black_box(input)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_batch_html");
    group.sample_size(20);
    let pipeline = PipelineBuilder::new().build().unwrap();

    for editions in [1, 8] {
        let batch: Vec<Edition> = (0..editions).map(|_| edition(20)).collect();
        group.bench_with_input(BenchmarkId::new("editions", editions), &batch, |b, batch| {
            b.iter(|| pipeline.generate_batch(batch.clone()))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_assemble, benchmark_paginate, benchmark_batch);
criterion_main!(benches);
