use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static SOURCE: &str = "
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
begin x := (a + b) * c; if x <> 0 then y := x div 2 else y := 'none'; end; { note }
";

static IDENTIFIERS: &str =
    "It was the year when they finally immanentized the Eschaton It was the year when they \
     finally immanentized the Eschaton It was the year when they finally immanentized the \
     Eschaton It was the year when they finally immanentized the Eschaton It was the year when \
     they finally immanentized the Eschaton It was the year when they finally immanentized the \
     Eschaton It was the year when they finally immanentized the Eschaton";

static CANDIDATES: [(&str, &str); 2] =
    [("identifiers", IDENTIFIERS), ("keywords_operators_and_literals", SOURCE)];

fn iterate(s: &str) {
    use pascal_tokenizer::Tokenizer;

    let mut tokenizer = Tokenizer::new(s);

    loop {
        let token = tokenizer.next_token();

        if token.is_eof() {
            break;
        }

        black_box(token);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for (name, source) in CANDIDATES {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| iterate(s)));
    }
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
