use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qmltree::{
    to_source, to_xml, ComplexItem, File, For, Item, Position, PropertyDeclaration, TreeContext,
    TypeRef, ValueItem,
};

fn leaf(text: &str) -> Box<dyn Item> {
    ValueItem::new(Position::default(), text).boxed()
}

/// File with `count` declarations, every third one a loop nesting another loop
fn build_file(count: usize) -> File {
    let mut file = File::new(Position::new(1, 1), "Bench.qml");

    for i in 0..count {
        let line = i as u32 + 1;
        if i % 3 == 0 {
            let inner = For::new(
                Position::new(line, 5),
                Some(leaf("j = 0")),
                Some(leaf("j < 10")),
                Some(leaf("j++")),
                Some(leaf("total += j")),
            );
            let body = ComplexItem::with_contents(
                Position::new(line, 3),
                vec![leaf("total = 0"), Box::new(inner) as Box<dyn Item>],
            );
            file.push(Box::new(For::new(
                Position::new(line, 1),
                Some(leaf("i = 0")),
                Some(leaf("i < 10")),
                Some(leaf("i++")),
                Some(Box::new(body)),
            )));
        } else {
            file.push(Box::new(
                PropertyDeclaration::new(
                    Position::new(line, 1),
                    Some(TypeRef::new(Position::new(line, 10), "int")),
                    Some(leaf(&format!("value{}", i))),
                )
                .with_content(ValueItem::new(Position::new(line, 20), i as i64).boxed()),
            ));
        }
    }

    file
}

fn emit_source(c: &mut Criterion) {
    let file = build_file(300);
    let ctx = TreeContext::default();

    c.bench_function("emit_source_300_declarations", |b| {
        b.iter(|| to_source(black_box(&file), &ctx))
    });
}

fn export_xml(c: &mut Criterion) {
    let file = build_file(300);

    c.bench_function("export_xml_300_declarations", |b| {
        b.iter(|| to_xml(black_box(&file), &mut ()))
    });
}

criterion_group!(benches, emit_source, export_xml);
criterion_main!(benches);
