//! Layout pass benchmarks.

use std::cell::Cell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis_layout::{Border, Rect, Sizer, SizerFlags, UiElement, Vec2, Widget};

struct Label {
    min: Vec2,
    rect: Cell<Rect>,
}

impl UiElement for Label {
    fn compute_minimum_size(&self) -> Vec2 {
        self.min
    }

    fn set_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }
}

impl Widget for Label {
    fn destroy(&self) {}
}

fn label(width: f32, height: f32) -> Rc<dyn Widget> {
    Rc::new(Label {
        min: Vec2::new(width, height),
        rect: Cell::new(Rect::default()),
    })
}

/// A form-like tree: a column of rows, each with a caption, a stretching
/// field and a trailing button.
fn build_form(rows: usize) -> Sizer {
    let mut column = Sizer::vertical(4.0);
    for i in 0..rows {
        let mut row = Sizer::horizontal(6.0);
        row.add_widget(label(80.0, 20.0), 0.0, Border::ZERO, SizerFlags::CENTRE_VERTICAL);
        row.add_widget(label(40.0 + i as f32, 24.0), 1.0, Border::ZERO, SizerFlags::FILL);
        row.add_spacer(8.0);
        row.add_widget(label(24.0, 24.0), 0.0, Border::uniform(2.0), SizerFlags::empty());
        column.add(row, 0.0, Border::ZERO, SizerFlags::FILL_HORIZONTAL);
    }
    column.add_stretch_spacer(1.0);
    column
}

fn minimum_size(c: &mut Criterion) {
    let form = build_form(50);
    c.bench_function("minimum_size_form_50", |b| {
        b.iter(|| black_box(&form).compute_minimum_size())
    });
}

fn layout_pass(c: &mut Criterion) {
    let form = build_form(50);
    let rect = Rect::from_origin_size(Vec2::ZERO, Vec2::new(1280.0, 2400.0));
    c.bench_function("layout_pass_form_50", |b| {
        b.iter(|| {
            let form = black_box(&form);
            black_box(form.compute_minimum_size());
            form.set_rect(black_box(rect));
        })
    });
}

criterion_group!(benches, minimum_size, layout_pass);
criterion_main!(benches);
