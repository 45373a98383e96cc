//! Integration test for a full UI frame loop.

use std::sync::Arc;
use std::thread;

use foxtrader_ui::{
    Animation, AnimationScheduler, Bordered, Canvas, Clock, LayoutPass, ManualClock, Margin,
    MemoryClipboard, Rect, RenderCommand, SkinRenderer, Splitter, SteppedClock, Table, Texture,
    Timing, UIRenderer, UiConfig, WidgetTree,
};

const CONFIG: &str = r#"
[table]
default_row_height = 22

[animation]
retention = "evict"

[clock]
max_step_seconds = 0.1
"#;

#[test]
fn test_trade_window_frame_loop() {
    let config = UiConfig::from_toml_str(CONFIG).unwrap();
    let mut canvas = Canvas::from_config(&config);
    let mut clock = ManualClock::at(0.0);

    let mut split = Splitter::new(&mut canvas.tree, None);
    canvas.tree.set_size(split.id(), 300, 400);

    let mut market = Table::new(&mut canvas.tree, None, &config.table);
    market.set_column_count(&mut canvas.tree, 3).unwrap();
    for (good, price, stock) in [("Water", "12", "900"), ("Ore", "140", "35"), ("Spice", "990", "4")] {
        let row = market.add_row_with_text(&mut canvas.tree, good);
        row.set_cell_text(&mut canvas.tree, 1, price);
        row.set_cell_text(&mut canvas.tree, 2, stock);
    }
    split.set_panel(&mut canvas.tree, 0, Some(market.id()), true).unwrap();

    let cargo_hold = canvas.tree.create(None);
    canvas.tree.set_size(cargo_hold, 120, 0);
    split.set_panel(&mut canvas.tree, 1, Some(cargo_hold), false).unwrap();

    canvas.animate(
        cargo_hold,
        Animation::height(0.0, 0, 80, Timing::new(0.4)).unwrap(),
    );

    for _ in 0..5 {
        clock.advance(0.1);
        let mut passes: [&mut dyn LayoutPass; 2] = [&mut split, &mut market];
        canvas.frame(&mut clock, &mut passes);
    }

    assert_eq!(canvas.tree.rect(market.id()), Rect::new(0, 0, 300, 200));
    assert_eq!(canvas.tree.size(cargo_hold), (120, 80));
    assert!(!canvas.scheduler.is_tracked(cargo_hold));

    let stripes: Vec<bool> = market.rows().iter().map(|row| row.is_even()).collect();
    assert_eq!(stripes, vec![false, true, false]);

    let mut clipboard = MemoryClipboard::default();
    market.row(2).unwrap().copy_to(&canvas.tree, &mut clipboard);
    assert_eq!(clipboard.text(), Some("Spice"));

    let removed = canvas.destroy(cargo_hold);
    assert_eq!(removed, vec![cargo_hold]);
    assert_eq!(split.panel(1), Ok(Some(cargo_hold)));
    assert!(!canvas.tree.contains(cargo_hold));
    let mut passes: [&mut dyn LayoutPass; 1] = [&mut split];
    canvas.layout(&mut passes);
}

#[test]
fn test_skin_into_renderer_batches() {
    let atlas = Texture::new(9, 128, 128);
    let button = Bordered::new(atlas, Rect::new(0, 0, 32, 32), Margin::uniform(6), 1.0);
    let mut renderer = UIRenderer::new();

    renderer.begin_frame();
    button.draw(&mut renderer, Rect::new(10, 10, 120, 40), None);
    button.draw(&mut renderer, Rect::new(10, 60, 8, 8), None);
    assert_eq!(renderer.command_count(), 10);

    let batches = renderer.end_frame();
    assert_eq!(batches.len(), 1);
    let vertices = batches[0].vertices();
    assert_eq!(vertices.len(), 60);

    let RenderCommand::Texture { bounds, .. } = &batches[0].commands[9];
    assert_eq!(*bounds, Rect::new(10, 60, 8, 8));
}

#[test]
fn test_custom_renderer_sees_every_quad() {
    struct Counter(usize);
    impl SkinRenderer for Counter {
        fn set_draw_color(&mut self, _color: foxtrader_ui::Color) {}
        fn draw_textured_rect(&mut self, _texture: &Texture, _rect: Rect, _uv: foxtrader_ui::UvRect) {
            self.0 += 1;
        }
    }

    let patch = Bordered::new(Texture::new(1, 32, 32), Rect::new(0, 0, 32, 32), Margin::uniform(4), 1.0);
    let mut counter = Counter(0);
    patch.draw(&mut counter, Rect::new(0, 0, 64, 64), None);
    patch.draw(&mut counter, Rect::new(0, 0, 4, 4), None);
    assert_eq!(counter.0, 10);
}

#[test]
fn test_update_thread_owns_shared_scheduler() {
    let shared = AnimationScheduler::default().into_shared();
    let mut tree = WidgetTree::new();
    let panel = tree.create(None);
    tree.set_size(panel, 10, 10);

    let producers: Vec<_> = (0..4)
        .map(|i| {
            let scheduler = Arc::clone(&shared);
            thread::spawn(move || {
                let anim = Animation::height(0.0, 10, 10 + 10 * (i + 1), Timing::new(1.0)).unwrap();
                scheduler.lock().attach(panel, anim);
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }

    shared.lock().tick_at(&mut tree, 2.0);
    let height = tree.size(panel).1;
    assert!([20, 30, 40, 50].contains(&height), "unexpected height {height}");
    assert_eq!(shared.lock().animation_count(panel), 0);
}

#[test]
fn test_stepped_clock_is_monotonic() {
    let mut clock = SteppedClock::new(0.1);
    let mut last = clock.seconds();
    for _ in 0..100 {
        let now = clock.seconds();
        assert!(now >= last);
        assert!(now - last <= 0.1 + f32::EPSILON);
        last = now;
    }
}
