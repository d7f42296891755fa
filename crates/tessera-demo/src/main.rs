use std::io::Write;

use anyhow::{Context, Result};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_ui::prelude::*;

/// Output side of a demo backend: how a frame starts and how it is shown.
trait Present: Backend {
    fn begin_frame(&mut self);
    fn present(&self, label: &str);
}

impl Present for TextBackend {
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn present(&self, label: &str) {
        println!("  ── {label} ──");
        for line in self.lines() {
            println!("  {line}");
        }
        println!();
    }
}

impl Present for IndexedBackend {
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn present(&self, label: &str) {
        let mut used = [0usize; tessera_engine::paint::PALETTE_LEN];
        for &index in self.pixels() {
            used[index as usize] += 1;
        }
        let rgba = self.to_rgba();
        println!(
            "  ── {label} ── {}x{} px, {} RGBA bytes",
            self.width(),
            self.height(),
            IndexedBackend::rgba_bytes(&rgba).len()
        );
        for (index, count) in used.iter().enumerate().filter(|(_, c)| **c > 0) {
            println!("    palette {index:>2}: {count} px");
        }
        println!();
    }
}

impl Present for DisplayListBackend {
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn present(&self, label: &str) {
        println!("  ── {label} ── {} commands", self.draw_list().len());
        for (kind, run) in self.draw_list().batches() {
            println!("    {kind:?} x{}", run.len());
        }
        println!();
    }
}

impl<W: Write> Present for ConsoleBackend<W> {
    fn begin_frame(&mut self) {}

    fn present(&self, label: &str) {
        println!("  ── {label} ── {} lines traced", self.lines_written());
        println!();
    }
}

/// Ids of the demo's items, for wiring listeners and scripting input.
struct Scene {
    launch: ItemId,
    abort: ItemId,
    status: ItemId,
}

fn build_scene(pool: &mut ItemPool) -> (Vec<ItemId>, Scene) {
    let backdrop = pool.insert(
        Panel::new(Rect::new(0.0, 0.0, 320.0, 160.0), Color::BLUE).outline(Color::WHITE),
    );
    let title = pool.insert(
        Label::new(Rect::new(0.0, 16.0, 320.0, 16.0), "TESSERA CONTROL").color(Color::YELLOW),
    );
    let launch = pool.insert(
        Button::new(Rect::new(16.0, 48.0, 128.0, 32.0), "LAUNCH")
            .background(StateColors::uniform(Color::GREEN).pressed(Color::DARK_GRAY)),
    );
    let abort = pool.insert(
        Button::new(Rect::new(176.0, 48.0, 128.0, 32.0), "ABORT")
            .background(
                StateColors::uniform(Color::RED)
                    .hovered(Color::from_hex(0xFF5555))
                    .disabled(Color::DARK_GRAY),
            ),
    );
    let status = pool.insert(
        Shape::circle(Vec2::new(160.0, 120.0), 12.0, StateColors::uniform(Color::GRAY).pressed(Color::YELLOW))
            .filled(true),
    );
    let gauge = pool.insert(Shape::polygon(
        vec![Vec2::new(16.0, 144.0), Vec2::new(64.0, 104.0), Vec2::new(112.0, 144.0)],
        Color::WHITE,
    ));

    let order = vec![backdrop, title, launch, abort, status, gauge];
    (order, Scene { launch, abort, status })
}

/// Topmost listed item whose bounds contain `pos`.
fn hit_test<B: Backend>(view: &View<B>, pool: &ItemPool, pos: Vec2) -> Option<ItemId> {
    view.items()
        .iter()
        .rev()
        .copied()
        .find(|&id| pool.get(id).is_some_and(|item| item.bounds().contains(pos)))
}

fn wire(dispatcher: &mut Dispatcher, scene: &Scene) {
    let abort = scene.abort;
    dispatcher.register_listener_with(scene.launch, Interest::Targeted, move |event, ctx| {
        if event.kind() == EventKind::PointerUp {
            log::info!("launch released at {}; abort locked", event.timestamp);
            ctx.items().set_state(abort, ItemState::Disabled);
        }
    });

    dispatcher.register_listener_with(scene.abort, Interest::Targeted, |event, ctx| {
        if event.kind() == EventKind::PointerMove {
            let target = ctx.target();
            ctx.items().set_state(target, ItemState::Hovered);
        }
    });

    // Broadcast: the status lamp lights on every press, wherever it lands.
    let mut seen = 0usize;
    dispatcher.register_listener(scene.status, move |event, _ctx| {
        seen += 1;
        log::debug!("status lamp saw {} (#{seen})", event.kind());
    });
}

fn frame<B: Present>(view: &mut View<B>, pool: &ItemPool, label: &str) {
    view.backend_mut().begin_frame();
    view.render(pool);
    view.backend().present(label);
}

fn run<B: Present>(mut view: View<B>, mut pool: ItemPool, order: &[ItemId], scene: &Scene) {
    for &id in order {
        view.add_item(id);
    }

    let mut dispatcher = Dispatcher::new();
    wire(&mut dispatcher, scene);
    let mut clock = EventClock::new();

    frame(&mut view, &pool, "idle");

    let over_abort = Vec2::new(200.0, 60.0);
    let on_launch = Vec2::new(40.0, 60.0);
    let script = [
        ("hover abort", vec![Event::pointer_move(over_abort)]),
        ("press launch", vec![Event::pointer_down(on_launch, MouseButton::from_index(0))]),
        ("release launch", vec![Event::pointer_up(on_launch, MouseButton::Left)]),
    ];

    for (label, events) in script {
        for event in events {
            let pos = event.position().unwrap_or_default();
            let mut event = event.with_timestamp(clock.now());
            if let Some(target) = hit_test(&view, &pool, pos) {
                event = event.with_target(target);
            }
            dispatcher.queue_event(event);
        }
        let n = dispatcher.dispatch_events(&mut pool);
        log::debug!("{label}: {n} events");
        frame(&mut view, &pool, label);
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ViewConfig::from_env().context("reading view configuration from the environment")?;
    let trace = std::env::args().skip(1).any(|arg| arg == "--trace");

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          TESSERA CONTROL v0.1          ║");
    println!("  ║  {:<38}║", format!("{}x{} {} mode", config.width, config.height, config.mode));
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut pool = ItemPool::new();
    let (order, scene) = build_scene(&mut pool);

    if trace {
        let view = View::negotiate(ConsoleBackend::stdout(), &[config.mode, RenderMode::Text])
            .context("console backend")?;
        run(view, pool, &order, &scene);
        return Ok(());
    }

    match config.mode {
        RenderMode::Text => {
            let backend = TextBackend::for_surface(config.width, config.height);
            run(View::from_config(backend, &config), pool, &order, &scene);
        }
        RenderMode::Indexed => {
            let backend = IndexedBackend::new(config.width as usize, config.height as usize);
            run(View::from_config(backend, &config), pool, &order, &scene);
        }
        RenderMode::Accelerated => {
            run(View::from_config(DisplayListBackend::new(), &config), pool, &order, &scene);
        }
    }

    Ok(())
}
