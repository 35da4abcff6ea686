use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use uefi_snake::core::{next_cell, GameState};
use uefi_snake::gfx::{
    Compositor, DecodedImage, Display, EncodedImage, GridLayout, ImageDecoder, ImageId,
    SceneRenderer,
};
use uefi_snake::types::{Direction, Pixel, RNG_SEED};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

struct NullDisplay;

impl Display for NullDisplay {
    type Error = &'static str;

    fn resolution(&self) -> (usize, usize) {
        (640, 480)
    }

    fn blt(&mut self, _: &[Pixel], _: usize, _: usize) -> Result<(), &'static str> {
        Ok(())
    }
}

struct Dot;

impl ImageDecoder for Dot {
    type Error = &'static str;

    fn decode(&self, _: &[u8]) -> Result<DecodedImage, &'static str> {
        Ok(DecodedImage::new(1, 1, vec![Pixel::rgb(9, 9, 9)]))
    }
}

/// Turn away from the body when the straight move would hit it.
fn safe_direction(game: &GameState, heading: Direction) -> Direction {
    Direction::ALL
        .into_iter()
        .filter(|d| !d.is_reverse_of(heading))
        .find(|&d| !game.grid().is_snake(next_cell(game.head(), d)))
        .unwrap_or(heading)
}

#[test]
fn advance_and_render_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut game = GameState::new(RNG_SEED);
    let mut comp = Compositor::new(NullDisplay).unwrap();
    let scene = SceneRenderer::new(GridLayout::compute(640, 480, 3).unwrap()).with_logo(
        EncodedImage {
            id: ImageId("dot"),
            bytes: &[],
        },
    );

    // Warm-up decodes the logo into the cache.
    scene.render(&game, &mut comp, &Dot).unwrap();

    let mut heading = Direction::Up;
    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            heading = safe_direction(&game, heading);
            if game.advance(heading).is_err() {
                game.restart();
            }
            scene.render(&game, &mut comp, &Dot).unwrap();
            comp.present().unwrap();
        }
    });

    assert!(allocs == 0);
}
