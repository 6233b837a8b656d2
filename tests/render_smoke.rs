use oculyte::{Canvas, CpuRenderer, Eyeball, EyeballSpec, plan_frame};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn full_pipeline_renders_a_plausible_portrait() {
    init_tracing();
    let mut renderer = CpuRenderer::new();
    for seed in [1u32, 42, 31337] {
        let eyeball = Eyeball::new(seed, 128, 128).unwrap();
        let frame = renderer.render(&eyeball.plan_at(1.0)).unwrap();
        assert_eq!(frame.width, 128);
        assert_eq!(frame.height, 128);
        assert_eq!(frame.data.len(), 128 * 128 * 4);

        // The background fill makes every pixel opaque.
        assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
        // The subject gives the buffer more than one color.
        let first = &frame.data[0..4];
        assert!(
            frame.data.chunks_exact(4).any(|px| px != first),
            "seed {seed}: uniform buffer"
        );
    }
}

#[test]
fn rendering_the_same_plan_twice_is_byte_identical() {
    init_tracing();
    let spec = EyeballSpec::generate(42);
    let canvas = Canvas::new(96, 96).unwrap();
    let plan = plan_frame(&spec, canvas, 2.2);
    let mut renderer = CpuRenderer::new();
    let a = renderer.render(&plan).unwrap();
    let b = renderer.render(&plan).unwrap();
    assert_eq!(a, b);
}

#[test]
fn renderer_state_does_not_leak_between_plans() {
    // Render a busy frame, then a quiet one, then the quiet one again
    // with a fresh renderer; reusing the context must not change output.
    init_tracing();
    let busy = plan_frame(
        &EyeballSpec::generate(42),
        Canvas::new(96, 96).unwrap(),
        3.0,
    );
    let quiet = plan_frame(
        &EyeballSpec::generate(7),
        Canvas::new(96, 96).unwrap(),
        0.5,
    );

    let mut reused = CpuRenderer::new();
    let _ = reused.render(&busy).unwrap();
    let with_reuse = reused.render(&quiet).unwrap();

    let mut fresh = CpuRenderer::new();
    let from_fresh = fresh.render(&quiet).unwrap();

    assert_eq!(with_reuse, from_fresh);
}

#[test]
fn advancing_instances_render_distinct_frames() {
    init_tracing();
    let mut eyeball = Eyeball::new(9, 96, 96).unwrap();
    let mut renderer = CpuRenderer::new();
    let f1 = eyeball.render(&mut renderer, 0.5).unwrap();
    let f2 = eyeball.render(&mut renderer, 0.5).unwrap();
    assert_ne!(f1, f2, "animation should move between ticks");
}

#[test]
fn canvas_sizes_are_independent_per_renderer_call() {
    init_tracing();
    let mut renderer = CpuRenderer::new();
    let small = Eyeball::new(5, 64, 64).unwrap();
    let large = Eyeball::new(5, 200, 120).unwrap();
    let a = renderer.render(&small.plan_at(0.0)).unwrap();
    let b = renderer.render(&large.plan_at(0.0)).unwrap();
    assert_eq!(a.data.len(), 64 * 64 * 4);
    assert_eq!(b.data.len(), 200 * 120 * 4);
}
