use promo_art_common::{
    Color, Error, FRAME_HEIGHT, FRAME_WIDTH, JPEG_QUALITY, JpegEncoder, Point, Rect, render,
};

fn backdrop(canvas: &mut promo_art_common::Canvas) -> promo_art_common::Result<()> {
    canvas.fill_linear_gradient(
        canvas.bounds(),
        &[Color::from_rgb(0x0A0F1E), Color::from_rgb(0x050A19)],
        90.0,
    )
}

#[test]
fn rendered_frame_decodes_to_requested_size() {
    let canvas = render(FRAME_WIDTH, FRAME_HEIGHT, |canvas| {
        backdrop(canvas)?;
        canvas.fill_ellipse(Rect::new(150.0, 150.0, 200.0, 200.0), Color::from_rgb(0x283250));
        canvas.stroke_line(
            Point::new(560.0, 560.0),
            Point::new(1360.0, 560.0),
            Color::from_rgb(0x5096DC),
            2.0,
        );
        Ok(())
    })
    .unwrap();

    let bytes = JpegEncoder::new(JPEG_QUALITY).encode(&canvas).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();

    assert_eq!(decoded.width(), FRAME_WIDTH);
    assert_eq!(decoded.height(), FRAME_HEIGHT);
}

#[test]
fn odd_sizes_survive_the_round_trip() {
    for (width, height) in [(1, 1), (17, 3), (333, 127)] {
        let canvas = render(width, height, backdrop).unwrap();
        let bytes = JpegEncoder::new(0.5).encode(&canvas).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (width, height));
    }
}

#[test]
fn gradient_colors_survive_encoding() {
    let canvas = render(64, 256, |canvas| {
        canvas.fill_linear_gradient(canvas.bounds(), &[Color::BLACK, Color::WHITE], 90.0)
    })
    .unwrap();

    let bytes = JpegEncoder::new(1.0).encode(&canvas).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();

    let top = decoded.get_pixel(32, 2).0[0];
    let bottom = decoded.get_pixel(32, 253).0[0];
    assert!(top < 16, "top was {top}");
    assert!(bottom > 239, "bottom was {bottom}");
}

#[test]
fn draw_errors_abort_the_render() {
    let result = render(32, 32, |canvas| {
        canvas.fill_linear_gradient(canvas.bounds(), &[Color::WHITE], 90.0)
    });
    assert!(matches!(result, Err(Error::InvalidGradient(1))));

    let result = render(0, 32, |_| Ok(()));
    assert!(matches!(result, Err(Error::Allocation { .. })));
}
