use affine_view::renderer::{Renderer, RendererConfig, FRAME_SEPARATOR};
use affine_view::scene::{Scene, Transform};
use affine_view::{make_affine_matrix, Vector3};

fn parse_row(line: &str) -> Vec<f32> {
    line.split_whitespace()
        .map(|cell| cell.parse().unwrap())
        .collect()
}

#[test]
fn world_matrix_is_printed_to_two_decimals() {
    let scene = Scene::world();
    let mut renderer = Renderer::new(RendererConfig::default());
    let mut out = Vec::new();
    renderer.run(&scene, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "worldMatrix");
    assert_eq!(lines.len(), 5);

    let transform = Transform::default();
    let expected = make_affine_matrix(transform.scale, transform.rotate, transform.translate);
    for (row, line) in lines[1..].iter().enumerate() {
        let values = parse_row(line);
        assert_eq!(values.len(), 4, "row {row}: {line:?}");
        for (column, value) in values.iter().enumerate() {
            assert!(
                (value - expected.get(row, column)).abs() <= 0.005 + 1e-4,
                "({row}, {column}) printed {value}, expected {}",
                expected.get(row, column)
            );
        }
    }
    assert_eq!(parse_row(lines[4])[3], 1.0);
}

#[test]
fn configured_inputs_replace_the_defaults() {
    let mut scene = Scene::new();
    scene.add(
        "moved",
        Transform::new(Vector3::ONE, Vector3::ZERO, Vector3::new(1.0, 2.0, 3.0)),
    );

    let config = RendererConfig {
        frames: 2,
        origin_x: 16,
        ..RendererConfig::default()
    };
    let mut renderer = Renderer::new(config);
    let mut out = Vec::new();
    renderer.run(&scene, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let frames: Vec<&str> = text
        .split(FRAME_SEPARATOR)
        .map(|frame| frame.trim_matches('\n'))
        .collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], frames[1]);

    let lines: Vec<&str> = frames[0].lines().collect();
    assert_eq!(lines[0], "  moved");
    assert_eq!(parse_row(lines[4]), vec![1.0, 2.0, 3.0, 1.0]);
}
