// affine-view: prints the world matrix of a fixed transform

use affine_view::renderer::{Renderer, RendererConfig};
use affine_view::scene::Scene;

fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init();

    // World scene holds the single "worldMatrix" object
    let scene = Scene::world();

    let mut renderer = Renderer::new(RendererConfig::default());

    let stdout = std::io::stdout();
    renderer.run(&scene, &mut stdout.lock())
}
