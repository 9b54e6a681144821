// affine-view: builds a scale/rotate/translate matrix and prints it each frame

pub mod math;
pub mod renderer;
pub mod scene;

pub use math::{
    make_affine_matrix, make_rotate_x_matrix, make_rotate_y_matrix, make_rotate_z_matrix,
    make_scale_matrix, make_translate_matrix, multiply, Matrix4x4, Vector3,
};
