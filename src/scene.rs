// Scene module for the affine viewer

use crate::math::{make_affine_matrix, Matrix4x4, Vector3};

/// Scale, per-axis rotation (radians) and translation of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vector3,
    pub rotate: Vector3,
    pub translate: Vector3,
}

impl Transform {
    /// Create a new transform
    pub fn new(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        Self {
            scale,
            rotate,
            translate,
        }
    }

    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            scale: Vector3::ONE,
            rotate: Vector3::ZERO,
            translate: Vector3::ZERO,
        }
    }

    /// Generate the world matrix
    pub fn matrix(&self) -> Matrix4x4 {
        make_affine_matrix(self.scale, self.rotate, self.translate)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.2, 0.79, -2.1),
            rotate: Vector3::new(0.4, 1.43, -0.8),
            translate: Vector3::new(2.7, -4.15, 1.57),
        }
    }
}

/// An object within the scene. The name doubles as the label printed above
/// its matrix.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
}

impl SceneObject {
    /// Creates a new scene object with a given name and transform.
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }
}

/// Every object whose matrix is printed each frame, in print order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a labelled object; returns the scene so calls can chain.
    pub fn add(&mut self, name: impl Into<String>, transform: Transform) -> &mut Self {
        self.objects.push(SceneObject::new(name, transform));
        self
    }

    /// Label and freshly composed world matrix of each object.
    pub fn world_matrices(&self) -> impl Iterator<Item = (&str, Matrix4x4)> + '_ {
        self.objects
            .iter()
            .map(|obj| (obj.name.as_str(), obj.transform.matrix()))
    }

    /// The scene printed by the binary: one `worldMatrix` with the default transform.
    pub fn world() -> Self {
        let mut scene = Self::new();
        scene.add("worldMatrix", Transform::default());
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_transform_gives_identity_matrix() {
        assert_eq!(Transform::identity().matrix(), Matrix4x4::IDENTITY);
    }

    #[test]
    fn transform_matrix_is_the_affine_composition() {
        let t = Transform::default();
        assert_abs_diff_eq!(
            t.matrix(),
            make_affine_matrix(t.scale, t.rotate, t.translate),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(t.matrix().row(3)[3], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn world_scene_holds_world_matrix() {
        let scene = Scene::world();
        assert_eq!(scene.objects.len(), 1);
        assert_eq!(scene.objects[0].name, "worldMatrix");
        assert_eq!(scene.objects[0].transform, Transform::default());
    }

    #[test]
    fn world_matrices_follow_insertion_order() {
        let mut scene = Scene::new();
        scene
            .add("a", Transform::identity())
            .add("b", Transform::new(Vector3::ONE, Vector3::ZERO, Vector3::new(1.0, 2.0, 3.0)));

        let matrices: Vec<(&str, Matrix4x4)> = scene.world_matrices().collect();
        assert_eq!(matrices.len(), 2);
        assert_eq!(matrices[0], ("a", Matrix4x4::IDENTITY));
        assert_eq!(matrices[1].0, "b");
        assert_eq!(matrices[1].1.row(3), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn empty_scene_yields_nothing() {
        assert_eq!(Scene::new().world_matrices().count(), 0);
    }
}
