use super::vec::Vec3;

pub struct DirectionalLight {
    direction: Vec3,
    weight: f32,
}

impl DirectionalLight {
    /// `direction` is the direction the light travels in; it is normalized here.
    pub fn new(direction: Vec3, weight: f32) -> Self {
        Self {
            direction: direction.normalized(),
            weight,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    // Lambert: cosine between the normal and the direction towards the light, never negative
    pub fn diffuse(&self, normal: Vec3) -> f32 {
        let directional = normal.dot(-self.direction) * self.weight;
        if directional < 0.0 {
            0.0
        } else {
            directional
        }
    }
}
