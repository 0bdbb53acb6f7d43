use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Aabb {
        Aabb {
            min: pos,
            max: pos + size,
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(self, point: Vec2) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    pub fn size(self) -> Vec2 {
        self.max - self.min
    }
}
