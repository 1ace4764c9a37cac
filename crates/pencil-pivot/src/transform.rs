use pencil_geom::Vec3;
use serde::Deserialize;

/// Position, Euler rotation in degrees and scale of a scene node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_euler_deg: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation_euler_deg: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity rotation and scale at `position`.
    #[inline]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation and/or scale forced onto the final parent after placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransformCorrection {
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
}

impl TransformCorrection {
    pub fn is_noop(&self) -> bool {
        self.rotation.is_none() && self.scale.is_none()
    }

    /// Overwrites rather than composes: corrected values replace the node's own.
    pub fn apply(&self, t: &mut Transform) {
        if let Some(r) = self.rotation {
            t.rotation_euler_deg = r;
        }
        if let Some(s) = self.scale {
            t.scale = s;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_overwrites_present_fields() {
        let mut t = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        let c = TransformCorrection {
            rotation: None,
            scale: Some(Vec3::new(2.0, 2.0, 2.0)),
        };
        c.apply(&mut t);
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.rotation_euler_deg, Vec3::ZERO);
        assert_eq!(t.scale, Vec3::new(2.0, 2.0, 2.0));
        assert!(TransformCorrection::default().is_noop());
    }

    #[test]
    fn parses_from_toml() {
        let c: TransformCorrection = toml::from_str("rotation = [0.0, 180.0, 0.0]").unwrap();
        assert_eq!(c.rotation, Some(Vec3::new(0.0, 180.0, 0.0)));
        assert_eq!(c.scale, None);
    }
}
