//! Two-light Phong model
//!
//! The scene is lit by a white "window" light at the table and a dim red
//! "lamp" light far down the +z axis. Shaders receive them in two slots,
//! key and fill; [`LightRig::room`] puts the lamp in the key slot and the
//! window in the fill slot.
//!
//! [`shade`] evaluates exactly what `phong.wgsl` computes per fragment and
//! is what the tests check the constants against.

use cgmath::{InnerSpace, Point3, Vector3};

/// Diffuse never drops below this, so back faces keep a little light
pub const DIFFUSE_FLOOR: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub color: Vector3<f32>,
}

impl PointLight {
    pub fn window() -> Self {
        Self {
            position: Point3::new(0.0, 0.5, 0.0),
            color: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn lamp() -> Self {
        Self {
            position: Point3::new(0.0, 0.5, 20.0),
            color: Vector3::new(0.8, 0.2, 0.2),
        }
    }
}

/// The pair of lights every Phong draw is shaded with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub key: PointLight,
    pub fill: PointLight,
}

impl LightRig {
    pub fn room() -> Self {
        Self {
            key: PointLight::lamp(),
            fill: PointLight::window(),
        }
    }
}

/// Phong constants for one light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTerms {
    pub ambient_strength: f32,
    pub specular_intensity: f32,
    pub highlight_size: f32,
}

impl LightTerms {
    pub const fn new(ambient_strength: f32, specular_intensity: f32, highlight_size: f32) -> Self {
        Self {
            ambient_strength,
            specular_intensity,
            highlight_size,
        }
    }
}

/// Per-surface Phong constants for the key and fill lights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingProfile {
    pub key: LightTerms,
    pub fill: LightTerms,
}

impl LightingProfile {
    /// Floor, carpet and table: bright and very shiny under both lights
    pub const STANDARD: LightingProfile = LightingProfile {
        key: LightTerms::new(1.0, 5.0, 16.0),
        fill: LightTerms::new(1.0, 5.0, 16.0),
    };

    /// Teacup and saucer: the red lamp is toned down
    pub const CERAMIC: LightingProfile = LightingProfile {
        key: LightTerms::new(0.5, 1.0, 16.0),
        fill: LightTerms::new(1.0, 5.0, 16.0),
    };
}

/// Surface sample fed to [`shade`]
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
    pub texel: Vector3<f32>,
}

/// Ambient + diffuse + specular contribution of a single light
pub fn light_contribution(
    light: &PointLight,
    terms: &LightTerms,
    frag_pos: Point3<f32>,
    normal: Vector3<f32>,
    view_pos: Point3<f32>,
) -> Vector3<f32> {
    let ambient = light.color * terms.ambient_strength;

    let norm = normal.normalize();
    let light_dir = (light.position - frag_pos).normalize();
    let impact = norm.dot(light_dir).max(DIFFUSE_FLOOR);
    let diffuse = light.color * impact;

    let view_dir = (view_pos - frag_pos).normalize();
    let reflect_dir = reflect(-light_dir, norm);
    let specular_component = view_dir.dot(reflect_dir).max(0.0).powf(terms.highlight_size);
    let specular = light.color * (terms.specular_intensity * specular_component);

    ambient + diffuse + specular
}

/// Final fragment color (rgb); alpha is always 1
pub fn shade(
    rig: &LightRig,
    profile: &LightingProfile,
    fragment: &Fragment,
    view_pos: Point3<f32>,
) -> Vector3<f32> {
    let key = light_contribution(&rig.key, &profile.key, fragment.position, fragment.normal, view_pos);
    let fill = light_contribution(
        &rig.fill,
        &profile.fill,
        fragment.position,
        fragment.normal,
        view_pos,
    );
    let lighting = fill + key;
    Vector3::new(
        lighting.x * fragment.texel.x,
        lighting.y * fragment.texel.y,
        lighting.z * fragment.texel.z,
    )
}

/// GLSL/WGSL `reflect`: `i - 2 * dot(n, i) * n`
pub fn reflect(incident: Vector3<f32>, normal: Vector3<f32>) -> Vector3<f32> {
    incident - normal * (2.0 * normal.dot(incident))
}
