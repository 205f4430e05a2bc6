/// Body table: sprite scale, orbit size and relative angular speed.
///
/// Distances are in AU and speeds relative to Earth; `config.rs` turns them
/// into pixels and degrees per second. Scales are sprite multipliers, picked
/// for readability rather than true proportions.

/// One row of the body table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Tag and texture stem ("earth" → "<asset_dir>/earth.png").
    pub name: &'static str,
    /// Sprite scale at zoom 1.
    pub sprite_scale: f64,
    /// Semi-major axis in AU.
    pub semi_major_au: f64,
    /// Angular speed relative to Earth.
    pub relative_speed: f64,
}

pub const BODY_COUNT: usize = 9;

pub const BODIES: [Body; BODY_COUNT] = [
    Body { name: "mercury", sprite_scale: 0.033, semi_major_au: 0.49,  relative_speed: 4.15 },
    Body { name: "venus",   sprite_scale: 0.095, semi_major_au: 0.72,  relative_speed: 1.61 },
    Body { name: "earth",   sprite_scale: 0.075, semi_major_au: 1.00,  relative_speed: 1.00 },
    Body { name: "mars",    sprite_scale: 0.060, semi_major_au: 1.52,  relative_speed: 0.53 },
    Body { name: "jupiter", sprite_scale: 0.825, semi_major_au: 5.20,  relative_speed: 0.084 },
    Body { name: "saturn",  sprite_scale: 0.675, semi_major_au: 9.58,  relative_speed: 0.034 },
    Body { name: "uranus",  sprite_scale: 0.300, semi_major_au: 19.2,  relative_speed: 0.012 },
    Body { name: "neptune", sprite_scale: 0.285, semi_major_au: 30.05, relative_speed: 0.006 },
    // Dwarf planet, kept for the outer orbit.
    Body { name: "pluto",   sprite_scale: 0.085, semi_major_au: 39.48, relative_speed: 0.004 },
];

// ── Sun and backdrop ────────────────────────────────────────────────

pub const SUN_NAME: &str = "sun";
pub const SUN_TEXTURE: &str = "sun.png";
pub const BACKGROUND_NAME: &str = "background";
pub const BACKGROUND_TEXTURE: &str = "bg.jpg";

/// Asset path of a body's texture.
pub fn texture_path(asset_dir: &str, name: &str) -> String {
    asset_path(asset_dir, &format!("{name}.png"))
}

/// Asset path of a file directly inside the asset directory.
pub fn asset_path(asset_dir: &str, file: &str) -> String {
    if asset_dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{file}", asset_dir.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_outward() {
        assert_eq!(BODIES.len(), BODY_COUNT);
        for pair in BODIES.windows(2) {
            assert!(pair[0].semi_major_au < pair[1].semi_major_au, "{} vs {}", pair[0].name, pair[1].name);
            assert!(pair[0].relative_speed > pair[1].relative_speed);
        }
    }

    #[test]
    fn earth_is_the_reference() {
        let earth = BODIES.iter().find(|b| b.name == "earth").unwrap();
        assert_eq!(earth.semi_major_au, 1.0);
        assert_eq!(earth.relative_speed, 1.0);
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in BODIES.iter().enumerate() {
            assert!(BODIES[i + 1..].iter().all(|b| b.name != a.name));
        }
    }

    #[test]
    fn paths_join_the_asset_dir() {
        assert_eq!(texture_path("planets", "earth"), "planets/earth.png");
        assert_eq!(texture_path("planets/", "mars"), "planets/mars.png");
        assert_eq!(texture_path("", "sun"), "sun.png");
        assert_eq!(asset_path("planets", BACKGROUND_TEXTURE), "planets/bg.jpg");
    }
}
