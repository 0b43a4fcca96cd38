//! The catalogue of exercises and how they are selected by name.

use std::{fmt, str::FromStr};

/// Every exercise the client can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    Intro,
    TwoShapes,
    Circle,
    DynamicCircle,
    Textures,
    Transforms,
    Camera,
    TexturedCamera,
    Lighting,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 9] = [
        ExerciseKind::Intro,
        ExerciseKind::TwoShapes,
        ExerciseKind::Circle,
        ExerciseKind::DynamicCircle,
        ExerciseKind::Textures,
        ExerciseKind::Transforms,
        ExerciseKind::Camera,
        ExerciseKind::TexturedCamera,
        ExerciseKind::Lighting,
    ];

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ExerciseKind::Intro => "intro",
            ExerciseKind::TwoShapes => "two-shapes",
            ExerciseKind::Circle => "circle",
            ExerciseKind::DynamicCircle => "dynamic-circle",
            ExerciseKind::Textures => "textures",
            ExerciseKind::Transforms => "transforms",
            ExerciseKind::Camera => "camera",
            ExerciseKind::TexturedCamera => "textured-camera",
            ExerciseKind::Lighting => "lighting",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExerciseKind::Intro => "a quad built from two indexed triangles",
            ExerciseKind::TwoShapes => "two quads drawn with two shader programs",
            ExerciseKind::Circle => "a circle tessellated into a triangle fan",
            ExerciseKind::DynamicCircle => "scroll to change the triangle count, 1/2/3 recolor",
            ExerciseKind::Textures => "hold 1/2/3 to show textured shapes, scroll to blend",
            ExerciseKind::Transforms => "one triangle translated, rotated and scaled",
            ExerciseKind::Camera => "a colored cube viewed through a WASD + mouse camera",
            ExerciseKind::TexturedCamera => "a tumbling textured cube with an FPS counter",
            ExerciseKind::Lighting => "a Phong-lit cube, 1/2/3 toggle ambient/diffuse/specular",
        }
    }

    /// Whether the exercise steers a camera with the captured mouse.
    pub fn grabs_mouse(self) -> bool {
        matches!(
            self,
            ExerciseKind::Camera | ExerciseKind::TexturedCamera | ExerciseKind::Lighting
        )
    }

    /// The FPS exercise runs uncapped so the counter means something.
    pub fn wants_vsync(self) -> bool {
        self != ExerciseKind::TexturedCamera
    }

    /// Whether the exercise needs depth testing.
    pub fn is_3d(self) -> bool {
        self.grabs_mouse()
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ExerciseKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = ExerciseKind::ALL.iter().map(|kind| kind.name()).collect();
                format!("Unknown exercise '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in ExerciseKind::ALL {
            assert_eq!(kind.name().parse::<ExerciseKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_parsing_is_lenient() {
        assert_eq!(
            "Dynamic_Circle".parse::<ExerciseKind>(),
            Ok(ExerciseKind::DynamicCircle)
        );
        assert_eq!(" lighting ".parse::<ExerciseKind>(), Ok(ExerciseKind::Lighting));
    }

    #[test]
    fn test_unknown_name_lists_choices() {
        let err = "teapot".parse::<ExerciseKind>().unwrap_err();
        assert!(err.contains("teapot"));
        assert!(err.contains("textured-camera"));
    }

    #[test]
    fn test_only_fps_exercise_disables_vsync() {
        let uncapped: Vec<_> = ExerciseKind::ALL
            .into_iter()
            .filter(|kind| !kind.wants_vsync())
            .collect();
        assert_eq!(uncapped, vec![ExerciseKind::TexturedCamera]);
    }
}
