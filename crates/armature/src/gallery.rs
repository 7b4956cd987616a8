//! The built-in diagram gallery.
//!
//! Each module holds one illustration as literal data: canvas, palette,
//! nodes, edges, route overrides, decorations. The registry below maps a
//! stable name to the builder and to the fixed repository-relative path the
//! rendered file belongs at.

mod ccp_architecture;
mod context_dag;
mod csd_architecture;
mod home_architecture;

use armature_core::color::Color;

use crate::diagram::Diagram;

/// One gallery illustration: its CLI name, its fixed output path (relative
/// to the chosen output directory), and its dataset builder.
pub struct GalleryEntry {
    pub name: &'static str,
    pub output: &'static str,
    pub build: fn() -> Diagram,
}

/// All built-in diagrams, in regeneration order.
pub const ENTRIES: [GalleryEntry; 4] = [
    GalleryEntry {
        name: "context-dag",
        output: "assets/images/context_dag.svg",
        build: context_dag::diagram,
    },
    GalleryEntry {
        name: "ccp-architecture",
        output: "assets/clog/ccp_architecture.svg",
        build: ccp_architecture::diagram,
    },
    GalleryEntry {
        name: "csd-architecture",
        output: "assets/clog/csd_architecture.svg",
        build: csd_architecture::diagram,
    },
    GalleryEntry {
        name: "home-architecture",
        output: "assets/images/architecture.svg",
        build: home_architecture::diagram,
    },
];

/// Looks up a gallery entry by name.
pub fn find(name: &str) -> Option<&'static GalleryEntry> {
    ENTRIES.iter().find(|entry| entry.name == name)
}

/// Parses a color literal from the gallery datasets.
fn color(value: &str) -> Color {
    Color::new(value).expect("gallery color literals are valid CSS colors")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_names() {
        for entry in &ENTRIES {
            assert!(find(entry.name).is_some());
        }
        assert!(find("nonesuch").is_none());
    }

    #[test]
    fn test_every_entry_validates() {
        for entry in &ENTRIES {
            let diagram = (entry.build)();
            diagram
                .validate()
                .unwrap_or_else(|err| panic!("{} failed validation: {err}", entry.name));
        }
    }

    #[test]
    fn test_output_paths_are_distinct() {
        for (i, a) in ENTRIES.iter().enumerate() {
            for b in &ENTRIES[i + 1..] {
                assert_ne!(a.output, b.output);
                assert_ne!(a.name, b.name);
            }
        }
    }
}
