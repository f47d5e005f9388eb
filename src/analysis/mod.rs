mod equation;
mod properties;
mod steps;

use std::fmt;

use crate::surface::{CylinderKind, Quadric, SurfaceKind};

/// One named block of the analysis report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading, without numbering.
    pub title: &'static str,
    /// The section body, one string per output line.
    pub lines: Vec<String>,
}

/// The ordered textual analysis of a quadric surface.
///
/// Purely derived from the surface definition; rendering the same quadric
/// twice produces identical text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    /// The sections in presentation order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

const BANNER: &str = "QUADRIC SURFACE ANALYSIS";
const RULE_WIDTH: usize = 60;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "═".repeat(RULE_WIDTH);
        let light = "─".repeat(RULE_WIDTH);
        writeln!(f, "{heavy}")?;
        writeln!(f, "{BANNER}")?;
        writeln!(f, "{heavy}")?;
        for (i, section) in self.sections.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {}", i + 1, section.title)?;
            writeln!(f, "{light}")?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Builds the full analysis report for a quadric surface.
pub(crate) fn report(quadric: &Quadric) -> Report {
    let kind = quadric.kind();
    let axis = quadric.axis();
    let params = quadric.params();

    let mut identification = vec![format!("Type: {}", kind.name())];
    match kind {
        SurfaceKind::Ellipsoid => {
            identification.push("Configuration: Symmetric about all three axes".into());
        }
        SurfaceKind::Cylinder(sub) => {
            identification.push(format!("Cylinder Type: {}", sub.name()));
            identification.push(format!(
                "Configuration: Extends infinitely along the {axis}-axis"
            ));
        }
        _ => {
            identification.push(format!(
                "Configuration: Axis of symmetry along the {axis}-axis"
            ));
        }
    }

    let mut given = vec![
        format!(
            "Semi-axes: a = {:.3}, b = {:.3}, c = {:.3}",
            params.a(),
            params.b(),
            params.c()
        ),
        format!(
            "Center: C({:.3}, {:.3}, {:.3})",
            params.h(),
            params.k(),
            params.l()
        ),
    ];
    if kind == SurfaceKind::Cylinder(CylinderKind::Parabolic) {
        given.push(format!("Focal scale: p = {:.3}", params.p()));
    }

    Report {
        sections: vec![
            Section {
                title: "SURFACE IDENTIFICATION",
                lines: identification,
            },
            Section {
                title: "GIVEN PARAMETERS",
                lines: given,
            },
            Section {
                title: "CANONICAL EQUATION",
                lines: vec![format!(
                    "Standard form: {}",
                    equation::canonical(kind, axis)
                )],
            },
            Section {
                title: "EQUATION WITH SUBSTITUTED VALUES",
                lines: vec![equation::substituted(kind, axis, params)],
            },
            Section {
                title: "COMPUTATION METHOD",
                lines: steps::computation_steps(kind, axis, params),
            },
            Section {
                title: "KEY PROPERTIES",
                lines: properties::key_properties(kind, axis, params),
            },
            Section {
                title: "CROSS-SECTIONS",
                lines: properties::cross_sections(kind, axis),
            },
        ],
    }
}
