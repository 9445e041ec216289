//! Unit lists for the supported AP subjects, in course order.

const SUBJECT_UNITS: &[(&str, &[&str])] = &[
    (
        "AP Calculus BC",
        &[
            "Limits and Continuity",
            "Derivatives",
            "Applications of Derivatives",
            "Integrals",
            "Applications of Integrals",
            "Differential Equations",
            "Applications of Differential Equations",
            "Parametric, Polar, and Vector Functions",
            "Series",
            "Additional BC Topics",
        ],
    ),
    (
        "AP Physics 1",
        &[
            "Kinematics",
            "Forces and Newton's Laws",
            "Work, Energy, and Power",
            "Systems of Particles and Linear Momentum",
            "Rotation",
            "Oscillations",
            "Gravitation",
        ],
    ),
    (
        "AP Biology",
        &[
            "Chemistry of Life",
            "Cell Structure and Function",
            "Cell Energetics",
            "Cell Communication and Cell Cycle",
            "Heredity",
            "Gene Expression and Regulation",
            "Natural Selection",
            "Ecology",
        ],
    ),
    (
        "AP US History",
        &[
            "1491-1607",
            "1607-1754",
            "1754-1800",
            "1800-1848",
            "1844-1877",
            "1865-1898",
            "1890-1945",
            "1945-1980",
            "1980-Present",
        ],
    ),
    (
        "AP Precalculus",
        &[
            "Polynomial and Rational Functions",
            "Exponential and Logarithmic Functions",
            "Trigonometric and Polar Functions",
            "Functions Involving Parameters, Vectors, and Matrices",
        ],
    ),
    (
        "AP Computer Science Principles",
        &[
            "Creative Development",
            "Data",
            "Algorithms and Programming",
            "Computer Systems and Networks",
            "Impact of Computing",
        ],
    ),
    (
        "AP Chemistry",
        &[
            "Atomic Structure and Properties",
            "Molecular and Ionic Compound Structure and Properties",
            "Intermolecular Forces and Properties",
            "Chemical Reactions",
            "Kinetics",
            "Thermodynamics",
            "Equilibrium",
            "Acids and Bases",
            "Applications of Thermodynamics",
        ],
    ),
    (
        "AP Computer Science A",
        &[
            "Primitive Types",
            "Using Objects",
            "Boolean Expressions and if Statements",
            "Iteration",
            "Writing Classes",
            "Array",
            "ArrayList",
            "2D Array",
            "Inheritance",
            "Recursion",
        ],
    ),
];

pub fn subjects() -> impl Iterator<Item = &'static str> {
    SUBJECT_UNITS.iter().map(|(subject, _)| *subject)
}

pub fn units_for_subject(subject: &str) -> Option<&'static [&'static str]> {
    SUBJECT_UNITS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, units)| *units)
}

/// Label shown for a unit, e.g. `Unit 2: Derivatives`.
pub fn unit_label(index: usize, unit: &str) -> String {
    format!("Unit {}: {}", index + 1, unit)
}
